//! Value scorer - turns free text into value profiles for both sides.
//!
//! The pipeline for one scoring pass:
//! 1. **Fallback**: Blank text is replaced by the domain's default example
//! 2. **Extraction**: Count keyword hits per foundation
//! 3. **Merge**: Add the domain's base weights
//! 4. **Derivation**: Apply the opponent bias to imagine the counterpart
//! 5. **Normalization**: Rescale each profile against its own maximum
//! 6. **Ranking & bridges**: Pick the loudest foundations and reframing hints

mod profiles;

pub use profiles::*;

use prism_rules::{Domain, Foundation, KeywordTable, Profile};
use serde::{Deserialize, Serialize};

use crate::bridges::{build_bridges, Bridges};

/// Tuning for the scorer's outputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScorerConfig {
    /// How many foundations to report per side in the summary.
    pub summary_top_n: usize,

    /// How many foundations per side the direct bridge template names.
    pub bridge_top_n: usize,
}

impl Default for ScorerConfig {
    fn default() -> Self {
        Self {
            summary_top_n: 3,
            bridge_top_n: 2,
        }
    }
}

/// Stateless scorer over a fixed vocabulary.
#[derive(Debug, Clone, Default)]
pub struct ValueScorer {
    keywords: KeywordTable,
    config: ScorerConfig,
}

impl ValueScorer {
    /// Create a scorer with the given vocabulary and configuration.
    pub fn new(keywords: KeywordTable, config: ScorerConfig) -> Self {
        Self { keywords, config }
    }

    /// Create a scorer with the standard vocabulary and default configuration.
    pub fn with_defaults() -> Self {
        Self::default()
    }

    pub fn keywords(&self) -> &KeywordTable {
        &self.keywords
    }

    pub fn config(&self) -> &ScorerConfig {
        &self.config
    }

    /// Count keyword hits in `text`.
    pub fn extract_values(&self, text: &str) -> Profile {
        extract_values(text, &self.keywords)
    }

    /// Score `text` for `domain`.
    ///
    /// Never fails: blank text is replaced by the domain's default example and
    /// every profile covers all foundations.
    pub fn score_domain(&self, text: &str, domain: &Domain) -> AnalysisResult {
        let text = match text.trim() {
            "" => domain.default_example.trim(),
            trimmed => trimmed,
        };

        let detected = self.extract_values(text);
        let user_raw = merge_profiles(&domain.base_values, &detected);
        let counterpart_raw = derive_counterpart(&user_raw, &domain.opponent_bias);
        let user = normalize(&user_raw);
        let counterpart = normalize(&counterpart_raw);

        tracing::debug!(
            domain = %domain.id,
            hits = detected.total(),
            "scored argument"
        );

        let bridges = build_bridges(domain, &user, &counterpart, self.config.bridge_top_n);

        AnalysisResult {
            text: text.to_string(),
            user_top: top_foundations(&user, self.config.summary_top_n),
            counterpart_top: top_foundations(&counterpart, self.config.summary_top_n),
            detected,
            user_raw,
            counterpart_raw,
            user,
            counterpart,
            bridges,
        }
    }
}

/// Everything one scoring pass produces. Recomputed on every change, never
/// stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// The text that was actually analysed, after trimming and fallback.
    pub text: String,

    /// Keyword hits before base weights.
    pub detected: Profile,

    /// Author profile: base weights plus hits.
    pub user_raw: Profile,

    /// Counterpart profile before normalization.
    pub counterpart_raw: Profile,

    /// Author profile on a 0-100 scale.
    pub user: Profile,

    /// Counterpart profile on a 0-100 scale.
    pub counterpart: Profile,

    /// The author's loudest foundations, best first.
    pub user_top: Vec<Foundation>,

    /// What the counterpart tracks first.
    pub counterpart_top: Vec<Foundation>,

    pub bridges: Bridges,
}
