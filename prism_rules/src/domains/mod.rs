//! Topic domains and the catalog the lab selects them from.

mod standard;

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::foundations::{BiasProfile, Profile};
use crate::RulesError;

/// Domain-authored reframing hints. Missing hints fall back to generic
/// templates when bridges are built.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BridgeHints {
    #[serde(default)]
    pub direct: Option<String>,
    #[serde(default)]
    pub goal: Option<String>,
    #[serde(default)]
    pub process: Option<String>,
}

/// A configured debate topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Domain {
    /// Key used by topic selectors (e.g. "ai").
    pub id: String,
    pub label: String,
    pub detected_topic: String,
    /// How the author's side usually frames the issue.
    pub current_frame: String,
    /// How the counterpart usually frames it.
    pub opponent_frame: String,

    /// Text analysed when the author has not written anything.
    pub default_example: String,

    /// Weights added to every extraction for this domain.
    #[serde(default)]
    pub base_values: Profile,

    /// Deltas applied to the author's profile to imagine the counterpart.
    #[serde(default)]
    pub opponent_bias: BiasProfile,

    /// Why the typical framing loses the counterpart.
    #[serde(default)]
    pub losing_reason: String,

    #[serde(default)]
    pub bridge_hints: BridgeHints,
}

impl Domain {
    /// Create a domain with empty profiles and no hints.
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            detected_topic: String::new(),
            current_frame: String::new(),
            opponent_frame: String::new(),
            default_example: String::new(),
            base_values: Profile::default(),
            opponent_bias: BiasProfile::default(),
            losing_reason: String::new(),
            bridge_hints: BridgeHints::default(),
        }
    }

    /// Set the detected topic and both frames.
    pub fn with_frames(
        mut self,
        detected_topic: impl Into<String>,
        current_frame: impl Into<String>,
        opponent_frame: impl Into<String>,
    ) -> Self {
        self.detected_topic = detected_topic.into();
        self.current_frame = current_frame.into();
        self.opponent_frame = opponent_frame.into();
        self
    }

    /// Set the default example text.
    pub fn with_default_example(mut self, text: impl Into<String>) -> Self {
        self.default_example = text.into();
        self
    }

    /// Set the base profile.
    pub fn with_base_values(mut self, base: Profile) -> Self {
        self.base_values = base;
        self
    }

    /// Set the opponent bias.
    pub fn with_opponent_bias(mut self, bias: BiasProfile) -> Self {
        self.opponent_bias = bias;
        self
    }

    /// Set the losing-argument explanation.
    pub fn with_losing_reason(mut self, reason: impl Into<String>) -> Self {
        self.losing_reason = reason.into();
        self
    }

    /// Set the bridge hints.
    pub fn with_bridge_hints(mut self, hints: BridgeHints) -> Self {
        self.bridge_hints = hints;
        self
    }
}

/// Every selectable domain plus the one used for unrecognized ids.
#[derive(Debug, Clone)]
pub struct DomainCatalog {
    domains: Vec<Domain>,
    default_index: usize,
}

impl DomainCatalog {
    /// Build a catalog. Ids must be unique and `default_id` must name one of
    /// the domains.
    pub fn new(domains: Vec<Domain>, default_id: &str) -> Result<Self, RulesError> {
        if domains.is_empty() {
            return Err(RulesError::EmptyCatalog);
        }

        let mut seen = HashSet::new();
        for domain in &domains {
            if !seen.insert(domain.id.as_str()) {
                return Err(RulesError::DuplicateDomain(domain.id.clone()));
            }
        }

        let default_index = domains
            .iter()
            .position(|d| d.id == default_id)
            .ok_or_else(|| RulesError::UnknownDefaultDomain(default_id.to_string()))?;

        Ok(Self {
            domains,
            default_index,
        })
    }

    /// The six built-in topics, defaulting to "ai".
    pub fn standard() -> Self {
        Self {
            domains: standard::domains(),
            default_index: 0,
        }
    }

    /// Look up a domain by id.
    pub fn get(&self, id: &str) -> Option<&Domain> {
        self.domains.iter().find(|d| d.id == id)
    }

    /// Look up a domain by id, falling back to the default domain.
    pub fn resolve(&self, id: &str) -> &Domain {
        match self.get(id) {
            Some(domain) => domain,
            None => {
                let fallback = self.default_domain();
                tracing::debug!(
                    requested = id,
                    fallback = %fallback.id,
                    "unknown domain, using default"
                );
                fallback
            }
        }
    }

    /// The domain used when no valid selection exists.
    pub fn default_domain(&self) -> &Domain {
        &self.domains[self.default_index]
    }

    /// Whether a domain with this id exists.
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Domain ids in catalog order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.domains.iter().map(|d| d.id.as_str())
    }

    /// Iterate over domains in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Domain> {
        self.domains.iter()
    }

    pub fn len(&self) -> usize {
        self.domains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }
}

impl Default for DomainCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
