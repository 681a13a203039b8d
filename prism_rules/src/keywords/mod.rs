//! Trigger vocabulary for each foundation.

use serde::{Deserialize, Serialize};

use crate::foundations::{Foundation, FoundationMap};

/// Ordered trigger words and phrases per foundation.
///
/// Entries are stored lower-cased so matching against lower-cased text is a
/// plain substring test.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "FoundationMap<Vec<String>>", into = "FoundationMap<Vec<String>>")]
pub struct KeywordTable {
    words: FoundationMap<Vec<String>>,
}

impl KeywordTable {
    /// Build a table from raw word lists. Entries are trimmed and
    /// lower-cased; blank entries are dropped.
    pub fn new(words: FoundationMap<Vec<String>>) -> Self {
        let words = words.map(|_, list| {
            list.iter()
                .map(|w| w.trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect()
        });
        Self { words }
    }

    /// The built-in vocabulary.
    pub fn standard() -> Self {
        Self::new(FoundationMap::from_fn(|f| {
            standard_words(f).iter().map(|w| w.to_string()).collect()
        }))
    }

    /// Keywords registered for a foundation, in declaration order.
    pub fn keywords(&self, foundation: Foundation) -> &[String] {
        self.words.get(foundation)
    }

    /// Iterate over `(foundation, keywords)` in enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = (Foundation, &[String])> {
        self.words.iter().map(|(f, list)| (f, list.as_slice()))
    }

    /// Total number of keywords across all foundations.
    pub fn len(&self) -> usize {
        self.words.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for KeywordTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl From<FoundationMap<Vec<String>>> for KeywordTable {
    fn from(words: FoundationMap<Vec<String>>) -> Self {
        Self::new(words)
    }
}

impl From<KeywordTable> for FoundationMap<Vec<String>> {
    fn from(table: KeywordTable) -> Self {
        table.words
    }
}

fn standard_words(foundation: Foundation) -> &'static [&'static str] {
    match foundation {
        Foundation::Care => &[
            "harm", "hurt", "injury", "safe", "safety", "protect", "vulnerable", "suffering",
            "wellbeing", "dignity", "abuse",
        ],
        Foundation::Fairness => &[
            "fair", "unfair", "justice", "equal", "equality", "inequality", "rigged", "bias",
            "discrimination", "stacked",
        ],
        Foundation::Liberty => &[
            "freedom", "free", "liberty", "autonomy", "censorship", "open", "control",
            "surveillance", "tyranny", "permissionless", "innovation",
        ],
        Foundation::Loyalty => &[
            "loyal", "betray", "community", "neighbourhood", "neighborhood", "patriot",
            "hometown", "tradition", "heritage", "belong", "local", "our people",
        ],
        Foundation::Authority => &[
            "authority", "order", "rules", "law", "discipline", "respect", "institution",
            "governance", "oversight", "regulate", "license",
        ],
        Foundation::Sanctity => &[
            "sacred", "pure", "corrupt", "degrade", "contaminate", "profane", "decency", "clean",
            "toxic",
        ],
        Foundation::Security => &[
            "security", "risk", "threat", "terror", "catastrophic", "attack", "defence",
            "defense", "resilience", "stability", "fragile",
        ],
    }
}
