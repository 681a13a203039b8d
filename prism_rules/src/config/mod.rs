//! TOML rules files: custom vocabularies and domain catalogs.
//!
//! ```toml
//! default_domain = "ai"
//!
//! [keywords]
//! Care = ["harm", "protect"]
//!
//! [[domains]]
//! id = "ai"
//! label = "AI Regulation"
//! detected_topic = "AI Safety / Governance"
//! current_frame = "Innovation vs Risk"
//! opponent_frame = "Existential Security"
//! default_example = "Open-weight models are essential."
//! base_values = { Liberty = 3, Security = 2 }
//! opponent_bias = { Liberty = -1, Security = 3 }
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::domains::{Domain, DomainCatalog};
use crate::foundations::FoundationMap;
use crate::keywords::KeywordTable;
use crate::RulesError;

/// On-disk shape of a rules file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RulesFile {
    /// Domain used when a selection is not recognized.
    pub default_domain: String,

    /// Replacement vocabulary. Absent means the standard table.
    #[serde(default)]
    pub keywords: Option<FoundationMap<Vec<String>>>,

    #[serde(default)]
    pub domains: Vec<Domain>,
}

impl RulesFile {
    /// Parse a rules file from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, RulesError> {
        Ok(toml::from_str(content)?)
    }

    /// Read and parse a rules file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, RulesError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let rules = Self::from_toml_str(&content)?;
        tracing::debug!(
            path = %path.display(),
            domains = rules.domains.len(),
            custom_keywords = rules.keywords.is_some(),
            "loaded rules file"
        );
        Ok(rules)
    }

    /// Validate and split into the vocabulary and the catalog.
    pub fn into_parts(self) -> Result<(KeywordTable, DomainCatalog), RulesError> {
        let keywords = match self.keywords {
            Some(words) => KeywordTable::new(words),
            None => KeywordTable::standard(),
        };
        let catalog = DomainCatalog::new(self.domains, &self.default_domain)?;
        Ok((keywords, catalog))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundations::Foundation;

    const SAMPLE: &str = r#"
default_domain = "housing"

[keywords]
Care = ["Harm", "shelter"]
Loyalty = ["our street"]

[[domains]]
id = "housing"
label = "Housing"
detected_topic = "Housing"
current_frame = "Supply"
opponent_frame = "Character"
default_example = "We need more homes."
base_values = { Care = 2, Fairness = 1 }
opponent_bias = { Loyalty = 3, Care = -1 }
losing_reason = "Sounds dismissive of neighbours."

[domains.bridge_hints]
process = "Co-design with residents."
"#;

    #[test]
    fn test_parse_rules_file() {
        let rules = RulesFile::from_toml_str(SAMPLE).unwrap();
        assert_eq!(rules.default_domain, "housing");
        assert_eq!(rules.domains.len(), 1);

        let domain = &rules.domains[0];
        assert_eq!(domain.base_values[Foundation::Care], 2);
        assert_eq!(domain.base_values[Foundation::Security], 0);
        assert_eq!(domain.opponent_bias[Foundation::Care], -1);
        assert!(domain.bridge_hints.direct.is_none());
        assert_eq!(
            domain.bridge_hints.process.as_deref(),
            Some("Co-design with residents.")
        );
    }

    #[test]
    fn test_into_parts_uses_custom_keywords() {
        let (keywords, catalog) = RulesFile::from_toml_str(SAMPLE)
            .unwrap()
            .into_parts()
            .unwrap();

        assert_eq!(keywords.keywords(Foundation::Care), ["harm", "shelter"]);
        assert_eq!(keywords.keywords(Foundation::Loyalty), ["our street"]);
        assert!(keywords.keywords(Foundation::Security).is_empty());
        assert_eq!(catalog.default_domain().id, "housing");
    }

    #[test]
    fn test_into_parts_defaults_to_standard_keywords() {
        let content = r#"
default_domain = "x"

[[domains]]
id = "x"
label = "X"
detected_topic = ""
current_frame = ""
opponent_frame = ""
default_example = "text"
"#;
        let (keywords, _) = RulesFile::from_toml_str(content)
            .unwrap()
            .into_parts()
            .unwrap();
        assert_eq!(keywords, KeywordTable::standard());
    }

    #[test]
    fn test_into_parts_rejects_bad_default() {
        let content = r#"
default_domain = "missing"

[[domains]]
id = "x"
label = "X"
detected_topic = ""
current_frame = ""
opponent_frame = ""
default_example = "text"
"#;
        let result = RulesFile::from_toml_str(content).unwrap().into_parts();
        assert!(matches!(result, Err(RulesError::UnknownDefaultDomain(_))));
    }

    #[test]
    fn test_parse_error() {
        let result = RulesFile::from_toml_str("default_domain = ");
        assert!(matches!(result, Err(RulesError::Parse(_))));
    }

    #[test]
    fn test_unknown_foundation_in_profile_is_rejected() {
        let content = r#"
default_domain = "x"

[[domains]]
id = "x"
label = "X"
detected_topic = ""
current_frame = ""
opponent_frame = ""
default_example = "text"
base_values = { Purity = 2 }
"#;
        assert!(RulesFile::from_toml_str(content).is_err());
    }

    #[test]
    fn test_unknown_domain_field_is_rejected() {
        let content = r#"
default_domain = "x"

[[domains]]
id = "x"
label = "X"
detected_topic = ""
current_frame = ""
opponent_frame = ""
default_example = "text"
base_valeus = { Care = 5 }
"#;
        assert!(matches!(
            RulesFile::from_toml_str(content),
            Err(RulesError::Parse(_))
        ));
    }

    #[test]
    fn test_unknown_bridge_hint_is_rejected() {
        let content = r#"
default_domain = "x"

[[domains]]
id = "x"
label = "X"
detected_topic = ""
current_frame = ""
opponent_frame = ""
default_example = "text"

[domains.bridge_hints]
procces = "Co-design with residents."
"#;
        assert!(matches!(
            RulesFile::from_toml_str(content),
            Err(RulesError::Parse(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rules.toml");
        std::fs::write(&path, SAMPLE).unwrap();

        let (keywords, catalog) = RulesFile::load(&path).unwrap().into_parts().unwrap();

        assert_eq!(catalog.default_domain().id, "housing");
        assert_eq!(catalog.default_domain().base_values[Foundation::Care], 2);
        assert_eq!(keywords.keywords(Foundation::Care), ["harm", "shelter"]);
    }

    #[test]
    fn test_load_missing_file() {
        let result = RulesFile::load("/nonexistent/prism-rules.toml");
        assert!(matches!(result, Err(RulesError::Io(_))));
    }
}
