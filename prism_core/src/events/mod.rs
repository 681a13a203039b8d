//! UI events the lab reacts to.

use serde::{Deserialize, Serialize};

/// Input coming from the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LabEvent {
    /// A topic button was pressed.
    TopicSelected { domain_id: String },

    /// The argument text changed.
    TextEdited { text: String },

    /// The intensity slider moved (0-100).
    IntensityChanged { value: u8 },
}

impl LabEvent {
    pub fn topic(domain_id: impl Into<String>) -> Self {
        LabEvent::TopicSelected {
            domain_id: domain_id.into(),
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        LabEvent::TextEdited { text: text.into() }
    }

    pub fn intensity(value: u8) -> Self {
        LabEvent::IntensityChanged { value }
    }

    /// Whether this event waits for typing to pause before recomputing.
    pub fn is_debounced(&self) -> bool {
        matches!(self, LabEvent::TextEdited { .. })
    }
}

/// Slider cut-offs between intensity levels. `firm` must not exceed
/// `radical`; [`LabConfig`](crate::config::LabConfig) rejects files that break
/// this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntensityThresholds {
    /// Values above this are at least `Firm`.
    pub firm: u8,
    /// Values above this are `Radical`.
    pub radical: u8,
}

impl IntensityThresholds {
    /// Whether every level is reachable.
    pub fn is_ordered(&self) -> bool {
        self.firm <= self.radical
    }
}

impl Default for IntensityThresholds {
    fn default() -> Self {
        Self {
            firm: 40,
            radical: 70,
        }
    }
}

/// How forcefully the author wants to argue. Display only; does not change
/// scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Intensity {
    #[default]
    Moderate,
    Firm,
    Radical,
}

impl Intensity {
    /// Classify a slider value.
    pub fn from_value(value: u8, thresholds: &IntensityThresholds) -> Self {
        if value > thresholds.radical {
            Intensity::Radical
        } else if value > thresholds.firm {
            Intensity::Firm
        } else {
            Intensity::Moderate
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Intensity::Moderate => "Moderate",
            Intensity::Firm => "Firm",
            Intensity::Radical => "Radical",
        }
    }
}

impl std::fmt::Display for Intensity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intensity_levels() {
        let t = IntensityThresholds::default();
        assert_eq!(Intensity::from_value(0, &t), Intensity::Moderate);
        assert_eq!(Intensity::from_value(40, &t), Intensity::Moderate);
        assert_eq!(Intensity::from_value(41, &t), Intensity::Firm);
        assert_eq!(Intensity::from_value(70, &t), Intensity::Firm);
        assert_eq!(Intensity::from_value(71, &t), Intensity::Radical);
        assert_eq!(Intensity::from_value(100, &t), Intensity::Radical);
    }

    #[test]
    fn test_threshold_order() {
        assert!(IntensityThresholds::default().is_ordered());
        assert!(IntensityThresholds { firm: 50, radical: 50 }.is_ordered());
        assert!(!IntensityThresholds { firm: 80, radical: 50 }.is_ordered());
    }

    #[test]
    fn test_intensity_label() {
        assert_eq!(Intensity::Firm.to_string(), "Firm");
    }

    #[test]
    fn test_only_text_edits_are_debounced() {
        assert!(LabEvent::text("hello").is_debounced());
        assert!(!LabEvent::topic("ai").is_debounced());
        assert!(!LabEvent::intensity(50).is_debounced());
    }
}
