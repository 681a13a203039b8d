//! Bridge suggestions: ways to reframe an argument toward the counterpart.

use prism_rules::{Domain, Foundation, Profile};
use serde::{Deserialize, Serialize};

use crate::scorer::top_foundations;

/// Three advisory reframings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bridges {
    /// Speak to the counterpart's values directly.
    pub direct: String,
    /// Name an outcome both sides could accept.
    pub goal: String,
    /// Offer a checkable process.
    pub process: String,
}

const GOAL_TEMPLATE: &str = "Instead of fighting over instruments, surface a shared objective \
     – what outcome would both sides quietly accept? Use your argument to show how your path \
     is a workable route to that goal, and where you are genuinely open to adjustment.";

const PROCESS_TEMPLATE: &str = "Offer a concrete, checkable process (who decides, based on \
     what data, with which review) so your counterpart isn't being asked for a blank cheque.";

/// Choose the bridges for a domain.
///
/// Domain-authored hints win. Hints are trimmed, and a hint that is missing or
/// only whitespace falls back to the template.
/// The direct template names the top `top_n` foundations of each side.
pub fn build_bridges(
    domain: &Domain,
    user: &Profile,
    counterpart: &Profile,
    top_n: usize,
) -> Bridges {
    let hints = &domain.bridge_hints;

    let direct = authored(&hints.direct).unwrap_or_else(|| {
        direct_template(
            &top_foundations(counterpart, top_n),
            &top_foundations(user, top_n),
        )
    });
    let goal = authored(&hints.goal).unwrap_or_else(|| GOAL_TEMPLATE.to_string());
    let process = authored(&hints.process).unwrap_or_else(|| PROCESS_TEMPLATE.to_string());

    Bridges {
        direct,
        goal,
        process,
    }
}

/// A usable authored hint, trimmed. Whitespace-only counts as absent.
fn authored(hint: &Option<String>) -> Option<String> {
    hint.as_deref()
        .map(str::trim)
        .filter(|h| !h.is_empty())
        .map(str::to_string)
}

fn direct_template(theirs: &[Foundation], ours: &[Foundation]) -> String {
    format!(
        "Start by explicitly acknowledging {} as legitimate concerns, then show how your \
         proposal reduces those risks while keeping your core ({}) intact.",
        join_labels(theirs),
        join_labels(ours)
    )
}

fn join_labels(foundations: &[Foundation]) -> String {
    foundations
        .iter()
        .map(Foundation::as_str)
        .collect::<Vec<_>>()
        .join(" and ")
}
