//! Built-in topic domains.
//!
//! Profile arrays follow foundation order: Care, Fairness, Liberty, Loyalty,
//! Authority, Sanctity, Security.

use super::{BridgeHints, Domain};
use crate::foundations::{BiasProfile, Profile};

fn profile(values: [u32; 7]) -> Profile {
    Profile::from_fn(|f| values[f.index()])
}

fn bias(values: [i32; 7]) -> BiasProfile {
    BiasProfile::from_fn(|f| values[f.index()])
}

fn hints(direct: &str, goal: &str, process: &str) -> BridgeHints {
    BridgeHints {
        direct: Some(direct.to_string()),
        goal: Some(goal.to_string()),
        process: Some(process.to_string()),
    }
}

pub(super) fn domains() -> Vec<Domain> {
    vec![
        Domain::new("ai", "AI Regulation")
            .with_frames(
                "AI Safety / Governance",
                "Innovation vs Risk",
                "Existential Security",
            )
            .with_default_example(
                "Open-weight AI models are essential for transparency and innovation. \
                 If we lock models behind a few corporations, we entrench monopolies and \
                 slow down independent safety research.",
            )
            .with_base_values(profile([1, 1, 3, 0, 1, 0, 2]))
            .with_opponent_bias(bias([1, 0, -1, 0, 2, 0, 3]))
            .with_losing_reason(
                "Liberty-heavy frames (“censorship”, “control”) can sound cavalier about \
                 catastrophic misuse. A national security audience hears risk dismissal.",
            )
            .with_bridge_hints(hints(
                "Show how your preferred openness actually strengthens institutional safety \
                 and resilience (Security, Authority) while preserving scientific freedom (Liberty).",
                "Name a shared goal like “no uncontrolled, opaque, world-scale models” and \
                 treat governance as a joint design problem, not a clash of tribes.",
                "Offer visible guardrails: transparency baselines, independent audits, and \
                 red-team access that let security actors sleep at night.",
            )),
        Domain::new("urban", "Urban Density")
            .with_frames(
                "Housing / Spatial Justice",
                "Anti-Sprawl Modernisation",
                "Community Preservation",
            )
            .with_default_example(
                "Blocking new housing in this district pushes working families out of the \
                 city. Gentle density near transit is the only way to keep the next \
                 generation rooted here.",
            )
            .with_base_values(profile([2, 3, 1, 2, 1, 0, 1]))
            .with_opponent_bias(bias([1, 1, -1, 3, 1, 1, 1]))
            .with_losing_reason(
                "Frames that cast locals as selfish or nostalgic attack Loyalty and Sanctity \
                 (“my street, my history”) and trigger fierce resistance.",
            )
            .with_bridge_hints(hints(
                "Lead with protecting long-time residents from displacement (Loyalty, Care). \
                 Then show how well-designed infill is a tool for that protection, not a \
                 threat to it.",
                "Define a shared goal: the next generation should be able to afford to live \
                 near the people and institutions they rely on.",
                "Propose stepwise rezonings, tenant protections, and design codes co-written \
                 with neighbourhood groups.",
            )),
        Domain::new("speech", "Free Speech")
            .with_frames(
                "Campus / Public Sphere",
                "Truth-Seeking / Anti-Censorship",
                "Safety & Institutional Stability",
            )
            .with_default_example(
                "If we keep disinviting controversial speakers, we teach students that the \
                 loudest faction decides what may be said. That’s incompatible with a \
                 serious university.",
            )
            .with_base_values(profile([1, 1, 3, 1, 1, 1, 1]))
            .with_opponent_bias(bias([3, 1, -1, 1, 2, 1, 2]))
            .with_losing_reason(
                "Absolutist liberty language can sound indifferent to harassment, targeted \
                 campaigns, and reputational collapse for institutions.",
            )
            .with_bridge_hints(hints(
                "Tie robust speech norms to the safety and dignity of vulnerable students \
                 (Care) and to predictable, non-arbitrary rules (Authority).",
                "Articulate a shared aim: a campus where students feel physically safe and \
                 intellectually serious at the same time.",
                "Emphasise viewpoint-neutral procedures, transparent enforcement, and \
                 meaningful appeal mechanisms.",
            )),
        Domain::new("climate", "Climate Policy")
            .with_frames(
                "Decarbonisation / Transition",
                "Planetary Emergency",
                "Economic Security & Reliability",
            )
            .with_default_example(
                "We need aggressive decarbonisation now; delaying for the sake of incumbents \
                 is morally indefensible.",
            )
            .with_base_values(profile([3, 2, 1, 1, 1, 2, 2]))
            .with_opponent_bias(bias([1, 1, 0, 2, 1, 0, 3]))
            .with_losing_reason(
                "Emergency rhetoric that ignores livelihoods and grid reliability is heard as \
                 reckless disregard for Security and Loyalty to workers.",
            )
            .with_bridge_hints(hints(
                "Frame transition as a duty to protect workers, grids, and local economies \
                 while avoiding climate shocks.",
                "Shared goal: reliable energy and habitable communities for children and \
                 grandchildren.",
                "Lay out staged timelines, compensation mechanisms, and local investment to \
                 make trade-offs governable.",
            )),
        Domain::new("migration", "Migration & Borders")
            .with_frames(
                "Mobility / Sovereignty",
                "Humanitarian / Opportunity",
                "Order & Cultural Continuity",
            )
            .with_default_example(
                "Closing borders betrays our values and traps people in impossible \
                 situations. We need more open, humane pathways.",
            )
            .with_base_values(profile([3, 2, 2, 0, 1, 0, 1]))
            .with_opponent_bias(bias([1, 1, 0, 3, 2, 1, 3]))
            .with_losing_reason(
                "Language that dismisses border worries as bigotry attacks Loyalty and \
                 Security, making compromise politically toxic.",
            )
            .with_bridge_hints(hints(
                "Emphasise protecting families, preserving community cohesion, and having \
                 rules that are actually enforced.",
                "Shared goal: predictable, fair systems that neither abandon people nor \
                 collapse local trust.",
                "Highlight screening, integration supports, and clear limits that make \
                 generosity sustainable.",
            )),
        Domain::new("policing", "Policing & Public Safety")
            .with_frames(
                "Security / Justice",
                "Accountability & Harm Reduction",
                "Order & Protection",
            )
            .with_default_example(
                "Over-militarised policing erodes trust and fails to keep communities safe \
                 in the long run.",
            )
            .with_base_values(profile([3, 3, 1, 1, 1, 0, 2]))
            .with_opponent_bias(bias([1, 1, 0, 2, 3, 0, 3]))
            .with_losing_reason(
                "If you only highlight abuses without acknowledging real fears, proposals \
                 sound naïve about Security and Authority.",
            )
            .with_bridge_hints(hints(
                "Frame reforms as tools that help officers do their jobs better and come home \
                 safe while reducing harm to civilians.",
                "Shared goal: streets where people feel safe calling the police and safe when \
                 the police arrive.",
                "Point to training, data, and oversight that distinguish high-risk situations \
                 from routine community policing.",
            )),
    ]
}
