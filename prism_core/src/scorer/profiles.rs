//! Profile arithmetic used by the scoring pipeline.

use prism_rules::{BiasProfile, Foundation, KeywordTable, Profile};

/// Scale of a normalized profile.
pub const NORMALIZED_MAX: u32 = 100;

/// Count keyword hits per foundation.
///
/// Each keyword found anywhere in the text adds one to its foundation,
/// however many times it appears.
pub fn extract_values(text: &str, keywords: &KeywordTable) -> Profile {
    let lower = text.to_lowercase();
    let mut scores = Profile::default();

    for (foundation, words) in keywords.iter() {
        for word in words {
            if lower.contains(word.as_str()) {
                tracing::trace!(%foundation, keyword = %word, "keyword hit");
                scores[foundation] += 1;
            }
        }
    }

    scores
}

/// Add detected counts onto a base profile.
pub fn merge_profiles(base: &Profile, detected: &Profile) -> Profile {
    Profile::from_fn(|f| base[f].saturating_add(detected[f]))
}

/// Imagine the counterpart: shift each score by the bias, floored at zero.
pub fn derive_counterpart(user: &Profile, bias: &BiasProfile) -> Profile {
    Profile::from_fn(|f| {
        let shifted = i64::from(user[f]) + i64::from(bias[f]);
        shifted.clamp(0, i64::from(u32::MAX)) as u32
    })
}

/// Rescale so the largest entry becomes 100.
///
/// The divisor is at least 1, so an all-zero profile stays all zero.
/// Halves round up.
pub fn normalize(profile: &Profile) -> Profile {
    let max = u64::from(profile.max_value().max(1));
    let scale = u64::from(NORMALIZED_MAX);
    profile.map(|_, value| ((2 * u64::from(*value) * scale + max) / (2 * max)) as u32)
}

/// The `n` highest-scoring foundations, best first.
///
/// Equal scores keep foundation enumeration order.
pub fn top_foundations(profile: &Profile, n: usize) -> Vec<Foundation> {
    let mut ranked: Vec<_> = profile.iter().map(|(f, score)| (f, *score)).collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.into_iter().take(n).map(|(f, _)| f).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn profile(values: [u32; 7]) -> Profile {
        Profile::from_fn(|f| values[f.index()])
    }

    fn bias(values: [i32; 7]) -> BiasProfile {
        BiasProfile::from_fn(|f| values[f.index()])
    }

    #[test]
    fn test_extract_climate_scenario() {
        let scores = extract_values(
            "We must protect vulnerable communities from unchecked risk",
            &KeywordTable::standard(),
        );

        assert_eq!(scores[Foundation::Care], 2);
        assert_eq!(scores[Foundation::Security], 1);
        // "communities" does not contain "community"
        assert_eq!(scores[Foundation::Loyalty], 0);
        assert_eq!(scores.total(), 3);
    }

    #[test]
    fn test_extract_counts_each_keyword_once() {
        let keywords = KeywordTable::standard();
        let once = extract_values("risk", &keywords);
        let thrice = extract_values("risk, risk and more risk", &keywords);
        assert_eq!(once, thrice);
        assert_eq!(thrice[Foundation::Security], 1);
    }

    #[test]
    fn test_extract_counts_overlapping_keywords() {
        // "unfair" also contains "fair"
        let scores = extract_values("This is UNFAIR", &KeywordTable::standard());
        assert_eq!(scores[Foundation::Fairness], 2);
    }

    #[test]
    fn test_extract_matches_phrases() {
        let scores = extract_values("Stand up for Our People", &KeywordTable::standard());
        assert_eq!(scores[Foundation::Loyalty], 1);
    }

    #[test]
    fn test_extract_empty_text() {
        let scores = extract_values("", &KeywordTable::standard());
        assert_eq!(scores, Profile::default());
    }

    #[test]
    fn test_merge_empty_detection_is_base() {
        let base = profile([1, 1, 3, 0, 1, 0, 2]);
        let detected = extract_values("", &KeywordTable::standard());
        assert_eq!(merge_profiles(&base, &detected), base);
    }

    #[test]
    fn test_merge_adds_per_foundation() {
        let merged = merge_profiles(
            &profile([1, 0, 0, 0, 0, 0, 2]),
            &profile([2, 0, 0, 0, 0, 0, 1]),
        );
        assert_eq!(merged, profile([3, 0, 0, 0, 0, 0, 3]));
    }

    #[test]
    fn test_derive_clamps_at_zero() {
        let user = profile([1, 1, 0, 0, 1, 0, 2]);
        let opp = derive_counterpart(&user, &bias([1, 0, -1, 0, 2, -5, 3]));
        assert_eq!(opp, profile([2, 1, 0, 0, 3, 0, 5]));
    }

    #[test]
    fn test_normalize_scales_to_max() {
        let normalized = normalize(&profile([1, 1, 3, 0, 1, 0, 2]));
        assert_eq!(normalized, profile([33, 33, 100, 0, 33, 0, 67]));
    }

    #[test]
    fn test_normalize_rounds_half_up() {
        // 1 * 100 / 8 = 12.5
        let normalized = normalize(&profile([1, 8, 0, 0, 0, 0, 0]));
        assert_eq!(normalized[Foundation::Care], 13);
        assert_eq!(normalized[Foundation::Fairness], 100);
    }

    #[test]
    fn test_normalize_all_zero() {
        assert_eq!(normalize(&Profile::default()), Profile::default());
    }

    #[test]
    fn test_top_foundations() {
        let top = top_foundations(&profile([33, 33, 100, 0, 33, 0, 67]), 3);
        assert_eq!(top, [Foundation::Liberty, Foundation::Security, Foundation::Care]);
    }

    #[test]
    fn test_top_foundations_ties_keep_enumeration_order() {
        let top = top_foundations(&profile([5, 5, 5, 5, 5, 5, 5]), 2);
        assert_eq!(top, [Foundation::Care, Foundation::Fairness]);
    }

    #[test]
    fn test_top_foundations_caps_at_seven() {
        assert_eq!(top_foundations(&Profile::default(), 10).len(), 7);
        assert!(top_foundations(&Profile::default(), 0).is_empty());
    }

    fn arb_profile() -> impl Strategy<Value = Profile> {
        prop::array::uniform7(0u32..1000).prop_map(profile)
    }

    fn arb_bias() -> impl Strategy<Value = BiasProfile> {
        prop::array::uniform7(-1000i32..1000).prop_map(bias)
    }

    proptest! {
        #[test]
        fn property_extraction_is_total(text in ".{0,200}") {
            let scores = extract_values(&text, &KeywordTable::standard());
            prop_assert_eq!(scores.iter().count(), 7);
            for (foundation, score) in scores.iter() {
                let limit = KeywordTable::standard().keywords(foundation).len() as u32;
                prop_assert!(*score <= limit);
            }
        }

        #[test]
        fn property_normalize_peaks_at_hundred(p in arb_profile()) {
            let normalized = normalize(&p);
            prop_assert!(normalized.values().all(|v| *v <= NORMALIZED_MAX));
            if p.max_value() > 0 {
                prop_assert_eq!(normalized.max_value(), NORMALIZED_MAX);
            } else {
                prop_assert_eq!(normalized, Profile::default());
            }
        }

        #[test]
        fn property_derive_is_clamped_sum(p in arb_profile(), b in arb_bias()) {
            let opp = derive_counterpart(&p, &b);
            for f in Foundation::ALL {
                let expected = (i64::from(p[f]) + i64::from(b[f])).max(0);
                prop_assert_eq!(i64::from(opp[f]), expected);
            }
        }
    }
}
