//! Property-based tests for the MatchMaster engine
//!
//! These tests check the normalizer and matcher invariants with proptest.

use std::collections::HashSet;

use matchmaster_core::{match_lists, normalize};
use proptest::prelude::*;

/// Short item text mixing case, accents, spaces and punctuation
fn item() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-cA-CéÉü 0-2!.-]{0,6}").unwrap()
}

fn group() -> impl Strategy<Value = Vec<Vec<String>>> {
    prop::collection::vec(prop::collection::vec(item(), 0..8), 0..6)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Property: keys only use [a-z0-9]
    #[test]
    fn prop_normalize_closed_alphabet(s in any::<String>()) {
        let key = normalize(&s);
        prop_assert!(key.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()),
            "unexpected character in {:?}", key);
    }

    /// Property: normalize(normalize(s)) == normalize(s)
    #[test]
    fn prop_normalize_idempotent(s in any::<String>()) {
        let once = normalize(&s);
        prop_assert_eq!(normalize(&once), once);
    }

    /// Property: surrounding whitespace and case never change the key
    #[test]
    fn prop_normalize_ignores_case_and_padding(s in item(), pad in "[ \t]{0,3}") {
        let padded = format!("{}{}{}", pad, s.to_uppercase(), pad);
        prop_assert_eq!(normalize(&padded), normalize(&s));
    }

    /// Property: counts lie in 1..=total and no key is empty
    #[test]
    fn prop_counts_bounded(lists in group()) {
        let result = match_lists(&lists);
        prop_assert_eq!(result.total_participants, lists.len());
        for record in &result.results {
            prop_assert!(!record.key.is_empty());
            prop_assert!(record.count >= 1);
            prop_assert!(record.count <= result.total_participants);
        }
    }

    /// Property: each count equals the number of participants holding the key
    #[test]
    fn prop_count_is_distinct_participants(lists in group()) {
        let result = match_lists(&lists);
        let per_participant: Vec<HashSet<String>> = lists
            .iter()
            .map(|items| items.iter().map(|s| normalize(s)).filter(|k| !k.is_empty()).collect())
            .collect();

        let distinct: HashSet<&String> = per_participant.iter().flatten().collect();
        prop_assert_eq!(result.results.len(), distinct.len());

        for record in &result.results {
            let expected = per_participant.iter().filter(|keys| keys.contains(&record.key)).count();
            prop_assert_eq!(record.count, expected, "wrong count for {:?}", record.key);
        }
    }

    /// Property: ranked by count descending, then key ascending
    #[test]
    fn prop_ranking_order(lists in group()) {
        let result = match_lists(&lists);
        for pair in result.results.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            prop_assert!(a.count > b.count || (a.count == b.count && a.key < b.key),
                "{:?} ranked before {:?}", a, b);
        }
    }

    /// Property: the label is the trimmed first raw entry for that key
    #[test]
    fn prop_label_is_first_seen(lists in group()) {
        let result = match_lists(&lists);
        for record in &result.results {
            let first = lists
                .iter()
                .flatten()
                .find(|raw| normalize(raw) == record.key)
                .map(|raw| raw.trim().to_string());
            prop_assert_eq!(Some(record.label.clone()), first);
        }
    }
}
