//! Matcher — tallies canonical keys across participants and ranks them
//!
//! # Algorithm
//!
//! 1. Each participant gets a fresh `seen` set
//! 2. Every entry is normalized; empty keys and keys the participant already
//!    contributed are skipped
//! 3. The first contribution of a key records its trimmed raw text as label;
//!    every contribution adds one to the key's count
//! 4. Records are ranked by count descending, then key ascending
//!
//! A participant therefore counts at most once per key, so every count lies
//! in `1..=total_participants`.
//!
//! # Determinism
//!
//! The working map is a `HashMap`, but the final ordering is a total order on
//! `(count, key)` and keys are unique, so iteration order never leaks into
//! the result.

use std::collections::{HashMap, HashSet};

use tracing::{debug, trace};

use crate::normalizer::normalize;
use crate::{AggregateRecord, Participant, ResultSet};

/// Running tally for one canonical key
struct Tally {
    label: String,
    count: usize,
}

// ── Public API ─────────────────────────────────────────────

/// Match a snapshot of participants.
///
/// `total_participants` is `participants.len()`, including participants
/// whose entries were all blank.
pub fn match_participants(participants: &[Participant]) -> ResultSet {
    match_lists(participants.iter().map(|p| p.items.iter()))
}

/// Match raw item lists, one list per participant.
///
/// Same algorithm as [`match_participants`] for callers that do not hold
/// `Participant` records.
///
/// ```
/// use matchmaster_core::match_lists;
///
/// let result = match_lists([vec!["Pizza", "Sushi"], vec!["pizza ", "Tacos"]]);
/// assert_eq!(result.total_participants, 2);
/// assert_eq!(result.results[0].label, "Pizza");
/// assert_eq!(result.results[0].count, 2);
/// ```
pub fn match_lists<L, I, S>(lists: L) -> ResultSet
where
    L: IntoIterator<Item = I>,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut tallies: HashMap<String, Tally> = HashMap::new();
    let mut total_participants = 0;

    for (index, items) in lists.into_iter().enumerate() {
        total_participants += 1;
        let mut seen: HashSet<String> = HashSet::new();

        for (slot, raw) in items.into_iter().enumerate() {
            let raw = raw.as_ref();
            let key = normalize(raw);
            if key.is_empty() {
                trace!(participant = index, slot, "skipping blank entry");
                continue;
            }
            if !seen.insert(key.clone()) {
                trace!(participant = index, slot, key = %key, "skipping repeated entry");
                continue;
            }

            tallies
                .entry(key)
                .or_insert_with(|| Tally {
                    label: raw.trim().to_string(),
                    count: 0,
                })
                .count += 1;
        }
    }

    let results = rank(tallies);
    debug!(
        participants = total_participants,
        keys = results.len(),
        "matching complete"
    );

    ResultSet {
        results,
        total_participants,
    }
}

// ── Ranking ────────────────────────────────────────────────

/// Sort by count descending, then canonical key ascending
fn rank(tallies: HashMap<String, Tally>) -> Vec<AggregateRecord> {
    let mut records: Vec<AggregateRecord> = tallies
        .into_iter()
        .map(|(key, tally)| AggregateRecord {
            key,
            label: tally.label,
            count: tally.count,
        })
        .collect();

    records.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.key.cmp(&b.key)));
    records
}
