//! Presentation helpers over a finished `ResultSet`
//!
//! The matcher never classifies records. Front ends that want the
//! "everyone / shared / unique" split derive it here from the exact count
//! and the group size.

use crate::{AggregateRecord, ResultSet};

/// How widely a record is shared within the group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    /// Every participant entered it
    Everyone,
    /// At least two participants, but not all
    Shared,
    /// Only one participant
    Unique,
}

impl Tier {
    /// Classify a count against the group size.
    ///
    /// `Everyone` is checked first, so in a one-person group a count of 1
    /// is `Everyone`, not `Unique`.
    pub fn classify(count: usize, total: usize) -> Self {
        if count == total {
            Tier::Everyone
        } else if count >= 2 {
            Tier::Shared
        } else {
            Tier::Unique
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tier::Everyone => "everyone",
            Tier::Shared => "shared",
            Tier::Unique => "unique",
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl AggregateRecord {
    /// `"N of M"` for this record within a group of `total`
    pub fn share_label(&self, total: usize) -> String {
        format!("{} of {}", self.count, total)
    }
}

impl ResultSet {
    /// No item was entered by anyone.
    ///
    /// A computed-but-empty result, distinct from "not computed yet",
    /// which callers model as `Option<ResultSet>`.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn tier_of(&self, record: &AggregateRecord) -> Tier {
        Tier::classify(record.count, self.total_participants)
    }

    /// Records every participant entered
    pub fn shared_by_everyone(&self) -> impl Iterator<Item = &AggregateRecord> {
        self.results
            .iter()
            .filter(move |r| r.count == self.total_participants)
    }
}
