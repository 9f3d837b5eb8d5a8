//! MatchMaster Core - shared-item matching for small groups
//!
//! Every participant writes a short list of free-text items. The engine
//! finds out which items are shared across the group and by how many people.
//!
//! # Architecture
//!
//! ```text
//! Participants → Matcher ─┬─ Normalizer (per item) → Canonical Key
//!                         ├─ per-participant dedup
//!                         └─ cross-participant tally → rank → ResultSet
//! ```
//!
//! # Guarantees
//!
//! - **Pure**: no I/O, no shared state, no randomness
//! - **Total**: every well-typed snapshot produces a result, never an error
//! - **Deterministic**: same snapshot always produces an identical ResultSet
//! - **Exact**: items match only when their canonical keys are equal

pub mod error;
pub mod matcher;
pub mod normalizer;
pub mod report;
pub mod session;

pub use error::{Error, Result};
pub use matcher::{match_lists, match_participants};
pub use normalizer::normalize;
pub use report::Tier;
pub use session::{Session, SessionLimits};

/// One member of the group and the items they entered
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Participant {
    pub id: u32,
    #[serde(default)]
    pub name: String,
    /// Raw entries in slot order; empty slots are empty strings
    #[serde(default)]
    pub items: Vec<String>,
}

impl Participant {
    pub fn new(id: u32, name: impl Into<String>, items: Vec<String>) -> Self {
        Self {
            id,
            name: name.into(),
            items,
        }
    }
}

/// A distinct canonical key with its display label and contributor count
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AggregateRecord {
    /// Canonical key, `[a-z0-9]+`
    pub key: String,
    /// First raw text seen for this key, trimmed
    pub label: String,
    /// Number of distinct participants who entered this key
    pub count: usize,
}

/// Ranked records plus the group size used as the "N of M" denominator
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultSet {
    pub results: Vec<AggregateRecord>,
    pub total_participants: usize,
}

/// Parse a participant snapshot from JSON.
///
/// Accepts either a bare array `[{...}, ...]` or an object
/// `{ "participants": [{...}, ...] }`.
///
/// # Errors
/// Returns `InvalidInput` if the text is not one of those shapes.
pub fn load_participants(json: &str) -> Result<Vec<Participant>> {
    #[derive(serde::Deserialize)]
    #[serde(untagged)]
    enum Snapshot {
        Bare(Vec<Participant>),
        Wrapped { participants: Vec<Participant> },
    }

    match serde_json::from_str::<Snapshot>(json) {
        Ok(Snapshot::Bare(participants)) | Ok(Snapshot::Wrapped { participants }) => {
            Ok(participants)
        }
        Err(e) => Err(Error::InvalidInput(e.to_string())),
    }
}
