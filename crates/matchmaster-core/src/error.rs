//! Error types for MatchMaster
//!
//! The matching engine itself is total and never returns an error.
//! These variants cover the surfaces around it: session edits and
//! loading participant snapshots.

use thiserror::Error;

/// MatchMaster error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// No participant with this id in the session
    #[error("Unknown participant: {0}")]
    UnknownParticipant(u32),

    /// Item slot index past the participant's fixed slot count
    #[error("Slot {slot} out of range for participant {participant} ({len} slots)")]
    SlotOutOfRange {
        participant: u32,
        slot: usize,
        len: usize,
    },

    /// Snapshot text could not be read as participants
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Reading a snapshot from disk failed
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e.to_string())
    }
}

/// Result type alias for MatchMaster operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_slot_out_of_range() {
        let err = Error::SlotOutOfRange {
            participant: 2,
            slot: 9,
            len: 5,
        };
        assert_eq!(
            err.to_string(),
            "Slot 9 out of range for participant 2 (5 slots)"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.json");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(ref msg) if msg.contains("missing.json")));
    }
}
