//! Session — builds the participant snapshot the matcher consumes
//!
//! A session is created with a participant count and a per-participant slot
//! count, both clamped into [`SessionLimits`]. Names and slots are edited in
//! place; `run` hands the current snapshot to the matcher.
//!
//! The matcher does not depend on this module and accepts any snapshot,
//! including ones outside these limits.

use tracing::debug;

use crate::matcher::match_participants;
use crate::{Error, Participant, Result, ResultSet};

/// Bounds on group size and list length
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SessionLimits {
    pub min_participants: usize,
    pub max_participants: usize,
    pub min_items: usize,
    pub max_items: usize,
}

impl Default for SessionLimits {
    fn default() -> Self {
        Self {
            min_participants: 2,
            max_participants: 5,
            min_items: 5,
            max_items: 20,
        }
    }
}

impl SessionLimits {
    pub fn clamp_participants(&self, n: usize) -> usize {
        n.max(self.min_participants).min(self.max_participants)
    }

    pub fn clamp_items(&self, n: usize) -> usize {
        n.max(self.min_items).min(self.max_items)
    }
}

/// An editable group of participants
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    participants: Vec<Participant>,
}

impl Session {
    /// Start a session with clamped counts and empty slots.
    ///
    /// Participant ids are `0..n` and names default to `"Participant {id+1}"`.
    /// Inverted limits resolve to the maximum.
    pub fn start(participants: usize, items: usize, limits: &SessionLimits) -> Self {
        let participants = limits.clamp_participants(participants);
        let items = limits.clamp_items(items);
        debug!(participants, items, "starting session");

        let participants = (0..participants as u32)
            .map(|id| Participant::new(id, default_name(id), vec![String::new(); items]))
            .collect();

        Self { participants }
    }

    /// Wrap an existing snapshot as-is
    pub fn from_participants(participants: Vec<Participant>) -> Self {
        Self { participants }
    }

    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    /// Name to show for a participant, falling back when it was left empty
    pub fn display_name(participant: &Participant) -> String {
        if participant.name.trim().is_empty() {
            default_name(participant.id)
        } else {
            participant.name.clone()
        }
    }

    pub fn set_name(&mut self, id: u32, name: impl Into<String>) -> Result<()> {
        self.participant_mut(id)?.name = name.into();
        Ok(())
    }

    /// Replace the entry in one slot.
    ///
    /// # Errors
    /// `UnknownParticipant` for a bad id, `SlotOutOfRange` past the slot count.
    pub fn set_item(&mut self, id: u32, slot: usize, value: impl Into<String>) -> Result<()> {
        let participant = self.participant_mut(id)?;
        let len = participant.items.len();
        match participant.items.get_mut(slot) {
            Some(entry) => {
                *entry = value.into();
                Ok(())
            }
            None => Err(Error::SlotOutOfRange {
                participant: id,
                slot,
                len,
            }),
        }
    }

    /// Match the current snapshot
    pub fn run(&self) -> ResultSet {
        match_participants(&self.participants)
    }

    /// Drop every participant
    pub fn reset(&mut self) {
        self.participants.clear();
    }

    fn participant_mut(&mut self, id: u32) -> Result<&mut Participant> {
        self.participants
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(Error::UnknownParticipant(id))
    }
}

fn default_name(id: u32) -> String {
    format!("Participant {}", u64::from(id) + 1)
}
