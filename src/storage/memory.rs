// src/storage/memory.rs
use crate::models::status::{PlayerSet, ServerStatus};

/// Last-known roster. Owned by the poll loop and only replaced once a poll
/// has been fully interpreted, so a failed poll leaves it untouched.
#[derive(Debug, Default)]
pub struct PlayerTracker {
    players: PlayerSet,
}

impl PlayerTracker {
    pub fn new() -> Self {
        Self {
            players: PlayerSet::new(),
        }
    }

    /// Initial state from the seeding poll. Offline seeds an empty roster.
    pub fn seed(&mut self, status: &ServerStatus) {
        self.players = match status {
            ServerStatus::Online(players) => players.clone(),
            ServerStatus::Offline => PlayerSet::new(),
        };
    }

    pub fn last_known(&self) -> &PlayerSet {
        &self.players
    }

    pub fn replace(&mut self, players: PlayerSet) {
        self.players = players;
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}
