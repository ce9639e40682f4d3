// src/detector.rs
use crate::models::status::{PlayerSet, ServerStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeaveReason {
    Disconnected,
    ServerOffline,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerEvent {
    Joined(String),
    Left { name: String, reason: LeaveReason },
}

/// Result of comparing the last-known roster with a fresh status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeSet {
    pub joined: PlayerSet,
    pub left: PlayerSet,
    pub server_offline: bool,
    /// Roster to remember once the changes have been announced.
    pub next: PlayerSet,
}

impl ChangeSet {
    pub fn is_empty(&self) -> bool {
        self.joined.is_empty() && self.left.is_empty()
    }

    /// Joins first, then leaves, each in name order.
    pub fn events(&self) -> Vec<PlayerEvent> {
        let reason = if self.server_offline {
            LeaveReason::ServerOffline
        } else {
            LeaveReason::Disconnected
        };

        self.joined
            .iter()
            .map(|name| PlayerEvent::Joined(name.clone()))
            .chain(self.left.iter().map(|name| PlayerEvent::Left {
                name: name.clone(),
                reason,
            }))
            .collect()
    }
}

pub fn detect(previous: &PlayerSet, status: &ServerStatus) -> ChangeSet {
    match status {
        ServerStatus::Offline => ChangeSet {
            joined: PlayerSet::new(),
            left: previous.clone(),
            server_offline: true,
            next: PlayerSet::new(),
        },
        ServerStatus::Online(current) => ChangeSet {
            joined: current.difference(previous).cloned().collect(),
            left: previous.difference(current).cloned().collect(),
            server_offline: false,
            next: current.clone(),
        },
    }
}
