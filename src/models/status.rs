// src/models/status.rs
use serde::Deserialize;
use std::collections::BTreeSet;

/// Player names currently on the server. Ordered so that events are emitted
/// in a stable order.
pub type PlayerSet = BTreeSet<String>;

/// Body of `GET /v2/status/java/{address}`. Only the fields the monitor
/// reads are modelled; everything else in the document is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct StatusResponse {
    #[serde(default)]
    pub online: bool,
    #[serde(default)]
    pub host: Option<String>,
    #[serde(default)]
    pub players: Option<PlayerSummary>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlayerSummary {
    #[serde(default)]
    pub online: Option<u64>,
    #[serde(default)]
    pub max: Option<u64>,
    #[serde(default)]
    pub list: Option<Vec<PlayerEntry>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlayerEntry {
    #[serde(default)]
    pub uuid: Option<String>,
    /// Name with formatting codes stripped. The raw name is never used.
    #[serde(default)]
    pub name_clean: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServerStatus {
    Online(PlayerSet),
    Offline,
}

impl ServerStatus {
    pub fn is_online(&self) -> bool {
        matches!(self, Self::Online(_))
    }

    pub fn players(&self) -> Option<&PlayerSet> {
        match self {
            Self::Online(players) => Some(players),
            Self::Offline => None,
        }
    }
}
