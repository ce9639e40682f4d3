// src/fetcher.rs
use async_trait::async_trait;
use log::{debug, info, warn};
use crate::config::Config;
use crate::error::FetchError;
use crate::models::status::{PlayerSet, PlayerSummary, ServerStatus, StatusResponse};
use crate::utils::classify_reqwest_error;

/// Where the poll loop gets the server's current status from.
#[async_trait]
pub trait StatusSource: Send + Sync {
    async fn fetch(&self) -> Result<ServerStatus, FetchError>;
}

/// Client for the public mcstatus.io v2 API.
pub struct McStatusClient {
    client: reqwest::Client,
    url: String,
    address: String,
}

impl McStatusClient {
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self {
            client,
            url: config.status_url(),
            address: config.server_address.clone(),
        })
    }
}

#[async_trait]
impl StatusSource for McStatusClient {
    async fn fetch(&self) -> Result<ServerStatus, FetchError> {
        debug!("Fetching status from {}", self.url);

        let response = self.client
            .get(&self.url)
            .send().await
            .and_then(|r| r.error_for_status())
            .map_err(|e| FetchError::from(classify_reqwest_error(&e)))?;

        let body = response
            .bytes().await
            .map_err(|e| FetchError::from(classify_reqwest_error(&e)))?;

        interpret(&self.address, &body)
    }
}

/// How much of the roster a status document lets us resolve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Roster {
    Listed(PlayerSet),
    Empty,
    /// Players are reported but none could be named.
    Unavailable { reported: u64 },
}

pub fn resolve_roster(summary: PlayerSummary) -> Roster {
    let count = summary.online.unwrap_or(0);

    let mut players = PlayerSet::new();
    for entry in summary.list.unwrap_or_default() {
        match entry.name_clean {
            Some(name) => {
                players.insert(name);
            }
            None => debug!(
                "Skipping roster entry without a clean name (uuid: {})",
                entry.uuid.as_deref().unwrap_or("unknown")
            ),
        }
    }

    if !players.is_empty() {
        Roster::Listed(players)
    } else if count == 0 {
        Roster::Empty
    } else {
        Roster::Unavailable { reported: count }
    }
}

/// Turns a status API body into a [`ServerStatus`].
///
/// An online server that reports players but no usable list is treated as
/// empty rather than as an error; that case is logged at `warn`. A missing
/// `online` flag reads as offline.
pub fn interpret(address: &str, body: &[u8]) -> Result<ServerStatus, FetchError> {
    let status: StatusResponse = serde_json::from_slice(body)
        .map_err(|e| FetchError::MalformedResponse(e.to_string()))?;

    if !status.online {
        info!("Server {} is offline", address);
        return Ok(ServerStatus::Offline);
    }

    let summary = status.players.unwrap_or_default();
    let max = summary.max;

    match resolve_roster(summary) {
        Roster::Listed(players) => {
            debug!(
                "Server {} ({}) online with {}/{} players",
                address,
                status.host.as_deref().unwrap_or("unknown host"),
                players.len(),
                max.map(|m| m.to_string()).unwrap_or_else(|| "?".to_string())
            );
            Ok(ServerStatus::Online(players))
        }
        Roster::Empty => {
            info!("Server {} is online, but no players are connected", address);
            Ok(ServerStatus::Online(PlayerSet::new()))
        }
        Roster::Unavailable { reported } => {
            warn!(
                "Server {} reports {} players online but the player list is unavailable; treating roster as empty",
                address, reported
            );
            Ok(ServerStatus::Online(PlayerSet::new()))
        }
    }
}
