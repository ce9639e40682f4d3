// src/monitor.rs
use futures_util::FutureExt;
use log::{debug, error, info};
use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::time::Duration;
use crate::config::Config;
use crate::detector::{detect, LeaveReason, PlayerEvent};
use crate::error::{FetchError, TickError};
use crate::fetcher::StatusSource;
use crate::models::status::ServerStatus;
use crate::notifier::{format_event, Notifier};
use crate::storage::memory::PlayerTracker;
use crate::utils::{clock_stamp, describe_players};

/// What a successful tick did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickOutcome {
    pub server_online: bool,
    pub joined: usize,
    pub left: usize,
    pub delivered: usize,
    pub failed: usize,
}

/// Poll loop. Seeds once, then polls forever; the tracker is owned here and
/// threaded through every tick.
pub struct Monitor<S, N> {
    source: S,
    notifier: N,
    tracker: PlayerTracker,
    address: String,
    interval: Duration,
    seed_pause: Duration,
}

impl<S: StatusSource, N: Notifier> Monitor<S, N> {
    pub fn new(config: &Config, source: S, notifier: N) -> Self {
        Self {
            source,
            notifier,
            tracker: PlayerTracker::new(),
            address: config.server_address.clone(),
            interval: config.check_interval(),
            seed_pause: config.seed_pause(),
        }
    }

    pub fn tracker(&self) -> &PlayerTracker {
        &self.tracker
    }

    pub async fn run(mut self) {
        info!("Monitoring all players on {}", self.address);
        self.seed().await;
        tokio::time::sleep(self.seed_pause).await;
        info!("Starting live monitoring of joins and leaves");

        loop {
            let _ = self.poll_once().await;
            tokio::time::sleep(self.interval).await;
        }
    }

    /// Records whoever is online right now without notifying anyone.
    pub async fn seed(&mut self) {
        info!("Initial check: recording currently online players only");

        match self.source.fetch().await {
            Ok(status) => {
                match status.players() {
                    Some(players) => info!("Initially online players: {}", describe_players(players)),
                    None => info!("Server {} is offline at startup", self.address),
                }
                self.tracker.seed(&status);
            }
            Err(e) => {
                error!("Initial check failed: {}", e);
                if e == FetchError::HttpStatus(404) {
                    error!("Check that the server address is correct: {}", self.address);
                }
                self.tracker.seed(&ServerStatus::Offline);
            }
        }
    }

    /// One guarded tick. Any failure, including a panic, is logged and
    /// returned; the tracker keeps its previous roster.
    pub async fn poll_once(&mut self) -> Result<TickOutcome, TickError> {
        let result = AssertUnwindSafe(self.tick())
            .catch_unwind().await
            .unwrap_or_else(|panic| Err(TickError::Unexpected(panic_message(panic.as_ref()))));

        match &result {
            Ok(outcome) => debug!(
                "Tick done: online={} joined={} left={} delivered={} failed={} tracked={}",
                outcome.server_online,
                outcome.joined,
                outcome.left,
                outcome.delivered,
                outcome.failed,
                self.tracker.len()
            ),
            Err(e) => {
                error!("Player check failed: {}", e);
                if e.suggests_bad_address() {
                    error!("Check that the server address is correct: {}", self.address);
                }
            }
        }

        result
    }

    async fn tick(&mut self) -> Result<TickOutcome, TickError> {
        let status = self.source.fetch().await?;
        let changes = detect(self.tracker.last_known(), &status);

        let mut outcome = TickOutcome {
            server_online: status.is_online(),
            joined: changes.joined.len(),
            left: changes.left.len(),
            ..TickOutcome::default()
        };

        if changes.is_empty() {
            debug!("No roster changes on {}", self.address);
        }

        let stamp = clock_stamp();
        for event in changes.events() {
            match &event {
                PlayerEvent::Joined(name) => info!("Player {} joined", name),
                PlayerEvent::Left { name, reason: LeaveReason::Disconnected } => {
                    info!("Player {} left", name)
                }
                PlayerEvent::Left { name, reason: LeaveReason::ServerOffline } => {
                    info!("Player {} left (server offline)", name)
                }
            }

            let message = format_event(&event, &stamp);
            match self.notifier.send(&message).await {
                Ok(()) => {
                    info!("Notification sent");
                    outcome.delivered += 1;
                }
                Err(e) => {
                    error!("Failed to send notification: {}", e);
                    outcome.failed += 1;
                }
            }
        }

        self.tracker.replace(changes.next);
        Ok(outcome)
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "panic with non-string payload".to_string()
    }
}
