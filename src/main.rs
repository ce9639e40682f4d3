// src/main.rs
mod config;
mod detector;
mod error;
mod fetcher;
mod models;
mod monitor;
mod notifier;
mod storage;
mod utils;
#[cfg(test)]
mod testutil;

use env_logger::Env;
use fetcher::McStatusClient;
use log::{error, warn};
use monitor::Monitor;
use notifier::WebhookNotifier;
use crate::config::Config;

#[tokio::main(flavor = "current_thread")]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();

    // Initialize logger only once at the start
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = Config::from_env();
    for key in config.missing_settings() {
        warn!("{} is not set; requests that depend on it will fail", key);
    }

    let source = McStatusClient::new(&config).map_err(|e| {
        error!("Failed to build status client: {}", e);
        std::io::Error::new(std::io::ErrorKind::Other, format!("Failed to build status client: {}", e))
    })?;

    let notifier = WebhookNotifier::new(&config).map_err(|e| {
        error!("Failed to build webhook client: {}", e);
        std::io::Error::new(std::io::ErrorKind::Other, format!("Failed to build webhook client: {}", e))
    })?;

    Monitor::new(&config, source, notifier).run().await;
    Ok(())
}
