use std::env;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct Config {
    // Target server and webhook
    pub server_address: String,
    pub webhook_url: String,

    // Status API
    pub status_api_base: String,
    pub user_agent: String,
    pub request_timeout_secs: u64,

    // Poll loop timing
    pub check_interval_secs: u64,
    pub seed_pause_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_address: String::new(),
            webhook_url: String::new(),
            status_api_base: "https://api.mcstatus.io".to_string(),
            user_agent: "MinecraftPlayerMonitor/1.0".to_string(),
            request_timeout_secs: 10,
            check_interval_secs: 30,
            seed_pause_secs: 1,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            server_address: env::var("SERVER_ADDRESS").unwrap_or_default(),

            webhook_url: env::var("DISCORD_WEBHOOK_URL").unwrap_or_default(),

            status_api_base: env::var("STATUS_API_BASE")
                .map(|v| v.trim_end_matches('/').to_string())
                .unwrap_or(defaults.status_api_base),

            user_agent: env::var("USER_AGENT").unwrap_or(defaults.user_agent),

            request_timeout_secs: parse_secs("REQUEST_TIMEOUT_SECS", defaults.request_timeout_secs),

            check_interval_secs: parse_secs("CHECK_INTERVAL_SECS", defaults.check_interval_secs),

            seed_pause_secs: parse_secs("SEED_PAUSE_SECS", defaults.seed_pause_secs),
        }
    }

    /// Names of required settings that are empty. They are not fatal: an empty
    /// address or webhook simply makes the corresponding requests fail.
    pub fn missing_settings(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.server_address.is_empty() {
            missing.push("SERVER_ADDRESS");
        }
        if self.webhook_url.is_empty() {
            missing.push("DISCORD_WEBHOOK_URL");
        }
        missing
    }

    pub fn status_url(&self) -> String {
        format!("{}/v2/status/java/{}", self.status_api_base, self.server_address)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn check_interval(&self) -> Duration {
        Duration::from_secs(self.check_interval_secs)
    }

    pub fn seed_pause(&self) -> Duration {
        Duration::from_secs(self.seed_pause_secs)
    }
}

fn parse_secs(key: &str, default: u64) -> u64 {
    env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}
