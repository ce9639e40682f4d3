// src/notifier.rs
use async_trait::async_trait;
use serde::Serialize;
use crate::config::Config;
use crate::detector::{LeaveReason, PlayerEvent};
use crate::error::NotifyError;
use crate::utils::classify_reqwest_error;

/// Outbound channel for join/leave messages.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, message: &str) -> Result<(), NotifyError>;
}

#[derive(Serialize)]
struct WebhookPayload<'a> {
    content: &'a str,
}

/// Discord-style webhook: `POST {"content": "..."}`.
pub struct WebhookNotifier {
    client: reqwest::Client,
    url: String,
}

impl WebhookNotifier {
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self {
            client,
            url: config.webhook_url.clone(),
        })
    }
}

#[async_trait]
impl Notifier for WebhookNotifier {
    async fn send(&self, message: &str) -> Result<(), NotifyError> {
        // .json() sets Content-Type: application/json
        self.client
            .post(&self.url)
            .json(&WebhookPayload { content: message })
            .send().await
            .and_then(|r| r.error_for_status())
            .map(|_| ())
            .map_err(|e| NotifyError::from(classify_reqwest_error(&e)))
    }
}

pub fn format_event(event: &PlayerEvent, stamp: &str) -> String {
    match event {
        PlayerEvent::Joined(name) => format!("🟢 {} Player **{}** joined", stamp, name),
        PlayerEvent::Left { name, reason: LeaveReason::Disconnected } => {
            format!("🔴 {} Player **{}** left", stamp, name)
        }
        PlayerEvent::Left { name, reason: LeaveReason::ServerOffline } => {
            format!("🔴 {} Player **{}** left (server offline)", stamp, name)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{closed_port, respond_once};

    fn notifier_for(url: String) -> WebhookNotifier {
        let config = Config {
            webhook_url: url,
            ..Config::default()
        };
        WebhookNotifier::new(&config).unwrap()
    }

    #[test]
    fn formats_each_event_kind() {
        let stamp = "[12:34:56]";
        assert_eq!(
            format_event(&PlayerEvent::Joined("Alice".into()), stamp),
            "🟢 [12:34:56] Player **Alice** joined"
        );
        assert_eq!(
            format_event(
                &PlayerEvent::Left { name: "Bob".into(), reason: LeaveReason::Disconnected },
                stamp
            ),
            "🔴 [12:34:56] Player **Bob** left"
        );
        assert_eq!(
            format_event(
                &PlayerEvent::Left { name: "Bob".into(), reason: LeaveReason::ServerOffline },
                stamp
            ),
            "🔴 [12:34:56] Player **Bob** left (server offline)"
        );
    }

    #[tokio::test]
    async fn posts_json_content() {
        let (base, server) = respond_once("200 OK", "").await;
        let notifier = notifier_for(format!("{}/api/webhooks/1/token", base));

        notifier.send("🟢 hello").await.unwrap();

        let request = server.await.unwrap();
        assert_eq!(request.request_line(), "POST /api/webhooks/1/token HTTP/1.1");
        assert_eq!(request.header("content-type").as_deref(), Some("application/json"));
        let body: serde_json::Value = serde_json::from_str(&request.body).unwrap();
        assert_eq!(body, serde_json::json!({ "content": "🟢 hello" }));
    }

    #[tokio::test]
    async fn server_error_is_reported() {
        let (base, server) = respond_once("500 Internal Server Error", "{}").await;
        let err = notifier_for(base).send("x").await.unwrap_err();
        assert_eq!(err, NotifyError::HttpStatus(500));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn unreachable_webhook_is_reported() {
        let err = notifier_for(closed_port().await).send("x").await.unwrap_err();
        assert!(matches!(err, NotifyError::ConnectionFailure(_)));
    }

    #[tokio::test]
    async fn empty_url_fails_without_panicking() {
        let err = notifier_for(String::new()).send("x").await.unwrap_err();
        assert!(matches!(err, NotifyError::ConnectionFailure(_)));
    }
}
