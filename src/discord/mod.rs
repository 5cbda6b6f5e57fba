pub mod embed;
pub mod webhook;

use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;

use crate::constants::discord;
use crate::error::DeliveryError;
use embed::WebhookPayload;

pub use webhook::{DiscordWebhook, HttpTransport};

/// What came back from one webhook POST
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WebhookResponse {
    pub status: u16,
    /// Raw `Retry-After` header, if any
    pub retry_after_header: Option<String>,
    pub body: String,
}

impl WebhookResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            retry_after_header: None,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn is_rate_limited(&self) -> bool {
        self.status == discord::RATE_LIMIT_STATUS
    }

    /// Wait before retrying: `Retry-After` header, then the body's
    /// `retry_after`, then the 1s default. Never negative.
    pub fn retry_after(&self) -> Duration {
        let secs = self
            .retry_after_header
            .as_deref()
            .and_then(|h| h.trim().parse::<f64>().ok())
            .filter(|s| s.is_finite())
            .or_else(|| {
                serde_json::from_str::<Value>(&self.body)
                    .ok()
                    .and_then(|v| v.get("retry_after").and_then(Value::as_f64))
                    .filter(|s| s.is_finite())
            })
            .unwrap_or(discord::DEFAULT_RETRY_AFTER_SECS);

        Duration::from_secs_f64(secs.clamp(0.0, discord::MAX_RETRY_AFTER_SECS))
    }
}

/// One POST, no retries
#[async_trait]
pub trait WebhookTransport: Send + Sync {
    async fn post(
        &self,
        url: &str,
        payload: &WebhookPayload,
    ) -> Result<WebhookResponse, DeliveryError>;
}

/// Injected so retry waits can be observed in tests
#[async_trait]
pub trait Sleeper: Send + Sync {
    async fn sleep(&self, duration: Duration);
}

pub struct TokioSleeper;

#[async_trait]
impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// "Given a destination and a payload, attempt delivery"
#[async_trait]
pub trait Deliverer: Send + Sync {
    async fn deliver(
        &self,
        url: &str,
        payload: &WebhookPayload,
    ) -> Result<WebhookResponse, DeliveryError>;
}
