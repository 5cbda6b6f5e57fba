//! Discord webhook delivery with 429-aware retry.

use async_trait::async_trait;
use tracing::{info, warn};

use crate::constants::{discord, events};
use crate::discord::embed::WebhookPayload;
use crate::discord::{Deliverer, Sleeper, TokioSleeper, WebhookResponse, WebhookTransport};
use crate::error::DeliveryError;

/// Single reqwest client reused for every attempt
#[derive(Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self, DeliveryError> {
        let client = reqwest::Client::builder()
            .timeout(discord::REQUEST_TIMEOUT)
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl WebhookTransport for HttpTransport {
    async fn post(
        &self,
        url: &str,
        payload: &WebhookPayload,
    ) -> Result<WebhookResponse, DeliveryError> {
        let response = self.client.post(url).json(payload).send().await?;

        let status = response.status().as_u16();
        let retry_after_header = response
            .headers()
            .get(reqwest::header::RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = response.text().await?;

        Ok(WebhookResponse {
            status,
            retry_after_header,
            body,
        })
    }
}

pub struct DiscordWebhook<T = HttpTransport, S = TokioSleeper> {
    transport: T,
    sleeper: S,
    max_retries: u32,
}

impl DiscordWebhook {
    pub fn new() -> Result<Self, DeliveryError> {
        Ok(Self::with_parts(HttpTransport::new()?, TokioSleeper))
    }
}

impl<T: WebhookTransport, S: Sleeper> DiscordWebhook<T, S> {
    pub fn with_parts(transport: T, sleeper: S) -> Self {
        Self {
            transport,
            sleeper,
            max_retries: discord::MAX_RATE_LIMIT_RETRIES,
        }
    }

    /// POST `payload`, retrying up to three times on 429. Whatever the last
    /// attempt returned comes back as-is; only transport failures are `Err`.
    pub async fn post_with_retry(
        &self,
        url: &str,
        payload: &WebhookPayload,
    ) -> Result<WebhookResponse, DeliveryError> {
        let mut retries = 0;

        loop {
            let response = self.transport.post(url, payload).await?;

            if !response.is_rate_limited() {
                return Ok(response);
            }
            if retries >= self.max_retries {
                warn!(
                    event = events::RATE_LIMITED,
                    retries,
                    "⚠️ [DISCORD] Still rate limited after {} retries, giving up",
                    retries
                );
                return Ok(response);
            }

            let wait = response.retry_after();
            retries += 1;
            info!(
                event = events::RATE_LIMITED,
                retry = retries,
                wait_ms = wait.as_millis() as u64,
                "⏳ [DISCORD] Rate limited, retrying in {:?}",
                wait
            );
            self.sleeper.sleep(wait).await;
        }
    }
}

#[async_trait]
impl<T: WebhookTransport, S: Sleeper> Deliverer for DiscordWebhook<T, S> {
    async fn deliver(
        &self,
        url: &str,
        payload: &WebhookPayload,
    ) -> Result<WebhookResponse, DeliveryError> {
        self.post_with_retry(url, payload).await
    }
}
