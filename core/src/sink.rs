//! Outbound message delivery.
//!
//! The rotation only ever sees `MessageSink`; delivery failures are the
//! caller's to log and ignore. Nothing here may abort a run.

use std::time::Duration;

use crate::error::RotaResult;

const DELIVERY_TIMEOUT: Duration = Duration::from_secs(10);

/// Narrow seam between the rotation and the outside world: accepts one
/// rendered message per run.
pub trait MessageSink {
    fn send(&self, message: &str) -> RotaResult<()>;
}

/// Delivers to a team-chat incoming webhook as `{"text": ...}`.
pub struct WebhookSink {
    client: reqwest::blocking::Client,
    url: String,
}

impl WebhookSink {
    pub fn new(url: impl Into<String>) -> RotaResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(DELIVERY_TIMEOUT)
            .build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

impl MessageSink for WebhookSink {
    fn send(&self, message: &str) -> RotaResult<()> {
        let body = serde_json::json!({ "text": message });
        self.client
            .post(&self.url)
            .json(&body)
            .send()?
            .error_for_status()?;
        log::info!("message delivered to webhook");
        Ok(())
    }
}

/// Fallback sink when no webhook is configured: the message is logged
/// so dry runs stay observable.
pub struct LogSink;

impl MessageSink for LogSink {
    fn send(&self, message: &str) -> RotaResult<()> {
        log::warn!("no webhook configured; message would be:\n{message}");
        Ok(())
    }
}
