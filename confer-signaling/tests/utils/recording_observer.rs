use anyhow::Result;
use async_trait::async_trait;
use confer_core::User;
use confer_signaling::{ServerEvent, SignalingChannelObserver};
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Observer that rebuilds and stores every event it receives.
#[derive(Clone, Default)]
pub struct RecordingObserver {
    events: Arc<Mutex<Vec<ServerEvent>>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn events(&self) -> Vec<ServerEvent> {
        self.events.lock().await.clone()
    }

    /// Wait until at least `count` events arrived, or `timeout_ms` passed.
    pub async fn wait_for_events(&self, count: usize, timeout_ms: u64) -> Result<()> {
        let start = std::time::Instant::now();
        let timeout = std::time::Duration::from_millis(timeout_ms);

        loop {
            let received = self.events.lock().await.len();
            if received >= count {
                return Ok(());
            }
            if start.elapsed() > timeout {
                anyhow::bail!(
                    "Timeout waiting for {} events (received {})",
                    count,
                    received
                );
            }
            tokio::time::sleep(std::time::Duration::from_millis(10)).await;
        }
    }

    async fn record(&self, event: ServerEvent) {
        self.events.lock().await.push(event);
    }
}

#[async_trait]
impl SignalingChannelObserver for RecordingObserver {
    async fn on_user_joined(&self, user: &User) {
        self.record(ServerEvent::UserJoined(user.clone())).await;
    }

    async fn on_user_left(&self, user: &User) {
        self.record(ServerEvent::UserLeft(user.clone())).await;
    }

    async fn on_stream_added(&self, stream: &Value) {
        self.record(ServerEvent::StreamAdded(stream.clone())).await;
    }

    async fn on_stream_removed(&self, stream: &Value) {
        self.record(ServerEvent::StreamRemoved(stream.clone())).await;
    }

    async fn on_stream_updated(&self, stream: &Value) {
        self.record(ServerEvent::StreamUpdated(stream.clone())).await;
    }

    async fn on_stream_error(&self, error: &Value) {
        self.record(ServerEvent::StreamError(error.clone())).await;
    }

    async fn on_custom_message(&self, from: &str, message: &str) {
        self.record(ServerEvent::CustomMessage {
            from: from.to_owned(),
            message: message.to_owned(),
        })
        .await;
    }

    async fn on_signaling_message(&self, message: &Value) {
        self.record(ServerEvent::SignalingMessage(message.clone()))
            .await;
    }

    async fn on_server_disconnected(&self) {
        self.record(ServerEvent::ServerDisconnected).await;
    }
}
