use async_trait::async_trait;
use confer_core::User;
use serde_json::Value;

/// Listener for server-pushed events. Every method defaults to a no-op, so an
/// observer only overrides what it cares about.
#[async_trait]
pub trait SignalingChannelObserver: Send + Sync + 'static {
    async fn on_user_joined(&self, _user: &User) {}

    async fn on_user_left(&self, _user: &User) {}

    async fn on_stream_added(&self, _stream: &Value) {}

    async fn on_stream_removed(&self, _stream: &Value) {}

    async fn on_stream_updated(&self, _stream: &Value) {}

    async fn on_stream_error(&self, _error: &Value) {}

    async fn on_custom_message(&self, _from: &str, _message: &str) {}

    async fn on_signaling_message(&self, _message: &Value) {}

    /// Called after the channel has already moved to `Disconnected`.
    async fn on_server_disconnected(&self) {}
}
