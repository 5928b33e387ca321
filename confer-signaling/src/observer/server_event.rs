use confer_core::User;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Out-of-band notifications pushed by the conference server.
///
/// Stream payloads stay as raw JSON; their schema belongs to the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum ServerEvent {
    UserJoined(User),
    UserLeft(User),
    StreamAdded(Value),
    StreamRemoved(Value),
    StreamUpdated(Value),
    StreamError(Value),
    CustomMessage { from: String, message: String },
    /// SDP/ICE negotiation traffic for a stream (`soac` in some servers).
    SignalingMessage(Value),
    /// The server dropped the session.
    ServerDisconnected,
}

impl ServerEvent {
    pub fn name(&self) -> &'static str {
        match self {
            ServerEvent::UserJoined(_) => "user_joined",
            ServerEvent::UserLeft(_) => "user_left",
            ServerEvent::StreamAdded(_) => "stream_added",
            ServerEvent::StreamRemoved(_) => "stream_removed",
            ServerEvent::StreamUpdated(_) => "stream_updated",
            ServerEvent::StreamError(_) => "stream_error",
            ServerEvent::CustomMessage { .. } => "custom_message",
            ServerEvent::SignalingMessage(_) => "signaling_message",
            ServerEvent::ServerDisconnected => "server_disconnected",
        }
    }
}
