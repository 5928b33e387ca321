use async_trait::async_trait;
use confer_core::{
    ConnectResponse, ControlMessage, CustomMessage, Result, SdpAck, SessionDescription,
    StreamEvent,
};

/// Wire-level half of a signaling channel, implemented by whatever talks to the
/// conference server (WebSocket, Socket.IO, HTTP...).
///
/// Implementations only move messages. [`SignalingChannel`](crate::SignalingChannel)
/// decides whether a call may reach the transport at all, so none of these methods
/// is ever invoked while the channel is in the wrong state.
///
/// Failures should be reported as [`ConferenceError::Transport`](confer_core::ConferenceError::Transport);
/// whatever is returned is handed to the caller unchanged.
#[async_trait]
pub trait SignalingTransport: Send + Sync + 'static {
    /// Join the conference identified by `token`.
    async fn connect(&self, token: &str) -> Result<ConnectResponse>;

    /// Send an SDP offer/answer and return the server's acknowledgement.
    async fn send_sdp(&self, description: SessionDescription) -> Result<SdpAck>;

    async fn send_stream_event(&self, event: StreamEvent) -> Result<()>;

    async fn send_custom_message(&self, message: CustomMessage) -> Result<()>;

    async fn send_stream_control(&self, control: ControlMessage) -> Result<()>;

    /// Leave the conference. The local channel is already torn down when this
    /// is called. It is also called when a `connect` succeeds after the channel
    /// was disconnected, to close the session that connect opened.
    async fn disconnect(&self) -> Result<()>;
}
