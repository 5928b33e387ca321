use crate::channel::ChannelState;
use crate::channel::connect_guard::ConnectGuard;
use crate::config::SignalingConfig;
use crate::observer::{ObserverId, ObserverRegistry, ServerEvent, SignalingChannelObserver};
use crate::transport::SignalingTransport;
use confer_core::{
    ConferenceError, ConnectResponse, ControlMessage, CustomMessage, Result, SdpAck,
    SessionDescription, StreamEvent, StreamId,
};
use serde_json::Value;
use std::sync::Arc;
use std::sync::atomic::AtomicU64;
use tokio::sync::{mpsc, watch};
use tracing::{debug, error, info, warn};

/// Client side of a conference signaling session.
///
/// Wraps a [`SignalingTransport`] and enforces the channel lifecycle: only one
/// connect at a time, sends only while connected, and a disconnect that always
/// tears the local state down. Every operation resolves exactly once, with the
/// success payload or a [`ConferenceError`].
///
/// Share it between tasks behind an `Arc`; all methods take `&self`.
pub struct SignalingChannel<T: SignalingTransport> {
    transport: T,
    state: watch::Sender<ChannelState>,
    attempts: AtomicU64,
    observers: ObserverRegistry,
    config: SignalingConfig,
}

impl<T: SignalingTransport> SignalingChannel<T> {
    pub fn new(transport: T) -> Self {
        Self::with_config(transport, SignalingConfig::default())
    }

    pub fn with_config(transport: T, config: SignalingConfig) -> Self {
        let (state, _) = watch::channel(ChannelState::Disconnected);

        Self {
            transport,
            state,
            attempts: AtomicU64::new(0),
            observers: ObserverRegistry::new(),
            config,
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn config(&self) -> &SignalingConfig {
        &self.config
    }

    pub fn state(&self) -> ChannelState {
        *self.state.borrow()
    }

    /// Subscribe to state transitions.
    pub fn watch_state(&self) -> watch::Receiver<ChannelState> {
        self.state.subscribe()
    }

    pub fn add_observer(&self, observer: Arc<dyn SignalingChannelObserver>) -> ObserverId {
        self.observers.add(observer)
    }

    pub fn remove_observer(&self, id: &ObserverId) -> bool {
        self.observers.remove(id)
    }

    /// Join the conference. Only valid from `Disconnected`.
    pub async fn connect(&self, token: &str) -> Result<ConnectResponse> {
        let guard = match ConnectGuard::begin(&self.state, &self.attempts) {
            Ok(guard) => guard,
            Err(state) => {
                warn!("Rejected connect while {}", state);
                return Err(ConferenceError::invalid_state("connect", state));
            }
        };

        info!("Connecting to conference");

        match self.transport.connect(token).await {
            Ok(response) => {
                if !guard.finish(ChannelState::Connected) {
                    warn!("Connect completed after the channel was torn down");
                    self.discard_session().await;
                    return Err(ConferenceError::invalid_state(
                        "complete connect",
                        ChannelState::Disconnected,
                    ));
                }
                info!(
                    "Connected to room {:?} with {} participant(s)",
                    response.room_info.id(),
                    response.users.len()
                );
                Ok(response)
            }
            Err(e) => {
                guard.finish(ChannelState::Disconnected);
                error!("Connect failed: {}", e);
                Err(e)
            }
        }
    }

    /// Send an SDP offer/answer. `is_publish` selects publication vs subscription.
    pub async fn send_sdp(
        &self,
        options: Value,
        sdp: impl Into<String>,
        is_publish: bool,
    ) -> Result<SdpAck> {
        self.ensure_connected("send sdp")?;

        let description = SessionDescription::new(options, sdp, is_publish);
        debug!("Sending SDP (publish: {})", is_publish);

        let ack = self
            .transport
            .send_sdp(description)
            .await
            .inspect_err(|e| error!("Failed to send SDP: {}", e))?;

        debug!("SDP acknowledged for stream {}", ack.stream_id);
        Ok(ack)
    }

    pub async fn send_stream_event(&self, event: &str, stream_id: &StreamId) -> Result<()> {
        self.ensure_connected("send stream event")?;

        debug!("Sending stream event '{}' for {}", event, stream_id);
        let event = StreamEvent {
            event: event.to_owned(),
            stream_id: stream_id.clone(),
        };

        self.transport
            .send_stream_event(event)
            .await
            .inspect_err(|e| error!("Failed to send stream event: {}", e))
    }

    pub async fn send_custom_message(&self, message: &str, receiver: &str) -> Result<()> {
        self.ensure_connected("send custom message")?;

        debug!("Sending custom message to {}", receiver);
        let message = CustomMessage {
            message: message.to_owned(),
            receiver: receiver.to_owned(),
        };

        self.transport
            .send_custom_message(message)
            .await
            .inspect_err(|e| error!("Failed to send custom message: {}", e))
    }

    pub async fn send_stream_control_message(
        &self,
        stream_id: &StreamId,
        action: &str,
    ) -> Result<()> {
        self.ensure_connected("send stream control message")?;

        debug!("Sending control '{}' for {}", action, stream_id);
        let control = ControlMessage {
            stream_id: stream_id.clone(),
            action: action.to_owned(),
        };

        self.transport
            .send_stream_control(control)
            .await
            .inspect_err(|e| error!("Failed to send control message: {}", e))
    }

    /// Leave the conference.
    ///
    /// The channel is `Disconnected` when this returns, whatever the transport
    /// reports. An `Err` only means the server-side teardown did not complete.
    pub async fn disconnect(&self) -> Result<()> {
        let mut previous = ChannelState::Disconnected;
        let torn_down = self.state.send_if_modified(|current| {
            previous = *current;
            if *current == ChannelState::Disconnected {
                return false;
            }
            *current = ChannelState::Disconnected;
            true
        });

        if !torn_down {
            warn!("Rejected disconnect while {}", previous);
            return Err(ConferenceError::invalid_state(
                "disconnect",
                ChannelState::Disconnected,
            ));
        }

        info!("Disconnecting (was {})", previous);

        self.transport
            .disconnect()
            .await
            .inspect_err(|e| warn!("Graceful teardown did not complete: {}", e))
    }

    /// Build the queue a transport uses to push server events into `run_events`.
    pub fn event_queue(&self) -> (mpsc::Sender<ServerEvent>, mpsc::Receiver<ServerEvent>) {
        mpsc::channel(self.config.event_queue_capacity.max(1))
    }

    /// Deliver one server-pushed event to every observer.
    pub async fn dispatch(&self, event: ServerEvent) {
        debug!("Dispatching server event '{}'", event.name());

        if matches!(event, ServerEvent::ServerDisconnected) {
            let dropped = self.state.send_if_modified(|current| {
                let was_live = *current != ChannelState::Disconnected;
                *current = ChannelState::Disconnected;
                was_live
            });
            if dropped {
                warn!("Server closed the session");
            }
        }

        self.observers.notify(&event).await;
    }

    /// Drain `events` until every sender is dropped.
    pub async fn run_events(&self, mut events: mpsc::Receiver<ServerEvent>) {
        info!("Signaling event loop started");

        while let Some(event) = events.recv().await {
            self.dispatch(event).await;
        }

        info!("Signaling event loop finished");
    }

    /// Close a session the transport opened for a connect that lost to
    /// `disconnect`. Skipped once a newer connect owns the transport.
    async fn discard_session(&self) {
        if self.state() != ChannelState::Disconnected {
            debug!("Newer connect in progress, keeping transport session");
            return;
        }
        if let Err(e) = self.transport.disconnect().await {
            warn!("Failed to close stale session: {}", e);
        }
    }

    fn ensure_connected(&self, operation: &'static str) -> Result<()> {
        let state = self.state();
        if state.is_connected() {
            return Ok(());
        }
        warn!("Rejected {} while {}", operation, state);
        Err(ConferenceError::invalid_state(operation, state))
    }
}
