use crate::observer::{ObserverId, ServerEvent, SignalingChannelObserver};
use dashmap::DashMap;
use std::sync::Arc;
use tracing::debug;

/// Concurrent set of registered observers.
#[derive(Default)]
pub struct ObserverRegistry {
    observers: DashMap<ObserverId, Arc<dyn SignalingChannelObserver>>,
}

impl ObserverRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&self, observer: Arc<dyn SignalingChannelObserver>) -> ObserverId {
        let id = ObserverId::new();
        self.observers.insert(id, observer);
        debug!("Observer {} registered", id);
        id
    }

    pub fn remove(&self, id: &ObserverId) -> bool {
        let removed = self.observers.remove(id).is_some();
        if removed {
            debug!("Observer {} removed", id);
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    /// Deliver `event` to every observer registered at the time of the call.
    pub async fn notify(&self, event: &ServerEvent) {
        // Shard locks must not be held across the awaits below.
        let observers: Vec<_> = self
            .observers
            .iter()
            .map(|entry| Arc::clone(entry.value()))
            .collect();

        for observer in observers {
            match event {
                ServerEvent::UserJoined(user) => observer.on_user_joined(user).await,
                ServerEvent::UserLeft(user) => observer.on_user_left(user).await,
                ServerEvent::StreamAdded(stream) => observer.on_stream_added(stream).await,
                ServerEvent::StreamRemoved(stream) => observer.on_stream_removed(stream).await,
                ServerEvent::StreamUpdated(stream) => observer.on_stream_updated(stream).await,
                ServerEvent::StreamError(error) => observer.on_stream_error(error).await,
                ServerEvent::CustomMessage { from, message } => {
                    observer.on_custom_message(from, message).await
                }
                ServerEvent::SignalingMessage(message) => {
                    observer.on_signaling_message(message).await
                }
                ServerEvent::ServerDisconnected => observer.on_server_disconnected().await,
            }
        }
    }
}
