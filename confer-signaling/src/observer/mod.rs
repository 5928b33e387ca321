mod observer_id;
mod observer_registry;
mod server_event;
mod signaling_observer;

pub use observer_id::ObserverId;
pub use observer_registry::ObserverRegistry;
pub use server_event::ServerEvent;
pub use signaling_observer::SignalingChannelObserver;
