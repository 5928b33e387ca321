mod channel_state;
mod connect_guard;
mod signaling_channel;

pub use channel_state::ChannelState;
pub use signaling_channel::SignalingChannel;
