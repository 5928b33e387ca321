use std::fmt;

/// Lifecycle of a signaling channel.
///
/// `Disconnected` → `Connecting` → `Connected` → `Disconnected`. A failed
/// connect goes straight back to `Disconnected`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ChannelState {
    #[default]
    Disconnected,
    Connecting,
    Connected,
}

impl ChannelState {
    pub fn is_connected(self) -> bool {
        self == ChannelState::Connected
    }
}

impl fmt::Display for ChannelState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ChannelState::Disconnected => "disconnected",
            ChannelState::Connecting => "connecting",
            ChannelState::Connected => "connected",
        };
        f.write_str(name)
    }
}
