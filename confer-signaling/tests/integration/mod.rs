pub mod connection_tests;
pub mod messaging_tests;

use std::sync::Arc;
use tracing::Level;

use confer_signaling::SignalingChannel;

use crate::utils::MockTransport;

pub const TEST_TOKEN: &str = "eyJ0b2tlbiI6InRlc3QifQ==";

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_test_writer()
        .try_init();
}

pub fn create_test_channel() -> (Arc<SignalingChannel<MockTransport>>, MockTransport) {
    let transport = MockTransport::new();
    let channel = Arc::new(SignalingChannel::new(transport.clone()));
    (channel, transport)
}

pub async fn create_connected_channel() -> (Arc<SignalingChannel<MockTransport>>, MockTransport) {
    let (channel, transport) = create_test_channel();
    channel
        .connect(TEST_TOKEN)
        .await
        .expect("Failed to connect test channel");
    (channel, transport)
}
