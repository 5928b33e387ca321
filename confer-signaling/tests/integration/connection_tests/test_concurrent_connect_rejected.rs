use confer_core::ErrorKind;
use confer_signaling::ChannelState;

use crate::integration::{TEST_TOKEN, create_test_channel, init_tracing};

#[tokio::test]
async fn test_second_connect_while_connecting_never_reaches_transport() {
    init_tracing();

    let (channel, transport) = create_test_channel();
    transport.hold_connect();

    let first = tokio::spawn({
        let channel = channel.clone();
        async move { channel.connect(TEST_TOKEN).await }
    });

    channel
        .watch_state()
        .wait_for(|s| *s == ChannelState::Connecting)
        .await
        .expect("State channel closed");

    let err = channel.connect("another-token").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidState);
    assert_eq!(err.to_string(), "Cannot connect while connecting");
    assert_eq!(transport.call_count().await, 1);

    transport.release_connect();
    first
        .await
        .unwrap()
        .expect("First connect should still succeed");
    assert_eq!(channel.state(), ChannelState::Connected);
}
