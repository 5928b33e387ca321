use confer_core::{ConferenceError, ErrorKind};
use confer_signaling::ChannelState;

use crate::integration::{TEST_TOKEN, create_connected_channel, create_test_channel, init_tracing};
use crate::utils::{DISCONNECT, TransportCall};

#[tokio::test]
async fn test_disconnect_failure_still_tears_down() {
    init_tracing();

    let (channel, transport) = create_connected_channel().await;
    transport
        .fail_on(DISCONNECT, ConferenceError::transport("socket already closed"))
        .await;

    let err = channel.disconnect().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Transport);
    assert_eq!(channel.state(), ChannelState::Disconnected);
    assert_eq!(transport.calls().await.last(), Some(&TransportCall::Disconnect));
}

#[tokio::test]
async fn test_disconnect_while_disconnected_is_rejected_locally() {
    init_tracing();

    let (channel, transport) = create_test_channel();

    let err = channel.disconnect().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidState);
    assert_eq!(transport.call_count().await, 0);
}

#[tokio::test]
async fn test_disconnect_while_connecting_wins_over_late_connect() {
    init_tracing();

    let (channel, transport) = create_test_channel();
    transport.hold_connect();

    let pending = tokio::spawn({
        let channel = channel.clone();
        async move { channel.connect(TEST_TOKEN).await }
    });

    channel
        .watch_state()
        .wait_for(|s| *s == ChannelState::Connecting)
        .await
        .expect("State channel closed");

    channel.disconnect().await.expect("Disconnect failed");
    assert_eq!(channel.state(), ChannelState::Disconnected);

    transport.release_connect();
    let err = pending.await.unwrap().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidState);
    assert_eq!(channel.state(), ChannelState::Disconnected);

    // The session opened by the late connect is closed again.
    assert_eq!(
        transport.calls().await,
        vec![
            TransportCall::Connect(TEST_TOKEN.to_owned()),
            TransportCall::Disconnect,
            TransportCall::Disconnect,
        ]
    );
}
