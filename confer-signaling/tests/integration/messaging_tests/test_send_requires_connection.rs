use confer_core::{ErrorKind, StreamId};
use confer_signaling::ChannelState;
use serde_json::json;

use crate::integration::{TEST_TOKEN, create_test_channel, init_tracing};

#[tokio::test]
async fn test_sends_while_disconnected_fail_without_round_trip() {
    init_tracing();

    let (channel, transport) = create_test_channel();
    let stream_id = StreamId::from("stream-1");

    let results = [
        channel
            .send_sdp(json!({}), "v=0", true)
            .await
            .map(|_| ()),
        channel.send_stream_event("stats", &stream_id).await,
        channel.send_custom_message("hello", "all").await,
        channel
            .send_stream_control_message(&stream_id, "audio-out-off")
            .await,
    ];

    for result in results {
        let err = result.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidState);
    }
    assert_eq!(transport.call_count().await, 0);
}

#[tokio::test]
async fn test_sends_while_connecting_fail_without_round_trip() {
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

    let err = channel.send_custom_message("early", "all").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidState);
    assert_eq!(
        err.to_string(),
        "Cannot send custom message while connecting"
    );
    assert_eq!(transport.call_count().await, 1);

    transport.release_connect();
    pending.await.unwrap().expect("Connect failed");
}
