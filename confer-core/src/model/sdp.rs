use crate::model::stream::StreamId;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An SDP offer or answer on its way to the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionDescription {
    pub sdp: String,
    /// `true` when the description belongs to a publication, `false` for a
    /// subscription.
    pub is_publish: bool,
    pub options: Value,
}

impl SessionDescription {
    pub fn new(options: Value, sdp: impl Into<String>, is_publish: bool) -> Self {
        Self {
            sdp: sdp.into(),
            is_publish,
            options,
        }
    }
}

/// Server acknowledgement of a [`SessionDescription`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SdpAck {
    pub ack: Value,
    pub stream_id: StreamId,
}
