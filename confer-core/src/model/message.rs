use crate::model::stream::StreamId;
use serde::{Deserialize, Serialize};

/// A named event about a stream, e.g. `"unmix"` or `"stats"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamEvent {
    pub event: String,
    pub stream_id: StreamId,
}

/// A control action applied to a stream, e.g. `"audio-out-off"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlMessage {
    pub stream_id: StreamId,
    pub action: String,
}

/// Free-form text addressed to another participant (or `"all"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomMessage {
    pub message: String,
    pub receiver: String,
}
