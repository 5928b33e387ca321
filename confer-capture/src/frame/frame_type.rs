use serde::{Deserialize, Serialize};

/// Pixel layout of generated frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum VideoFrameType {
    /// YUV 4:2:0 planar: a full-resolution Y plane followed by quarter-size U
    /// and V planes.
    #[default]
    I420,
}
