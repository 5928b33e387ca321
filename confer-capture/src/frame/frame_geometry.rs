use serde::{Deserialize, Serialize};

/// Dimensions of an I420 frame and the byte layout derived from them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FrameGeometry {
    pub width: u32,
    pub height: u32,
}

impl FrameGeometry {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Samples in the Y plane.
    pub fn luma_size(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Samples in each of the U and V planes. Odd dimensions are truncated.
    pub fn chroma_size(&self) -> usize {
        self.luma_size() / 4
    }

    /// `w·h + 2·⌊w·h/4⌋`
    pub fn frame_size(&self) -> usize {
        self.luma_size() + 2 * self.chroma_size()
    }
}
