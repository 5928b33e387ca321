use crate::frame::VideoFrameType;
use bytes::Bytes;
use confer_core::Result;

/// A source of raw frames for a capture pipeline, standing in for a camera.
pub trait VideoFrameGenerator: Send {
    /// Bytes in every frame returned by [`generate_next_frame`](Self::generate_next_frame).
    fn frame_size(&self) -> usize;

    fn width(&self) -> u32;

    fn height(&self) -> u32;

    /// Nominal frame rate. Generators do not pace themselves.
    fn fps(&self) -> u32;

    fn frame_type(&self) -> VideoFrameType;

    /// Produce the next frame. On success the buffer is exactly
    /// `frame_size()` bytes long and owned by the caller.
    fn generate_next_frame(&mut self) -> Result<Bytes>;
}
