mod frame_geometry;
mod frame_type;

pub use frame_geometry::FrameGeometry;
pub use frame_type::VideoFrameType;
