mod file_frame_generator;
mod frame_generator;

pub use file_frame_generator::FileFrameGenerator;
pub use frame_generator::VideoFrameGenerator;
