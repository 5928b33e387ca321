//! Raw video frame sources for capture pipelines.
//!
//! [`FileFrameGenerator`] replays an I420 file as an endless camera feed,
//! rewinding to the first frame when the file runs out.

mod config;
mod frame;
mod generator;

pub use config::*;
pub use frame::*;
pub use generator::*;
