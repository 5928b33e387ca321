
pub use yuv_fixtures::*;
