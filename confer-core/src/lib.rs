pub mod error;
pub mod model;

pub use error::{ConferenceError, ErrorKind, Result};
pub use model::*;
