pub use confer_core::{ConferenceError, ErrorKind, Result};

pub mod model {
    pub use confer_core::model::*;
}

#[cfg(feature = "signaling")]
pub mod signaling {
    pub use confer_signaling::*;
}

#[cfg(feature = "capture")]
pub mod capture {
    pub use confer_capture::*;
}
