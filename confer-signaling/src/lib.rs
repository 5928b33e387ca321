mod channel;
mod config;
mod observer;
mod transport;

pub use channel::*;
pub use config::*;
pub use observer::*;
pub use transport::*;
