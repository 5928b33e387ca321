mod message;
mod room;
mod sdp;
mod stream;
mod user;

pub use message::{ControlMessage, CustomMessage, StreamEvent};
pub use room::{ConnectResponse, RoomInfo};
pub use sdp::{SdpAck, SessionDescription};
pub use stream::StreamId;
pub use user::User;
