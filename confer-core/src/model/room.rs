use crate::model::user::User;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Conference state document returned by a successful connect.
///
/// The schema belongs to the server; only the `id` key is interpreted here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomInfo(pub Value);

impl RoomInfo {
    pub fn id(&self) -> Option<&str> {
        self.0.get("id").and_then(Value::as_str)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }
}

impl Default for RoomInfo {
    fn default() -> Self {
        Self(Value::Object(Map::new()))
    }
}

impl From<Value> for RoomInfo {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// Payload of a successful connect: the room and who is already in it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConnectResponse {
    pub room_info: RoomInfo,
    pub users: Vec<User>,
}
