use confer_core::{ConferenceError, Result};
use serde::{Deserialize, Serialize};

/// Settings for a [`SignalingChannel`](crate::SignalingChannel).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignalingConfig {
    /// Capacity of the server-push queue built by `event_queue()`.
    pub event_queue_capacity: usize,
}

impl Default for SignalingConfig {
    fn default() -> Self {
        Self {
            event_queue_capacity: 256,
        }
    }
}

impl SignalingConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.event_queue_capacity == 0 {
            return Err(ConferenceError::InvalidConfig(
                "event_queue_capacity must be greater than zero".to_owned(),
            ));
        }
        Ok(())
    }
}
