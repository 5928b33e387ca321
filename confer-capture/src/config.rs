use crate::frame::FrameGeometry;
use confer_core::{ConferenceError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Where the file-backed generator looks when nothing else is configured.
pub const DEFAULT_SOURCE_PATH: &str = "./source.yuv";

/// Settings for a [`FileFrameGenerator`](crate::FileFrameGenerator).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaptureConfig {
    pub source_path: PathBuf,
    pub width: u32,
    pub height: u32,
    /// Nominal rate reported to consumers; frames are not paced.
    pub fps: u32,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            source_path: PathBuf::from(DEFAULT_SOURCE_PATH),
            width: 640,
            height: 480,
            fps: 30,
        }
    }
}

impl CaptureConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| ConferenceError::resource_unavailable(path.display().to_string(), e))?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(ConferenceError::InvalidConfig(format!(
                "frame dimensions must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }
        Ok(())
    }

    pub fn geometry(&self) -> FrameGeometry {
        FrameGeometry::new(self.width, self.height)
    }
}
