//! Scripted input for headless runs
//!
//! A session is a list of frames. Each frame names the keys held during it and
//! an optional mouse drag, and may repeat for several ticks:
//!
//! ```toml
//! tick_seconds = 0.01
//!
//! [[frames]]
//! keys = ["B", "Right"]
//! repeat = 100
//!
//! [[frames]]          # release everything: commits the turn
//!
//! [[frames]]
//! drag = [12.0, -4.0]
//! repeat = 5
//! ```

use crate::error::DriverError;
use serde::Deserialize;
use std::path::Path;

fn default_tick_seconds() -> f32 {
    1.0 / 60.0
}

fn default_repeat() -> u32 {
    1
}

#[derive(Debug, Clone, Deserialize)]
pub struct Session {
    /// Simulated time step per tick
    #[serde(default = "default_tick_seconds")]
    pub tick_seconds: f32,
    #[serde(default)]
    pub frames: Vec<SessionFrame>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SessionFrame {
    /// Key names held for the whole frame
    #[serde(default)]
    pub keys: Vec<String>,
    /// Mouse drag per tick in pixels, screen y down
    #[serde(default)]
    pub drag: Option<[f32; 2]>,
    #[serde(default = "default_repeat")]
    pub repeat: u32,
}

impl Session {
    pub fn parse(source: &str, path: &Path) -> Result<Self, DriverError> {
        let session: Session = toml::from_str(source).map_err(|source| DriverError::Toml {
            path: path.to_path_buf(),
            source,
        })?;
        session.validate(path)?;
        Ok(session)
    }

    pub fn load(path: &Path) -> Result<Self, DriverError> {
        let source = std::fs::read_to_string(path).map_err(|source| DriverError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&source, path)
    }

    fn validate(&self, path: &Path) -> Result<(), DriverError> {
        if !(self.tick_seconds.is_finite() && self.tick_seconds > 0.0) {
            return Err(DriverError::InvalidSession {
                path: path.to_path_buf(),
                reason: format!("tick_seconds must be positive, got {}", self.tick_seconds),
            });
        }
        if let Some(i) = self
            .frames
            .iter()
            .position(|f| f.drag.is_some_and(|[dx, dy]| !(dx.is_finite() && dy.is_finite())))
        {
            return Err(DriverError::InvalidSession {
                path: path.to_path_buf(),
                reason: format!("frame {} has a non-finite drag", i),
            });
        }
        Ok(())
    }

    /// Number of ticks the session runs for
    pub fn tick_count(&self) -> u64 {
        self.frames.iter().map(|f| u64::from(f.repeat)).sum()
    }

    /// Frames expanded by their repeat counts
    pub fn ticks(&self) -> impl Iterator<Item = &SessionFrame> {
        self.frames
            .iter()
            .flat_map(|frame| std::iter::repeat(frame).take(frame.repeat as usize))
    }
}
