use crate::error::DriverError;
use rubik::{CubeConfig, Face};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// Configuration loaded from config.toml
#[derive(Debug, Deserialize, Clone, Default)]
pub struct DriverConfig {
    #[serde(default)]
    pub cube: CubeConfig,
    #[serde(default)]
    pub controls: ControlsConfig,
    #[serde(default)]
    pub bindings: BindingsConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ControlsConfig {
    /// Face turn speed while a direction key is held
    pub rotation_speed_degrees: f32,
    /// Orbit speed per pixel of drag
    pub mouse_sensitivity: f32,
    /// Face selected before any key is pressed (axis or color name)
    pub start_face: String,
}

impl ControlsConfig {
    /// Turn speed in radians per second
    pub fn rotation_speed(&self) -> f32 {
        self.rotation_speed_degrees.to_radians()
    }

    pub fn start_face(&self) -> Result<Face, DriverError> {
        Ok(self.start_face.parse::<Face>()?)
    }
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            rotation_speed_degrees: 90.0,
            mouse_sensitivity: 6.0,
            start_face: "blue".to_string(),
        }
    }
}

/// Key names bound to each driver action
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct BindingsConfig {
    pub white: String,
    pub yellow: String,
    pub red: String,
    pub orange: String,
    pub blue: String,
    pub green: String,
    pub clockwise: String,
    pub counter_clockwise: String,
    pub cancel: String,
}

impl Default for BindingsConfig {
    fn default() -> Self {
        Self {
            white: "W".to_string(),
            yellow: "Y".to_string(),
            red: "R".to_string(),
            orange: "O".to_string(),
            blue: "B".to_string(),
            green: "G".to_string(),
            clockwise: "Right".to_string(),
            counter_clockwise: "Left".to_string(),
            cancel: "Escape".to_string(),
        }
    }
}

impl BindingsConfig {
    /// Key bound to selecting `face`
    pub fn face_key(&self, face: Face) -> &str {
        match face {
            Face::PosX => self.blue.as_str(),
            Face::NegX => self.green.as_str(),
            Face::PosY => self.white.as_str(),
            Face::NegY => self.yellow.as_str(),
            Face::PosZ => self.red.as_str(),
            Face::NegZ => self.orange.as_str(),
        }
    }

    /// `(action, key)` pairs for every binding
    pub fn entries(&self) -> Vec<(&'static str, &str)> {
        let mut entries: Vec<(&'static str, &str)> = Face::ALL
            .iter()
            .map(|face| (face.color_name(), self.face_key(*face)))
            .collect();
        entries.push(("clockwise", self.clockwise.as_str()));
        entries.push(("counter_clockwise", self.counter_clockwise.as_str()));
        entries.push(("cancel", self.cancel.as_str()));
        entries
    }

    /// Reject empty keys and keys bound to two actions
    pub fn validate(&self) -> Result<(), DriverError> {
        let mut seen: HashMap<String, &'static str> = HashMap::new();
        for (action, key) in self.entries() {
            let key = normalize_key(key);
            if key.is_empty() {
                return Err(DriverError::EmptyBinding {
                    action: action.to_string(),
                });
            }
            if let Some(first) = seen.insert(key.clone(), action) {
                return Err(DriverError::DuplicateBinding {
                    key,
                    first: first.to_string(),
                    second: action.to_string(),
                });
            }
        }
        Ok(())
    }
}

/// Key names compare case-insensitively
pub fn normalize_key(key: &str) -> String {
    key.trim().to_ascii_lowercase()
}

impl DriverConfig {
    /// Check value ranges and cross-field constraints
    pub fn validate(&self) -> Result<(), DriverError> {
        positive("cube.voxel_spacing", self.cube.voxel_spacing)?;
        positive("cube.voxel_scale", self.cube.voxel_scale)?;
        finite(
            "controls.rotation_speed_degrees",
            self.controls.rotation_speed_degrees,
        )?;
        finite("controls.mouse_sensitivity", self.controls.mouse_sensitivity)?;
        self.bindings.validate()?;
        self.controls.start_face()?;
        Ok(())
    }
}

fn finite(key: &'static str, value: f32) -> Result<(), DriverError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(DriverError::InvalidConfig {
            key,
            value,
            reason: "must be finite",
        })
    }
}

fn positive(key: &'static str, value: f32) -> Result<(), DriverError> {
    finite(key, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(DriverError::InvalidConfig {
            key,
            value,
            reason: "must be positive",
        })
    }
}

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<DriverConfig, DriverError> {
    let config_str = std::fs::read_to_string(path).map_err(|source| DriverError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config: DriverConfig = toml::from_str(&config_str).map_err(|source| DriverError::Toml {
        path: path.to_path_buf(),
        source,
    })?;
    config.validate()?;
    Ok(config)
}

/// Load configuration, falling back to defaults when the file is missing
pub fn load_config_or_default(path: &Path) -> Result<DriverConfig, DriverError> {
    match load_config(path) {
        Ok(config) => Ok(config),
        Err(DriverError::Io { source, .. }) if source.kind() == std::io::ErrorKind::NotFound => {
            tracing::warn!(
                "Config {} not found, using default configuration",
                path.display()
            );
            Ok(DriverConfig::default())
        }
        Err(e) => Err(e),
    }
}
