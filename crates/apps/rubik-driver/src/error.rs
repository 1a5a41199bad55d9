use std::path::PathBuf;
use thiserror::Error;

/// Errors emitted while loading driver inputs.
#[derive(Debug, Error)]
pub enum DriverError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid config value {key} = {value}: {reason}")]
    InvalidConfig {
        key: &'static str,
        value: f32,
        reason: &'static str,
    },
    #[error("invalid session {path}: {reason}")]
    InvalidSession { path: PathBuf, reason: String },
    #[error("binding for {action} is empty")]
    EmptyBinding { action: String },
    #[error("key {key:?} is bound to both {first} and {second}")]
    DuplicateBinding {
        key: String,
        first: String,
        second: String,
    },
    #[error("face error: {0}")]
    Face(#[from] rubik::FaceError),
}
