use thiserror::Error;

/// Errors raised when a face selection arrives from outside the engine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FaceError {
    /// Numeric face index outside `0..6`
    #[error("face index {0} is out of range (expected 0..6)")]
    IndexOutOfRange(u8),
    /// Face name that matches neither an axis nor a color
    #[error("unknown face name: {0:?}")]
    UnknownName(String),
}
