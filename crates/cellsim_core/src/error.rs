//! Error types for cellsim_core.
//!
//! The engine itself never fails at runtime: out-of-bounds spawns and blocked
//! births are defined no-ops. These errors cover the configuration boundary.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimError {
    /// File system errors
    #[error("File system error: {0}")]
    FileSystem(#[from] std::io::Error),

    /// TOML parsing errors
    #[error("Config parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Unrecognised cell kind name
    #[error("Unknown cell kind: {0}")]
    UnknownKind(String),

    /// Malformed spawn request text
    #[error("Invalid spawn request '{0}': expected kind:x:y")]
    InvalidSpawn(String),
}

pub type Result<T> = std::result::Result<T, SimError>;

impl SimError {
    #[must_use]
    pub fn validation<S: Into<String>>(msg: S) -> Self {
        Self::Validation(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SimError::validation("width must be positive");
        assert_eq!(err.to_string(), "Validation error: width must be positive");
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: SimError = io_err.into();
        assert!(matches!(err, SimError::FileSystem(_)));
    }
}
