//! Engine-wide error handling
//!
//! The tick loop itself is total and never fails. Errors only arise at
//! startup (configuration, grid allocation) and at the output boundary
//! (writing frame snapshots).

use std::path::PathBuf;

/// Errors produced by the simulation library
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("Invalid grid dimensions: {width}x{height}")]
    InvalidGridDimensions { width: u32, height: u32 },

    #[error("Invalid configuration value '{field}': {reason}")]
    InvalidConfig { field: String, reason: String },

    #[error("Failed to read config file {path:?}: {error}")]
    ConfigRead { path: PathBuf, error: String },

    #[error("Failed to parse config: {error}")]
    ConfigParse { error: String },

    #[error("Failed to write image {path:?}: {error}")]
    ImageWrite { path: PathBuf, error: String },
}

/// Result alias used across the crate
pub type EngineResult<T> = Result<T, EngineError>;

/// Helper trait to attach a path to I/O failures
pub trait ErrorContext<T> {
    fn config_context(self, path: impl Into<PathBuf>) -> EngineResult<T>;
    fn image_context(self, path: impl Into<PathBuf>) -> EngineResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn config_context(self, path: impl Into<PathBuf>) -> EngineResult<T> {
        self.map_err(|e| EngineError::ConfigRead {
            path: path.into(),
            error: e.to_string(),
        })
    }

    fn image_context(self, path: impl Into<PathBuf>) -> EngineResult<T> {
        self.map_err(|e| EngineError::ImageWrite {
            path: path.into(),
            error: e.to_string(),
        })
    }
}

/// Create an invalid configuration error
pub fn invalid_config(field: &str, reason: impl std::fmt::Display) -> EngineError {
    EngineError::InvalidConfig {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = EngineError::InvalidGridDimensions { width: 0, height: 90 };
        assert_eq!(err.to_string(), "Invalid grid dimensions: 0x90");

        let err = invalid_config("tick_rate", "must be positive");
        assert_eq!(
            err.to_string(),
            "Invalid configuration value 'tick_rate': must be positive"
        );
    }

    #[test]
    fn test_context_wraps_io_error() {
        let io: Result<(), std::io::Error> =
            Err(std::io::Error::new(std::io::ErrorKind::NotFound, "missing"));
        match io.config_context("sim.toml") {
            Err(EngineError::ConfigRead { path, error }) => {
                assert_eq!(path, PathBuf::from("sim.toml"));
                assert!(error.contains("missing"));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
