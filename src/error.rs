//! Configuration error types
//!
//! The simulation itself cannot fail; only loading tuning or host settings
//! from disk can. Hosts log these and fall back to defaults.

use std::fmt;
use std::path::PathBuf;

/// Error raised while loading or validating a configuration file
#[derive(Debug)]
pub enum ConfigError {
    /// The file could not be read.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The file is not valid JSON for the target type.
    Parse(serde_json::Error),

    /// A value parsed fine but is outside the range the simulation accepts.
    InvalidValue {
        /// Field name as it appears in the JSON file.
        name: &'static str,
        value: f32,
        /// Human-readable description of the accepted range.
        expected: &'static str,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io { path, source } => {
                write!(f, "failed to read '{}': {}", path.display(), source)
            }
            ConfigError::Parse(err) => write!(f, "invalid configuration JSON: {}", err),
            ConfigError::InvalidValue {
                name,
                value,
                expected,
            } => write!(f, "'{}' = {} is outside the accepted range {}", name, value, expected),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io { source, .. } => Some(source),
            ConfigError::Parse(err) => Some(err),
            ConfigError::InvalidValue { .. } => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err)
    }
}

/// Convenience alias: a `Result` using `ConfigError` as the error type.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Reject values that are not strictly positive (or not finite)
pub(crate) fn require_positive(name: &'static str, value: f32) -> ConfigResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue {
            name,
            value,
            expected: "(0, ∞)",
        })
    }
}

/// Reject negative (or non-finite) values
pub(crate) fn require_non_negative(name: &'static str, value: f32) -> ConfigResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue {
            name,
            value,
            expected: "[0, ∞)",
        })
    }
}
