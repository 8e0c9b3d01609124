use std::path::PathBuf;
use thiserror::Error as ThisError;

///
/// ConfigError
///

#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("failed to read settings from {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid settings file: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("option '{key}' must be 'true' or 'false', got '{value}'")]
    InvalidBool { key: String, value: String },

    #[error("option '{key}' is invalid: {reason}")]
    Invalid { key: String, reason: String },

    #[error("class and interface names would both be '{prefix}<Name>{suffix}'")]
    NameCollision { prefix: String, suffix: String },
}

impl ConfigError {
    pub(crate) fn invalid(key: &str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            key: key.to_string(),
            reason: reason.into(),
        }
    }
}
