use std::fmt;
use thiserror::Error;

/// Which request of the aggregation produced a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchTarget {
    Person,
    Homeworld,
    Film { index: usize },
}

impl fmt::Display for FetchTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchTarget::Person => write!(f, "person"),
            FetchTarget::Homeworld => write!(f, "homeworld"),
            FetchTarget::Film { index } => write!(f, "film[{}]", index),
        }
    }
}

/// A failed request. Displays as the originating message, unaltered.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct FetchError {
    pub target: FetchTarget,
    pub url: String,
    pub message: String,
}

impl FetchError {
    pub fn new(target: FetchTarget, url: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            target,
            url: url.into(),
            message: message.into(),
        }
    }
}

#[derive(Error, Debug)]
pub enum SwapiError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl SwapiError {
    pub fn exit_code(&self) -> i32 {
        match self {
            SwapiError::Fetch(_) => 2,
            _ => 1,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SwapiError::Fetch(e) => format!("Request for {} ({}) failed: {}", e.target, e.url, e),
            SwapiError::IoError(_) | SwapiError::TomlError(_) => {
                format!("Could not read configuration: {}", self)
            }
            SwapiError::SerializationError(e) => format!("Could not encode result: {}", e),
            SwapiError::InvalidConfigValueError { .. } => self.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SwapiError>;
