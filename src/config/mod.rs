#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_url, Validate,
};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_BASE_URL: &str = "https://swapi.dev/api";
pub const DEFAULT_PERSON_ID: u32 = 1;

/// Which aggregation idiom to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Chained,
    #[default]
    Sequential,
    Reactive,
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variant::Chained => write!(f, "chained"),
            Variant::Sequential => write!(f, "sequential"),
            Variant::Reactive => write!(f, "reactive"),
        }
    }
}

/// Resolved settings after defaults, config file and CLI flags are layered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregatorConfig {
    pub base_url: String,
    pub person_id: u32,
    pub variant: Variant,
    pub pretty: bool,
}

impl Default for AggregatorConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            person_id: DEFAULT_PERSON_ID,
            variant: Variant::default(),
            pretty: false,
        }
    }
}

impl AggregatorConfig {
    pub fn new(base_url: impl Into<String>, person_id: u32) -> Self {
        Self {
            base_url: base_url.into(),
            person_id,
            ..Self::default()
        }
    }
}

impl ConfigProvider for AggregatorConfig {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn person_id(&self) -> u32 {
        self.person_id
    }
}

impl Validate for AggregatorConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("base_url", &self.base_url)?;
        validate_url("base_url", &self.base_url)?;
        validate_positive_number("person_id", self.person_id, 1)?;
        Ok(())
    }
}
