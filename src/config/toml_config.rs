use crate::config::{AggregatorConfig, Variant};
use crate::utils::error::Result;
use crate::utils::validation::{validate_positive_number, validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// On-disk configuration. Every key is optional; absent keys keep their defaults.
///
/// ```toml
/// [source]
/// base_url = "https://swapi.dev/api"
/// person_id = 1
///
/// [output]
/// variant = "reactive"
/// pretty = true
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub source: Option<SourceConfig>,
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourceConfig {
    pub base_url: Option<String>,
    pub person_id: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub variant: Option<Variant>,
    pub pretty: Option<bool>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        tracing::debug!("Loaded config file {}", path.as_ref().display());
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: TomlConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Overlay the keys present in this file onto `config`.
    pub fn apply_to(&self, config: &mut AggregatorConfig) {
        if let Some(source) = &self.source {
            if let Some(base_url) = &source.base_url {
                config.base_url = base_url.clone();
            }
            if let Some(person_id) = source.person_id {
                config.person_id = person_id;
            }
        }

        if let Some(output) = &self.output {
            if let Some(variant) = output.variant {
                config.variant = variant;
            }
            if let Some(pretty) = output.pretty {
                config.pretty = pretty;
            }
        }
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(source) = &self.source {
            if let Some(base_url) = &source.base_url {
                validate_url("source.base_url", base_url)?;
            }
            if let Some(person_id) = source.person_id {
                validate_positive_number("source.person_id", person_id, 1)?;
            }
        }
        Ok(())
    }
}
