use crate::config::toml_config::TomlConfig;
use crate::config::{AggregatorConfig, Variant};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "swapi-fanout")]
#[command(about = "Fetch a SWAPI person with its homeworld and films as one JSON document")]
pub struct CliConfig {
    #[arg(long, help = "TOML config file; CLI flags override its values")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "API base URL [default: https://swapi.dev/api]")]
    pub base_url: Option<String>,

    #[arg(long, help = "Person id under {base_url}/people/ [default: 1]")]
    pub person_id: Option<u32>,

    #[arg(long, value_enum, help = "Aggregation idiom [default: sequential]")]
    pub variant: Option<Variant>,

    #[arg(long, help = "Pretty-print the JSON result")]
    pub pretty: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Defaults, then the config file, then flags.
    pub fn resolve(&self) -> Result<AggregatorConfig> {
        let mut config = AggregatorConfig::default();

        if let Some(path) = &self.config {
            TomlConfig::from_file(path)?.apply_to(&mut config);
        }

        if let Some(base_url) = &self.base_url {
            config.base_url = base_url.clone();
        }
        if let Some(person_id) = self.person_id {
            config.person_id = person_id;
        }
        if let Some(variant) = self.variant {
            config.variant = variant;
        }
        if self.pretty {
            config.pretty = true;
        }

        config.validate()?;
        Ok(config)
    }
}
