pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::ReqwestFetcher;
pub use config::{AggregatorConfig, Variant};
pub use core::{
    chained::ChainedAggregator, engine::AggregateEngine, reactive::ReactiveAggregator,
    sequential::SequentialAggregator, Aggregator, ConfigProvider, Fetcher, Film, PersonInfo,
};
pub use utils::error::{FetchError, FetchTarget, Result, SwapiError};
