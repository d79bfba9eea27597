use crate::core::{Aggregator, PersonInfo};
use crate::utils::error::Result;
use std::time::Instant;

pub struct AggregateEngine {
    aggregator: Box<dyn Aggregator>,
}

impl AggregateEngine {
    pub fn new(aggregator: Box<dyn Aggregator>) -> Self {
        Self { aggregator }
    }

    pub fn variant(&self) -> &'static str {
        self.aggregator.name()
    }

    pub async fn run(&self) -> Result<PersonInfo> {
        let started = Instant::now();
        tracing::info!("Starting aggregation ({} variant)", self.variant());

        match self.aggregator.fetch_aggregate().await {
            Ok(info) => {
                tracing::info!(
                    "✅ Aggregated {} with {} films in {:?}",
                    info.name,
                    info.films.len(),
                    started.elapsed()
                );
                Ok(info)
            }
            Err(e) => {
                tracing::error!(
                    "❌ Aggregation failed at {} request ({}): {}",
                    e.target,
                    e.url,
                    e
                );
                Err(e.into())
            }
        }
    }
}
