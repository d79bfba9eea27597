use crate::core::fetch::fetch_entity;
use crate::core::{Aggregator, ConfigProvider, Fetcher};
use crate::domain::model::{Film, Homeworld, Person, PersonInfo};
use crate::utils::error::{FetchError, FetchTarget};
use async_trait::async_trait;
use futures::future::try_join_all;
use futures::TryFutureExt;

/// Dependent requests are issued from the continuation of the root request.
pub struct ChainedAggregator<F: Fetcher> {
    fetcher: F,
    root_url: String,
}

impl<F: Fetcher> ChainedAggregator<F> {
    pub fn new<C: ConfigProvider>(fetcher: F, config: &C) -> Self {
        Self::with_root_url(fetcher, config.root_url())
    }

    pub fn with_root_url(fetcher: F, root_url: impl Into<String>) -> Self {
        Self {
            fetcher,
            root_url: root_url.into(),
        }
    }
}

#[async_trait]
impl<F: Fetcher> Aggregator for ChainedAggregator<F> {
    fn name(&self) -> &'static str {
        "chained"
    }

    async fn fetch_aggregate(&self) -> Result<PersonInfo, FetchError> {
        let fetcher = &self.fetcher;

        fetch_entity::<Person, F>(fetcher, FetchTarget::Person, &self.root_url)
            .and_then(|person| async move {
                let homeworld: Homeworld =
                    fetch_entity(fetcher, FetchTarget::Homeworld, &person.homeworld).await?;

                let requests: Vec<_> = person
                    .films
                    .iter()
                    .enumerate()
                    .map(|(index, url)| {
                        fetch_entity::<Film, F>(fetcher, FetchTarget::Film { index }, url)
                    })
                    .collect();
                let films = try_join_all(requests).await?;

                Ok::<_, FetchError>(PersonInfo::assemble(person, homeworld, films))
            })
            .await
    }
}
