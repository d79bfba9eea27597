use crate::core::fetch::fetch_entity;
use crate::core::{Aggregator, ConfigProvider, Fetcher};
use crate::domain::model::{Film, Homeworld, Person, PersonInfo};
use crate::utils::error::{FetchError, FetchTarget};
use async_trait::async_trait;
use futures::future::try_join_all;

/// Root, then homeworld, then all films joined, as straight-line awaits.
pub struct SequentialAggregator<F: Fetcher> {
    fetcher: F,
    root_url: String,
}

impl<F: Fetcher> SequentialAggregator<F> {
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
impl<F: Fetcher> Aggregator for SequentialAggregator<F> {
    fn name(&self) -> &'static str {
        "sequential"
    }

    async fn fetch_aggregate(&self) -> Result<PersonInfo, FetchError> {
        let person: Person =
            fetch_entity(&self.fetcher, FetchTarget::Person, &self.root_url).await?;

        let homeworld: Homeworld =
            fetch_entity(&self.fetcher, FetchTarget::Homeworld, &person.homeworld).await?;

        let requests: Vec<_> = person
            .films
            .iter()
            .enumerate()
            .map(|(index, url)| {
                fetch_entity::<Film, F>(&self.fetcher, FetchTarget::Film { index }, url)
            })
            .collect();
        let films = try_join_all(requests).await?;

        tracing::debug!(
            "{}: resolved homeworld and {} films",
            person.name,
            films.len()
        );

        Ok(PersonInfo::assemble(person, homeworld, films))
    }
}
