use crate::core::fetch::fetch_owned;
use crate::core::{Aggregator, ConfigProvider, Fetcher};
use crate::domain::model::{Film, Homeworld, Person, PersonInfo};
use crate::utils::error::{FetchError, FetchTarget};
use async_trait::async_trait;
use futures::future::{try_join, try_join_all, BoxFuture};
use futures::stream::{self, BoxStream};
use futures::{Future, FutureExt, StreamExt, TryFutureExt};
use std::sync::Arc;

/// Cold producer of a [`PersonInfo`].
///
/// Nothing is requested until the value returned by [`defer`](Self::defer) or
/// [`observe`](Self::observe) is polled. Every call builds a fresh producer, so
/// consuming twice issues the whole request sequence twice.
pub struct ReactiveAggregator<F: Fetcher> {
    fetcher: Arc<F>,
    root_url: String,
}

impl<F: Fetcher + 'static> ReactiveAggregator<F> {
    pub fn new<C: ConfigProvider>(fetcher: F, config: &C) -> Self {
        Self::with_root_url(Arc::new(fetcher), config.root_url())
    }

    pub fn with_root_url(fetcher: Arc<F>, root_url: impl Into<String>) -> Self {
        Self {
            fetcher,
            root_url: root_url.into(),
        }
    }

    /// Single-value future: root request, then homeworld and films in parallel.
    pub fn defer(&self) -> BoxFuture<'static, Result<PersonInfo, FetchError>> {
        let fetcher = Arc::clone(&self.fetcher);

        fetch_owned::<Person, F>(
            Arc::clone(&fetcher),
            FetchTarget::Person,
            self.root_url.clone(),
        )
        .and_then(move |person| fan_out(fetcher, person))
        .boxed()
    }

    /// Single-value stream over [`defer`](Self::defer).
    pub fn observe(&self) -> BoxStream<'static, Result<PersonInfo, FetchError>> {
        stream::once(self.defer()).boxed()
    }
}

fn fan_out<F: Fetcher + 'static>(
    fetcher: Arc<F>,
    person: Person,
) -> impl Future<Output = Result<PersonInfo, FetchError>> + Send + 'static {
    let homeworld = fetch_owned::<Homeworld, F>(
        Arc::clone(&fetcher),
        FetchTarget::Homeworld,
        person.homeworld.clone(),
    );

    let films = try_join_all(person.films.iter().enumerate().map(|(index, url)| {
        fetch_owned::<Film, F>(Arc::clone(&fetcher), FetchTarget::Film { index }, url.clone())
    }));

    try_join(homeworld, films)
        .map_ok(move |(homeworld, films)| PersonInfo::assemble(person, homeworld, films))
}

#[async_trait]
impl<F: Fetcher + 'static> Aggregator for ReactiveAggregator<F> {
    fn name(&self) -> &'static str {
        "reactive"
    }

    async fn fetch_aggregate(&self) -> Result<PersonInfo, FetchError> {
        self.defer().await
    }
}
