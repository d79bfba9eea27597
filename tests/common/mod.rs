#![allow(dead_code)]

use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use swapi_fanout::{
    Aggregator, ChainedAggregator, Fetcher, ReactiveAggregator, SequentialAggregator, Variant,
};

pub const ROOT_URL: &str = "https://swapi.dev/api/people/1";
pub const HOMEWORLD_URL: &str = "https://swapi.dev/api/planets/1/";
pub const FILM_URLS: [&str; 4] = [
    "https://swapi.dev/api/films/1/",
    "https://swapi.dev/api/films/2/",
    "https://swapi.dev/api/films/3/",
    "https://swapi.dev/api/films/6/",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Start(String),
    End(String),
}

#[derive(Clone)]
struct Route {
    response: Result<Value, String>,
    delay: Option<Duration>,
}

/// In-memory fetcher: canned responses per URL, optional delays, and a shared call log.
#[derive(Clone, Default)]
pub struct FakeFetcher {
    routes: HashMap<String, Route>,
    events: Arc<Mutex<Vec<Event>>>,
}

impl FakeFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_json(mut self, url: &str, body: Value) -> Self {
        self.routes.insert(
            url.to_string(),
            Route {
                response: Ok(body),
                delay: None,
            },
        );
        self
    }

    pub fn with_error(mut self, url: &str, message: &str) -> Self {
        self.routes.insert(
            url.to_string(),
            Route {
                response: Err(message.to_string()),
                delay: None,
            },
        );
        self
    }

    /// Must be called after the route for `url` is registered.
    pub fn with_delay(mut self, url: &str, millis: u64) -> Self {
        if let Some(route) = self.routes.get_mut(url) {
            route.delay = Some(Duration::from_millis(millis));
        }
        self
    }

    pub fn events(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }

    pub fn calls(&self) -> usize {
        self.events()
            .iter()
            .filter(|e| matches!(e, Event::Start(_)))
            .count()
    }

    pub fn calls_to(&self, url: &str) -> usize {
        self.events()
            .iter()
            .filter(|e| matches!(e, Event::Start(u) if u == url))
            .count()
    }

    pub fn position(&self, event: &Event) -> usize {
        self.events()
            .iter()
            .position(|e| e == event)
            .unwrap_or_else(|| panic!("event {:?} not recorded", event))
    }

    fn record(&self, event: Event) {
        self.events.lock().unwrap().push(event);
    }
}

impl Fetcher for FakeFetcher {
    async fn get_json(&self, url: &str) -> anyhow::Result<Value> {
        self.record(Event::Start(url.to_string()));
        let route = self.routes.get(url).cloned();

        if let Some(delay) = route.as_ref().and_then(|r| r.delay) {
            tokio::time::sleep(delay).await;
        }
        self.record(Event::End(url.to_string()));

        match route {
            Some(route) => route.response.map_err(|message| anyhow::anyhow!(message)),
            None => Err(anyhow::anyhow!("no route for {}", url)),
        }
    }
}

pub fn person_payload(films: &[&str]) -> Value {
    json!({
        "name": "Luke Skywalker",
        "height": "172",
        "mass": "77",
        "gender": "male",
        "homeworld": HOMEWORLD_URL,
        "films": films,
    })
}

pub fn homeworld_payload() -> Value {
    json!({"name": "Tatooine", "climate": "arid"})
}

pub fn film_payload() -> Value {
    json!({
        "title": "A New Hope",
        "episode_id": 4,
        "director": "George Lucas",
        "release_date": "1977-05-25"
    })
}

/// Root, homeworld and four identical film payloads.
pub fn luke_fetcher() -> FakeFetcher {
    let mut fetcher = FakeFetcher::new()
        .with_json(ROOT_URL, person_payload(&FILM_URLS))
        .with_json(HOMEWORLD_URL, homeworld_payload());
    for url in FILM_URLS {
        fetcher = fetcher.with_json(url, film_payload());
    }
    fetcher
}

pub const VARIANTS: [Variant; 3] = [Variant::Chained, Variant::Sequential, Variant::Reactive];

/// Aggregator for `variant` sharing the fetcher's call log.
pub fn build(variant: Variant, fetcher: &FakeFetcher) -> Box<dyn Aggregator> {
    match variant {
        Variant::Chained => Box::new(ChainedAggregator::with_root_url(fetcher.clone(), ROOT_URL)),
        Variant::Sequential => Box::new(SequentialAggregator::with_root_url(
            fetcher.clone(),
            ROOT_URL,
        )),
        Variant::Reactive => Box::new(ReactiveAggregator::with_root_url(
            Arc::new(fetcher.clone()),
            ROOT_URL,
        )),
    }
}
