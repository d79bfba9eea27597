use crate::core::Fetcher;
use crate::utils::error::{FetchError, FetchTarget};
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// GET `url` and decode the body into `T`. Failures are tagged with `target`.
pub async fn fetch_entity<T, F>(fetcher: &F, target: FetchTarget, url: &str) -> Result<T, FetchError>
where
    T: DeserializeOwned,
    F: Fetcher,
{
    tracing::debug!("GET {} ({})", url, target);

    let body = fetcher.get_json(url).await.map_err(|e| {
        tracing::debug!("{} request failed: {}", target, e);
        FetchError::new(target, url, e.to_string())
    })?;

    serde_json::from_value(body).map_err(|e| {
        tracing::debug!("{} payload could not be decoded: {}", target, e);
        FetchError::new(target, url, e.to_string())
    })
}

/// Owned-argument form of [`fetch_entity`]; the returned future is `'static`.
pub async fn fetch_owned<T, F>(fetcher: Arc<F>, target: FetchTarget, url: String) -> Result<T, FetchError>
where
    T: DeserializeOwned,
    F: Fetcher,
{
    fetch_entity(fetcher.as_ref(), target, &url).await
}
