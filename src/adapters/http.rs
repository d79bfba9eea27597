use crate::core::Fetcher;
use reqwest::Client;

/// [`Fetcher`] over a shared `reqwest::Client`. Non-2xx responses are failures.
#[derive(Debug, Clone, Default)]
pub struct ReqwestFetcher {
    client: Client,
}

impl ReqwestFetcher {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl Fetcher for ReqwestFetcher {
    async fn get_json(&self, url: &str) -> anyhow::Result<serde_json::Value> {
        let response = self.client.get(url).send().await?;
        tracing::debug!("API response status: {} ({})", response.status(), url);

        let json_data = response.error_for_status()?.json().await?;
        Ok(json_data)
    }
}
