use crate::domain::model::PersonInfo;
use crate::utils::error::FetchError;
use async_trait::async_trait;

/// Network fetch capability. Errors carry the transport message verbatim.
pub trait Fetcher: Send + Sync {
    fn get_json(
        &self,
        url: &str,
    ) -> impl std::future::Future<Output = anyhow::Result<serde_json::Value>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn person_id(&self) -> u32;

    fn root_url(&self) -> String {
        format!(
            "{}/people/{}",
            self.base_url().trim_end_matches('/'),
            self.person_id()
        )
    }
}

#[async_trait]
pub trait Aggregator: Send + Sync {
    fn name(&self) -> &'static str;
    async fn fetch_aggregate(&self) -> Result<PersonInfo, FetchError>;
}
