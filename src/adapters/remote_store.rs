use crate::adapters::file_store::RecordDocument;
use crate::domain::model::{normalize_records, ProfessorRecord};
use crate::domain::ports::ProfessorStore;
use crate::utils::error::{Result, StatsError};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Professor collection served as JSON over HTTP.
#[derive(Debug, Clone)]
pub struct RemoteStore {
    client: Client,
    endpoint: String,
}

impl RemoteStore {
    pub fn new(endpoint: impl Into<String>) -> Result<Self> {
        let client = Client::builder().timeout(DEFAULT_TIMEOUT).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn fetch(&self) -> Result<Vec<ProfessorRecord>> {
        tracing::debug!("Making API request to: {}", self.endpoint);
        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|e| {
                StatsError::storage(format!("request to {} failed: {}", self.endpoint, e))
            })?;

        tracing::debug!("API response status: {}", response.status());
        if !response.status().is_success() {
            return Err(StatsError::storage(format!(
                "{} responded with HTTP {}",
                self.endpoint,
                response.status()
            )));
        }

        let body = response.bytes().await?;
        let document: RecordDocument = serde_json::from_slice(&body)?;
        normalize_records(document.into_records())
    }
}

#[async_trait]
impl ProfessorStore for RemoteStore {
    async fn find_all(&self) -> Result<Vec<ProfessorRecord>> {
        self.fetch().await
    }

    async fn count(&self) -> Result<usize> {
        Ok(self.fetch().await?.len())
    }
}
