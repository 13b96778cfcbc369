use crate::api::routes::API_BASE_PATH;
use crate::domain::model::{EnrichedProfessorView, StatisticsSummary};
use crate::utils::error::{Result, StatsError};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    success: bool,
    data: Option<T>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Clone)]
pub struct DashboardData {
    pub statistics: StatisticsSummary,
    pub professors: Vec<EnrichedProfessorView>,
}

/// Fetches what the dashboard shows. Every failure collapses into
/// `StatsError::DashboardUnavailable`.
#[derive(Debug, Clone)]
pub struct DashboardClient {
    client: Client,
    base_url: String,
}

impl DashboardClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder().timeout(Duration::from_secs(15)).build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn unavailable(message: impl Into<String>) -> StatsError {
        StatsError::DashboardUnavailable {
            message: message.into(),
        }
    }

    async fn fetch<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        let url = format!("{}{}{}", self.base_url, API_BASE_PATH, endpoint);
        tracing::debug!("Fetching {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| Self::unavailable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Self::unavailable(format!(
                "Error {}: {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown")
            )));
        }

        let envelope: Envelope<T> = response
            .json()
            .await
            .map_err(|e| Self::unavailable(e.to_string()))?;

        match envelope {
            Envelope {
                success: true,
                data: Some(data),
                ..
            } => Ok(data),
            Envelope { error, .. } => Err(Self::unavailable(
                error.unwrap_or_else(|| format!("{} returned no data", endpoint)),
            )),
        }
    }

    pub async fn fetch_statistics(&self) -> Result<StatisticsSummary> {
        self.fetch("/statistics").await
    }

    pub async fn fetch_professors(&self) -> Result<Vec<EnrichedProfessorView>> {
        self.fetch("/experience").await
    }

    /// Loads both endpoints in parallel.
    pub async fn load(&self) -> Result<DashboardData> {
        let (statistics, professors) =
            tokio::try_join!(self.fetch_statistics(), self.fetch_professors())?;
        tracing::info!("✅ Dashboard data loaded ({} professors)", professors.len());
        Ok(DashboardData {
            statistics,
            professors,
        })
    }

    /// Retries `load` up to `retries` extra times, waiting `delay` between attempts.
    pub async fn load_with_retry(&self, retries: u32, delay: Duration) -> Result<DashboardData> {
        let mut attempt = 0;
        loop {
            match self.load().await {
                Ok(data) => return Ok(data),
                Err(e) if attempt < retries => {
                    attempt += 1;
                    tracing::warn!("⚠️ Load failed ({}), retry {}/{}", e, attempt, retries);
                    tokio::time::sleep(delay).await;
                }
                Err(e) => return Err(e),
            }
        }
    }
}
