use crate::error::Result;
use crate::models::{ApiEnvelope, RatingChange, Submission};

const DEFAULT_BASE_URL: &str = "https://codeforces.com/api";

/// Read-only client for the public Codeforces API. Queries are keyed by
/// handle; no authentication is involved.
#[derive(Debug, Clone)]
pub struct CodeforcesClient {
    base_url: String,
    client: reqwest::Client,
}

impl CodeforcesClient {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::builder()
                .user_agent("student-progress-tracker/0.1")
                .build()
                .unwrap(),
        }
    }

    /// Fetch the full rating-change history for a handle (`user.rating`).
    pub async fn fetch_rating_history(&self, handle: &str) -> Result<Vec<RatingChange>> {
        self.fetch("user.rating", handle).await
    }

    /// Fetch every submission for a handle (`user.status`).
    pub async fn fetch_submissions(&self, handle: &str) -> Result<Vec<Submission>> {
        self.fetch("user.status", handle).await
    }

    async fn fetch<T: serde::de::DeserializeOwned + Default>(
        &self,
        method: &str,
        handle: &str,
    ) -> Result<T> {
        let url = format!("{}/{}?handle={}", self.base_url, method, handle);
        tracing::debug!(%url, "Querying Codeforces API");

        let body = self.client.get(&url).send().await?.text().await?;
        let envelope: ApiEnvelope<T> = serde_json::from_str(&body)?;

        envelope.into_result()
    }
}

impl Default for CodeforcesClient {
    fn default() -> Self {
        Self::new()
    }
}
