//! Run service client boundary.

use crate::error::{Error, Result};
use crate::run::{RunDetail, RunId};
use async_trait::async_trait;
use tracing::debug;

/// Read access to the run service.
#[async_trait]
pub trait RunService: Send + Sync {
    /// Fetch one run's detail record.
    async fn get_run(&self, id: &RunId) -> Result<RunDetail>;
}

/// HTTP client for the pipelines REST API.
///
/// Performs no retries and imposes no timeout of its own; timeout policy
/// belongs to the caller's `reqwest` client configuration.
#[derive(Debug, Clone)]
pub struct HttpRunService {
    base_url: String,
    client: reqwest::Client,
}

impl HttpRunService {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, reqwest::Client::new())
    }

    #[must_use]
    pub fn with_client(base_url: impl Into<String>, client: reqwest::Client) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    fn run_url(&self, id: &RunId) -> String {
        format!("{}/apis/v1beta1/runs/{}", self.base_url, id)
    }
}

#[async_trait]
impl RunService for HttpRunService {
    async fn get_run(&self, id: &RunId) -> Result<RunDetail> {
        let url = self.run_url(id);
        debug!(run_id = %id, %url, "fetching run detail");
        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            if body.is_empty() {
                return Err(Error::api(format!("run service returned {status}")));
            }
            return Err(Error::api(body));
        }
        Ok(response.json::<RunDetail>().await?)
    }
}
