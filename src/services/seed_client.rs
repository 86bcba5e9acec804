use std::time::Duration;

use serde_json::Value;

use crate::config::Config;
use crate::domain::{SeedError, Task};

/// Fetches the initial task list from the remote todo source.
#[derive(Debug, Clone)]
pub struct SeedClient {
    http_client: reqwest::Client,
    url: String,
    timeout: Duration,
}

impl SeedClient {
    pub fn new(http_client: reqwest::Client, url: String, timeout: Duration) -> Self {
        Self {
            http_client,
            url,
            timeout,
        }
    }

    pub fn from_config(http_client: reqwest::Client, config: &Config) -> Self {
        Self::new(http_client, config.seed_url.clone(), config.seed_timeout())
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub async fn fetch(&self) -> Result<Vec<Task>, SeedError> {
        let response = self
            .http_client
            .get(&self.url)
            .timeout(self.timeout)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SeedError::Status(status.as_u16()));
        }

        let body: Value = response.json().await?;
        parse_seed(body)
    }
}

/// Reads a seed payload. The payload must be an array; entries that are not
/// task records are dropped.
pub fn parse_seed(body: Value) -> Result<Vec<Task>, SeedError> {
    let Value::Array(entries) = body else {
        return Err(SeedError::InvalidPayload("expected a JSON array".into()));
    };

    let total = entries.len();
    let tasks: Vec<Task> = entries
        .into_iter()
        .filter_map(|entry| match serde_json::from_value::<Task>(entry) {
            Ok(task) => Some(task),
            Err(e) => {
                tracing::debug!(error = %e, "Skipping malformed seed entry");
                None
            }
        })
        .collect();

    if tasks.len() < total {
        tracing::warn!(
            skipped = total - tasks.len(),
            total,
            "Seed payload contained malformed entries"
        );
    }

    Ok(tasks)
}
