//! Live user source backed by a single HTTP GET.

use std::time::Duration;

use async_trait::async_trait;

use super::{FetchError, UserSource};
use crate::config::FetchConfig;
use crate::models::UserRecord;

/// Fetches the Reqres user listing over HTTP.
///
/// One request per call, bounded by `timeout`. No retries.
#[derive(Debug, Clone)]
pub struct HttpUserSource {
    url: String,
    user_agent: String,
    timeout: Duration,
}

impl HttpUserSource {
    pub fn new(url: impl Into<String>, user_agent: impl Into<String>, timeout: Duration) -> Self {
        Self {
            url: url.into(),
            user_agent: user_agent.into(),
            timeout,
        }
    }

    pub fn from_config(config: &FetchConfig) -> Self {
        Self::new(
            config.url.clone(),
            config.user_agent.clone(),
            Duration::from_secs(config.timeout_secs),
        )
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[async_trait]
impl UserSource for HttpUserSource {
    fn location(&self) -> &str {
        &self.url
    }

    async fn fetch_users(&self) -> Result<Vec<UserRecord>, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| FetchError::Request(format!("failed to build HTTP client: {e}")))?;

        let resp = client
            .get(&self.url)
            .header("User-Agent", &self.user_agent)
            .send()
            .await
            .map_err(|e| FetchError::Request(e.to_string()))?;

        let status = resp.status();
        tracing::debug!(url = %self.url, %status, "user listing responded");
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body: serde_json::Value = resp
            .json()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))?;

        extract_users(body)
    }
}

/// Pull the `data` array out of a listing body.
///
/// A missing or `null` `data` key yields an empty list; a body that is
/// not a JSON object is a decode error.
fn extract_users(body: serde_json::Value) -> Result<Vec<UserRecord>, FetchError> {
    let serde_json::Value::Object(mut map) = body else {
        return Err(FetchError::Decode("response body is not a JSON object".to_string()));
    };
    match map.remove("data") {
        None | Some(serde_json::Value::Null) => Ok(Vec::new()),
        Some(data) => serde_json::from_value(data).map_err(|e| FetchError::Decode(e.to_string())),
    }
}
