use netcanvas_core::{Error, Result};
use serde_json::Value;
use std::future::Future;

/// Wire seam between the gateway and the backend.
///
/// Implementations resolve non-2xx responses to [`Error::Backend`] carrying the
/// raw response text; error bodies are plain text and never parsed as JSON.
pub trait Transport: Send + Sync {
    fn post_json(&self, path: &str, body: &Value) -> impl Future<Output = Result<Value>> + Send;

    fn get_json(&self, path: &str) -> impl Future<Output = Result<Value>> + Send;
}

/// `reqwest`-backed transport rooted at the backend's base URL.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn decode(response: reqwest::Response) -> Result<Value> {
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| Error::Transport(format!("Failed to read response body: {}", e)))?;

        if !status.is_success() {
            return Err(Error::Backend {
                status: status.as_u16(),
                detail: text,
            });
        }

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&text).map_err(|e| Error::Decode(e.to_string()))
    }
}

impl Transport for HttpTransport {
    async fn post_json(&self, path: &str, body: &Value) -> Result<Value> {
        // .json() sets Content-Type: application/json
        let response = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(|e| Error::Transport(e.to_string()))?;
        Self::decode(response).await
    }

    async fn get_json(&self, path: &str) -> Result<Value> {
        let response = self
            .client
            .get(self.url(path))
            .send()
            .await
            .map_err(|e| Error::Transport(e.to_string()))?;
        Self::decode(response).await
    }
}
