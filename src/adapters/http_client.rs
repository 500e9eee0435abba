use crate::domain::model::GreetingResponse;
use crate::domain::ports::PingProbe;
use crate::utils::error::{HelloError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

/// 兩種 ping 回應都接受：`success` 與 `version` 可能缺少
#[derive(Debug, Deserialize)]
struct PingPayload {
    success: Option<bool>,
    message: String,
    timestamp: String,
    version: Option<String>,
}

pub struct HttpPingClient {
    client: Client,
    endpoint: String,
}

impl HttpPingClient {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn unexpected(&self, message: impl Into<String>) -> HelloError {
        HelloError::UnexpectedResponseError {
            endpoint: self.endpoint.clone(),
            message: message.into(),
        }
    }
}

#[async_trait]
impl PingProbe for HttpPingClient {
    async fn ping(&self, name: Option<&str>) -> Result<GreetingResponse> {
        let mut request = self.client.get(&self.endpoint);
        if let Some(name) = name {
            request = request.query(&[("name", name)]);
        }

        tracing::debug!("Making API request to: {}", self.endpoint);
        let response = request.send().await?;
        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if !status.is_success() {
            return Err(self.unexpected(format!("HTTP status {}", status)));
        }

        let body = response.text().await?;
        let payload: PingPayload = serde_json::from_str(&body)
            .map_err(|e| self.unexpected(format!("malformed body: {}", e)))?;

        if payload.success == Some(false) {
            return Err(self.unexpected("endpoint reported success = false"));
        }
        if payload.message.trim().is_empty() {
            return Err(self.unexpected("empty message"));
        }

        Ok(GreetingResponse {
            success: true,
            message: payload.message,
            timestamp: payload.timestamp,
            version: payload.version.unwrap_or_else(|| "unknown".to_string()),
        })
    }
}
