use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use thiserror::Error;

use crate::config::Config;

/// Failure modes of an outbound provider call
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The provider answered with a non-success status; `message` carries the
    /// `message` field of its error body when one was present
    #[error("tracking provider returned status {status}")]
    Upstream { status: u16, message: Option<String> },
    /// The call never produced a usable response (connect failure, malformed body)
    #[error("transport failure: {0}")]
    Transport(anyhow::Error),
}

impl From<reqwest::Error> for ProviderError {
    fn from(e: reqwest::Error) -> Self {
        ProviderError::Transport(e.into())
    }
}

#[async_trait]
pub trait ContainerProvider: Send + Sync {
    async fn get_container_info(&self, container_number: &str) -> Result<Value, ProviderError>;
}

pub struct TrackingProviderClient {
    auth_code: String,
    base_url: String,
    http_client: Client,
}

impl TrackingProviderClient {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            auth_code: config.auth_code.clone(),
            base_url: config.provider_base_url.clone(),
            http_client,
        })
    }
}

#[async_trait]
impl ContainerProvider for TrackingProviderClient {
    async fn get_container_info(&self, container_number: &str) -> Result<Value, ProviderError> {
        let url = format!(
            "{}/api/v1.2/ContainerService/GetContainerInfo/",
            self.base_url
        );

        // Every lookup is a fresh round trip, nothing may serve this from a cache
        let response = self
            .http_client
            .get(&url)
            .query(&[
                ("authCode", self.auth_code.as_str()),
                ("containerNumber", container_number),
                ("mapPoint", "true"),
            ])
            .header("Cache-Control", "no-store")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<Value>()
                .await
                .ok()
                .and_then(|body| body.get("message").and_then(Value::as_str).map(str::to_string));

            return Err(ProviderError::Upstream {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json::<Value>().await?)
    }
}
