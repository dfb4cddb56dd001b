use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use thiserror::Error;

use crate::models::ContainerInfo;
use crate::overlay::ResultOverlay;

pub const CONTAINER_NUMBER_LEN: usize = 11;

pub const INVALID_LENGTH_ERROR: &str =
    "Container number should be 11 characters (e.g., TEMU1234567)";
pub const GENERIC_LOOKUP_ERROR: &str = "Something went wrong";

/// Normalize raw user input into a candidate container number: uppercase and
/// strip all whitespace, internal included
pub fn normalize_container_number(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Terminal failure of one lookup attempt, carrying the message shown to the
/// user
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct LookupFailure {
    pub message: String,
}

#[async_trait]
pub trait LookupBackend: Send + Sync {
    async fn lookup(&self, container_number: &str) -> Result<ContainerInfo, LookupFailure>;
}

/// Lifecycle of one submission. A tagged state keeps loading and error from
/// ever coexisting.
#[derive(Debug, Clone)]
pub enum LookupState {
    Idle,
    Submitting,
    Success(ContainerInfo),
    Error(String),
}

/// The lookup form: one input field, one in-flight request at most, and the
/// result overlay it drives
pub struct LookupForm<B> {
    pub input: String,
    pub state: LookupState,
    pub overlay: ResultOverlay,
    backend: B,
}

impl<B: LookupBackend> LookupForm<B> {
    pub fn new(backend: B) -> Self {
        Self {
            input: String::new(),
            state: LookupState::Idle,
            overlay: ResultOverlay::new(),
            backend,
        }
    }

    /// Replace the field contents. The field uppercases as the user types.
    pub fn set_input(&mut self, value: &str) {
        self.input = value.to_uppercase();
    }

    /// The submit control is enabled only while the field is non-empty and no
    /// request is in flight
    pub fn can_submit(&self) -> bool {
        !self.input.is_empty() && !matches!(self.state, LookupState::Submitting)
    }

    /// Run one submission to completion. A disabled control makes this a
    /// no-op; validation failures never reach the backend.
    pub async fn submit(&mut self) {
        if !self.can_submit() {
            return;
        }

        let container_number = normalize_container_number(&self.input);
        if container_number.chars().count() != CONTAINER_NUMBER_LEN {
            self.overlay.close();
            self.state = LookupState::Error(INVALID_LENGTH_ERROR.to_string());
            return;
        }

        // Entering Submitting drops any previous error or result before the
        // new outcome is known
        self.state = LookupState::Submitting;

        match self.backend.lookup(&container_number).await {
            Ok(info) => {
                self.overlay.open();
                self.state = LookupState::Success(info);
            }
            Err(failure) => {
                self.overlay.close();
                self.state = LookupState::Error(failure.message);
            }
        }
    }
}

/// Calls the proxy endpoint the way the hosted form does
pub struct ProxyBackend {
    base_url: String,
    http_client: Client,
}

impl ProxyBackend {
    pub fn new(base_url: String) -> anyhow::Result<Self> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            base_url,
            http_client,
        })
    }
}

#[async_trait]
impl LookupBackend for ProxyBackend {
    async fn lookup(&self, container_number: &str) -> Result<ContainerInfo, LookupFailure> {
        let url = format!("{}/api/container", self.base_url);

        let response = self
            .http_client
            .get(&url)
            .query(&[("containerNumber", container_number)])
            .send()
            .await
            .map_err(|_| LookupFailure {
                message: GENERIC_LOOKUP_ERROR.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<Value>()
                .await
                .ok()
                .and_then(|body| body.get("error").and_then(Value::as_str).map(str::to_string))
                .unwrap_or_else(|| format!("Error: {}", status.as_u16()));

            return Err(LookupFailure { message });
        }

        response.json::<ContainerInfo>().await.map_err(|_| LookupFailure {
            message: GENERIC_LOOKUP_ERROR.to_string(),
        })
    }
}
