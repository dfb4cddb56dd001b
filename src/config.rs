use anyhow::{Result, bail};
use std::env;

/// Trial authorization code used when `TRACKING_AUTH_CODE` is unset, so the
/// lookup works out of the box. Production deployments must override it.
pub const DEV_AUTH_CODE: &str = "0f7a4c2d9e8b13657da2c4e1f0b86a93";

const DEFAULT_PROVIDER_BASE_URL: &str = "https://shipsgo.com";
const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:3000";

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub auth_code: String,
    pub provider_base_url: String,
    pub listen_addr: String,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// # Environment Variables
    /// - `TRACKING_AUTH_CODE`: Optional - provider authorization code (default: trial code)
    /// - `PROVIDER_BASE_URL`: Optional - tracking provider base URL (default: "https://shipsgo.com")
    /// - `LISTEN_ADDR`: Optional - HTTP listen address (default: "0.0.0.0:3000")
    pub fn from_env() -> Result<Self> {
        let auth_code = match env::var("TRACKING_AUTH_CODE") {
            Ok(code) if code.trim().is_empty() => bail!("TRACKING_AUTH_CODE cannot be empty"),
            Ok(code) => code,
            Err(_) => DEV_AUTH_CODE.to_string(),
        };

        let provider_base_url = env::var("PROVIDER_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_PROVIDER_BASE_URL.to_string());

        if provider_base_url.trim().is_empty() {
            bail!("PROVIDER_BASE_URL cannot be empty");
        }

        let listen_addr =
            env::var("LISTEN_ADDR").unwrap_or_else(|_| DEFAULT_LISTEN_ADDR.to_string());

        Ok(Config {
            auth_code,
            provider_base_url,
            listen_addr,
        })
    }

    /// True when the trial authorization code is active
    pub fn uses_dev_auth_code(&self) -> bool {
        self.auth_code == DEV_AUTH_CODE
    }
}
