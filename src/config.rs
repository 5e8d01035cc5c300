//! Environment configuration for the demo binary.
//!
//! Only the API key is required; everything else has a default. The library
//! itself never reads the environment: the binary turns a `Config` into
//! `ProviderOptions` and hands those to the registry.

use anyhow::{Context, Result};

use crate::translator::{ProviderOptions, OPTION_API_KEY, OPTION_TIMEOUT_SECS, OPTION_URL};
use crate::yandex;

#[derive(Debug, Clone)]
pub struct Config {
    // Provider selection
    pub provider: String,

    // Yandex
    pub yandex_api_key: String,
    pub yandex_api_url: String,

    // Requests
    pub ui_language: String,
    pub http_timeout_secs: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Returns
    /// * `Ok(Config)` with defaults filled in for unset optional variables
    /// * `Err` if `YANDEX_API_KEY` is not set
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            provider: std::env::var("TRANSLATE_PROVIDER")
                .unwrap_or_else(|_| yandex::PROVIDER_CODE.to_string()),

            // Yandex
            yandex_api_key: std::env::var("YANDEX_API_KEY")
                .context("YANDEX_API_KEY not set")?,
            yandex_api_url: std::env::var("YANDEX_API_URL")
                .unwrap_or_else(|_| yandex::BASE_URL.to_string()),

            // Requests
            ui_language: std::env::var("TRANSLATE_UI_LANG").unwrap_or_else(|_| "en".to_string()),
            http_timeout_secs: std::env::var("HTTP_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
        })
    }

    /// Options handed to the selected provider's factory
    pub fn provider_options(&self) -> ProviderOptions {
        ProviderOptions::new()
            .with_option(OPTION_API_KEY, self.yandex_api_key.as_str())
            .with_option(OPTION_URL, self.yandex_api_url.as_str())
            .with_option(OPTION_TIMEOUT_SECS, self.http_timeout_secs)
    }
}
