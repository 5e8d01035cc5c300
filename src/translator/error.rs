//! Error taxonomy shared by translation providers.
//!
//! Failures fall into four layers, checked in order for every call: transport
//! (`Transport`), body decoding (`Decode`), the provider's own status code
//! (`Api`) and, before any request is made, provider configuration (`Config`).

use thiserror::Error;

/// Failure categories reported by a translation API in its response body.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("invalid API key")]
    InvalidApiKey,

    #[error("blocked API key")]
    BlockedApiKey,

    #[error("daily limit on translated text exceeded")]
    DailyLimitExceeded,

    #[error("monthly limit on translated text exceeded")]
    MonthlyLimitExceeded,

    #[error("text size exceeds the maximum")]
    TextTooLong,

    #[error("text cannot be translated")]
    TextNotTranslated,

    #[error("translation direction is not supported")]
    DirectionUnsupported,

    #[error("unexpected status ({code}): {message}")]
    UnexpectedStatus { code: i64, message: String },
}

/// Invalid or missing provider configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("missing required option '{0}'")]
    MissingOption(String),

    #[error("option '{key}' must be {expected}")]
    InvalidOption { key: String, expected: &'static str },

    #[error("failed to build HTTP client: {0}")]
    HttpClient(String),
}

/// Errors surfaced by translation providers and the registry.
#[derive(Debug, Error)]
pub enum TranslateError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("unknown translation provider '{0}'")]
    UnknownProvider(String),

    #[error("translation provider '{0}' is already registered")]
    DuplicateProvider(String),

    #[error("response contained no translated text")]
    EmptyTranslation,
}

impl TranslateError {
    /// The API failure category, if the error came from a response status.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            TranslateError::Api(err) => Some(err),
            _ => None,
        }
    }
}
