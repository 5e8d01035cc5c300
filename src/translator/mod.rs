//! Generic multi-provider translation interface.
//!
//! # Architecture
//!
//! - `language`: `Language` and the supported-direction `LanguageGraph`
//! - `result`: `TranslationResult` returned by translate calls
//! - `error`: error taxonomy shared by all providers
//! - `options`: string-keyed configuration handed to provider factories
//! - `registry`: name → factory table used to select a provider
//!
//! # Example
//!
//! ```rust,ignore
//! use yandex_translate::translator::{ProviderOptions, ProviderRegistry};
//!
//! let opts = ProviderOptions::new().with_option("apikey", api_key);
//! let provider = ProviderRegistry::get().create("yandex", &opts)?;
//!
//! let graph = provider.languages("en").await?;
//! let result = provider.translate("Привет", "ru-en").await;
//! ```

mod error;
mod language;
mod options;
mod registry;
mod result;

pub use error::{ApiError, ConfigError, TranslateError};
pub use language::{
    split_direction, Language, LanguageGraph, SupportedLanguage, DIRECTION_SEPARATOR,
};
pub use options::{ProviderOptions, OPTION_API_KEY, OPTION_TIMEOUT_SECS, OPTION_URL};
pub use registry::{ProviderFactory, ProviderRegistry};
pub use result::TranslationResult;

use async_trait::async_trait;

/// Capabilities every translation provider exposes.
///
/// Each call is a single request/response round trip. Implementations hold no
/// mutable state, so one instance may serve concurrent callers.
#[async_trait]
pub trait Translator: Send + Sync {
    /// Registry key of the provider
    fn name(&self) -> &str;

    /// Supported languages and directions, with names localized for `ui`.
    async fn languages(&self, ui: &str) -> Result<LanguageGraph, TranslateError>;

    /// Detect the language of `text`; the result carries a code only.
    async fn detect(&self, text: &str) -> Result<Language, TranslateError>;

    /// Translate `text` along `direction` (`"dst"` or `"src-dst"`).
    ///
    /// Failures are reported through `TranslationResult::error`.
    async fn translate(&self, text: &str, direction: &str) -> TranslationResult;
}
