//! Translation result: the value returned by `Translator::translate`.

use crate::translator::{Language, TranslateError};

/// Outcome of a translate call.
///
/// Failures are carried in `error` instead of being returned as `Err`, so a
/// caller must check `is_ok()` (or convert with `into_result()`). A failed
/// result has empty text and no languages.
#[derive(Debug, Default)]
pub struct TranslationResult {
    /// Translated text
    pub text: String,

    /// Source language of the translation
    pub from: Option<Language>,

    /// Target language of the translation (unset when the provider echoed a bare code)
    pub to: Option<Language>,

    /// Source language detected by the provider when the caller gave none
    pub detected: Option<Language>,

    /// Set when the translation failed
    pub error: Option<TranslateError>,
}

impl TranslationResult {
    pub fn failed(error: impl Into<TranslateError>) -> Self {
        Self {
            error: Some(error.into()),
            ..Self::default()
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// Convert into a `Result`, moving the failure out if there is one.
    pub fn into_result(mut self) -> Result<Self, TranslateError> {
        match self.error.take() {
            Some(err) => Err(err),
            None => Ok(self),
        }
    }
}
