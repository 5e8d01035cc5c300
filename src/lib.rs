pub mod config;
pub mod translator;
pub mod yandex;

pub use translator::{
    Language, LanguageGraph, ProviderOptions, ProviderRegistry, TranslateError, TranslationResult,
    Translator,
};
pub use yandex::YandexTranslator;
