//! Demo binary - lists supported languages, detects and translates a text
//!
//! Usage:
//!   cargo run -- [direction] [text...]
//!   cargo run -- ru-en "Переведи меня"
//!
//! Required environment variables:
//! - YANDEX_API_KEY
//!
//! Optional:
//! - TRANSLATE_PROVIDER (defaults to yandex)
//! - YANDEX_API_URL (defaults to the public API)
//! - TRANSLATE_UI_LANG (defaults to en)
//! - HTTP_TIMEOUT_SECS (defaults to 30)

use anyhow::{Context, Result};
use tracing::{info, warn};
use yandex_translate::{config::Config, ProviderRegistry};

const DEFAULT_DIRECTION: &str = "en";
const DEFAULT_TEXT: &str = "Переведи меня";

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored when absent)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("yandex_translate=info".parse()?),
        )
        .init();

    let config = Config::from_env()?;

    let mut args = std::env::args().skip(1);
    let direction = args.next().unwrap_or_else(|| DEFAULT_DIRECTION.to_string());
    let text = {
        let rest: Vec<String> = args.collect();
        if rest.is_empty() {
            DEFAULT_TEXT.to_string()
        } else {
            rest.join(" ")
        }
    };

    let provider = ProviderRegistry::get()
        .create(&config.provider, &config.provider_options())
        .with_context(|| format!("Failed to create provider '{}'", config.provider))?;

    info!("Using translation provider '{}'", provider.name());

    // Step 1: Supported languages
    match provider.languages(&config.ui_language).await {
        Ok(graph) => {
            info!("{} source languages available", graph.len());
            for language in graph.languages() {
                println!("{} {}", language.code(), language.name());
                for target in language.targets() {
                    println!("\t-> {} {}", target.code, target.name);
                }
            }
        }
        Err(e) => warn!("Failed to list languages: {}", e),
    }

    // Step 2: Detect
    match provider.detect(&text).await {
        Ok(language) => println!("Detected: {}", language),
        Err(e) => warn!("Failed to detect language: {}", e),
    }

    // Step 3: Translate
    let result = provider
        .translate(&text, &direction)
        .await
        .into_result()
        .context("Translation failed")?;

    let show = |lang: &Option<yandex_translate::Language>| {
        lang.as_ref()
            .map(ToString::to_string)
            .unwrap_or_else(|| "?".to_string())
    };
    println!(
        "Translate: {} (direction {}-{}, detected {})",
        result.text,
        show(&result.from),
        show(&result.to),
        show(&result.detected)
    );

    Ok(())
}
