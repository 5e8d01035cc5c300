//! Wire types for the Yandex Translate JSON API (v1.5).
//!
//! Every route takes a form-encoded POST body and answers with a JSON object
//! carrying `code` and `message` plus route-specific fields.

use std::collections::HashMap;

use serde::Deserialize;

use super::status::LANGS_SUCCESS;

pub const ROUTE_LANGS: &str = "getLangs";
pub const ROUTE_DETECT: &str = "detect";
pub const ROUTE_TRANSLATE: &str = "translate";

/// Form fields as (name, value) pairs, in request order
pub type Form<'a> = Vec<(&'static str, &'a str)>;

pub fn langs_form<'a>(key: &'a str, ui: &'a str) -> Form<'a> {
    vec![("key", key), ("ui", ui)]
}

pub fn detect_form<'a>(key: &'a str, text: &'a str) -> Form<'a> {
    vec![("key", key), ("text", text)]
}

pub fn translate_form<'a>(key: &'a str, text: &'a str, direction: &'a str) -> Form<'a> {
    vec![
        ("key", key),
        ("text", text),
        ("lang", direction),
        ("format", "plain"),
        ("options", "1"),
    ]
}

fn langs_success() -> i64 {
    LANGS_SUCCESS
}

/// Response of `getLangs`
///
/// A successful `getLangs` body carries no `code` at all, so a missing code
/// reads as that route's success code.
#[derive(Debug, Deserialize)]
pub struct LangsResponse {
    #[serde(default = "langs_success")]
    pub code: i64,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub dirs: Vec<String>,
    #[serde(default)]
    pub langs: Option<HashMap<String, String>>,
}

/// Response of `detect`
///
/// A missing `code` reads as 0, which is not a success for this route.
#[derive(Debug, Deserialize)]
pub struct DetectResponse {
    #[serde(default)]
    pub code: i64,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub lang: String,
}

/// Response of `translate`
#[derive(Debug, Deserialize)]
pub struct TranslateResponse {
    #[serde(default)]
    pub code: i64,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub lang: String,
    #[serde(default)]
    pub text: Vec<String>,
    #[serde(default)]
    pub detected: Option<Detected>,
}

/// `detected` object of a translate response (present when `options=1`)
#[derive(Debug, Deserialize)]
pub struct Detected {
    #[serde(default)]
    pub lang: Option<String>,
}
