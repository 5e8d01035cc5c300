//! Yandex Translate provider.
//!
//! Talks to the v1.5 JSON API: `getLangs` for the supported-direction graph,
//! `detect` for language detection and `translate` for text translation. Each
//! call is one form-encoded POST; the JSON body's `code` decides success.

pub mod api;
pub mod status;

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::translator::{
    split_direction, ConfigError, Language, LanguageGraph, ProviderOptions, TranslateError,
    TranslationResult, Translator, OPTION_API_KEY, OPTION_TIMEOUT_SECS, OPTION_URL,
};
use api::{DetectResponse, Form, LangsResponse, TranslateResponse};
use status::{check_status, LANGS_SUCCESS, REQUEST_SUCCESS};

/// Registry key of this provider
pub const PROVIDER_CODE: &str = "yandex";

/// Base URL of the Yandex Translate JSON API
pub const BASE_URL: &str = "https://translate.yandex.net/api/v1.5/tr.json";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the Yandex Translate API.
#[derive(Clone)]
pub struct YandexTranslator {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl fmt::Debug for YandexTranslator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("YandexTranslator")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl YandexTranslator {
    /// Create a client for the public API with the default timeout.
    ///
    /// # Errors
    /// Returns a configuration error if the key is blank or the HTTP client
    /// cannot be built.
    pub fn new(api_key: impl Into<String>) -> Result<Self, TranslateError> {
        Self::with_timeout(api_key, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, TranslateError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(ConfigError::InvalidOption {
                key: OPTION_API_KEY.to_string(),
                expected: "a non-empty string",
            }
            .into());
        }

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ConfigError::HttpClient(e.to_string()))?;

        Ok(Self {
            client,
            api_key,
            base_url: BASE_URL.to_string(),
        })
    }

    /// Point the client at another API root (e.g. a mock server).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Build a client from registry options.
    ///
    /// # Arguments
    /// * `options` - Must hold a non-blank `apikey` string; may hold a `url`
    ///   string overriding the API root and a positive `timeout_secs`
    ///
    /// # Returns
    /// * `Ok(YandexTranslator)` ready to issue requests
    /// * `Err(TranslateError::Config)` if an option is missing or invalid;
    ///   no request is made in that case
    pub fn from_options(options: &ProviderOptions) -> Result<Self, TranslateError> {
        let api_key = options.require_str(OPTION_API_KEY)?;
        let timeout = match options.get_u64(OPTION_TIMEOUT_SECS)? {
            Some(0) => {
                return Err(ConfigError::InvalidOption {
                    key: OPTION_TIMEOUT_SECS.to_string(),
                    expected: "a positive integer",
                }
                .into())
            }
            Some(secs) => Duration::from_secs(secs),
            None => DEFAULT_TIMEOUT,
        };

        let translator = Self::with_timeout(api_key, timeout)?;
        Ok(match options.get_str(OPTION_URL)? {
            Some(url) => translator.with_base_url(url),
            None => translator,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn route_url(&self, route: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), route)
    }

    /// POST a form to `route` and decode the JSON body.
    ///
    /// The body is read in full before decoding, whatever the HTTP status:
    /// the API reports failures through the `code` field of the body.
    async fn post<T: DeserializeOwned>(
        &self,
        route: &str,
        form: &Form<'_>,
    ) -> Result<T, TranslateError> {
        debug!("Yandex API request: {}", route);

        let response = self
            .client
            .post(self.route_url(route))
            .form(form)
            .send()
            .await?;

        let http_status = response.status();
        let body = response.text().await?;
        debug!("Yandex API {} responded with HTTP {}", route, http_status);

        Ok(serde_json::from_str(&body)?)
    }

    fn check(
        &self,
        route: &str,
        code: i64,
        success: i64,
        message: &str,
    ) -> Result<(), TranslateError> {
        check_status(code, success, message).map_err(|err| {
            warn!("Yandex API {} failed: {}", route, err);
            TranslateError::from(err)
        })
    }

    async fn try_translate(
        &self,
        text: &str,
        direction: &str,
    ) -> Result<TranslationResult, TranslateError> {
        let response: TranslateResponse = self
            .post(
                api::ROUTE_TRANSLATE,
                &api::translate_form(&self.api_key, text, direction),
            )
            .await?;
        self.check(
            api::ROUTE_TRANSLATE,
            response.code,
            REQUEST_SUCCESS,
            &response.message,
        )?;

        translation_from_response(response)
    }
}

/// Shape a successful translate response into a `TranslationResult`.
fn translation_from_response(
    response: TranslateResponse,
) -> Result<TranslationResult, TranslateError> {
    let text = response
        .text
        .into_iter()
        .next()
        .ok_or(TranslateError::EmptyTranslation)?;

    let detected = response
        .detected
        .and_then(|detected| detected.lang)
        .map(Language::from_code);

    let (from, to) = split_direction(&response.lang);

    Ok(TranslationResult {
        text,
        from: Some(Language::from_code(from)),
        to: to.map(Language::from_code),
        detected,
        error: None,
    })
}

#[async_trait]
impl Translator for YandexTranslator {
    fn name(&self) -> &str {
        PROVIDER_CODE
    }

    async fn languages(&self, ui: &str) -> Result<LanguageGraph, TranslateError> {
        let response: LangsResponse = self
            .post(api::ROUTE_LANGS, &api::langs_form(&self.api_key, ui))
            .await?;
        self.check(
            api::ROUTE_LANGS,
            response.code,
            LANGS_SUCCESS,
            &response.message,
        )?;

        let graph = LanguageGraph::from_directions(&response.dirs, response.langs.as_ref());
        debug!(
            "Yandex reported {} directions across {} source languages",
            response.dirs.len(),
            graph.len()
        );
        Ok(graph)
    }

    async fn detect(&self, text: &str) -> Result<Language, TranslateError> {
        let response: DetectResponse = self
            .post(api::ROUTE_DETECT, &api::detect_form(&self.api_key, text))
            .await?;
        self.check(
            api::ROUTE_DETECT,
            response.code,
            REQUEST_SUCCESS,
            &response.message,
        )?;

        Ok(Language::from_code(response.lang))
    }

    async fn translate(&self, text: &str, direction: &str) -> TranslationResult {
        match self.try_translate(text, direction).await {
            Ok(result) => result,
            Err(err) => TranslationResult::failed(err),
        }
    }
}

/// Registry factory for this provider.
pub fn new_instance(options: &ProviderOptions) -> Result<Box<dyn Translator>, TranslateError> {
    Ok(Box::new(YandexTranslator::from_options(options)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::translator::ApiError;
    use wiremock::{
        matchers::{body_string_contains, method, path},
        Mock, MockServer, ResponseTemplate,
    };

    // ==================== Helper Functions ====================

    fn create_test_translator(server: &MockServer) -> YandexTranslator {
        YandexTranslator::new("test-key")
            .expect("Should build translator")
            .with_base_url(server.uri())
    }

    fn create_translate_response(lang: &str, text: &str) -> serde_json::Value {
        serde_json::json!({
            "code": 200,
            "lang": lang,
            "text": [text]
        })
    }

    // ==================== Construction Tests ====================

    #[test]
    fn test_new_rejects_blank_key() {
        let err = YandexTranslator::new("  ").unwrap_err();
        assert!(matches!(
            err,
            TranslateError::Config(ConfigError::InvalidOption { .. })
        ));
    }

    #[test]
    fn test_from_options_defaults_to_public_url() {
        let opts = ProviderOptions::new().with_option(OPTION_API_KEY, "key");
        let translator = YandexTranslator::from_options(&opts).expect("Should build");
        assert_eq!(translator.base_url(), BASE_URL);
    }

    #[test]
    fn test_from_options_url_override() {
        let opts = ProviderOptions::new()
            .with_option(OPTION_API_KEY, "key")
            .with_option(OPTION_URL, "http://localhost:9999/")
            .with_option(OPTION_TIMEOUT_SECS, 5);
        let translator = YandexTranslator::from_options(&opts).expect("Should build");

        assert_eq!(translator.base_url(), "http://localhost:9999/");
        assert_eq!(
            translator.route_url(api::ROUTE_TRANSLATE),
            "http://localhost:9999/translate"
        );
    }

    #[test]
    fn test_from_options_api_key_wrong_type() {
        let opts = ProviderOptions::new().with_option(OPTION_API_KEY, true);
        let err = YandexTranslator::from_options(&opts).unwrap_err();
        assert!(matches!(
            err,
            TranslateError::Config(ConfigError::InvalidOption { key, .. }) if key == "apikey"
        ));
    }

    #[test]
    fn test_from_options_rejects_zero_timeout() {
        let opts = ProviderOptions::new()
            .with_option(OPTION_API_KEY, "key")
            .with_option(OPTION_TIMEOUT_SECS, 0);
        let err = YandexTranslator::from_options(&opts).unwrap_err();
        assert!(matches!(
            err,
            TranslateError::Config(ConfigError::InvalidOption { key, expected })
                if key == "timeout_secs" && expected == "a positive integer"
        ));
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let translator = YandexTranslator::new("super-secret").expect("Should build");
        let debug = format!("{:?}", translator);
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("redacted"));
    }

    #[test]
    fn test_route_url() {
        let translator = YandexTranslator::new("key").expect("Should build");
        assert_eq!(
            translator.route_url(api::ROUTE_LANGS),
            "https://translate.yandex.net/api/v1.5/tr.json/getLangs"
        );
    }

    // ==================== Response Shaping Tests ====================

    #[test]
    fn test_translation_from_response_pair() {
        let response: TranslateResponse = serde_json::from_value(serde_json::json!({
            "code": 200,
            "lang": "ru-en",
            "detected": {"lang": "ru"},
            "text": ["Translate me", "ignored"]
        }))
        .unwrap();

        let result = translation_from_response(response).expect("Should succeed");
        assert!(result.is_ok());
        assert_eq!(result.text, "Translate me");
        assert_eq!(result.from, Some(Language::from_code("ru")));
        assert_eq!(result.to, Some(Language::from_code("en")));
        assert_eq!(result.detected, Some(Language::from_code("ru")));
    }

    #[test]
    fn test_translation_from_response_bare_direction() {
        let response: TranslateResponse =
            serde_json::from_value(create_translate_response("en", "Hello")).unwrap();

        let result = translation_from_response(response).expect("Should succeed");
        assert_eq!(result.from, Some(Language::from_code("en")));
        assert!(result.to.is_none());
        assert!(result.detected.is_none());
    }

    #[test]
    fn test_translation_from_response_detected_without_lang() {
        let response: TranslateResponse = serde_json::from_value(serde_json::json!({
            "code": 200,
            "lang": "ru-en",
            "detected": {},
            "text": ["Hi"]
        }))
        .unwrap();

        let result = translation_from_response(response).expect("Should succeed");
        assert!(result.detected.is_none());
    }

    #[test]
    fn test_translation_from_response_empty_text() {
        let response: TranslateResponse = serde_json::from_value(serde_json::json!({
            "code": 200,
            "lang": "ru-en",
            "text": []
        }))
        .unwrap();

        let err = translation_from_response(response).unwrap_err();
        assert!(matches!(err, TranslateError::EmptyTranslation));
    }

    // ==================== languages Tests ====================

    #[tokio::test]
    async fn test_languages_success() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/getLangs"))
            .and(body_string_contains("key=test-key"))
            .and(body_string_contains("ui=ru"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "dirs": ["en-fr", "en-de", "fr-en"],
                "langs": {"en": "английский", "fr": "французский"}
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let translator = create_test_translator(&mock_server);
        let graph = translator.languages("ru").await.expect("Should succeed");

        let codes: Vec<&str> = graph.languages().map(|l| l.code()).collect();
        assert_eq!(codes, vec!["en", "fr"]);

        let en = graph.get("en").unwrap();
        assert_eq!(en.name(), "английский");
        let targets: Vec<&str> = en.targets().map(|l| l.code.as_str()).collect();
        assert_eq!(targets, vec!["fr", "de"]);
        assert_eq!(graph.get("de").unwrap().name(), "");
    }

    #[tokio::test]
    async fn test_languages_api_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/getLangs"))
            .respond_with(ResponseTemplate::new(403).set_body_json(serde_json::json!({
                "code": 402,
                "message": "API key is blocked"
            })))
            .mount(&mock_server)
            .await;

        let translator = create_test_translator(&mock_server);
        let err = translator.languages("en").await.unwrap_err();
        assert_eq!(err.api_error(), Some(&ApiError::BlockedApiKey));
    }

    #[tokio::test]
    async fn test_languages_success_code_is_zero() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/getLangs"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "code": 200,
                "message": "OK",
                "dirs": ["en-ru"]
            })))
            .mount(&mock_server)
            .await;

        let translator = create_test_translator(&mock_server);
        let err = translator.languages("en").await.unwrap_err();
        assert!(matches!(
            err.api_error(),
            Some(ApiError::UnexpectedStatus { code: 200, .. })
        ));
    }

    #[tokio::test]
    async fn test_languages_malformed_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/getLangs"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&mock_server)
            .await;

        let translator = create_test_translator(&mock_server);
        let err = translator.languages("en").await.unwrap_err();
        assert!(matches!(err, TranslateError::Decode(_)));
    }

    // ==================== detect Tests ====================

    #[tokio::test]
    async fn test_detect_success() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/detect"))
            .and(body_string_contains("text=Hello+world"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "code": 200,
                "lang": "en"
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let translator = create_test_translator(&mock_server);
        let language = translator.detect("Hello world").await.expect("Should succeed");

        assert_eq!(language, Language::from_code("en"));
        assert!(language.name.is_empty());
    }

    #[tokio::test]
    async fn test_detect_invalid_key() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/detect"))
            .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
                "code": 401,
                "message": "API key is invalid"
            })))
            .mount(&mock_server)
            .await;

        let translator = create_test_translator(&mock_server);
        let err = translator.detect("Hello").await.unwrap_err();
        assert_eq!(err.api_error(), Some(&ApiError::InvalidApiKey));
    }

    #[tokio::test]
    async fn test_detect_malformed_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/detect"))
            .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
            .mount(&mock_server)
            .await;

        let translator = create_test_translator(&mock_server);
        let err = translator.detect("Hello").await.unwrap_err();
        assert!(matches!(err, TranslateError::Decode(_)));
    }

    #[tokio::test]
    async fn test_detect_body_without_code_is_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/detect"))
            .respond_with(ResponseTemplate::new(500).set_body_json(serde_json::json!({
                "message": "Internal error"
            })))
            .mount(&mock_server)
            .await;

        let translator = create_test_translator(&mock_server);
        let err = translator.detect("hello").await.unwrap_err();
        assert_eq!(
            err.api_error(),
            Some(&ApiError::UnexpectedStatus {
                code: 0,
                message: "Internal error".to_string(),
            })
        );
    }

    // ==================== translate Tests ====================

    #[tokio::test]
    async fn test_translate_success_with_detection() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/translate"))
            .and(body_string_contains("key=test-key"))
            .and(body_string_contains("lang=en"))
            .and(body_string_contains("format=plain"))
            .and(body_string_contains("options=1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "code": 200,
                "lang": "ru-en",
                "detected": {"lang": "ru"},
                "text": ["Translate me"]
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let translator = create_test_translator(&mock_server);
        let result = translator.translate("Переведи меня", "en").await;

        assert!(result.is_ok(), "unexpected error: {:?}", result.error);
        assert_eq!(result.text, "Translate me");
        assert_eq!(result.from.as_ref().map(|l| l.code.as_str()), Some("ru"));
        assert_eq!(result.to.as_ref().map(|l| l.code.as_str()), Some("en"));
        assert_eq!(result.detected.as_ref().map(|l| l.code.as_str()), Some("ru"));
    }

    #[tokio::test]
    async fn test_translate_without_detection() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/translate"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(create_translate_response("ru-en", "Hi")),
            )
            .mount(&mock_server)
            .await;

        let translator = create_test_translator(&mock_server);
        let result = translator.translate("Привет", "ru-en").await;

        assert!(result.is_ok());
        assert_eq!(result.text, "Hi");
        assert!(result.detected.is_none());
    }

    #[tokio::test]
    async fn test_translate_api_error_carried_in_result() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/translate"))
            .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
                "code": 501,
                "message": "The specified translation direction is not supported"
            })))
            .mount(&mock_server)
            .await;

        let translator = create_test_translator(&mock_server);
        let result = translator.translate("text", "xx-yy").await;

        assert!(!result.is_ok());
        assert!(result.text.is_empty());
        assert!(result.from.is_none());
        assert_eq!(
            result.error.as_ref().and_then(|e| e.api_error()),
            Some(&ApiError::DirectionUnsupported)
        );
    }

    #[tokio::test]
    async fn test_translate_unexpected_status() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/translate"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "code": 999,
                "message": "Something unusual"
            })))
            .mount(&mock_server)
            .await;

        let translator = create_test_translator(&mock_server);
        let err = translator
            .translate("text", "en")
            .await
            .into_result()
            .unwrap_err();

        assert_eq!(
            err.api_error(),
            Some(&ApiError::UnexpectedStatus {
                code: 999,
                message: "Something unusual".to_string(),
            })
        );
    }

    #[tokio::test]
    async fn test_translate_malformed_body_carried_in_result() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/translate"))
            .respond_with(
                ResponseTemplate::new(200).set_body_string(r#"{"code": 200, "text": "#),
            )
            .mount(&mock_server)
            .await;

        let translator = create_test_translator(&mock_server);
        let result = translator.translate("text", "en").await;

        assert!(result.text.is_empty());
        assert!(matches!(result.error, Some(TranslateError::Decode(_))));
    }

    #[tokio::test]
    async fn test_translate_body_without_code_is_status_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/translate"))
            .respond_with(ResponseTemplate::new(500).set_body_json(serde_json::json!({
                "message": "Internal error"
            })))
            .mount(&mock_server)
            .await;

        let translator = create_test_translator(&mock_server);
        let result = translator.translate("text", "en").await;

        assert!(result.text.is_empty());
        assert_eq!(
            result.error.as_ref().and_then(|e| e.api_error()),
            Some(&ApiError::UnexpectedStatus {
                code: 0,
                message: "Internal error".to_string(),
            })
        );
    }

    #[tokio::test]
    async fn test_translate_transport_error() {
        // Nothing listens on port 1
        let translator = YandexTranslator::new("test-key")
            .unwrap()
            .with_base_url("http://127.0.0.1:1");

        let result = translator.translate("text", "en").await;
        assert!(matches!(result.error, Some(TranslateError::Transport(_))));
    }
}
