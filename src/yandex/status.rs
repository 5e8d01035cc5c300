//! Mapping of Yandex response status codes to `ApiError`.

use crate::translator::ApiError;

/// Status reported by a successful `getLangs` call.
pub const LANGS_SUCCESS: i64 = 0;

/// Status reported by successful `detect` and `translate` calls.
pub const REQUEST_SUCCESS: i64 = 200;

/// Map a non-success status code to its failure category.
pub fn api_error(code: i64, message: &str) -> ApiError {
    match code {
        401 => ApiError::InvalidApiKey,
        402 => ApiError::BlockedApiKey,
        403 => ApiError::DailyLimitExceeded,
        404 => ApiError::MonthlyLimitExceeded,
        413 => ApiError::TextTooLong,
        422 => ApiError::TextNotTranslated,
        501 => ApiError::DirectionUnsupported,
        _ => ApiError::UnexpectedStatus {
            code,
            message: message.to_string(),
        },
    }
}

/// `Ok` when `code` is the route's success code, the mapped error otherwise.
pub fn check_status(code: i64, success: i64, message: &str) -> Result<(), ApiError> {
    if code == success {
        Ok(())
    } else {
        Err(api_error(code, message))
    }
}
