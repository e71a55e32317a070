use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tarjama::MtError;
use thiserror::Error;

pub const UNAVAILABLE_MESSAGE: &str = "Translation service unavailable. Please try again later.";
pub const INTERNAL_MESSAGE: &str = "Internal server error";

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Every failure a request can end in, rendered as `{"error": "<message>"}`
///
/// The `Display` text is exactly what the caller sees. Backend details are
/// logged where the error is produced and never carried in these variants,
/// except the backend's own message for `BackendRejected`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Bad, missing or empty input
    #[error("{0}")]
    Validation(String),
    #[error("Translation service unavailable. Please try again later.")]
    BackendUnavailable,
    /// The backend answered with an error status, possibly with its own message
    #[error("{}", .0.as_deref().unwrap_or(UNAVAILABLE_MESSAGE))]
    BackendRejected(Option<String>),
    #[error("No translated text received from service")]
    BackendEmptyResult,
    #[error("Invalid response from translation service")]
    BackendMalformed,
    #[error("Internal server error")]
    Internal,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::BackendUnavailable | ApiError::BackendRejected(_) => {
                StatusCode::SERVICE_UNAVAILABLE
            }
            ApiError::BackendEmptyResult | ApiError::BackendMalformed => StatusCode::BAD_GATEWAY,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<MtError> for ApiError {
    fn from(err: MtError) -> Self {
        match err {
            MtError::Unreachable(_) => ApiError::BackendUnavailable,
            MtError::NonSuccessStatus { message, .. } => ApiError::BackendRejected(message),
            MtError::EmptyResult => ApiError::BackendEmptyResult,
            MtError::MalformedResponse(_) => ApiError::BackendMalformed,
            MtError::Config(_) => ApiError::Internal,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status(),
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_errors_classified() {
        let cases = [
            (
                MtError::Unreachable("connection refused".to_string()),
                StatusCode::SERVICE_UNAVAILABLE,
                UNAVAILABLE_MESSAGE,
            ),
            (
                MtError::NonSuccessStatus {
                    status: 400,
                    message: Some("Invalid API key".to_string()),
                },
                StatusCode::SERVICE_UNAVAILABLE,
                "Invalid API key",
            ),
            (
                MtError::NonSuccessStatus {
                    status: 500,
                    message: None,
                },
                StatusCode::SERVICE_UNAVAILABLE,
                UNAVAILABLE_MESSAGE,
            ),
            (
                MtError::EmptyResult,
                StatusCode::BAD_GATEWAY,
                "No translated text received from service",
            ),
            (
                MtError::MalformedResponse("expected value at line 1".to_string()),
                StatusCode::BAD_GATEWAY,
                "Invalid response from translation service",
            ),
            (
                MtError::Config("bad url".to_string()),
                StatusCode::INTERNAL_SERVER_ERROR,
                INTERNAL_MESSAGE,
            ),
        ];

        for (mt_error, status, message) in cases {
            let api_error = ApiError::from(mt_error);
            assert_eq!(api_error.status(), status);
            assert_eq!(api_error.to_string(), message);
        }
    }

    #[test]
    fn test_unreachable_detail_not_leaked() {
        let api_error = ApiError::from(MtError::Unreachable(
            "tcp connect error 10.0.0.7:5000".to_string(),
        ));
        assert!(!api_error.to_string().contains("10.0.0.7"));
    }

    #[test]
    fn test_validation_is_bad_request() {
        let api_error = ApiError::Validation("No data provided".to_string());
        assert_eq!(api_error.status(), StatusCode::BAD_REQUEST);
        assert_eq!(api_error.to_string(), "No data provided");
    }
}
