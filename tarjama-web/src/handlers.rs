use axum::{
    Json,
    body::Bytes,
    extract::{State, rejection::BytesRejection},
};
use serde::Serialize;
use serde_json::{Map, Value};
use tarjama::{LanguageCode, MtError, TextMetrics, word_count};
use tracing::{debug, error, info, warn};

use crate::error::ApiError;
use crate::state::AppState;

const NO_DATA_MESSAGE: &str = "No data provided";
const TEXT_REQUIRED_MESSAGE: &str = "Text field is required and cannot be empty";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslateRequest {
    pub text: String,
    pub source: LanguageCode,
    pub target: LanguageCode,
}

impl TranslateRequest {
    /// Validate a raw payload: text first, then source, then target
    fn from_payload(payload: &Map<String, Value>) -> Result<Self, ApiError> {
        Ok(Self {
            text: required_text(payload)?,
            source: language_field(payload, "source")?,
            target: language_field(payload, "target")?,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct TranslateResponse {
    pub translated_text: String,
    /// Omitted when the request was short-circuited
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_text: Option<String>,
    pub word_count: usize,
}

#[derive(Debug, Serialize)]
pub struct LanguageInfo {
    pub code: LanguageCode,
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct LanguagesResponse {
    pub languages: Vec<LanguageInfo>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub backend: String,
}

/// Unwrap the buffered body, turning extractor failures (such as a body over
/// the size limit) into the JSON error shape instead of axum's plain text
fn read_body(body: Result<Bytes, BytesRejection>) -> Result<Bytes, ApiError> {
    body.map_err(|rejection| {
        ApiError::Validation(format!("Invalid request body: {}", rejection.body_text()))
    })
}

/// Decode a request body into a non-empty JSON object
fn parse_payload(body: &[u8]) -> Result<Map<String, Value>, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(ApiError::Validation(NO_DATA_MESSAGE.to_string()));
    }

    let value: Value = serde_json::from_slice(body).map_err(|e| {
        warn!("Rejected request with invalid JSON: {}", e);
        ApiError::Validation(format!("Invalid JSON payload: {}", e))
    })?;

    match value {
        Value::Null => Err(ApiError::Validation(NO_DATA_MESSAGE.to_string())),
        Value::Object(map) if map.is_empty() => {
            Err(ApiError::Validation(NO_DATA_MESSAGE.to_string()))
        }
        Value::Object(map) => Ok(map),
        _ => Err(ApiError::Validation(
            "Request body must be a JSON object".to_string(),
        )),
    }
}

/// The trimmed `text` field, which must be a non-blank string
fn required_text(payload: &Map<String, Value>) -> Result<String, ApiError> {
    payload
        .get("text")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_string)
        .ok_or_else(|| ApiError::Validation(TEXT_REQUIRED_MESSAGE.to_string()))
}

fn language_field(payload: &Map<String, Value>, field: &str) -> Result<LanguageCode, ApiError> {
    let raw = payload
        .get(field)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .trim();

    raw.parse().map_err(|_| {
        ApiError::Validation(format!(
            "Invalid {} language. Must be one of: {}",
            field,
            LanguageCode::allowed_list()
        ))
    })
}

/// `POST /api/translate/`
pub async fn translate_text(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<TranslateResponse>, ApiError> {
    let request = read_body(body)
        .and_then(|body| parse_payload(&body))
        .and_then(|payload| TranslateRequest::from_payload(&payload))
        .inspect_err(|e| warn!("Rejected translation request: {}", e))?;

    let words = word_count(&request.text);

    if request.source == request.target {
        debug!(
            "Source and target are both {}, skipping backend",
            request.source
        );
        return Ok(Json(TranslateResponse {
            translated_text: request.text,
            original_text: None,
            word_count: words,
        }));
    }

    let translator = &state.translator;
    let translated_text = translator
        .translate(&request.text, request.source, request.target)
        .await
        .map_err(|e| {
            match &e {
                MtError::NonSuccessStatus { .. } => {
                    warn!("{} rejected the request: {}", translator.provider_name(), e)
                }
                _ => error!("{} error: {}", translator.provider_name(), e),
            }
            ApiError::from(e)
        })?;

    info!(
        "Translated {} words {} → {} via {}",
        words,
        request.source,
        request.target,
        translator.provider_name()
    );

    Ok(Json(TranslateResponse {
        translated_text,
        original_text: Some(request.text),
        word_count: words,
    }))
}

/// `POST /api/word-count/`
pub async fn word_count_text(
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<TextMetrics>, ApiError> {
    let text = read_body(body)
        .and_then(|body| parse_payload(&body))
        .and_then(|payload| required_text(&payload))
        .inspect_err(|e| warn!("Rejected word-count request: {}", e))?;

    Ok(Json(TextMetrics::of(&text)))
}

/// `GET /api/languages/`
pub async fn list_languages() -> Json<LanguagesResponse> {
    Json(LanguagesResponse {
        languages: LanguageCode::ALL
            .iter()
            .map(|code| LanguageInfo {
                code: *code,
                name: code.display_name().to_string(),
            })
            .collect(),
    })
}

/// `GET /api/health/`
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        backend: state.translator.provider_name().to_string(),
    })
}
