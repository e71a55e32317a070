use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use std::any::Any;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::error;

use crate::error::{ErrorResponse, INTERNAL_MESSAGE};
use crate::handlers::{health_check, list_languages, translate_text, word_count_text};
use crate::state::AppState;

/// Build the API router. Every route answers with and without a trailing slash.
pub fn create_router(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/api/translate/", post(translate_text))
        .route("/api/translate", post(translate_text))
        .route("/api/word-count/", post(word_count_text))
        .route("/api/word-count", post(word_count_text))
        .route("/api/languages/", get(list_languages))
        .route("/api/languages", get(list_languages))
        .route("/api/health/", get(health_check))
        .route("/api/health", get(health_check))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Log the panic payload and answer with the generic 500 body
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        *s
    } else {
        "unknown panic payload"
    };
    error!("Unexpected error while handling request: {}", detail);

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: INTERNAL_MESSAGE.to_string(),
        }),
    )
        .into_response()
}
