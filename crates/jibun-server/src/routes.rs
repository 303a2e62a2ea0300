//! HTTP routes for the advice proxy.
//!
//! One endpoint, `POST /api/gemini`: the front end sends a prompt, the
//! server forwards it to Gemini with the credential it holds, and returns
//! the generated text. The API key never reaches the client side.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{Value, json};
use tower_http::trace::TraceLayer;

use jibun_core::advice::AdviceProvider;
use jibun_interaction::{GenerateRequest, GenerateResponse};

/// State shared across handlers.
///
/// `provider` is `None` when no API key is configured; the server still
/// starts and answers every generation request with an error body.
pub struct AppState {
    pub provider: Option<Arc<dyn AdviceProvider>>,
}

/// Builds the application router.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/gemini", post(generate))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

async fn generate(
    State(state): State<Arc<AppState>>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, (StatusCode, Json<Value>)> {
    let Some(provider) = state.provider.as_ref() else {
        return Err(error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "APIキーが設定されていません",
        ));
    };

    if request.prompt.trim().is_empty() {
        return Err(error_response(
            StatusCode::BAD_REQUEST,
            "プロンプトがありません",
        ));
    }

    let result = provider.generate(&request.prompt).await.map_err(|err| {
        tracing::warn!("Generation request failed: {}", err);
        error_response(StatusCode::INTERNAL_SERVER_ERROR, &err.to_string())
    })?;

    Ok(Json(GenerateResponse { result }))
}

fn error_response(status: StatusCode, message: &str) -> (StatusCode, Json<Value>) {
    (status, Json(json!({ "error": message })))
}
