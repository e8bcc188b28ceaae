use std::any::Any;
use std::sync::Arc;

use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use serde::{Deserialize, Serialize};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;
use wanderpeak_assistant::TravelAssistant;
use wanderpeak_core::{ChatInput, KnowledgeBase};
use wanderpeak_observability::AppMetrics;

pub const SERVICE_NAME: &str = "WanderPeak Chatbot API";

#[derive(Clone)]
pub struct ApiState {
    pub assistant: Arc<TravelAssistant>,
    pub knowledge: Arc<KnowledgeBase>,
    pub metrics: Arc<AppMetrics>,
}

/// Wire shape of `POST /chat`. `message` is the only validated field;
/// `history` entries are accepted as arbitrary JSON and ignored.
#[derive(Debug, Clone, Deserialize)]
struct ChatRequest {
    message: Option<String>,
    #[serde(default)]
    #[allow(dead_code)]
    history: Vec<serde_json::Value>,
}

#[derive(Debug, Serialize)]
struct ChatResponse {
    response: String,
    timestamp: String,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    service: &'static str,
    timestamp: String,
    metrics: wanderpeak_observability::MetricsSnapshot,
}

pub fn build_app() -> Router {
    let metrics = AppMetrics::shared();
    let knowledge = Arc::new(KnowledgeBase::builtin());
    let assistant = Arc::new(TravelAssistant::new(knowledge.clone(), metrics.clone()));

    let state = ApiState {
        assistant,
        knowledge,
        metrics,
    };

    build_router(state)
}

pub fn build_router(state: ApiState) -> Router {
    Router::new()
        .route("/chat", post(chat))
        .route("/destinations", get(destinations))
        .route("/packages", get(packages))
        .route("/health", get(health))
        .layer(CorsLayer::permissive())
        .layer(CatchPanicLayer::custom(internal_error_response))
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(RequestBodyLimitLayer::new(64 * 1024))
        .with_state(state)
}

/// Boundary for uncaught failures: the client gets a generic body, the
/// cause goes to the log and is never echoed back.
fn internal_error_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<&str>()
        .map(ToString::to_string)
        .or_else(|| panic.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".to_string());
    tracing::error!(detail = %detail, "request handling failed");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(serde_json::json!({
            "error": "Internal server error"
        })),
    )
        .into_response()
}

async fn chat(State(state): State<ApiState>, Json(request): Json<ChatRequest>) -> Response {
    state.metrics.inc_request();

    let Some(message) = request.message else {
        return (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({
                "error": "Message is required"
            })),
        )
            .into_response();
    };

    let outcome = state.assistant.handle_chat(&ChatInput {
        message,
        history: Vec::new(),
    });

    (
        StatusCode::OK,
        Json(ChatResponse {
            response: outcome.response,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }),
    )
        .into_response()
}

async fn destinations(State(state): State<ApiState>) -> impl IntoResponse {
    state.metrics.inc_request();

    (
        StatusCode::OK,
        Json(serde_json::json!({
            "destinations": state.knowledge.summaries()
        })),
    )
}

async fn packages(State(state): State<ApiState>) -> impl IntoResponse {
    state.metrics.inc_request();

    (
        StatusCode::OK,
        Json(serde_json::json!({
            "packages": state.knowledge.packages()
        })),
    )
}

async fn health(State(state): State<ApiState>) -> impl IntoResponse {
    state.metrics.inc_request();

    let payload = HealthResponse {
        status: "healthy",
        service: SERVICE_NAME,
        timestamp: chrono::Utc::now().to_rfc3339(),
        metrics: state.metrics.snapshot(),
    };
    (StatusCode::OK, Json(payload))
}
