use crate::agent::SupportAgent;
use crate::models::chat::{ ChatRequest, ChatResponse, ErrorResponse };
use std::error::Error;
use std::net::SocketAddr;
use std::sync::Arc;
use axum::{
    routing::{ get, post },
    Router,
    extract::rejection::JsonRejection,
    extract::State,
    response::IntoResponse,
    http::StatusCode,
    Json,
};
use tower_http::cors::{ Any, CorsLayer };
use log::{ info, error };

#[derive(Clone)]
struct AppState {
    agent: Arc<SupportAgent>,
}

/// The widget runs in a browser on the brand's site, so the API is open to
/// any origin.
pub fn router(agent: Arc<SupportAgent>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_handler))
        .route("/api/chat", post(chat_handler))
        .layer(cors)
        .with_state(AppState { agent })
}

pub async fn start_http_server(
    addr: &str,
    agent: Arc<SupportAgent>,
) -> Result<(), Box<dyn Error + Send + Sync>> {
    let addr = addr.parse::<SocketAddr>()?;
    info!("Starting HTTP API server on: http://{}", addr);

    let app = router(agent);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}

async fn health_handler() -> &'static str {
    "ok"
}

async fn chat_handler(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Body problems surface through the same error contract as everything
    // else, not as the extractor's default plain-text 4xx.
    let Json(req) = match payload {
        Ok(json) => json,
        Err(rejection) => {
            error!("Chat request body rejected: {}", rejection);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse { error: format!("Error: {}", rejection) }),
            ).into_response();
        }
    };

    match state.agent.handle_message(&req.messages).await {
        Ok(result) => (StatusCode::OK, Json(ChatResponse { result })).into_response(),
        Err(e) => {
            error!("Chat request failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse { error: e.user_message() }),
            ).into_response()
        }
    }
}
