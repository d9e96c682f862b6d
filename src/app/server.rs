use crate::core::inventory::Inventory;
use crate::utils::error::{InventoryError, Result};
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, HeaderValue, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use serde::Serialize;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub const TEST_PATH: &str = "/api/test";
pub const SUBMIT_PATH: &str = "/api/submit";

#[derive(Clone)]
pub struct AppState {
    inventory: Arc<Inventory>,
}

pub fn router(inventory: Arc<Inventory>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route(TEST_PATH, get(get_test).options(preflight))
        .route(SUBMIT_PATH, post(submit).options(preflight))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(AppState { inventory })
}

/// Serves until Ctrl-C is received.
pub async fn serve(listener: TcpListener, inventory: Arc<Inventory>) -> Result<()> {
    axum::serve(listener, router(inventory))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("🛑 Shutdown signal received");
}

async fn get_test(State(state): State<AppState>) -> Result<Response> {
    json_response(StatusCode::OK, state.inventory.test_data())
}

async fn submit(State(state): State<AppState>, body: Bytes) -> Result<Response> {
    let results = state.inventory.submit_json(&body)?;
    json_response(StatusCode::OK, &results)
}

async fn preflight() -> StatusCode {
    StatusCode::OK
}

fn json_response<T: Serialize + ?Sized>(status: StatusCode, value: &T) -> Result<Response> {
    let body = serde_json::to_vec(value)?;
    Ok((
        status,
        [(header::CONTENT_TYPE, HeaderValue::from_static("application/json"))],
        body,
    )
        .into_response())
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for InventoryError {
    fn into_response(self) -> Response {
        let status = if self.is_client_error() {
            tracing::warn!("Rejected request: {}", self);
            StatusCode::BAD_REQUEST
        } else {
            tracing::error!("Request failed: {}", self);
            StatusCode::INTERNAL_SERVER_ERROR
        };

        let body = ErrorBody {
            error: self.to_string(),
        };
        match json_response(status, &body) {
            Ok(response) => response,
            Err(_) => status.into_response(),
        }
    }
}
