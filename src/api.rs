use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    routing::get,
};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::provider::{ContainerProvider, ProviderError};

pub const MISSING_PARAM_ERROR: &str = "containerNumber query param is required";
pub const UPSTREAM_FALLBACK_ERROR: &str = "Tracking provider error";
pub const TRANSPORT_ERROR: &str = "Failed to fetch container data";

#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn ContainerProvider>,
}

#[derive(Deserialize)]
pub struct ContainerQuery {
    #[serde(rename = "containerNumber")]
    pub container_number: Option<String>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/container", get(get_container))
        .with_state(state)
}

async fn get_container(
    State(state): State<AppState>,
    Query(params): Query<ContainerQuery>,
) -> (StatusCode, Json<Value>) {
    let (status, body) =
        lookup_container(state.provider.as_ref(), params.container_number.as_deref()).await;
    (status, Json(body))
}

/// Core of the proxy route: forwards the lookup to the provider and
/// normalizes the response/error shape. An absent or empty parameter never
/// reaches the provider.
pub async fn lookup_container(
    provider: &dyn ContainerProvider,
    container_number: Option<&str>,
) -> (StatusCode, Value) {
    let container_number = match container_number {
        Some(number) if !number.is_empty() => number,
        _ => {
            return (
                StatusCode::BAD_REQUEST,
                json!({ "error": MISSING_PARAM_ERROR }),
            );
        }
    };

    match provider.get_container_info(container_number).await {
        Ok(body) => (StatusCode::OK, body),
        Err(ProviderError::Upstream { status, message }) => {
            let status = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
            let error = message.unwrap_or_else(|| UPSTREAM_FALLBACK_ERROR.to_string());
            (status, json!({ "error": error, "status": status.as_u16() }))
        }
        Err(ProviderError::Transport(e)) => {
            tracing::error!("Error fetching container info: {:#}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": TRANSPORT_ERROR }),
            )
        }
    }
}
