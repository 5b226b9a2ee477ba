use axum::{Router, routing::get};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct RootResponse {
    pub message: String,
    pub version: String,
}

#[utoipa::path(
    get,
    path = "/",
    tag = "health",
    summary = "Liveness check",
    responses(
        (status = 200, body = RootResponse)
    )
)]
pub async fn root() -> Result<Response<RootResponse>, ApiError> {
    Ok(Response::OK(RootResponse {
        message: "Food Energy API is running!".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }))
}

pub fn health_routes(root_path: &str) -> Router<AppState> {
    let path = if root_path.is_empty() {
        "/".to_string()
    } else {
        root_path.to_string()
    };

    Router::new().route(&path, get(root))
}
