use super::handlers::{
    analyze_combination::{__path_analyze_combination, analyze_combination},
    get_compatibility_rules::{__path_get_compatibility_rules, get_compatibility_rules},
    get_health_conditions::get_health_conditions,
};
use crate::application::http::server::app_state::AppState;
use axum::{
    Router,
    routing::{get, post},
};
use utoipa::OpenApi;

/// Nested under `/combinations`; `/health-conditions` is documented at the root.
#[derive(OpenApi)]
#[openapi(paths(analyze_combination, get_compatibility_rules))]
pub struct CombinationApiDoc;

pub fn combination_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/combinations/analyze", state.args.server.root_path),
            post(analyze_combination),
        )
        .route(
            &format!("{}/combinations/rules", state.args.server.root_path),
            get(get_compatibility_rules),
        )
        .route(
            &format!("{}/health-conditions", state.args.server.root_path),
            get(get_health_conditions),
        )
}
