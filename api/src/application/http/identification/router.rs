use super::handlers::identify_food::{__path_identify_food, identify_food};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(identify_food))]
pub struct IdentificationApiDoc;

pub fn identification_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/food/identify", state.args.server.root_path),
        post(identify_food),
    )
}
