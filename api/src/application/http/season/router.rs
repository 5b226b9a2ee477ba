use super::handlers::{
    get_seasonal_foods::{__path_get_seasonal_foods, get_seasonal_foods},
    get_seasons::{__path_get_seasons, get_seasons},
};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_seasons, get_seasonal_foods))]
pub struct SeasonApiDoc;

pub fn season_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/seasons", state.args.server.root_path),
            get(get_seasons),
        )
        .route(
            &format!("{}/seasons/{{season}}/foods", state.args.server.root_path),
            get(get_seasonal_foods),
        )
}
