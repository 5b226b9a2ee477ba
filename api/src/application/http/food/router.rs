use super::handlers::{
    get_food::{__path_get_food, get_food},
    search_foods::{__path_search_foods, search_foods},
};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(search_foods, get_food))]
pub struct FoodApiDoc;

pub fn food_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/foods/search", state.args.server.root_path),
            get(search_foods),
        )
        .route(
            &format!("{}/foods/{{food_id}}", state.args.server.root_path),
            get(get_food),
        )
}
