use super::handlers::{
    get_recipes::{__path_get_recipes, get_recipes},
    get_recipes_by_food::{__path_get_recipes_by_food, get_recipes_by_food},
};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_recipes, get_recipes_by_food))]
pub struct RecipeApiDoc;

pub fn recipe_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/recipes", state.args.server.root_path),
            get(get_recipes),
        )
        .route(
            &format!("{}/recipes/by-food/{{food_id}}", state.args.server.root_path),
            get(get_recipes_by_food),
        )
}
