use axum::extract::{Path, State};
use food_energy_core::domain::food::ports::FoodService;

use super::get_recipes::GetRecipesResponse;
use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/by-food/{food_id}",
    tag = "recipe",
    summary = "Get recipes using a food",
    description = "Recipes whose ingredient list contains the food, in catalog order",
    params(
        ("food_id" = String, Path, description = "Food id"),
    ),
    responses(
        (status = 200, body = GetRecipesResponse),
        (status = 404, description = "Food not found")
    )
)]
pub async fn get_recipes_by_food(
    Path(food_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<GetRecipesResponse>, ApiError> {
    let recipes = state
        .service
        .get_recipes_by_food(food_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetRecipesResponse { recipes }))
}
