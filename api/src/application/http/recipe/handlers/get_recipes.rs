use axum::extract::State;
use food_energy_core::domain::food::{entities::Recipe, ports::FoodService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetRecipesResponse {
    pub recipes: Vec<Recipe>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "recipe",
    summary = "List recipes",
    responses(
        (status = 200, body = GetRecipesResponse)
    )
)]
pub async fn get_recipes(
    State(state): State<AppState>,
) -> Result<Response<GetRecipesResponse>, ApiError> {
    let recipes = state.service.get_recipes().await.map_err(ApiError::from)?;

    Ok(Response::OK(GetRecipesResponse { recipes }))
}
