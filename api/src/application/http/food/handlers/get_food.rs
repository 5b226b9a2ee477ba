use axum::extract::{Path, State};
use food_energy_core::domain::food::{entities::FoodRecord, ports::FoodService};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/{food_id}",
    tag = "food",
    summary = "Get a food by id",
    params(
        ("food_id" = String, Path, description = "Food id"),
    ),
    responses(
        (status = 200, body = FoodRecord),
        (status = 404, description = "Food not found")
    )
)]
pub async fn get_food(
    Path(food_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<FoodRecord>, ApiError> {
    let food = state
        .service
        .get_food(food_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(food))
}
