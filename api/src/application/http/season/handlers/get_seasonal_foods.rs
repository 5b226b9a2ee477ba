use axum::extract::{Path, State};
use food_energy_core::domain::food::{
    ports::FoodService,
    value_objects::{GetSeasonalFoodsInput, SeasonalFoods},
};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/{season}/foods",
    tag = "season",
    summary = "Get seasonal foods",
    description = "Foods recommended for a season. Keys without a catalog entry are returned as placeholder records.",
    params(
        ("season" = String, Path, description = "spring, summer, fall or winter (case-insensitive)"),
    ),
    responses(
        (status = 200, body = SeasonalFoods),
        (status = 404, description = "Season not found")
    )
)]
pub async fn get_seasonal_foods(
    Path(season): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<SeasonalFoods>, ApiError> {
    let seasonal_foods = state
        .service
        .get_seasonal_foods(GetSeasonalFoodsInput { season })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(seasonal_foods))
}
