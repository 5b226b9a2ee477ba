use axum::extract::State;
use food_energy_core::domain::food::{ports::FoodService, value_objects::SeasonSummary};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetSeasonsResponse {
    pub seasons: Vec<SeasonSummary>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "season",
    summary = "List seasons",
    description = "Every season with its recommended food keys, in stored order",
    responses(
        (status = 200, body = GetSeasonsResponse)
    )
)]
pub async fn get_seasons(
    State(state): State<AppState>,
) -> Result<Response<GetSeasonsResponse>, ApiError> {
    let seasons = state.service.get_seasons().await.map_err(ApiError::from)?;

    Ok(Response::OK(GetSeasonsResponse { seasons }))
}
