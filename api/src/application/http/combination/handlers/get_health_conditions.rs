use axum::extract::State;
use food_energy_core::domain::combination::ports::CombinationService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetHealthConditionsResponse {
    pub conditions: Vec<String>,
}

#[utoipa::path(
    get,
    path = "/health-conditions",
    tag = "combination",
    summary = "List health conditions",
    responses(
        (status = 200, body = GetHealthConditionsResponse)
    )
)]
pub async fn get_health_conditions(
    State(state): State<AppState>,
) -> Result<Response<GetHealthConditionsResponse>, ApiError> {
    let conditions = state
        .service
        .get_health_conditions()
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetHealthConditionsResponse { conditions }))
}
