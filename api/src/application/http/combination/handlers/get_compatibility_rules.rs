use axum::extract::State;
use food_energy_core::domain::food::{ports::FoodService, value_objects::CompatibilityRules};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/rules",
    tag = "combination",
    summary = "List compatibility rules",
    responses(
        (status = 200, body = CompatibilityRules)
    )
)]
pub async fn get_compatibility_rules(
    State(state): State<AppState>,
) -> Result<Response<CompatibilityRules>, ApiError> {
    let rules = state
        .service
        .get_compatibility_rules()
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(rules))
}
