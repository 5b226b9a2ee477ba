use axum::extract::State;
use food_energy_core::domain::combination::{
    ports::CombinationService,
    value_objects::{AnalyzeCombinationInput, CombinationAnalysis},
};

use crate::application::http::{
    combination::validators::AnalyzeCombinationRequest,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
    upload::ImageUpload,
};

#[utoipa::path(
    post,
    path = "/analyze",
    tag = "combination",
    summary = "Analyze a food combination",
    description = "Detects ingredients from the image (or takes them from `ingredients`), matches them against the compatibility rules and derives recommendations from the health notes.",
    request_body(content = AnalyzeCombinationRequest),
    responses(
        (status = 200, body = CombinationAnalysis),
        (status = 400, description = "Neither an image nor ingredients were given, or the upload is invalid"),
        (status = 413, description = "Image too large"),
        (status = 500, description = "Food recognition service unavailable")
    )
)]
pub async fn analyze_combination(
    State(state): State<AppState>,
    upload: ImageUpload<AnalyzeCombinationRequest>,
) -> Result<Response<CombinationAnalysis>, ApiError> {
    let ImageUpload {
        image_data,
        payload,
    } = upload;

    let analysis = state
        .service
        .analyze_combination(AnalyzeCombinationInput {
            image_data,
            health_notes: payload.health_notes,
            ingredients: payload.ingredients,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(analysis))
}
