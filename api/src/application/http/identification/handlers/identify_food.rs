use axum::extract::State;
use food_energy_core::domain::identification::{
    entities::FoodIdentification, ports::IdentificationService, value_objects::IdentifyFoodInput,
};
use tracing::debug;

use crate::application::http::{
    identification::validators::IdentifyFoodRequest,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
    upload::ImageUpload,
};

#[utoipa::path(
    post,
    path = "/identify",
    tag = "identification",
    summary = "Identify food from an image",
    description = "Accepts a JSON body with a base64 image or a multipart upload with an `image` field (max 5 MiB).",
    request_body(content = IdentifyFoodRequest),
    responses(
        (status = 200, body = FoodIdentification),
        (status = 400, description = "Missing, empty or non-image upload"),
        (status = 413, description = "Image too large"),
        (status = 500, description = "Food recognition service unavailable")
    )
)]
pub async fn identify_food(
    State(state): State<AppState>,
    upload: ImageUpload<IdentifyFoodRequest>,
) -> Result<Response<FoodIdentification>, ApiError> {
    let (image_data, _) = upload.require_image()?;

    debug!(bytes = image_data.len(), "identifying food image");

    let identification = state
        .service
        .identify_food(IdentifyFoodInput { image_data })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(identification))
}
