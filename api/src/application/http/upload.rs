//! Image upload extraction shared by the identification and combination
//! endpoints.
//!
//! Accepts either a JSON body carrying a base64 image or a multipart form
//! with an `image` (or `file`) part. Remaining multipart parts are handed to
//! the payload as text fields.

use axum::{
    Json,
    extract::{FromRequest, Multipart, Request},
    http::header::CONTENT_TYPE,
};
use base64::{Engine as _, engine::general_purpose};
use serde::de::DeserializeOwned;
use tracing::warn;
use validator::Validate;

use crate::application::http::server::api_entities::api_error::ApiError;

/// Largest accepted image, after base64 decoding.
pub const MAX_IMAGE_SIZE: usize = 5 * 1024 * 1024; // 5 MiB

/// Request body limit; leaves room for base64 and multipart overhead.
pub const MAX_BODY_SIZE: usize = 8 * 1024 * 1024; // 8 MiB

const IMAGE_FIELDS: [&str; 2] = ["image", "file"];

/// Request body that may carry an image next to other fields.
pub trait ImagePayload: DeserializeOwned + Validate + Default + Send {
    /// Removes the base64 image from a JSON body.
    fn take_image_base64(&mut self) -> Option<String>;

    /// Applies a non-image multipart text field.
    fn set_field(&mut self, name: &str, value: String);
}

/// Extracted image bytes plus the rest of the payload.
#[derive(Debug)]
pub struct ImageUpload<T> {
    pub image_data: Option<Vec<u8>>,
    pub payload: T,
}

impl<T> ImageUpload<T> {
    pub fn require_image(self) -> Result<(Vec<u8>, T), ApiError> {
        let image_data = self
            .image_data
            .ok_or_else(|| ApiError::BadRequest("Missing image".to_string()))?;
        Ok((image_data, self.payload))
    }
}

impl<S, T> FromRequest<S> for ImageUpload<T>
where
    S: Send + Sync,
    T: ImagePayload,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or("")
            .to_lowercase();

        let upload = if content_type.starts_with("multipart/form-data") {
            let multipart = Multipart::from_request(req, state)
                .await
                .map_err(|e| ApiError::from_rejection(e.status(), e.body_text()))?;
            from_multipart(multipart).await?
        } else if content_type.starts_with("application/json") {
            let Json(mut payload) = Json::<T>::from_request(req, state)
                .await
                .map_err(|e| ApiError::from_rejection(e.status(), e.body_text()))?;
            let image_data = payload
                .take_image_base64()
                .map(|encoded| decode_base64_image(&encoded))
                .transpose()?;
            ImageUpload {
                image_data,
                payload,
            }
        } else {
            return Err(ApiError::BadRequest(
                "Expected a multipart/form-data or application/json body".to_string(),
            ));
        };

        upload
            .payload
            .validate()
            .map_err(|e| ApiError::BadRequest(format!("Validation error: {}", e)))?;

        Ok(upload)
    }
}

async fn from_multipart<T: ImagePayload>(
    mut multipart: Multipart,
) -> Result<ImageUpload<T>, ApiError> {
    let mut payload = T::default();
    let mut image_data: Option<Vec<u8>> = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        warn!("Failed to read multipart field: {}", e);
        ApiError::from_rejection(e.status(), format!("Failed to read multipart field: {}", e))
    })? {
        let name = field.name().unwrap_or("").to_string();

        if IMAGE_FIELDS.contains(&name.as_str()) {
            let mime_type = field.content_type().unwrap_or("").to_string();
            if !mime_type.starts_with("image/") {
                warn!(mime_type = %mime_type, "Non-image upload rejected");
                return Err(ApiError::BadRequest(
                    "Uploaded file must be an image".to_string(),
                ));
            }

            let data = field.bytes().await.map_err(|e| {
                ApiError::from_rejection(e.status(), format!("Failed to read image: {}", e))
            })?;

            image_data = Some(check_image(data.to_vec())?);
        } else {
            let value = field.text().await.map_err(|e| {
                ApiError::from_rejection(e.status(), format!("Failed to read {}: {}", name, e))
            })?;
            payload.set_field(&name, value);
        }
    }

    Ok(ImageUpload {
        image_data,
        payload,
    })
}

/// Decodes a base64 image, accepting an optional `data:image/...;base64,` prefix.
pub fn decode_base64_image(encoded: &str) -> Result<Vec<u8>, ApiError> {
    let encoded = encoded.trim();

    let data = match encoded.split_once(',') {
        Some((header, data)) if header.starts_with("data:") => {
            if !header.starts_with("data:image/") {
                warn!(header = %header, "Non-image data URL rejected");
                return Err(ApiError::BadRequest(
                    "Uploaded file must be an image".to_string(),
                ));
            }
            data
        }
        _ => encoded,
    };

    // Reject before decoding when the encoded length already exceeds the cap.
    if data.len() / 4 * 3 > MAX_IMAGE_SIZE + 3 {
        return Err(too_large());
    }

    let bytes = general_purpose::STANDARD
        .decode(data)
        .map_err(|_| ApiError::BadRequest("Invalid base64 image".to_string()))?;

    check_image(bytes)
}

fn check_image(data: Vec<u8>) -> Result<Vec<u8>, ApiError> {
    if data.is_empty() {
        warn!("Empty image upload attempted");
        return Err(ApiError::BadRequest("Image cannot be empty".to_string()));
    }

    if data.len() > MAX_IMAGE_SIZE {
        return Err(too_large());
    }

    Ok(data)
}

fn too_large() -> ApiError {
    ApiError::PayloadTooLarge(format!(
        "Image too large. Max size is {} bytes",
        MAX_IMAGE_SIZE
    ))
}
