use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::application::http::upload::ImagePayload;

/// JSON body for `/food/identify`; multipart uploads send the file as `image`.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct IdentifyFoodRequest {
    /// Base64 image, optionally as a `data:image/...;base64,` URL
    pub image_base64: Option<String>,
}

impl ImagePayload for IdentifyFoodRequest {
    fn take_image_base64(&mut self) -> Option<String> {
        self.image_base64.take()
    }

    fn set_field(&mut self, _name: &str, _value: String) {}
}
