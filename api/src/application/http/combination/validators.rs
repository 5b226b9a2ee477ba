use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::application::http::upload::ImagePayload;

#[derive(Debug, Default, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeCombinationRequest {
    /// Base64 image, optionally as a `data:image/...;base64,` URL
    pub image_base64: Option<String>,

    #[serde(default)]
    pub health_notes: String,

    /// Catalog keys to analyse instead of detecting them from the image
    pub ingredients: Option<Vec<String>>,
}

impl ImagePayload for AnalyzeCombinationRequest {
    fn take_image_base64(&mut self) -> Option<String> {
        self.image_base64.take()
    }

    fn set_field(&mut self, name: &str, value: String) {
        match name {
            "healthNotes" | "health_notes" => self.health_notes = value,
            // Multipart carries the list as "ginger, honey, rice".
            "ingredients" => {
                let ingredients: Vec<String> = value
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect();
                self.ingredients = (!ingredients.is_empty()).then_some(ingredients);
            }
            _ => {}
        }
    }
}
