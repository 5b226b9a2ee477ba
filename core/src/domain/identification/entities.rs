use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::food::entities::{EnergeticType, Recipe};

/// How an uploaded image is turned into a catalog key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdentificationStrategy {
    /// Uniform pick over the catalog, ignores the image.
    Random,
    /// First external label that equals a catalog key.
    Label,
    /// SHA-256 of the image bytes reduced modulo the catalog size.
    #[default]
    Hash,
}

impl IdentificationStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            IdentificationStrategy::Random => "random",
            IdentificationStrategy::Label => "label",
            IdentificationStrategy::Hash => "hash",
        }
    }
}

impl fmt::Display for IdentificationStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FoodIdentification {
    pub food_name: String,
    pub energetic_type: EnergeticType,
    pub description: String,
    pub benefits: String,
    pub recipes: Vec<Recipe>,
}

impl FoodIdentification {
    pub fn unknown() -> Self {
        Self {
            food_name: "Unknown Food".to_string(),
            energetic_type: EnergeticType::Neutral,
            description: "Food not in database".to_string(),
            benefits: "Please try another image".to_string(),
            recipes: Vec::new(),
        }
    }
}
