use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::food::entities::CompatibilityRule;

pub const WARMING_RECOMMENDATION: &str = "Add warming foods like ginger or cinnamon";
pub const DIGESTIVE_RECOMMENDATION: &str = "Consider adding digestive aids like ginger or fennel";
pub const BALANCING_RECOMMENDATION: &str = "Balance your meal with neutral foods like rice";

pub const HEALTH_CONDITIONS: [&str; 8] = [
    "Cold constitution",
    "Heat constitution",
    "Digestive issues",
    "Poor circulation",
    "Insomnia",
    "Fatigue",
    "Allergies",
    "High blood pressure",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CombinationAnalysis {
    pub ingredients: Vec<String>,
    pub good_combinations: Vec<CompatibilityRule>,
    pub bad_combinations: Vec<CompatibilityRule>,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct AnalyzeCombinationInput {
    pub image_data: Option<Vec<u8>>,
    pub health_notes: String,
    /// Known ingredient keys; skips detection from the image when set.
    pub ingredients: Option<Vec<String>>,
}
