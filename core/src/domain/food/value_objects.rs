use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::food::entities::{CompatibilityRule, FoodRecord, Season};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SeasonalFoods {
    pub season: Season,
    pub foods: Vec<FoodRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SeasonSummary {
    pub season: Season,
    pub food_keys: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CompatibilityRules {
    pub good: Vec<CompatibilityRule>,
    pub bad: Vec<CompatibilityRule>,
}

#[derive(Debug, Clone)]
pub struct SearchFoodsInput {
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct GetSeasonalFoodsInput {
    pub season: String,
}
