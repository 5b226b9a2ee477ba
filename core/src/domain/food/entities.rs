use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::common::entities::app_errors::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum EnergeticType {
    Warm,
    Cold,
    Neutral,
}

impl EnergeticType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EnergeticType::Warm => "warm",
            EnergeticType::Cold => "cold",
            EnergeticType::Neutral => "neutral",
        }
    }
}

impl fmt::Display for EnergeticType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
}

impl Season {
    pub const ALL: [Season; 4] = [Season::Spring, Season::Summer, Season::Fall, Season::Winter];

    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Fall => "fall",
            Season::Winter => "winter",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Season {
    type Err = CoreError;

    /// Case-insensitive; "autumn" is not an accepted alias.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "spring" => Ok(Season::Spring),
            "summer" => Ok(Season::Summer),
            "fall" => Ok(Season::Fall),
            "winter" => Ok(Season::Winter),
            _ => Err(CoreError::InvalidSeason(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    Good,
    Bad,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FoodRecord {
    pub id: String,
    pub name: String,
    pub energetic_type: EnergeticType,
    pub season: Option<Season>,
    pub benefits: String,
    pub warnings: Option<String>,
    #[serde(rename = "imageUrl")]
    pub image_ref: Option<String>,
    pub common_uses: Vec<String>,
}

impl FoodRecord {
    /// Placeholder for a seasonal key with no catalog entry.
    pub fn placeholder(key: &str, season: Season) -> Self {
        Self {
            id: format!("temp_{key}"),
            name: super::helpers::title_case(key),
            energetic_type: EnergeticType::Neutral,
            season: None,
            benefits: format!("Seasonal food for {season}"),
            warnings: None,
            image_ref: None,
            common_uses: Vec::new(),
        }
    }
}

/// A pairing of two catalog keys; matches only when both keys are present
/// in the detected set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CompatibilityRule {
    #[serde(rename = "food1")]
    pub food_key_a: String,
    #[serde(rename = "food2")]
    pub food_key_b: String,
    pub reason: String,
    pub polarity: Polarity,
}

impl CompatibilityRule {
    pub fn new(food_key_a: &str, food_key_b: &str, reason: &str, polarity: Polarity) -> Self {
        Self {
            food_key_a: food_key_a.to_string(),
            food_key_b: food_key_b.to_string(),
            reason: reason.to_string(),
            polarity,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,
    pub name: String,
    pub ingredients: Vec<String>,
    pub instructions: String,
    #[serde(rename = "prepTime")]
    pub prep_time_minutes: u32,
    pub energetic_balance: EnergeticType,
}

impl Recipe {
    pub fn uses(&self, key: &str) -> bool {
        self.ingredients.iter().any(|ingredient| ingredient == key)
    }
}
