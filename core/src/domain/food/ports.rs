use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    food::{
        entities::{CompatibilityRule, FoodRecord, Polarity, Recipe, Season},
        value_objects::{
            CompatibilityRules, GetSeasonalFoodsInput, SearchFoodsInput, SeasonSummary,
            SeasonalFoods,
        },
    },
};

/// Read-only access to the food catalog.
///
/// Every sequence is returned in storage order. Misses are `None` or empty,
/// never errors.
#[cfg_attr(test, mockall::automock)]
pub trait CatalogRepository: Send + Sync {
    fn get(&self, key: &str) -> Option<FoodRecord>;

    /// All `(key, record)` pairs in insertion order.
    fn all(&self) -> Vec<(String, FoodRecord)>;

    fn keys(&self) -> Vec<String>;

    fn seasonal_keys(&self, season: Season) -> Vec<String>;

    fn rules(&self, polarity: Polarity) -> Vec<CompatibilityRule>;

    fn recipes(&self) -> Vec<Recipe>;
}

/// Service trait for catalog lookups
pub trait FoodService: Send + Sync {
    fn search_foods(
        &self,
        input: SearchFoodsInput,
    ) -> impl Future<Output = Result<Vec<FoodRecord>, CoreError>> + Send;

    fn get_food(&self, id: String) -> impl Future<Output = Result<FoodRecord, CoreError>> + Send;

    fn get_recipes_by_food(
        &self,
        id: String,
    ) -> impl Future<Output = Result<Vec<Recipe>, CoreError>> + Send;

    fn get_recipes(&self) -> impl Future<Output = Result<Vec<Recipe>, CoreError>> + Send;

    fn get_seasonal_foods(
        &self,
        input: GetSeasonalFoodsInput,
    ) -> impl Future<Output = Result<SeasonalFoods, CoreError>> + Send;

    fn get_seasons(&self) -> impl Future<Output = Result<Vec<SeasonSummary>, CoreError>> + Send;

    fn get_compatibility_rules(
        &self,
    ) -> impl Future<Output = Result<CompatibilityRules, CoreError>> + Send;
}
