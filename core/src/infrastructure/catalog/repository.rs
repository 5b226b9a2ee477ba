use std::{
    collections::{HashMap, HashSet},
    sync::Arc,
};

use tracing::{debug, warn};

use crate::{
    domain::food::{
        entities::{CompatibilityRule, FoodRecord, Polarity, Recipe, Season},
        ports::CatalogRepository,
    },
    infrastructure::catalog::data,
};

#[derive(Debug, Default)]
struct Catalog {
    foods: Vec<(String, FoodRecord)>,
    index: HashMap<String, usize>,
    seasonal: HashMap<Season, Vec<String>>,
    rules: Vec<CompatibilityRule>,
    recipes: Vec<Recipe>,
}

/// In-memory catalog built once and shared between request handlers.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalogRepository {
    catalog: Arc<Catalog>,
}

impl StaticCatalogRepository {
    /// Catalog populated with the built-in food data.
    pub fn seeded() -> Self {
        let mut builder = Self::builder();

        for (key, record) in data::foods() {
            builder = builder.food(key, record);
        }
        for (season, keys) in data::seasonal_recommendations() {
            builder = builder.seasonal(season, &keys);
        }
        for rule in data::compatibility_rules() {
            builder = builder.rule(rule);
        }
        for recipe in data::recipes() {
            builder = builder.recipe(recipe);
        }

        builder.build()
    }

    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }

    pub fn len(&self) -> usize {
        self.catalog.foods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.catalog.foods.is_empty()
    }
}

#[derive(Debug, Default)]
pub struct CatalogBuilder {
    catalog: Catalog,
}

impl CatalogBuilder {
    /// Adds a record under `key`. A repeated key replaces the earlier record
    /// in place, keeping its position.
    pub fn food(mut self, key: &str, record: FoodRecord) -> Self {
        let key = key.to_lowercase();
        match self.catalog.index.get(&key) {
            Some(&position) => self.catalog.foods[position] = (key, record),
            None => {
                self.catalog
                    .index
                    .insert(key.clone(), self.catalog.foods.len());
                self.catalog.foods.push((key, record));
            }
        }
        self
    }

    pub fn seasonal(mut self, season: Season, keys: &[&str]) -> Self {
        self.catalog
            .seasonal
            .insert(season, keys.iter().map(|k| k.to_string()).collect());
        self
    }

    pub fn rule(mut self, rule: CompatibilityRule) -> Self {
        self.catalog.rules.push(rule);
        self
    }

    pub fn recipe(mut self, recipe: Recipe) -> Self {
        self.catalog.recipes.push(recipe);
        self
    }

    pub fn build(self) -> StaticCatalogRepository {
        let catalog = self.catalog;

        let mut seen = HashSet::new();
        for (key, record) in &catalog.foods {
            if !seen.insert(record.id.as_str()) {
                warn!(key = %key, id = %record.id, "duplicate food id in catalog");
            }
        }

        for rule in &catalog.rules {
            for key in [&rule.food_key_a, &rule.food_key_b] {
                if !catalog.index.contains_key(key) {
                    debug!(key = %key, "compatibility rule references a key outside the catalog");
                }
            }
        }

        StaticCatalogRepository {
            catalog: Arc::new(catalog),
        }
    }
}

impl CatalogRepository for StaticCatalogRepository {
    fn get(&self, key: &str) -> Option<FoodRecord> {
        self.catalog
            .index
            .get(key)
            .map(|&position| self.catalog.foods[position].1.clone())
    }

    fn all(&self) -> Vec<(String, FoodRecord)> {
        self.catalog.foods.clone()
    }

    fn keys(&self) -> Vec<String> {
        self.catalog
            .foods
            .iter()
            .map(|(key, _)| key.clone())
            .collect()
    }

    fn seasonal_keys(&self, season: Season) -> Vec<String> {
        self.catalog
            .seasonal
            .get(&season)
            .cloned()
            .unwrap_or_default()
    }

    fn rules(&self, polarity: Polarity) -> Vec<CompatibilityRule> {
        self.catalog
            .rules
            .iter()
            .filter(|rule| rule.polarity == polarity)
            .cloned()
            .collect()
    }

    fn recipes(&self) -> Vec<Recipe> {
        self.catalog.recipes.clone()
    }
}
