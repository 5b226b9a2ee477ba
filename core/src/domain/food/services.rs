use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    food::{
        entities::{FoodRecord, Polarity, Recipe, Season},
        helpers::key_matches_query,
        ports::{CatalogRepository, FoodService},
        value_objects::{
            CompatibilityRules, GetSeasonalFoodsInput, SearchFoodsInput, SeasonSummary,
            SeasonalFoods,
        },
    },
    identification::ports::LabelDetector,
};

impl<C, LD> Service<C, LD>
where
    C: CatalogRepository,
    LD: LabelDetector,
{
    /// Resolves a user-facing `id` to its catalog key.
    pub(crate) fn find_key_by_id(&self, id: &str) -> Option<(String, FoodRecord)> {
        self.catalog_repository
            .all()
            .into_iter()
            .find(|(_, record)| record.id == id)
    }

    /// Recipes using `key`, in catalog order.
    pub(crate) fn recipes_using(&self, key: &str) -> Vec<Recipe> {
        self.catalog_repository
            .recipes()
            .into_iter()
            .filter(|recipe| recipe.uses(key))
            .collect()
    }
}

impl<C, LD> FoodService for Service<C, LD>
where
    C: CatalogRepository,
    LD: LabelDetector,
{
    async fn search_foods(&self, input: SearchFoodsInput) -> Result<Vec<FoodRecord>, CoreError> {
        let foods = self
            .catalog_repository
            .all()
            .into_iter()
            .filter(|(key, _)| key_matches_query(key, &input.name))
            .map(|(_, record)| record)
            .collect();

        Ok(foods)
    }

    async fn get_food(&self, id: String) -> Result<FoodRecord, CoreError> {
        self.find_key_by_id(&id)
            .map(|(_, record)| record)
            .ok_or(CoreError::NotFound)
    }

    async fn get_recipes_by_food(&self, id: String) -> Result<Vec<Recipe>, CoreError> {
        let (key, _) = self.find_key_by_id(&id).ok_or(CoreError::NotFound)?;

        Ok(self.recipes_using(&key))
    }

    async fn get_recipes(&self) -> Result<Vec<Recipe>, CoreError> {
        Ok(self.catalog_repository.recipes())
    }

    async fn get_seasonal_foods(
        &self,
        input: GetSeasonalFoodsInput,
    ) -> Result<SeasonalFoods, CoreError> {
        let season: Season = input.season.parse()?;

        let foods = self
            .catalog_repository
            .seasonal_keys(season)
            .iter()
            .map(|key| {
                self.catalog_repository
                    .get(key)
                    .unwrap_or_else(|| FoodRecord::placeholder(key, season))
            })
            .collect();

        Ok(SeasonalFoods { season, foods })
    }

    async fn get_seasons(&self) -> Result<Vec<SeasonSummary>, CoreError> {
        let seasons = Season::ALL
            .iter()
            .map(|season| SeasonSummary {
                season: *season,
                food_keys: self.catalog_repository.seasonal_keys(*season),
            })
            .collect();

        Ok(seasons)
    }

    async fn get_compatibility_rules(&self) -> Result<CompatibilityRules, CoreError> {
        Ok(CompatibilityRules {
            good: self.catalog_repository.rules(Polarity::Good),
            bad: self.catalog_repository.rules(Polarity::Bad),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::identification::{entities::IdentificationStrategy, ports::stubs::StubLabelDetector},
        infrastructure::catalog::StaticCatalogRepository,
    };

    fn service() -> Service<StaticCatalogRepository, StubLabelDetector> {
        Service::new(
            StaticCatalogRepository::seeded(),
            StubLabelDetector::default(),
            IdentificationStrategy::Hash,
        )
    }

    #[tokio::test]
    async fn test_search_is_case_insensitive_substring() {
        let foods = service()
            .search_foods(SearchFoodsInput {
                name: "GIN".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(foods.len(), 1);
        assert_eq!(foods[0].name, "Ginger");
    }

    #[tokio::test]
    async fn test_empty_search_returns_every_record_in_order() {
        let service = service();
        let foods = service
            .search_foods(SearchFoodsInput {
                name: String::new(),
            })
            .await
            .unwrap();

        let expected: Vec<FoodRecord> = service
            .catalog()
            .all()
            .into_iter()
            .map(|(_, record)| record)
            .collect();
        assert_eq!(foods, expected);
    }

    #[tokio::test]
    async fn test_get_food_matches_on_id_not_key() {
        let service = service();

        let food = service.get_food("3".to_string()).await.unwrap();
        assert_eq!(food.name, "White Rice");

        assert_eq!(
            service.get_food("rice".to_string()).await,
            Err(CoreError::NotFound)
        );
        assert_eq!(
            service.get_food("999".to_string()).await,
            Err(CoreError::NotFound)
        );
    }

    #[tokio::test]
    async fn test_recipes_by_food() {
        let service = service();

        let recipes = service.get_recipes_by_food("1".to_string()).await.unwrap();
        let ids: Vec<&str> = recipes.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["r1"]);
        assert!(recipes.iter().all(|r| r.uses("ginger")));

        // Apple exists but no recipe uses it.
        let recipes = service.get_recipes_by_food("13".to_string()).await.unwrap();
        assert!(recipes.is_empty());

        assert_eq!(
            service.get_recipes_by_food("nope".to_string()).await,
            Err(CoreError::NotFound)
        );
    }

    #[tokio::test]
    async fn test_seasonal_foods_preserve_stored_order() {
        let service = service();

        for season in Season::ALL {
            let result = service
                .get_seasonal_foods(GetSeasonalFoodsInput {
                    season: season.as_str().to_uppercase(),
                })
                .await
                .unwrap();

            let keys = service.catalog().seasonal_keys(season);
            assert_eq!(result.season, season);
            assert!(!result.foods.is_empty());
            assert_eq!(result.foods.len(), keys.len());

            for (food, key) in result.foods.iter().zip(&keys) {
                let expected_id = match service.catalog().get(key) {
                    Some(record) => record.id,
                    None => format!("temp_{key}"),
                };
                assert_eq!(food.id, expected_id, "{season} order differs at {key}");
            }
        }
    }

    #[tokio::test]
    async fn test_seasonal_foods_synthesize_missing_keys() {
        let result = service()
            .get_seasonal_foods(GetSeasonalFoodsInput {
                season: "spring".to_string(),
            })
            .await
            .unwrap();

        let names: Vec<&str> = result.foods.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Spinach", "Bamboo Shoots", "Strawberry", "Green Tea"]
        );
        // "bamboo shoots" is stored with a space, the catalog key uses an underscore.
        assert_eq!(result.foods[1].id, "temp_bamboo shoots");
        assert_eq!(result.foods[0].id, "6");
    }

    #[tokio::test]
    async fn test_invalid_season() {
        let result = service()
            .get_seasonal_foods(GetSeasonalFoodsInput {
                season: "autumn".to_string(),
            })
            .await;

        assert_eq!(result, Err(CoreError::InvalidSeason("autumn".to_string())));
    }

    #[tokio::test]
    async fn test_compatibility_rules_split_by_polarity() {
        let rules = service().get_compatibility_rules().await.unwrap();

        assert_eq!(rules.good.len(), 3);
        assert_eq!(rules.bad.len(), 3);
        assert!(rules.good.iter().all(|r| r.polarity == Polarity::Good));
        assert!(rules.bad.iter().all(|r| r.polarity == Polarity::Bad));
    }
}
