use tracing::debug;

use crate::domain::{
    combination::{
        helpers::analyze,
        ports::CombinationService,
        value_objects::{AnalyzeCombinationInput, CombinationAnalysis, HEALTH_CONDITIONS},
    },
    common::{entities::app_errors::CoreError, services::Service},
    food::ports::CatalogRepository,
    identification::{ports::LabelDetector, value_objects::DETECTED_INGREDIENT_COUNT},
};

impl<C, LD> CombinationService for Service<C, LD>
where
    C: CatalogRepository,
    LD: LabelDetector,
{
    async fn analyze_combination(
        &self,
        input: AnalyzeCombinationInput,
    ) -> Result<CombinationAnalysis, CoreError> {
        // An empty list counts as not given.
        let ingredients = input
            .ingredients
            .filter(|ingredients| !ingredients.is_empty());

        let detected = match (ingredients, input.image_data) {
            (Some(ingredients), _) => ingredients
                .into_iter()
                .map(|key| key.trim().to_lowercase())
                .collect(),
            (None, Some(image_data)) => {
                self.detect_ingredients(&image_data, DETECTED_INGREDIENT_COUNT)
                    .await?
            }
            (None, None) => {
                return Err(CoreError::Invalid(
                    "an image or a list of ingredients is required".to_string(),
                ));
            }
        };

        debug!(?detected, "analyzing combination");

        Ok(analyze(
            &self.catalog_repository,
            &detected,
            &input.health_notes,
        ))
    }

    async fn get_health_conditions(&self) -> Result<Vec<String>, CoreError> {
        Ok(HEALTH_CONDITIONS.iter().map(|c| c.to_string()).collect())
    }
}
