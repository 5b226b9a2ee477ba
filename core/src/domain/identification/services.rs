use tracing::debug;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    food::ports::CatalogRepository,
    identification::{
        entities::{FoodIdentification, IdentificationStrategy},
        helpers::{
            build_identification, hash_index, hash_indices, match_label, match_labels,
            random_key, random_keys,
        },
        ports::{IdentificationService, LabelDetector},
        value_objects::IdentifyFoodInput,
    },
};

impl<C, LD> Service<C, LD>
where
    C: CatalogRepository,
    LD: LabelDetector,
{
    /// Catalog key (or raw external label) selected for `image_data`.
    pub(crate) async fn select_candidate(
        &self,
        image_data: &[u8],
    ) -> Result<Option<String>, CoreError> {
        let keys = self.catalog_repository.keys();

        let candidate = match self.strategy {
            IdentificationStrategy::Random => random_key(&keys),
            IdentificationStrategy::Hash => {
                hash_index(image_data, keys.len()).and_then(|index| keys.get(index).cloned())
            }
            IdentificationStrategy::Label => {
                let labels = self
                    .label_detector
                    .detect_labels(image_data.to_vec())
                    .await?;
                debug!(?labels, "labels detected");
                match_label(&labels, &keys)
            }
        };

        Ok(candidate)
    }

    /// Up to `count` distinct catalog keys detected in `image_data`.
    pub(crate) async fn detect_ingredients(
        &self,
        image_data: &[u8],
        count: usize,
    ) -> Result<Vec<String>, CoreError> {
        let keys = self.catalog_repository.keys();

        let detected = match self.strategy {
            IdentificationStrategy::Random => random_keys(&keys, count),
            IdentificationStrategy::Hash => hash_indices(image_data, keys.len(), count)
                .into_iter()
                .filter_map(|index| keys.get(index).cloned())
                .collect(),
            IdentificationStrategy::Label => {
                let labels = self
                    .label_detector
                    .detect_labels(image_data.to_vec())
                    .await?;
                match_labels(&labels, &keys, count)
            }
        };

        Ok(detected)
    }
}

impl<C, LD> IdentificationService for Service<C, LD>
where
    C: CatalogRepository,
    LD: LabelDetector,
{
    async fn identify_food(&self, input: IdentifyFoodInput) -> Result<FoodIdentification, CoreError> {
        let candidate = self.select_candidate(&input.image_data).await?;

        debug!(
            strategy = %self.strategy,
            candidate = ?candidate,
            size = input.image_data.len(),
            "food identified"
        );

        Ok(build_identification(
            &self.catalog_repository,
            candidate.as_deref(),
        ))
    }
}
