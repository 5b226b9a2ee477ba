use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    identification::{entities::FoodIdentification, value_objects::IdentifyFoodInput},
};

/// External image-labelling collaborator.
///
/// Returns text labels ranked from most to least confident.
pub trait LabelDetector: Send + Sync {
    fn detect_labels(
        &self,
        image_data: Vec<u8>,
    ) -> impl Future<Output = Result<Vec<String>, CoreError>> + Send;
}

/// Service trait for turning an uploaded image into a food description
pub trait IdentificationService: Send + Sync {
    fn identify_food(
        &self,
        input: IdentifyFoodInput,
    ) -> impl Future<Output = Result<FoodIdentification, CoreError>> + Send;
}
