use std::future::Future;

use crate::domain::{
    combination::value_objects::{AnalyzeCombinationInput, CombinationAnalysis},
    common::entities::app_errors::CoreError,
};

/// Service trait for food pairing analysis
pub trait CombinationService: Send + Sync {
    fn analyze_combination(
        &self,
        input: AnalyzeCombinationInput,
    ) -> impl Future<Output = Result<CombinationAnalysis, CoreError>> + Send;

    fn get_health_conditions(&self) -> impl Future<Output = Result<Vec<String>, CoreError>> + Send;
}
