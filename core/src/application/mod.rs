use tracing::info;

use crate::{
    domain::{
        common::{FoodEnergyConfig, entities::app_errors::CoreError, services::Service},
        identification::entities::IdentificationStrategy,
    },
    infrastructure::{catalog::StaticCatalogRepository, vision::GoogleVisionClient},
};

pub type FoodEnergyService = Service<StaticCatalogRepository, GoogleVisionClient>;

pub fn create_service(config: FoodEnergyConfig) -> Result<FoodEnergyService, CoreError> {
    let strategy = config.identification.strategy;
    let label_detector = GoogleVisionClient::new(&config.vision)?;

    if strategy == IdentificationStrategy::Label && !label_detector.is_configured() {
        return Err(CoreError::InvalidConfiguration(
            "the label identification strategy requires a vision API key".to_string(),
        ));
    }

    let catalog_repository = StaticCatalogRepository::seeded();

    info!(
        foods = catalog_repository.len(),
        strategy = %strategy,
        "food catalog loaded"
    );

    Ok(Service::new(catalog_repository, label_detector, strategy))
}
