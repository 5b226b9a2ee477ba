use crate::domain::{
    food::ports::CatalogRepository,
    identification::{entities::IdentificationStrategy, ports::LabelDetector},
};

/// Aggregate holding every adapter the domain services need.
///
/// Domain traits (`FoodService`, `IdentificationService`) are implemented
/// on this type in their own modules.
#[derive(Clone, Debug)]
pub struct Service<C, LD>
where
    C: CatalogRepository,
    LD: LabelDetector,
{
    pub(crate) catalog_repository: C,
    pub(crate) label_detector: LD,
    pub(crate) strategy: IdentificationStrategy,
}

impl<C, LD> Service<C, LD>
where
    C: CatalogRepository,
    LD: LabelDetector,
{
    pub fn new(catalog_repository: C, label_detector: LD, strategy: IdentificationStrategy) -> Self {
        Self {
            catalog_repository,
            label_detector,
            strategy,
        }
    }

    pub fn strategy(&self) -> IdentificationStrategy {
        self.strategy
    }

    pub fn catalog(&self) -> &C {
        &self.catalog_repository
    }
}
