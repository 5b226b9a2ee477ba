use std::sync::Arc;

use food_energy_core::application::FoodEnergyService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: FoodEnergyService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: FoodEnergyService) -> Self {
        Self { args, service }
    }
}
