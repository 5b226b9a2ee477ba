use crate::domain::identification::entities::IdentificationStrategy;

pub mod entities;
pub mod services;

pub const DEFAULT_VISION_ENDPOINT: &str = "https://vision.googleapis.com/v1/images:annotate";

#[derive(Clone, Debug)]
pub struct FoodEnergyConfig {
    pub identification: IdentificationConfig,
    pub vision: VisionConfig,
}

#[derive(Clone, Debug)]
pub struct IdentificationConfig {
    pub strategy: IdentificationStrategy,
}

#[derive(Clone, Debug)]
pub struct VisionConfig {
    pub api_key: Option<String>,
    pub endpoint: String,
    pub timeout_secs: u64,
    pub max_labels: u32,
}

impl Default for VisionConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            endpoint: DEFAULT_VISION_ENDPOINT.to_string(),
            timeout_secs: 10,
            max_labels: 10,
        }
    }
}
