/// Recipes attached to an identification response.
pub const MAX_IDENTIFICATION_RECIPES: usize = 3;

/// Ingredients picked out of a combination image.
pub const DETECTED_INGREDIENT_COUNT: usize = 3;

#[derive(Debug, Clone)]
pub struct IdentifyFoodInput {
    pub image_data: Vec<u8>,
}
