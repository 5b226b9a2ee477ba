pub mod get_recipes;
pub mod get_recipes_by_food;
