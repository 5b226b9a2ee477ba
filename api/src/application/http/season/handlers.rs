pub mod get_seasonal_foods;
pub mod get_seasons;
