pub mod combination;
pub mod food;
pub mod health;
pub mod identification;
pub mod recipe;
pub mod season;
pub mod server;
pub mod upload;
