pub mod combination;
pub mod common;
pub mod food;
pub mod identification;
