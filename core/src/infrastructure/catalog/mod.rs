pub mod data;
pub mod repository;

pub use repository::*;
