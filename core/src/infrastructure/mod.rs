pub mod catalog;
pub mod vision;
