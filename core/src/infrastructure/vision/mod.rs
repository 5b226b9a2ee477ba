pub mod google_vision_client;

pub use google_vision_client::*;
