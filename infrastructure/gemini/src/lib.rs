pub mod client;
pub mod vision_extractor;
