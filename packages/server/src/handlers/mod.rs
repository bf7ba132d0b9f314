pub mod analytics;
pub mod export;
