pub mod category;
pub mod config;
pub mod result;
pub mod thresholds;
pub mod tier;
