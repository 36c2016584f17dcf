pub mod dashboard;
pub mod generator;
pub mod quiz;
pub mod stats;
