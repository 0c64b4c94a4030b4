// Configuration module for limits and console output
pub mod grid_config;

pub use grid_config::{BandConfig, DisplayConfig, PlacementLimits, ROW_LETTER_LIMIT};
