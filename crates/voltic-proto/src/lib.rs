pub mod config;

pub use config::{BatteryIconConfig, Color, ConfigValidationError, Palette};
