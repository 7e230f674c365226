pub mod config;
pub mod defaults;
pub mod logging;
pub mod platform;
pub mod render;

pub use config::AttributeOverrides;
pub use defaults::{resolve, ConfigurationDefaults};
pub use render::{render, OutputFormat};
