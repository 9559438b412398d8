//! Configuration management for helm

pub mod config;
pub mod plugins;
pub mod render;

#[cfg(test)]
mod tests;

// Re-export main types for convenience
pub use config::{Config, CONFIG_VERSION};
pub use plugins::PluginsConfig;
pub use render::RenderConfig;
