//! Infrastructure layer for the resource embedding engine
//!
//! Configuration loading (figment: defaults, TOML file, environment),
//! logging initialization, and construction of the configured provider
//! implementations.

pub mod bootstrap;
pub mod config;
pub mod logging;

pub use bootstrap::{build_generator, build_store};
pub use config::{AppConfig, ConfigLoader, GenerationMode};
