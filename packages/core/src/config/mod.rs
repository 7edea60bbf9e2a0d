//! Configuration management
//!
//! Schema, filesystem paths, and load/save for the config.json file.

pub mod paths;
mod schema;
mod store;

pub use schema::Config;
pub use store::{ConfigError, load_config_from, load_config_or_default, save_config};
