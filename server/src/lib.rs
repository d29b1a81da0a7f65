//! LightBnB data-access layer
//!
//! - `core` - CLI, configuration and constants
//! - `data` - listing store backends, SQL dialects and the property filter builder
//! - `utils` - small shared helpers

pub mod app;
pub mod core;
pub mod data;
pub mod utils;
