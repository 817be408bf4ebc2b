//! Persistent presentation preferences and transient-effect timings.
//!
//! Owns the [`FormConfig`] data structure plus disk persistence helpers.

pub mod error;
pub mod manager;
pub mod model;

pub use error::ConfigError;
pub use manager::ConfigManager;
pub use model::FormConfig;
