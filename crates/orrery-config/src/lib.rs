//! Configuration system for the orrery visualizer.
//!
//! Provides runtime-configurable settings that persist to disk as RON files.
//! The application runs entirely on defaults when no file is present.

mod config;
mod error;

pub use config::{Config, DebugConfig, SceneConfig, WindowConfig};
pub use error::ConfigError;
