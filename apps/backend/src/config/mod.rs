//! Runtime configuration for the engine.

pub mod engine;

pub use engine::{ConfigError, EngineConfig};
