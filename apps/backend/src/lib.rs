#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod config;
pub mod domain;
pub mod errors;
pub mod telemetry;


// Re-exports for public API
pub use config::{ConfigError, EngineConfig};
pub use domain::{
    advance, apply_roll, calculate_score, classify, create_initial_state, Game, GameSnapshot,
    GameStatus, RollOutcome,
};
pub use errors::{DomainError, ErrorCode};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
