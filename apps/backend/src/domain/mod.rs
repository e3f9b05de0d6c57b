//! Domain layer: pure bowling rules, no storage or transport.

pub mod frames;
pub mod game_transition;
pub mod rolls;
pub mod rules;
pub mod scoring;
pub mod setup;
pub mod snapshot;
pub mod state;
pub mod turns;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod tests_frames;
#[cfg(test)]
mod tests_snapshot;

// Re-exports for ergonomics
pub use frames::classify;
pub use rolls::{apply_roll, replay, PersistOp, RollOutcome};
pub use scoring::{calculate_score, running_totals};
pub use setup::create_initial_state;
pub use snapshot::GameSnapshot;
pub use state::{Frame, FrameType, Game, GameId, GameStatus, Pins, Player, PlayerId, Score};
pub use turns::advance;
