//! Machine-readable error codes for the bowling engine.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! All codes are SCREAMING_SNAKE_CASE and are what hosts surface to clients.

use core::fmt;

/// Centralized error codes.
///
/// Each variant maps to a canonical SCREAMING_SNAKE_CASE string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Roll validation
    /// Pin count out of range or violates the frame's standing pins
    InvalidRoll,

    // Game setup validation
    /// More players than the configured maximum
    TooManyPlayers,
    /// A game needs at least one player
    NoPlayers,
    /// Blank player name
    InvalidPlayerName,

    // State conflicts
    /// Roll attempted after the game completed
    GameAlreadyCompleted,

    // Snapshot lookups
    /// Current player index does not resolve
    PlayerNotFound,
    /// Current frame index does not resolve
    FrameNotFound,

    /// Engine configuration could not be loaded
    ConfigError,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidRoll => "INVALID_ROLL",

            Self::TooManyPlayers => "TOO_MANY_PLAYERS",
            Self::NoPlayers => "NO_PLAYERS",
            Self::InvalidPlayerName => "INVALID_PLAYER_NAME",

            Self::GameAlreadyCompleted => "GAME_ALREADY_COMPLETED",

            Self::PlayerNotFound => "PLAYER_NOT_FOUND",
            Self::FrameNotFound => "FRAME_NOT_FOUND",

            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
