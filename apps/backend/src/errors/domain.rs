//! Domain-level error type returned by every engine operation.
//!
//! The type is transport- and storage-agnostic. Hosts map it to their own
//! responses through [`DomainError::code`].

use thiserror::Error;

use crate::errors::error_code::ErrorCode;

/// Validation failures: the request itself breaks a rule.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    InvalidRoll,
    TooManyPlayers,
    NoPlayers,
    InvalidPlayerName,
}

/// Conflicts with the current game state.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConflictKind {
    GameAlreadyCompleted,
}

/// Snapshot pointers that do not resolve to an entity.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NotFoundKind {
    Player,
    Frame,
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Input validation or rule violation
    #[error("validation error {0:?}: {1}")]
    Validation(ValidationKind, String),
    /// Operation not allowed in the current state
    #[error("conflict {0:?}: {1}")]
    Conflict(ConflictKind, String),
    /// Stale or malformed snapshot
    #[error("not found {0:?}: {1}")]
    NotFound(NotFoundKind, String),
}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }

    pub fn conflict(kind: ConflictKind, detail: impl Into<String>) -> Self {
        Self::Conflict(kind, detail.into())
    }

    pub fn not_found(kind: NotFoundKind, detail: impl Into<String>) -> Self {
        Self::NotFound(kind, detail.into())
    }

    pub fn invalid_roll(detail: impl Into<String>) -> Self {
        Self::validation(ValidationKind::InvalidRoll, detail)
    }

    /// Stable code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            DomainError::Validation(kind, _) => match kind {
                ValidationKind::InvalidRoll => ErrorCode::InvalidRoll,
                ValidationKind::TooManyPlayers => ErrorCode::TooManyPlayers,
                ValidationKind::NoPlayers => ErrorCode::NoPlayers,
                ValidationKind::InvalidPlayerName => ErrorCode::InvalidPlayerName,
            },
            DomainError::Conflict(ConflictKind::GameAlreadyCompleted, _) => {
                ErrorCode::GameAlreadyCompleted
            }
            DomainError::NotFound(kind, _) => match kind {
                NotFoundKind::Player => ErrorCode::PlayerNotFound,
                NotFoundKind::Frame => ErrorCode::FrameNotFound,
            },
        }
    }

    /// Human-readable detail without the kind prefix.
    pub fn detail(&self) -> &str {
        match self {
            DomainError::Validation(_, d)
            | DomainError::Conflict(_, d)
            | DomainError::NotFound(_, d) => d,
        }
    }
}
