use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::frames::is_frame_complete;
use crate::domain::rules::LAST_FRAME_NO;
use crate::errors::domain::{DomainError, NotFoundKind};

/// Pins knocked down by one ball (0..=10).
pub type Pins = u8;
/// Frame or game score; a perfect game is 300.
pub type Score = u16;

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub Uuid);

        impl $name {
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0, f)
            }
        }
    };
}

entity_id!(
    /// Identifier of a game.
    GameId
);
entity_id!(
    /// Identifier of a player within one game.
    PlayerId
);
entity_id!(
    /// Identifier of a single frame row.
    FrameId
);

/// Classification of a frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FrameType {
    /// Not enough balls rolled yet to tell.
    #[default]
    Undetermined,
    Open,
    Spare,
    Strike,
}

/// Overall game progression.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameStatus {
    #[default]
    InProgress,
    /// Terminal: the last player finished the tenth frame.
    Completed,
}

/// One of a player's ten scoring units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    pub id: FrameId,
    /// 1-based frame number (1..=10).
    pub frame_no: u8,
    /// Pin counts in the order they were rolled.
    pub rolls: Vec<Pins>,
    #[serde(rename = "type")]
    pub frame_type: FrameType,
    /// Sum of this frame's own rolls, before bonuses.
    pub score: Score,
}

impl Frame {
    pub fn new(frame_no: u8) -> Self {
        Self {
            id: FrameId::new(),
            frame_no,
            rolls: Vec::with_capacity(2),
            frame_type: FrameType::Undetermined,
            score: 0,
        }
    }

    #[inline]
    pub fn is_last(&self) -> bool {
        self.frame_no == LAST_FRAME_NO
    }

    #[inline]
    pub fn first_roll(&self) -> Option<Pins> {
        self.rolls.first().copied()
    }

    #[inline]
    pub fn second_roll(&self) -> Option<Pins> {
        self.rolls.get(1).copied()
    }

    pub fn pins_total(&self) -> Score {
        self.rolls.iter().map(|&p| Score::from(p)).sum()
    }

    /// No more balls are accepted in this frame.
    pub fn is_complete(&self) -> bool {
        is_frame_complete(self.frame_no, &self.rolls)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    /// 0-based position in play order.
    pub order: usize,
    /// Always ten frames, frame_no 1..=10 in order.
    pub frames: Vec<Frame>,
    /// Cumulative score including bonuses known so far.
    pub score: Score,
}

/// Entire game container, sufficient for pure domain operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub id: GameId,
    /// Play order is insertion order.
    pub players: Vec<Player>,
    pub current_player_index: usize,
    /// 0-based (0..=9).
    pub current_frame_index: usize,
    /// Balls already taken in the active frame.
    pub current_roll_index: usize,
    pub status: GameStatus,
}

impl Game {
    #[inline]
    pub fn is_completed(&self) -> bool {
        self.status == GameStatus::Completed
    }

    #[inline]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Player expected to roll next, or `None` once the game is over.
    pub fn to_act(&self) -> Option<&Player> {
        if self.is_completed() {
            return None;
        }
        self.players.get(self.current_player_index)
    }
}

pub fn require_current_player<'a>(
    game: &'a Game,
    ctx: &'static str,
) -> Result<&'a Player, DomainError> {
    game.players.get(game.current_player_index).ok_or_else(|| {
        DomainError::not_found(
            NotFoundKind::Player,
            format!(
                "no player at index {} of {} ({ctx})",
                game.current_player_index,
                game.players.len()
            ),
        )
    })
}

pub fn require_current_frame<'a>(
    game: &Game,
    player: &'a Player,
    ctx: &'static str,
) -> Result<&'a Frame, DomainError> {
    player.frames.get(game.current_frame_index).ok_or_else(|| {
        DomainError::not_found(
            NotFoundKind::Frame,
            format!(
                "player {} has no frame at index {} ({ctx})",
                player.id, game.current_frame_index
            ),
        )
    })
}
