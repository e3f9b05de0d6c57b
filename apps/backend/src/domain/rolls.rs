use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::frames::classify;
use crate::domain::scoring::calculate_score;
use crate::domain::state::{
    require_current_frame, require_current_player, FrameId, FrameType, Game, GameStatus, Pins,
    PlayerId, Score,
};
use crate::domain::turns::advance;
use crate::errors::domain::{ConflictKind, DomainError, NotFoundKind};

/// A write the host must persist after a roll, in application order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum PersistOp {
    FrameUpdated {
        frame_id: FrameId,
        rolls: Vec<Pins>,
        frame_type: FrameType,
        score: Score,
    },
    PlayerScoreUpdated {
        player_id: PlayerId,
        score: Score,
    },
    GameProgressUpdated {
        current_player_index: usize,
        current_frame_index: usize,
        current_roll_index: usize,
        status: GameStatus,
    },
}

/// Result of rolling a ball, describing the new state and what changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RollOutcome {
    pub game: Game,
    pub writes: Vec<PersistOp>,
    /// Whether the ball closed the frame (and so moved the turn).
    pub frame_completed: bool,
}

/// Roll one ball for whoever is up.
///
/// Everything is validated before the new snapshot is built, so on error the
/// caller still holds the untouched input.
pub fn apply_roll(game: &Game, pins: Pins) -> Result<RollOutcome, DomainError> {
    if game.is_completed() {
        return Err(DomainError::conflict(
            ConflictKind::GameAlreadyCompleted,
            format!("game {} is already completed", game.id),
        ));
    }

    let player = require_current_player(game, "apply_roll")?;
    let frame = require_current_frame(game, player, "apply_roll")?;
    if frame.rolls.len() != game.current_roll_index {
        return Err(DomainError::not_found(
            NotFoundKind::Frame,
            format!(
                "frame {} holds {} balls but the game points at ball {}",
                frame.frame_no,
                frame.rolls.len(),
                game.current_roll_index + 1
            ),
        ));
    }
    let (frame, frame_completed) = classify(frame, pins)?;

    debug!(
        game_id = %game.id,
        player = game.current_player_index,
        frame_no = frame.frame_no,
        pins,
        frame_type = ?frame.frame_type,
        frame_completed,
        "Roll recorded"
    );

    let mut next = game.clone();
    let player = &mut next.players[game.current_player_index];
    let mut writes = vec![PersistOp::FrameUpdated {
        frame_id: frame.id,
        rolls: frame.rolls.clone(),
        frame_type: frame.frame_type,
        score: frame.score,
    }];
    player.frames[game.current_frame_index] = frame;
    player.score = calculate_score(&player.frames);
    writes.push(PersistOp::PlayerScoreUpdated {
        player_id: player.id,
        score: player.score,
    });

    let next = if frame_completed {
        advance(next)
    } else {
        next.current_roll_index += 1;
        next
    };
    writes.push(PersistOp::GameProgressUpdated {
        current_player_index: next.current_player_index,
        current_frame_index: next.current_frame_index,
        current_roll_index: next.current_roll_index,
        status: next.status,
    });

    Ok(RollOutcome {
        game: next,
        writes,
        frame_completed,
    })
}

/// Apply a sequence of balls, stopping at the first error.
pub fn replay(game: &Game, rolls: &[Pins]) -> Result<Game, DomainError> {
    let mut current = game.clone();
    for &pins in rolls {
        current = apply_roll(&current, pins)?.game;
    }
    Ok(current)
}
