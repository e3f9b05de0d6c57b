//! Turn order math.
//!
//! Play runs frame by frame: every player bowls frame 1 in order, then every
//! player bowls frame 2, and so on. A "position" is the `(player, frame)`
//! pair that is up next; positions are numbered by `step` in play order.

use tracing::info;

use crate::domain::rules::FRAMES_PER_GAME;
use crate::domain::state::{Game, GameStatus};

/// A `(player_index, frame_index)` pointer, both 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TurnPosition {
    /// Frame first so the derived ordering is play order.
    pub frame_index: usize,
    pub player_index: usize,
}

impl TurnPosition {
    pub fn of(game: &Game) -> Self {
        Self {
            frame_index: game.current_frame_index,
            player_index: game.current_player_index,
        }
    }
}

/// Position following `pos`, or `None` when `pos` is the final turn.
pub fn next_position(player_count: usize, pos: TurnPosition) -> Option<TurnPosition> {
    let last_player = player_count.saturating_sub(1);
    if pos.player_index >= last_player {
        if pos.frame_index + 1 >= FRAMES_PER_GAME {
            return None;
        }
        return Some(TurnPosition {
            frame_index: pos.frame_index + 1,
            player_index: 0,
        });
    }
    Some(TurnPosition {
        frame_index: pos.frame_index,
        player_index: pos.player_index + 1,
    })
}

/// Position reached after `step` completed turns.
#[inline]
pub fn turn_at(player_count: usize, step: usize) -> Option<TurnPosition> {
    if player_count == 0 || step >= player_count * FRAMES_PER_GAME {
        return None;
    }
    Some(TurnPosition {
        frame_index: step / player_count,
        player_index: step % player_count,
    })
}

/// Turns still to be bowled, counting the current one.
pub fn turns_remaining(game: &Game) -> usize {
    if game.is_completed() {
        return 0;
    }
    let total = game.player_count() * FRAMES_PER_GAME;
    let done = game.current_frame_index * game.player_count() + game.current_player_index;
    total.saturating_sub(done)
}

/// Move the turn pointer past a just-completed frame.
///
/// Call once per frame completion. The last player's tenth frame completes
/// the game without moving the pointer; a completed game is returned as is.
pub fn advance(mut game: Game) -> Game {
    if game.is_completed() {
        return game;
    }

    match next_position(game.player_count(), TurnPosition::of(&game)) {
        Some(next) => {
            game.current_player_index = next.player_index;
            game.current_frame_index = next.frame_index;
        }
        None => {
            game.status = GameStatus::Completed;
            info!(game_id = %game.id, "Game completed");
        }
    }
    game.current_roll_index = 0;
    game
}
