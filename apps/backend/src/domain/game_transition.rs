use crate::domain::state::{FrameType, Game};
use crate::domain::turns::TurnPosition;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameTransition {
    /// Edge-triggered: a player closed a frame.
    FrameCompleted {
        player_index: usize,
        frame_no: u8,
        frame_type: FrameType,
    },

    /// Edge-triggered: the turn moved to a different (player, frame).
    TurnBecame { player_index: usize, frame_no: u8 },

    /// Edge-triggered: Game moved from InProgress -> Completed
    GameEnded,
}

/// Derive domain transitions from a before/after pair of snapshots.
pub fn derive_game_transitions(before: &Game, after: &Game) -> Vec<GameTransition> {
    let mut transitions = Vec::new();

    // 1. Frame completion for whoever was up before
    let frame_before = before
        .players
        .get(before.current_player_index)
        .and_then(|p| p.frames.get(before.current_frame_index));
    let frame_after = after
        .players
        .get(before.current_player_index)
        .and_then(|p| p.frames.get(before.current_frame_index));
    if let (Some(was), Some(now)) = (frame_before, frame_after) {
        if !was.is_complete() && now.is_complete() {
            transitions.push(GameTransition::FrameCompleted {
                player_index: before.current_player_index,
                frame_no: now.frame_no,
                frame_type: now.frame_type,
            });
        }
    }

    // 2. Turn change (only while someone can still act)
    if !after.is_completed() && TurnPosition::of(before) != TurnPosition::of(after) {
        let up_next = after
            .players
            .get(after.current_player_index)
            .and_then(|p| p.frames.get(after.current_frame_index));
        if let Some(frame) = up_next {
            transitions.push(GameTransition::TurnBecame {
                player_index: after.current_player_index,
                frame_no: frame.frame_no,
            });
        }
    }

    // 3. Game End (!Completed -> Completed)
    if !before.is_completed() && after.is_completed() {
        transitions.push(GameTransition::GameEnded);
    }

    transitions
}
