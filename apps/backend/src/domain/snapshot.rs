//! Public snapshot API for displaying a game without exposing internals.

use serde::{Deserialize, Serialize};

use crate::domain::scoring::running_totals;
use crate::domain::state::{FrameType, Game, GameId, GameStatus, Pins, Player, PlayerId, Score};
use crate::domain::turns::turns_remaining;

/// One box on the scorecard.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FramePublic {
    pub frame_no: u8,
    pub rolls: Vec<Pins>,
    #[serde(rename = "type")]
    pub frame_type: FrameType,
    /// Cumulative total through this frame; `None` until a ball is rolled.
    pub running_total: Option<Score>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerPublic {
    pub id: PlayerId,
    pub name: String,
    pub order: usize,
    pub score: Score,
    pub frames: Vec<FramePublic>,
}

/// Who is up, with 1-based numbers for display.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnPublic {
    pub player_index: usize,
    pub player_name: String,
    pub frame_no: u8,
    pub ball_no: u8,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub game_id: GameId,
    pub status: GameStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_act: Option<TurnPublic>,
    pub turns_remaining: usize,
    pub players: Vec<PlayerPublic>,
    /// Highest scorers once the game is completed; empty before that.
    pub winners: Vec<PlayerId>,
}

impl GameSnapshot {
    pub fn from_game(game: &Game) -> Self {
        let to_act = game.to_act().and_then(|p| {
            let frame = p.frames.get(game.current_frame_index)?;
            Some(TurnPublic {
                player_index: game.current_player_index,
                player_name: p.name.clone(),
                frame_no: frame.frame_no,
                ball_no: u8::try_from(game.current_roll_index + 1).ok()?,
            })
        });

        Self {
            game_id: game.id,
            status: game.status,
            to_act,
            turns_remaining: turns_remaining(game),
            players: game.players.iter().map(player_public).collect(),
            winners: winners(game),
        }
    }
}

fn player_public(player: &Player) -> PlayerPublic {
    let totals = running_totals(&player.frames);
    let frames = player
        .frames
        .iter()
        .zip(totals)
        .map(|(f, total)| FramePublic {
            frame_no: f.frame_no,
            rolls: f.rolls.clone(),
            frame_type: f.frame_type,
            running_total: (!f.rolls.is_empty()).then_some(total),
        })
        .collect();

    PlayerPublic {
        id: player.id,
        name: player.name.clone(),
        order: player.order,
        score: player.score,
        frames,
    }
}

/// Ties share the win.
pub fn winners(game: &Game) -> Vec<PlayerId> {
    if game.status != GameStatus::Completed {
        return Vec::new();
    }
    let Some(best) = game.players.iter().map(|p| p.score).max() else {
        return Vec::new();
    };
    game.players
        .iter()
        .filter(|p| p.score == best)
        .map(|p| p.id)
        .collect()
}
