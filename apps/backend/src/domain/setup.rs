use tracing::info;

use crate::config::EngineConfig;
use crate::domain::rules::FRAMES_PER_GAME;
use crate::domain::state::{Frame, Game, GameId, GameStatus, Player, PlayerId};
use crate::errors::domain::{DomainError, ValidationKind};

/// Build a fresh game: ten empty frames per player, pointers at the first
/// ball of frame 1 for the first player.
///
/// Names are trimmed; play order is the order given.
pub fn create_initial_state<I, S>(player_names: I, config: &EngineConfig) -> Result<Game, DomainError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let names: Vec<String> = player_names
        .into_iter()
        .map(|n| n.as_ref().trim().to_owned())
        .collect();

    if names.is_empty() {
        return Err(DomainError::validation(
            ValidationKind::NoPlayers,
            "a game needs at least one player",
        ));
    }
    if names.len() > config.max_players {
        return Err(DomainError::validation(
            ValidationKind::TooManyPlayers,
            format!(
                "{} players requested, at most {} allowed",
                names.len(),
                config.max_players
            ),
        ));
    }
    if let Some(order) = names.iter().position(String::is_empty) {
        return Err(DomainError::validation(
            ValidationKind::InvalidPlayerName,
            format!("player {} has a blank name", order + 1),
        ));
    }

    let players = names
        .into_iter()
        .enumerate()
        .map(|(order, name)| Player {
            id: PlayerId::new(),
            name,
            order,
            frames: (1..=FRAMES_PER_GAME as u8).map(Frame::new).collect(),
            score: 0,
        })
        .collect::<Vec<_>>();

    let game = Game {
        id: GameId::new(),
        players,
        current_player_index: 0,
        current_frame_index: 0,
        current_roll_index: 0,
        status: GameStatus::InProgress,
    };
    info!(game_id = %game.id, players = game.player_count(), "Created game");
    Ok(game)
}
