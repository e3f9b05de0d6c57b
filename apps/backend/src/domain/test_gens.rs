// Proptest generators for bowling games.
// Rolls are legal by construction: each frame is derived from three raw
// values in 0..=10 folded onto the pins still standing.

use proptest::prelude::*;

use crate::domain::rules::{FRAMES_PER_GAME, LAST_FRAME_NO, PINS};
use crate::domain::state::Pins;

/// Fold raw values onto a legal ball sequence for `frame_no`.
pub fn legal_frame_rolls(frame_no: u8, raw: (Pins, Pins, Pins)) -> Vec<Pins> {
    let (r0, r1, r2) = raw;
    let first = r0 % (PINS + 1);
    if frame_no < LAST_FRAME_NO {
        if first == PINS {
            return vec![first];
        }
        return vec![first, r1 % (PINS - first + 1)];
    }

    if first == PINS {
        let second = r1 % (PINS + 1);
        let third = if second == PINS {
            r2 % (PINS + 1)
        } else {
            r2 % (PINS - second + 1)
        };
        return vec![first, second, third];
    }
    let second = r1 % (PINS - first + 1);
    if first + second == PINS {
        vec![first, second, r2 % (PINS + 1)]
    } else {
        vec![first, second]
    }
}

/// Ten frames for one player.
pub fn player_frames() -> impl Strategy<Value = Vec<Vec<Pins>>> {
    prop::collection::vec((0..=PINS, 0..=PINS, 0..=PINS), FRAMES_PER_GAME).prop_map(|raws| {
        raws.into_iter()
            .enumerate()
            .map(|(i, raw)| legal_frame_rolls((i + 1) as u8, raw))
            .collect()
    })
}

/// 1..=4 players, each with ten frames of legal rolls.
pub fn game_frames() -> impl Strategy<Value = Vec<Vec<Vec<Pins>>>> {
    prop::collection::vec(player_frames(), 1..=4)
}

/// Balls in play order: frame 1 for everyone, then frame 2, ...
pub fn interleave(players: &[Vec<Vec<Pins>>]) -> Vec<Pins> {
    let mut out = Vec::new();
    for frame in 0..FRAMES_PER_GAME {
        for p in players {
            out.extend_from_slice(&p[frame]);
        }
    }
    out
}

/// Independent scorer over a flat ball list.
pub fn oracle_score(balls: &[Pins]) -> u16 {
    let ball = |i: usize| u16::from(balls.get(i).copied().unwrap_or(0));
    let mut score = 0;
    let mut i = 0;
    for _ in 0..FRAMES_PER_GAME {
        if i >= balls.len() {
            break;
        }
        if ball(i) == 10 {
            score += 10 + ball(i + 1) + ball(i + 2);
            i += 1;
        } else if ball(i) + ball(i + 1) == 10 {
            score += 10 + ball(i + 2);
            i += 2;
        } else {
            score += ball(i) + ball(i + 1);
            i += 2;
        }
    }
    score
}
