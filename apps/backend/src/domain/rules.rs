use std::ops::RangeInclusive;

use crate::domain::state::{Pins, Score};

pub const FRAMES_PER_GAME: usize = 10;
pub const LAST_FRAME_NO: u8 = 10;
/// Pins in a full rack.
pub const PINS: Pins = 10;
/// Twelve strikes.
pub const MAX_SCORE: Score = 300;

/// Balls a frame can hold: two, or three in the tenth.
pub fn max_rolls(frame_no: u8) -> usize {
    if frame_no == LAST_FRAME_NO {
        3
    } else {
        2
    }
}

pub fn valid_pin_range() -> RangeInclusive<Pins> {
    0..=PINS
}
