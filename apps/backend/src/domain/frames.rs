//! Frame classification: what a frame is and whether it takes another ball.

use crate::domain::rules::{max_rolls, valid_pin_range, LAST_FRAME_NO, PINS};
use crate::domain::state::{Frame, FrameType, Pins};
use crate::errors::domain::DomainError;

/// Record one ball in `frame`, returning the updated frame and whether it is
/// now complete.
///
/// Fails with `InvalidRoll` when `pins` is outside 0..=10, exceeds the pins
/// still standing, or the frame is already closed. The input is untouched.
pub fn classify(frame: &Frame, pins: Pins) -> Result<(Frame, bool), DomainError> {
    let range = valid_pin_range();
    if !range.contains(&pins) {
        return Err(DomainError::invalid_roll(format!(
            "pins must be in range {range:?}, got {pins}"
        )));
    }

    if is_frame_complete(frame.frame_no, &frame.rolls) {
        return Err(DomainError::invalid_roll(format!(
            "frame {} is already complete",
            frame.frame_no
        )));
    }

    let standing = pins_standing(frame.frame_no, &frame.rolls);
    if pins > standing {
        return Err(DomainError::invalid_roll(format!(
            "only {standing} pins standing in frame {}, got {pins}",
            frame.frame_no
        )));
    }

    let mut next = frame.clone();
    next.rolls.push(pins);
    next.frame_type = frame_type_for(&next.rolls);
    next.score = next.pins_total();

    let complete = is_frame_complete(next.frame_no, &next.rolls);
    Ok((next, complete))
}

/// Frames 1-9 close on a strike or after two balls. The tenth closes after two
/// balls totalling under ten, otherwise after the third.
pub fn is_frame_complete(frame_no: u8, rolls: &[Pins]) -> bool {
    if rolls.len() >= max_rolls(frame_no) {
        return true;
    }
    if frame_no == LAST_FRAME_NO {
        return match rolls {
            [a, b] => pair_total(*a, *b) < u16::from(PINS),
            _ => false,
        };
    }
    rolls.first() == Some(&PINS)
}

/// Type implied by the balls recorded so far.
///
/// The same rule holds in the tenth frame: bonus balls never change the type.
pub fn frame_type_for(rolls: &[Pins]) -> FrameType {
    match rolls {
        [] => FrameType::Undetermined,
        [first, ..] if *first == PINS => FrameType::Strike,
        [_] => FrameType::Undetermined,
        [a, b, ..] if pair_total(*a, *b) == u16::from(PINS) => FrameType::Spare,
        [_, _, ..] => FrameType::Open,
    }
}

#[inline]
fn pair_total(a: Pins, b: Pins) -> u16 {
    u16::from(a) + u16::from(b)
}

/// Pins the next ball can knock down.
pub fn pins_standing(frame_no: u8, rolls: &[Pins]) -> Pins {
    if is_frame_complete(frame_no, rolls) {
        return 0;
    }
    match rolls {
        [] => PINS,
        [first] if *first == PINS => PINS,
        [first] => PINS.saturating_sub(*first),
        // Tenth frame, after a strike: fresh rack unless the second ball left pins.
        [first, second] if *first == PINS => {
            if *second == PINS {
                PINS
            } else {
                PINS.saturating_sub(*second)
            }
        }
        // Tenth frame, after a spare.
        [_, _] => PINS,
        _ => 0,
    }
}
