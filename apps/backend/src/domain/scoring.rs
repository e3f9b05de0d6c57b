use crate::domain::state::{Frame, FrameType, Score};

/// Cumulative score for a player's frames in order.
///
/// Strike bonus is the next two balls, spare bonus the next one. Balls not
/// rolled yet count as zero, so the result is the total known so far.
pub fn calculate_score(frames: &[Frame]) -> Score {
    (0..frames.len()).map(|i| frame_value(frames, i)).sum()
}

/// Running total after each frame, as printed on a scorecard.
pub fn running_totals(frames: &[Frame]) -> Vec<Score> {
    let mut total: Score = 0;
    (0..frames.len())
        .map(|i| {
            total += frame_value(frames, i);
            total
        })
        .collect()
}

/// A frame's own pins plus its bonus.
pub fn frame_value(frames: &[Frame], i: usize) -> Score {
    let Some(frame) = frames.get(i) else {
        return 0;
    };
    frame.pins_total() + bonus(frames, i)
}

fn bonus(frames: &[Frame], i: usize) -> Score {
    let frame = &frames[i];
    // Tenth-frame bonus balls are already in its own pins.
    if frame.is_last() {
        return 0;
    }
    let next = frames.get(i + 1);
    let first_ball = |f: Option<&Frame>| Score::from(f.and_then(Frame::first_roll).unwrap_or(0));

    match frame.frame_type {
        FrameType::Strike => {
            let mut bonus = first_ball(next);
            match next.and_then(Frame::second_roll) {
                Some(second) => bonus += Score::from(second),
                None => bonus += first_ball(frames.get(i + 2)),
            }
            bonus
        }
        FrameType::Spare => first_ball(next),
        FrameType::Open | FrameType::Undetermined => 0,
    }
}
