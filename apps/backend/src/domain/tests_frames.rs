use crate::domain::frames::{classify, frame_type_for, is_frame_complete};
use crate::domain::state::{Frame, FrameType, Pins};
use crate::domain::test_state_helpers::frame_with;
use crate::errors::domain::{DomainError, ValidationKind};

fn roll_all(frame_no: u8, rolls: &[Pins]) -> (Frame, bool) {
    let mut frame = Frame::new(frame_no);
    let mut complete = false;
    for &pins in rolls {
        let (next, done) = classify(&frame, pins).expect("legal roll");
        frame = next;
        complete = done;
    }
    (frame, complete)
}

fn assert_invalid_roll(result: Result<(Frame, bool), DomainError>) {
    match result {
        Err(DomainError::Validation(ValidationKind::InvalidRoll, _)) => {}
        other => panic!("expected InvalidRoll, got {other:?}"),
    }
}

#[test]
fn strike_closes_regular_frame_after_one_ball() {
    let (frame, complete) = roll_all(1, &[10]);
    assert!(complete);
    assert_eq!(frame.frame_type, FrameType::Strike);
    assert_eq!(frame.rolls, vec![10]);
    assert_eq!(frame.score, 10);
}

#[test]
fn first_ball_leaves_frame_open_and_undetermined() {
    let (frame, complete) = roll_all(3, &[7]);
    assert!(!complete);
    assert_eq!(frame.frame_type, FrameType::Undetermined);
    assert_eq!(frame.score, 7);
}

#[test]
fn two_balls_make_spare_or_open() {
    let (spare, complete) = roll_all(2, &[6, 4]);
    assert!(complete);
    assert_eq!(spare.frame_type, FrameType::Spare);

    let (open, complete) = roll_all(2, &[6, 3]);
    assert!(complete);
    assert_eq!(open.frame_type, FrameType::Open);
    assert_eq!(open.score, 9);
}

#[test]
fn gutter_then_ten_is_a_spare_not_a_strike() {
    let (frame, complete) = roll_all(5, &[0, 10]);
    assert!(complete);
    assert_eq!(frame.frame_type, FrameType::Spare);
}

#[test]
fn out_of_range_pins_rejected() {
    assert_invalid_roll(classify(&Frame::new(1), 11));
    assert_invalid_roll(classify(&Frame::new(10), 255));
}

#[test]
fn two_balls_over_ten_rejected() {
    let after_first = frame_with(4, &[7]);
    assert_invalid_roll(classify(&after_first, 4));
    // The input frame is never mutated.
    assert_eq!(after_first.rolls, vec![7]);
}

#[test]
fn completed_frame_rejects_more_balls() {
    assert_invalid_roll(classify(&frame_with(1, &[10]), 0));
    assert_invalid_roll(classify(&frame_with(1, &[3, 4]), 0));
    assert_invalid_roll(classify(&frame_with(10, &[3, 4]), 0));
}

#[test]
fn tenth_frame_three_strikes_then_closed() {
    let mut frame = Frame::new(10);
    for (i, expect_done) in [(0, false), (1, false), (2, true)] {
        let (next, done) = classify(&frame, 10).expect("strike");
        assert_eq!(done, expect_done, "after ball {}", i + 1);
        frame = next;
    }
    assert_eq!(frame.rolls, vec![10, 10, 10]);
    assert_eq!(frame.frame_type, FrameType::Strike);
    assert_eq!(frame.score, 30);
    assert_invalid_roll(classify(&frame, 10));
}

#[test]
fn tenth_frame_two_balls_over_ten_rejected() {
    let after_first = frame_with(10, &[7]);
    assert_invalid_roll(classify(&after_first, 5));
    let (frame, complete) = classify(&after_first, 3).expect("spare");
    assert!(!complete);
    assert_eq!(frame.frame_type, FrameType::Spare);
}

#[test]
fn tenth_frame_open_closes_after_two() {
    let (frame, complete) = roll_all(10, &[3, 6]);
    assert!(complete);
    assert_eq!(frame.frame_type, FrameType::Open);
}

#[test]
fn tenth_frame_spare_earns_third_ball() {
    let (frame, complete) = roll_all(10, &[7, 3]);
    assert!(!complete);
    assert_eq!(frame.frame_type, FrameType::Spare);

    let (frame, complete) = classify(&frame, 10).expect("fresh rack after spare");
    assert!(complete);
    assert_eq!(frame.frame_type, FrameType::Spare);
    assert_eq!(frame.score, 20);
}

#[test]
fn tenth_frame_strike_then_split_rack() {
    let (frame, complete) = roll_all(10, &[10, 4]);
    assert!(!complete);
    assert_eq!(frame.frame_type, FrameType::Strike);
    assert_invalid_roll(classify(&frame, 7));
    let (frame, complete) = classify(&frame, 6).expect("six pins standing");
    assert!(complete);
    assert_eq!(frame.score, 20);
}

#[test]
fn tenth_frame_strike_then_gutter_still_gets_third() {
    let (_, complete) = roll_all(10, &[10, 0]);
    assert!(!complete);
}

#[test]
fn completion_rules_without_classifying() {
    assert!(!is_frame_complete(1, &[]));
    assert!(is_frame_complete(9, &[10]));
    assert!(!is_frame_complete(10, &[10]));
    assert!(!is_frame_complete(10, &[5, 5]));
    assert!(is_frame_complete(10, &[5, 4]));
    assert!(is_frame_complete(10, &[5, 5, 1]));
}

#[test]
fn type_from_rolls() {
    assert_eq!(frame_type_for(&[]), FrameType::Undetermined);
    assert_eq!(frame_type_for(&[4]), FrameType::Undetermined);
    assert_eq!(frame_type_for(&[10]), FrameType::Strike);
    assert_eq!(frame_type_for(&[10, 3, 2]), FrameType::Strike);
    assert_eq!(frame_type_for(&[2, 8, 10]), FrameType::Spare);
    assert_eq!(frame_type_for(&[2, 7]), FrameType::Open);
}
