use crate::domain::rolls::replay;
use crate::domain::snapshot::{winners, GameSnapshot};
use crate::domain::state::{FrameType, GameStatus};
use crate::domain::test_state_helpers::new_game;

#[test]
fn running_totals_only_for_rolled_frames() {
    let game = replay(&new_game(&["Ann", "Ben"]), &[10, 3, 4, 5]).unwrap();
    let snap = GameSnapshot::from_game(&game);

    let ann = &snap.players[0];
    // Strike bonus so far is only the 5.
    assert_eq!(ann.frames[0].running_total, Some(15));
    assert_eq!(ann.frames[1].running_total, Some(20));
    assert_eq!(ann.score, 20);
    assert_eq!(ann.frames[1].frame_type, FrameType::Undetermined);
    assert_eq!(ann.frames[2].running_total, None);

    let ben = &snap.players[1];
    assert_eq!(ben.frames[0].running_total, Some(7));
    assert_eq!(ben.score, 7);
}

#[test]
fn to_act_uses_one_based_numbers() {
    let game = replay(&new_game(&["Ann", "Ben"]), &[10, 3]).unwrap();
    let to_act = GameSnapshot::from_game(&game).to_act.expect("in progress");
    assert_eq!(to_act.player_index, 1);
    assert_eq!(to_act.player_name, "Ben");
    assert_eq!(to_act.frame_no, 1);
    assert_eq!(to_act.ball_no, 2);
}

#[test]
fn completed_game_has_winners_and_no_turn() {
    let mut rolls = Vec::new();
    for _ in 0..10 {
        rolls.extend_from_slice(&[9, 0, 8, 1]);
    }
    let game = replay(&new_game(&["Ann", "Ben"]), &rolls).unwrap();
    assert_eq!(game.status, GameStatus::Completed);

    let snap = GameSnapshot::from_game(&game);
    assert!(snap.to_act.is_none());
    assert_eq!(snap.turns_remaining, 0);
    // 90 apiece: tie shares the win.
    assert_eq!(snap.winners, vec![game.players[0].id, game.players[1].id]);
}

#[test]
fn no_winners_while_in_progress() {
    let game = replay(&new_game(&["Ann"]), &[10]).unwrap();
    assert!(winners(&game).is_empty());
}

#[test]
fn serializes_frame_type_as_screaming_case() {
    let game = replay(&new_game(&["Ann"]), &[10]).unwrap();
    let json = serde_json::to_value(GameSnapshot::from_game(&game)).unwrap();
    assert_eq!(json["players"][0]["frames"][0]["type"], "STRIKE");
    assert_eq!(json["status"], "IN_PROGRESS");
    assert!(json.get("to_act").is_some());
}

#[test]
fn stale_frame_pointer_has_no_turn() {
    let mut game = new_game(&["Ann"]);
    game.current_frame_index = 10;
    assert!(GameSnapshot::from_game(&game).to_act.is_none());
}
