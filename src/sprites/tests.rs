//! Sprites module: state selection and frame playback tests.

use super::animation::{select_state, AnimationController, AnimationState};
use super::bank::{parse_bank, AnimationBank, AnimationBankDef};
use crate::player::{Facing, Kinematics};

fn grounded() -> Kinematics {
    Kinematics::default()
}

// -----------------------------------------------------------------------------
// State selection priority
// -----------------------------------------------------------------------------

#[test]
fn test_grounded_still_is_idle() {
    assert_eq!(select_state(&grounded(), 1.0), AnimationState::Idle);
}

#[test]
fn test_walking_is_run() {
    let mut kin = grounded();
    kin.x_vel = 5.0;
    assert_eq!(select_state(&kin, 1.0), AnimationState::Run);
    kin.x_vel = -5.0;
    assert_eq!(select_state(&kin, 1.0), AnimationState::Run);
}

#[test]
fn test_rising_after_first_jump_is_jump() {
    let mut kin = grounded();
    kin.jump(1.0);
    assert_eq!(select_state(&kin, 1.0), AnimationState::Jump);
}

#[test]
fn test_rising_after_second_jump_is_double_jump() {
    let mut kin = grounded();
    kin.jump(1.0);
    kin.double_jump(1.0);
    assert_eq!(select_state(&kin, 1.0), AnimationState::DoubleJump);
}

#[test]
fn test_descending_jump_reads_as_fall() {
    // Past the apex the jump states no longer apply even with jumps spent.
    let mut kin = grounded();
    kin.jump(1.0);
    kin.y_vel = 3.0;
    assert_eq!(select_state(&kin, 1.0), AnimationState::Fall);
}

#[test]
fn test_slow_descent_is_not_fall() {
    // The fall pose needs more than two gravities of downward speed, so a
    // walk off a ledge does not flicker into it immediately.
    let mut kin = grounded();
    kin.y_vel = 1.5;
    assert_eq!(select_state(&kin, 1.0), AnimationState::Idle);
    kin.x_vel = 5.0;
    assert_eq!(select_state(&kin, 1.0), AnimationState::Run);
}

#[test]
fn test_hit_overrides_everything() {
    let mut kin = grounded();
    kin.jump(1.0);
    kin.x_vel = 5.0;
    kin.hit = true;
    assert_eq!(select_state(&kin, 1.0), AnimationState::Hit);
}

// -----------------------------------------------------------------------------
// Controller counter
// -----------------------------------------------------------------------------

#[test]
fn test_counter_advances_while_state_holds() {
    let mut controller = AnimationController::default();
    controller.observe(AnimationState::Idle, Facing::Left);
    controller.observe(AnimationState::Idle, Facing::Left);
    assert_eq!(controller.counter, 2);
}

#[test]
fn test_state_change_resets_counter() {
    let mut controller = AnimationController::default();
    controller.observe(AnimationState::Idle, Facing::Left);
    controller.observe(AnimationState::Run, Facing::Left);
    assert_eq!(controller.state, AnimationState::Run);
    assert_eq!(controller.counter, 0);
}

#[test]
fn test_facing_flip_resets_counter() {
    let mut controller = AnimationController::default();
    controller.observe(AnimationState::Run, Facing::Left);
    controller.observe(AnimationState::Run, Facing::Left);
    controller.observe(AnimationState::Run, Facing::Right);
    assert_eq!(controller.counter, 0);
    assert_eq!(controller.facing, Facing::Right);
}

// -----------------------------------------------------------------------------
// Frame bank
// -----------------------------------------------------------------------------

#[test]
fn test_default_bank_is_valid() {
    let bank = AnimationBank::default();
    assert!(bank.validate().is_ok());
    for state in AnimationState::ALL {
        for facing in [Facing::Left, Facing::Right] {
            assert!(bank.frame_count(state, facing) > 0, "{}", state.name());
        }
    }
}

#[test]
fn test_frames_hold_for_delay_ticks_then_wrap() {
    let bank = AnimationBank::default();
    let run = AnimationState::Run;
    let frames = bank.frame_count(run, Facing::Left) as u32;
    let delay = 3;

    let first = bank.frame(run, Facing::Left, 0, delay);
    assert_eq!(bank.frame(run, Facing::Left, delay - 1, delay), first);
    assert_ne!(bank.frame(run, Facing::Left, delay, delay), first);
    // A full cycle returns to the first frame.
    assert_eq!(bank.frame(run, Facing::Left, frames * delay, delay), first);
}

#[test]
fn test_both_facings_share_the_sheet() {
    let bank = AnimationBank::default();
    for state in AnimationState::ALL {
        assert_eq!(
            bank.frame(state, Facing::Left, 0, 3),
            bank.frame(state, Facing::Right, 0, 3)
        );
    }
}

#[test]
fn test_empty_state_entry_fails_validation() {
    let mut def = AnimationBankDef::default();
    def.double_jump.clear();
    let err = AnimationBank::from_def(&def).validate().unwrap_err();
    assert!(err.contains("double_jump"), "{}", err);
}

#[test]
fn test_parse_bank_ron() {
    let def = parse_bank(
        r#"(
            idle: [(0.9, 0.3, 0.3)],
            run: [(0.9, 0.3, 0.3), (0.8, 0.2, 0.2)],
            jump: [(1.0, 0.5, 0.4)],
            double_jump: [(1.0, 0.6, 0.4)],
            fall: [(0.7, 0.2, 0.3)],
            hit: [(1.0, 1.0, 1.0)],
        )"#,
        "animations.ron",
    )
    .unwrap();
    let bank = AnimationBank::from_def(&def);
    assert!(bank.validate().is_ok());
    assert_eq!(bank.frame_count(AnimationState::Run, Facing::Left), 2);
}

#[test]
fn test_parse_error_names_the_file() {
    let err = parse_bank("(idle: oops", "animations.ron").unwrap_err();
    assert!(err.to_string().contains("animations.ron"));
}
