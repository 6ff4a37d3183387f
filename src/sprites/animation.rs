//! Animation state machine and playback.

use bevy::prelude::*;

use crate::player::{Facing, Kinematics, Player, Tuning};
use crate::sprites::AnimationBank;

/// Animation states for the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AnimationState {
    #[default]
    Idle,
    Run,
    Jump,
    DoubleJump,
    Fall,
    Hit,
}

impl AnimationState {
    pub const COUNT: usize = 6;
    pub const ALL: [AnimationState; Self::COUNT] = [
        AnimationState::Idle,
        AnimationState::Run,
        AnimationState::Jump,
        AnimationState::DoubleJump,
        AnimationState::Fall,
        AnimationState::Hit,
    ];

    /// Stable index into the bank's frame table.
    pub fn index(self) -> usize {
        match self {
            AnimationState::Idle => 0,
            AnimationState::Run => 1,
            AnimationState::Jump => 2,
            AnimationState::DoubleJump => 3,
            AnimationState::Fall => 4,
            AnimationState::Hit => 5,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            AnimationState::Idle => "idle",
            AnimationState::Run => "run",
            AnimationState::Jump => "jump",
            AnimationState::DoubleJump => "double_jump",
            AnimationState::Fall => "fall",
            AnimationState::Hit => "hit",
        }
    }
}

/// Component for animation playback. The counter advances one per fixed tick
/// and resets whenever the state or the facing changes, so a turn restarts
/// the sheet from its first frame.
#[derive(Component, Debug, Default)]
pub struct AnimationController {
    pub state: AnimationState,
    pub facing: Facing,
    pub counter: u32,
}

impl AnimationController {
    /// Observe the state and facing for this tick, resetting the counter on
    /// any change.
    pub fn observe(&mut self, state: AnimationState, facing: Facing) {
        if state != self.state || facing != self.facing {
            self.state = state;
            self.facing = facing;
            self.counter = 0;
        } else {
            self.counter += 1;
        }
    }
}

/// Pick the animation state for the current kinematics. Highest priority
/// first; both jump states require upward motion so a spent double jump on
/// the way down still reads as falling.
pub fn select_state(kin: &Kinematics, gravity: f32) -> AnimationState {
    if kin.hit {
        AnimationState::Hit
    } else if kin.y_vel < 0.0 && kin.jump_count == 1 {
        AnimationState::Jump
    } else if kin.y_vel < 0.0 && kin.jump_count > 1 {
        AnimationState::DoubleJump
    } else if kin.y_vel > gravity * 2.0 {
        AnimationState::Fall
    } else if kin.x_vel != 0.0 {
        AnimationState::Run
    } else {
        AnimationState::Idle
    }
}

pub(crate) fn animate(
    tuning: Res<Tuning>,
    mut players: Query<(&Kinematics, &Facing, &mut AnimationController), With<Player>>,
) {
    for (kin, facing, mut controller) in &mut players {
        controller.observe(select_state(kin, tuning.gravity), *facing);
    }
}

pub(crate) fn apply_frames(
    bank: Res<AnimationBank>,
    tuning: Res<Tuning>,
    mut players: Query<(&AnimationController, &mut Sprite), With<Player>>,
) {
    for (controller, mut sprite) in &mut players {
        sprite.color = bank.frame(
            controller.state,
            controller.facing,
            controller.counter,
            tuning.animation_delay,
        );
        sprite.flip_x = matches!(controller.facing, Facing::Left);
    }
}
