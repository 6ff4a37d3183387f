//! Fixed bank of animation frames, loadable from RON.
//!
//! Frames are defined once per state; both facings are materialized from the
//! same sheet at load time, and every (state, facing) slot must resolve to at
//! least one frame or startup aborts rather than rendering garbage mid-run.

use bevy::prelude::*;
use ron::Options;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use super::animation::AnimationState;
use crate::player::Facing;

/// Error type for animation bank loading failures.
#[derive(Debug)]
pub struct BankLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for BankLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

/// On-disk frame definition, one sRGB triple per frame.
#[derive(Debug, Clone, Deserialize)]
pub struct AnimationBankDef {
    pub idle: Vec<(f32, f32, f32)>,
    pub run: Vec<(f32, f32, f32)>,
    pub jump: Vec<(f32, f32, f32)>,
    pub double_jump: Vec<(f32, f32, f32)>,
    pub fall: Vec<(f32, f32, f32)>,
    pub hit: Vec<(f32, f32, f32)>,
}

impl Default for AnimationBankDef {
    fn default() -> Self {
        Self {
            idle: vec![(0.9, 0.3, 0.3), (0.85, 0.28, 0.28)],
            run: vec![(0.9, 0.3, 0.3), (0.95, 0.4, 0.3), (0.9, 0.3, 0.3), (0.8, 0.25, 0.3)],
            jump: vec![(0.95, 0.5, 0.35)],
            double_jump: vec![(1.0, 0.6, 0.4), (0.95, 0.5, 0.35)],
            fall: vec![(0.75, 0.25, 0.35)],
            hit: vec![(1.0, 1.0, 1.0), (0.9, 0.3, 0.3)],
        }
    }
}

/// Frame table indexed by (state, facing).
#[derive(Resource, Debug)]
pub struct AnimationBank {
    frames: [Vec<Color>; AnimationState::COUNT * 2],
}

fn slot(state: AnimationState, facing: Facing) -> usize {
    let side = match facing {
        Facing::Left => 0,
        Facing::Right => 1,
    };
    state.index() * 2 + side
}

impl AnimationBank {
    /// Materialize both facings from the per-state sheets.
    pub fn from_def(def: &AnimationBankDef) -> Self {
        let convert =
            |frames: &[(f32, f32, f32)]| -> Vec<Color> {
                frames.iter().map(|&(r, g, b)| Color::srgb(r, g, b)).collect()
            };
        let mut frames: [Vec<Color>; AnimationState::COUNT * 2] = Default::default();
        for (state, sheet) in [
            (AnimationState::Idle, &def.idle),
            (AnimationState::Run, &def.run),
            (AnimationState::Jump, &def.jump),
            (AnimationState::DoubleJump, &def.double_jump),
            (AnimationState::Fall, &def.fall),
            (AnimationState::Hit, &def.hit),
        ] {
            frames[slot(state, Facing::Left)] = convert(sheet);
            frames[slot(state, Facing::Right)] = convert(sheet);
        }
        Self { frames }
    }

    /// Every (state, facing) slot must have at least one frame.
    pub fn validate(&self) -> Result<(), String> {
        for state in AnimationState::ALL {
            for facing in [Facing::Left, Facing::Right] {
                if self.frames[slot(state, facing)].is_empty() {
                    return Err(format!(
                        "animation bank has no frames for '{}' facing {:?}",
                        state.name(),
                        facing
                    ));
                }
            }
        }
        Ok(())
    }

    /// Frame for a counter value, holding each frame for `delay` ticks and
    /// wrapping around the sheet.
    pub fn frame(&self, state: AnimationState, facing: Facing, counter: u32, delay: u32) -> Color {
        let sheet = &self.frames[slot(state, facing)];
        sheet[(counter / delay.max(1)) as usize % sheet.len()]
    }

    pub fn frame_count(&self, state: AnimationState, facing: Facing) -> usize {
        self.frames[slot(state, facing)].len()
    }
}

impl Default for AnimationBank {
    fn default() -> Self {
        Self::from_def(&AnimationBankDef::default())
    }
}

fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse a bank definition from RON text.
pub fn parse_bank(contents: &str, file: &str) -> Result<AnimationBankDef, BankLoadError> {
    ron_options().from_str(contents).map_err(|e| BankLoadError {
        file: file.to_string(),
        message: format!("Parse error: {}", e),
    })
}

/// Load the bank definition from disk.
pub fn load_bank(path: &Path) -> Result<AnimationBankDef, BankLoadError> {
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| BankLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;
    parse_bank(&contents, &file_name)
}

pub(crate) fn setup_animation_bank(mut commands: Commands) {
    let bank = match load_bank(Path::new("assets/data/animations.ron")) {
        Ok(def) => AnimationBank::from_def(&def),
        Err(e) => {
            warn!("{}, using built-in frames", e);
            AnimationBank::default()
        }
    };

    if let Err(e) = bank.validate() {
        panic!("{}", e);
    }
    commands.insert_resource(bank);
}
