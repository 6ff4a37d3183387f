//! Projectile domain: tuning, fire rate limiting, and confetti tints.

use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::time::Duration;

#[derive(Resource, Debug, Clone)]
pub struct ProjectileTuning {
    /// Flight speed in pixels per tick.
    pub speed: f32,
    /// Ticks before a confetto is removed without impact.
    pub max_age: u32,
    /// Edge length of the confetti square. Fixed at spawn and reused for
    /// every terrain test.
    pub size: f32,
    /// Minimum wall-clock interval between shots.
    pub firerate_ms: u64,
}

impl Default for ProjectileTuning {
    fn default() -> Self {
        Self {
            speed: 20.0,
            max_age: 150,
            size: 16.0,
            firerate_ms: 1000,
        }
    }
}

/// Wall-clock rate limiter for the fire input.
#[derive(Resource, Debug, Default)]
pub struct FireControl {
    last_shot: Option<Duration>,
}

impl FireControl {
    /// Whether a shot at `now` is allowed; records it if so. The first shot
    /// is always allowed.
    pub fn try_fire(&mut self, now: Duration, interval: Duration) -> bool {
        let allowed = match self.last_shot {
            None => true,
            Some(last) => now.saturating_sub(last) >= interval,
        };
        if allowed {
            self.last_shot = Some(now);
        }
        allowed
    }
}

/// Seeded tint stream so a run's confetti colours are reproducible. Reseeded
/// on reset.
#[derive(Resource, Debug)]
pub struct ConfettiRng {
    rng: ChaCha8Rng,
}

impl ConfettiRng {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn reseed(&mut self, seed: u64) {
        self.rng = ChaCha8Rng::seed_from_u64(seed);
    }

    /// A saturated hue for the next confetto.
    pub fn next_tint(&mut self) -> Color {
        Color::hsl(self.rng.random_range(0.0..360.0), 0.85, 0.6)
    }
}

impl Default for ConfettiRng {
    fn default() -> Self {
        Self::from_seed(rand::rng().random())
    }
}
