//! Projectile domain: tests for flight, lifetime, and the fire rate limit.

use std::time::Duration;

use super::{ConfettiRng, FireControl, Projectile, ProjectileTuning};
use crate::collision::Body;

// -----------------------------------------------------------------------------
// Flight and lifetime
// -----------------------------------------------------------------------------

#[test]
fn test_advance_moves_by_velocity_and_ages() {
    let mut projectile = Projectile::new(20.0);
    let mut body = Body::new(100.0, 200.0, 16.0, 16.0);

    projectile.advance(&mut body);
    assert_eq!(body.x, 120.0);
    assert_eq!(body.y, 200.0);
    assert_eq!(projectile.age, 1);

    let mut leftward = Projectile::new(-20.0);
    leftward.advance(&mut body);
    assert_eq!(body.x, 100.0);
}

#[test]
fn test_projectile_expires_after_max_age() {
    let tuning = ProjectileTuning::default();
    let mut projectile = Projectile::new(tuning.speed);
    let mut body = Body::new(0.0, 0.0, tuning.size, tuning.size);

    // A projectile fired at tick t is gone by tick t + 150 at the latest.
    for _ in 0..tuning.max_age {
        projectile.advance(&mut body);
        assert!(!projectile.expired(tuning.max_age));
    }
    projectile.advance(&mut body);
    assert!(projectile.expired(tuning.max_age));
}

#[test]
fn test_terrain_hit_is_rectangle_based() {
    let block = Body::new(96.0, 504.0, 96.0, 96.0);
    let flying = Body::new(0.0, 520.0, 16.0, 16.0);
    let hitting = Body::new(90.0, 520.0, 16.0, 16.0);

    assert!(!block.overlaps(&flying));
    assert!(block.overlaps(&hitting));
}

// -----------------------------------------------------------------------------
// Fire rate limit
// -----------------------------------------------------------------------------

#[test]
fn test_first_shot_always_fires() {
    let mut fire = FireControl::default();
    assert!(fire.try_fire(Duration::ZERO, Duration::from_millis(1000)));
}

#[test]
fn test_second_shot_within_firerate_is_suppressed() {
    let interval = Duration::from_millis(1000);
    let mut fire = FireControl::default();

    assert!(fire.try_fire(Duration::from_millis(100), interval));
    assert!(!fire.try_fire(Duration::from_millis(600), interval));
    // The suppressed attempt did not reset the window.
    assert!(fire.try_fire(Duration::from_millis(1100), interval));
}

#[test]
fn test_spaced_shots_each_fire() {
    let interval = Duration::from_millis(1000);
    let mut fire = FireControl::default();

    for ms in [0u64, 1000, 2500, 3500] {
        assert!(fire.try_fire(Duration::from_millis(ms), interval), "at {}ms", ms);
    }
}

// -----------------------------------------------------------------------------
// Confetti tints
// -----------------------------------------------------------------------------

#[test]
fn test_tint_stream_is_reproducible_per_seed() {
    let mut a = ConfettiRng::from_seed(7);
    let mut b = ConfettiRng::from_seed(7);
    for _ in 0..8 {
        assert_eq!(a.next_tint(), b.next_tint());
    }
}

#[test]
fn test_reseed_restarts_the_stream() {
    let mut rng = ConfettiRng::from_seed(7);
    let first = rng.next_tint();
    rng.next_tint();
    rng.reseed(7);
    assert_eq!(rng.next_tint(), first);
}
