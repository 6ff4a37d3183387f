//! Collision domain: tests for masks, rectangles, and the resolver.

use super::{Body, Mask, masks_overlap, probe_first, resolve_vertical};

// -----------------------------------------------------------------------------
// Body tests
// -----------------------------------------------------------------------------

#[test]
fn test_body_edges() {
    let body = Body::new(10.0, 20.0, 50.0, 40.0);
    assert_eq!(body.left(), 10.0);
    assert_eq!(body.right(), 60.0);
    assert_eq!(body.top(), 20.0);
    assert_eq!(body.bottom(), 60.0);
    assert_eq!(body.center().x, 35.0);
    assert_eq!(body.center().y, 40.0);
}

#[test]
fn test_body_overlap_requires_shared_area() {
    let a = Body::new(0.0, 0.0, 10.0, 10.0);
    assert!(a.overlaps(&Body::new(5.0, 5.0, 10.0, 10.0)));
    // Touching edges are not an overlap.
    assert!(!a.overlaps(&Body::new(10.0, 0.0, 10.0, 10.0)));
    assert!(!a.overlaps(&Body::new(0.0, 10.0, 10.0, 10.0)));
    assert!(!a.overlaps(&Body::new(20.0, 20.0, 10.0, 10.0)));
}

// -----------------------------------------------------------------------------
// Mask tests
// -----------------------------------------------------------------------------

#[test]
fn test_mask_filled_and_empty() {
    let filled = Mask::filled(96, 96);
    let empty = Mask::empty(96, 96);
    assert!(filled.get(0, 0));
    assert!(filled.get(95, 95));
    assert!(!empty.get(0, 0));
    assert!(!empty.get(95, 95));
}

#[test]
fn test_mask_get_out_of_bounds_is_transparent() {
    let mask = Mask::filled(8, 8);
    assert!(!mask.get(8, 0));
    assert!(!mask.get(0, 8));
}

#[test]
fn test_mask_overlap_offsets() {
    let a = Mask::filled(10, 10);
    let b = Mask::filled(10, 10);
    assert!(a.overlap(&b, (0, 0)));
    assert!(a.overlap(&b, (9, 9)));
    // Fully adjacent: no shared pixel.
    assert!(!a.overlap(&b, (10, 0)));
    assert!(!a.overlap(&b, (0, 10)));
    assert!(!a.overlap(&b, (-10, 0)));
}

#[test]
fn test_mask_overlap_respects_shape() {
    // Two L-shapes whose bounding boxes overlap but whose pixels do not.
    let a = Mask::from_rows(&["##..", "##..", "....", "...."]);
    let b = Mask::from_rows(&["....", "....", "..##", "..##"]);
    assert!(!a.overlap(&b, (0, 0)));
    // Shift b up-left so its opaque corner reaches a's.
    assert!(a.overlap(&b, (-2, -2)));
}

#[test]
fn test_masks_overlap_uses_body_positions() {
    let a_body = Body::new(0.0, 0.0, 4.0, 4.0);
    let b_body = Body::new(3.0, 3.0, 4.0, 4.0);
    let filled = Mask::filled(4, 4);
    assert!(masks_overlap(&a_body, &filled, &b_body, &filled));

    let apart = Body::new(4.0, 0.0, 4.0, 4.0);
    assert!(!masks_overlap(&a_body, &filled, &apart, &filled));
}

// -----------------------------------------------------------------------------
// Horizontal probe tests
// -----------------------------------------------------------------------------

#[test]
fn test_probe_hits_adjacent_block() {
    let player = Body::new(0.0, 0.0, 50.0, 50.0);
    let player_mask = Mask::filled(50, 50);
    let block = Body::new(50.0, 0.0, 96.0, 96.0);
    let block_mask = Mask::filled(96, 96);
    let blocks = [(&block, &block_mask)];

    assert_eq!(probe_first(&player, &player_mask, 10.0, blocks), Some(0));
    // Probing away from the block finds nothing.
    assert_eq!(probe_first(&player, &player_mask, -10.0, blocks), None);
}

#[test]
fn test_probe_leaves_body_untouched() {
    let player = Body::new(0.0, 0.0, 50.0, 50.0);
    let player_mask = Mask::filled(50, 50);
    let block = Body::new(50.0, 0.0, 96.0, 96.0);
    let block_mask = Mask::filled(96, 96);

    let before = player;
    probe_first(&player, &player_mask, 10.0, [(&block, &block_mask)]);
    assert_eq!(player, before);
}

#[test]
fn test_probe_returns_first_block_in_order() {
    let player = Body::new(0.0, 0.0, 50.0, 50.0);
    let player_mask = Mask::filled(50, 50);
    let mask = Mask::filled(96, 96);
    // Both blocks collide with the probe; the scan short-circuits on the first.
    let near = Body::new(52.0, 0.0, 96.0, 96.0);
    let far = Body::new(55.0, 0.0, 96.0, 96.0);

    let hit = probe_first(
        &player,
        &player_mask,
        10.0,
        [(&far, &mask), (&near, &mask)],
    );
    assert_eq!(hit, Some(0));
}

// -----------------------------------------------------------------------------
// Vertical resolution tests
// -----------------------------------------------------------------------------

#[test]
fn test_vertical_landing_snaps_to_block_top() {
    let mut player = Body::new(100.0, 460.0, 50.0, 50.0);
    let player_mask = Mask::filled(50, 50);
    let block = Body::new(96.0, 504.0, 96.0, 96.0);
    let block_mask = Mask::filled(96, 96);

    let hit = resolve_vertical(&mut player, &player_mask, 8.0, [(&block, &block_mask)]);
    assert!(hit.landed);
    assert!(!hit.overhead);
    assert_eq!(player.bottom(), 504.0);
}

#[test]
fn test_vertical_upward_overlap_detected_but_unresolved() {
    let mut player = Body::new(100.0, 560.0, 50.0, 50.0);
    let player_mask = Mask::filled(50, 50);
    let block = Body::new(96.0, 504.0, 96.0, 96.0);
    let block_mask = Mask::filled(96, 96);

    let before = player;
    let hit = resolve_vertical(&mut player, &player_mask, -8.0, [(&block, &block_mask)]);
    assert!(hit.overhead);
    assert!(!hit.landed);
    assert_eq!(player, before);
}

#[test]
fn test_vertical_no_contact_when_clear() {
    let mut player = Body::new(100.0, 100.0, 50.0, 50.0);
    let player_mask = Mask::filled(50, 50);
    let block = Body::new(96.0, 504.0, 96.0, 96.0);
    let block_mask = Mask::filled(96, 96);

    let hit = resolve_vertical(&mut player, &player_mask, 8.0, [(&block, &block_mask)]);
    assert_eq!(hit, super::VerticalHit::default());
}
