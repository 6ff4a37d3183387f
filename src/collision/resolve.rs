//! Collision domain: mask overlap between placed bodies and the two-phase
//! player-vs-terrain resolver.

use super::{Body, Mask};

/// Mask overlap between two bodies at their current positions. The offset is
/// `b`'s top-left corner relative to `a`'s, rounded to whole pixels.
pub fn masks_overlap(a_body: &Body, a_mask: &Mask, b_body: &Body, b_mask: &Mask) -> bool {
    let offset = (
        (b_body.x - a_body.x).round() as i32,
        (b_body.y - a_body.y).round() as i32,
    );
    a_mask.overlap(b_mask, offset)
}

/// Horizontal probe: test the body shifted by `dx` against the blocks in
/// order, returning the index of the first colliding block. The shift is a
/// temporary probe rectangle; the caller's body is untouched.
pub fn probe_first<'a>(
    body: &Body,
    mask: &Mask,
    dx: f32,
    blocks: impl IntoIterator<Item = (&'a Body, &'a Mask)>,
) -> Option<usize> {
    let probe = Body {
        x: body.x + dx,
        ..*body
    };
    for (index, (block_body, block_mask)) in blocks.into_iter().enumerate() {
        if masks_overlap(&probe, mask, block_body, block_mask) {
            return Some(index);
        }
    }
    None
}

/// Outcome of a vertical resolution pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct VerticalHit {
    /// The body was moving down into a block and got snapped onto its top.
    pub landed: bool,
    /// The body overlapped a block while moving up. Detected but not resolved.
    pub overhead: bool,
}

/// Vertical resolution at the already-integrated position: every block is
/// tested; downward overlap snaps the body's bottom edge onto the block's top.
/// Upward overlap is only reported.
pub fn resolve_vertical<'a>(
    body: &mut Body,
    mask: &Mask,
    y_vel: f32,
    blocks: impl IntoIterator<Item = (&'a Body, &'a Mask)>,
) -> VerticalHit {
    let mut hit = VerticalHit::default();
    for (block_body, block_mask) in blocks {
        if masks_overlap(body, mask, block_body, block_mask) {
            if y_vel > 0.0 {
                body.y = block_body.top() - body.h;
                hit.landed = true;
            } else if y_vel < 0.0 {
                hit.overhead = true;
            }
        }
    }
    hit
}
