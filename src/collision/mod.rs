//! Collision domain: screen-space rectangles, pixel masks, and the two-phase
//! resolver (horizontal probe-then-move, vertical land detection).
//!
//! Everything here is pure so the physics properties can be tested without an
//! `App`. Coordinates are level-space: y grows downward, a positive y velocity
//! means falling.

mod body;
mod mask;
mod resolve;
#[cfg(test)]
mod tests;

pub use body::Body;
pub use mask::Mask;
pub use resolve::{VerticalHit, masks_overlap, probe_first, resolve_vertical};
