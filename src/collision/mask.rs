//! Collision domain: pixel bitmask for non-rectangular overlap tests.

use bevy::prelude::*;

const WORD_BITS: u32 = 64;

/// Opaque-pixel bitmask of a sprite, row-major. Terrain blocks use a fully
/// filled mask; the type supports arbitrary shapes for anything that needs
/// pixel precision.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct Mask {
    width: u32,
    height: u32,
    bits: Vec<u64>,
}

impl Mask {
    /// A mask with every pixel transparent.
    pub fn empty(width: u32, height: u32) -> Self {
        let words_per_row = width.div_ceil(WORD_BITS) as usize;
        Self {
            width,
            height,
            bits: vec![0; words_per_row * height as usize],
        }
    }

    /// A mask with every pixel opaque.
    pub fn filled(width: u32, height: u32) -> Self {
        let mut mask = Self::empty(width, height);
        for y in 0..height {
            for x in 0..width {
                mask.set(x, y, true);
            }
        }
        mask
    }

    /// Build a mask from rows of `#` (opaque) and `.` (transparent).
    #[cfg(test)]
    pub(crate) fn from_rows(rows: &[&str]) -> Self {
        let height = rows.len() as u32;
        let width = rows.first().map_or(0, |r| r.len()) as u32;
        let mut mask = Self::empty(width, height);
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                mask.set(x as u32, y as u32, ch == '#');
            }
        }
        mask
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn set(&mut self, x: u32, y: u32, opaque: bool) {
        debug_assert!(x < self.width && y < self.height);
        let idx = self.word_index(x, y);
        let bit = 1u64 << (x % WORD_BITS);
        if opaque {
            self.bits[idx] |= bit;
        } else {
            self.bits[idx] &= !bit;
        }
    }

    pub fn get(&self, x: u32, y: u32) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        let bit = 1u64 << (x % WORD_BITS);
        self.bits[self.word_index(x, y)] & bit != 0
    }

    /// Whether any opaque pixel of `other`, placed at `offset` relative to this
    /// mask's top-left corner, coincides with an opaque pixel of this mask.
    pub fn overlap(&self, other: &Mask, offset: (i32, i32)) -> bool {
        let (dx, dy) = offset;
        let x_start = dx.max(0);
        let y_start = dy.max(0);
        let x_end = (other.width as i32 + dx).min(self.width as i32);
        let y_end = (other.height as i32 + dy).min(self.height as i32);

        for y in y_start..y_end {
            for x in x_start..x_end {
                if self.get(x as u32, y as u32) && other.get((x - dx) as u32, (y - dy) as u32) {
                    return true;
                }
            }
        }
        false
    }

    fn word_index(&self, x: u32, y: u32) -> usize {
        let words_per_row = self.width.div_ceil(WORD_BITS);
        (y * words_per_row + x / WORD_BITS) as usize
    }
}
