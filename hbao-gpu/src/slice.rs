use glam::{uvec2, UVec2};

use crate::RANDOM_SIZE;

/// Mapping between full-resolution texels and deinterleaved slices.
///
/// Slice `i` gathers every texel whose position modulo 4 equals
/// `(i % 4, i / 4)`; within the slice, such a texel lives at its position
/// divided by 4.
pub struct Slice;

impl Slice {
    /// Sub-pixel offset of given slice within each 4x4 block.
    pub fn offset(slice: usize) -> UVec2 {
        uvec2((slice % RANDOM_SIZE) as u32, (slice / RANDOM_SIZE) as u32)
    }

    /// Returns the slice (and the position within that slice) a
    /// full-resolution texel belongs to.
    pub fn of(texel: UVec2) -> (usize, UVec2) {
        let size = RANDOM_SIZE as u32;
        let offset = texel % size;

        ((offset.y * size + offset.x) as usize, texel / size)
    }

    /// Size of a single slice for given full-resolution size; when the size is
    /// not a multiple of 4, slices get padded.
    pub fn quarter_resolution(full_res: UVec2) -> UVec2 {
        let size = RANDOM_SIZE as u32;

        (full_res + (size - 1)) / size
    }

    /// Inverse of [`Self::of()`].
    pub fn to_full_res(slice: usize, texel: UVec2) -> UVec2 {
        texel * RANDOM_SIZE as u32 + Self::offset(slice)
    }
}
