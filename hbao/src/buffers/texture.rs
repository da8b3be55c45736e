use std::mem;

use derivative::Derivative;
use glam::{ivec2, IVec2, UVec2};
use log::debug;
use rayon::prelude::*;

use crate::{Error, Result};

/// Two-dimensional, row-major buffer of texels.
#[derive(Clone, Derivative)]
#[derivative(Debug)]
pub struct Texture<T> {
    label: String,
    size: UVec2,
    #[derivative(Debug = "ignore")]
    data: Vec<T>,
}

impl<T> Texture<T>
where
    T: Copy + Default,
{
    pub fn new(label: impl AsRef<str>, size: UVec2) -> Result<Self> {
        let label = label.as_ref();

        debug!("Allocating texture `{label}`; size={:?}", size);

        let len = Self::len_of(size)?;
        let mut data = Vec::new();

        data.try_reserve_exact(len)
            .map_err(|_| Error::AllocationFailed {
                label: label.to_string(),
                bytes: len.saturating_mul(mem::size_of::<T>()),
            })?;

        data.resize(len, T::default());

        Ok(Self {
            label: label.to_string(),
            size,
            data,
        })
    }

    /// Wraps already existing texels, e.g. a depth buffer produced by some
    /// other renderer.
    pub fn from_vec(
        label: impl AsRef<str>,
        size: UVec2,
        data: Vec<T>,
    ) -> Result<Self> {
        let len = Self::len_of(size)?;

        if data.len() != len {
            return Err(Error::SizeMismatch {
                what: "texture data",
                expected: size,
                actual: UVec2::new(data.len() as u32, 1),
            });
        }

        Ok(Self {
            label: label.as_ref().to_string(),
            size,
            data,
        })
    }

    fn len_of(size: UVec2) -> Result<usize> {
        let invalid = || Error::InvalidSize {
            width: size.x,
            height: size.y,
        };

        if size.x == 0 || size.y == 0 {
            return Err(invalid());
        }

        (size.x as usize)
            .checked_mul(size.y as usize)
            .ok_or_else(invalid)
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn size(&self) -> UVec2 {
        self.size
    }

    pub fn get(&self, pos: UVec2) -> T {
        self.data[self.idx(pos)]
    }

    /// Returns texel at given position, clamped to the edge of the texture.
    pub fn get_clamped(&self, pos: IVec2) -> T {
        self.get(self.clamp(pos))
    }

    pub fn clamp(&self, pos: IVec2) -> UVec2 {
        pos.clamp(IVec2::ZERO, self.size.as_ivec2() - ivec2(1, 1))
            .as_uvec2()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    fn idx(&self, pos: UVec2) -> usize {
        debug_assert!(pos.x < self.size.x && pos.y < self.size.y);

        (pos.y as usize) * (self.size.x as usize) + (pos.x as usize)
    }
}

impl<T> Texture<T>
where
    T: Copy + Default + Send,
{
    /// Overwrites every texel with the value returned by `kernel`; rows are
    /// processed in parallel.
    pub fn par_fill(&mut self, kernel: impl Fn(UVec2) -> T + Sync) {
        let width = self.size.x as usize;

        self.data
            .par_chunks_mut(width)
            .enumerate()
            .for_each(|(y, row)| {
                for (x, texel) in row.iter_mut().enumerate() {
                    *texel = kernel(UVec2::new(x as u32, y as u32));
                }
            });
    }
}

#[cfg(test)]
mod tests {
    use glam::uvec2;

    use super::*;

    #[test]
    fn new() {
        let target = Texture::<f32>::new("test", uvec2(3, 2)).unwrap();

        assert_eq!("test", target.label());
        assert_eq!(uvec2(3, 2), target.size());
        assert_eq!(&[0.0; 6], target.as_slice());
    }

    #[test]
    fn new_with_invalid_size() {
        for size in [uvec2(0, 1), uvec2(1, 0), uvec2(0, 0)] {
            let target = Texture::<f32>::new("test", size);

            assert!(matches!(target, Err(Error::InvalidSize { .. })));
        }
    }

    #[test]
    fn from_vec() {
        let target =
            Texture::from_vec("test", uvec2(2, 2), vec![1, 2, 3, 4]).unwrap();

        assert_eq!(2, target.get(uvec2(1, 0)));
        assert_eq!(3, target.get(uvec2(0, 1)));

        let target = Texture::from_vec("test", uvec2(2, 2), vec![1, 2, 3]);

        assert!(matches!(target, Err(Error::SizeMismatch { .. })));
    }

    #[test]
    fn get_clamped() {
        let target = Texture::from_vec(
            "test",
            uvec2(3, 2),
            vec![
                1, 2, 3, //
                4, 5, 6, //
            ],
        )
        .unwrap();

        assert_eq!(1, target.get_clamped(ivec2(-5, -5)));
        assert_eq!(3, target.get_clamped(ivec2(10, 0)));
        assert_eq!(4, target.get_clamped(ivec2(-1, 1)));
        assert_eq!(6, target.get_clamped(ivec2(3, 2)));
        assert_eq!(5, target.get_clamped(ivec2(1, 1)));
    }

    #[test]
    fn par_fill() {
        let mut target = Texture::new("test", uvec2(4, 3)).unwrap();

        target.par_fill(|pos| pos.y * 10 + pos.x);

        assert_eq!(0, target.get(uvec2(0, 0)));
        assert_eq!(13, target.get(uvec2(3, 1)));
        assert_eq!(21, target.get(uvec2(1, 2)));
    }
}
