use glam::{UVec2, Vec2, Vec3};
use log::debug;

use crate::{gpu, Result, Texture, TextureArray};

/// Intermediate buffers used while rendering a frame; they are (re)allocated
/// together, whenever the viewport's size changes.
#[derive(Debug)]
pub struct HbaoBuffers {
    pub size: UVec2,

    /// Linear view-space depth, full resolution.
    pub depth_linear: Texture<f32>,

    /// View-space normals, full resolution.
    pub view_normal: Texture<Vec3>,

    /// Linear depth split into 16 quarter-resolution slices.
    pub depth_slices: TextureArray<f32>,

    /// Per-slice `(ao, view_z)`.
    pub ao_slices: TextureArray<Vec2>,

    /// `(ao, view_z)`, full resolution; holds the final, blurred value.
    pub ao_result: Texture<Vec2>,

    /// Scratch buffer for the horizontal blur.
    pub ao_blur: Texture<Vec2>,
}

impl HbaoBuffers {
    pub fn new(size: UVec2) -> Result<Self> {
        debug!("Initializing buffers; size={:?}", size);

        let quarter_size = gpu::Slice::quarter_resolution(size);

        Ok(Self {
            size,
            depth_linear: Texture::new("hbao_depth_linear", size)?,
            view_normal: Texture::new("hbao_view_normal", size)?,
            depth_slices: TextureArray::new(
                "hbao_depth_slices",
                quarter_size,
                gpu::RANDOM_ELEMENTS,
            )?,
            ao_slices: TextureArray::new(
                "hbao_ao_slices",
                quarter_size,
                gpu::RANDOM_ELEMENTS,
            )?,
            ao_result: Texture::new("hbao_ao_result", size)?,
            ao_blur: Texture::new("hbao_ao_blur", size)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use glam::uvec2;

    use super::*;
    use crate::Error;

    #[test]
    fn new() {
        let target = HbaoBuffers::new(uvec2(130, 17)).unwrap();

        assert_eq!(uvec2(130, 17), target.depth_linear.size());
        assert_eq!(uvec2(130, 17), target.ao_result.size());
        assert_eq!(uvec2(130, 17), target.ao_blur.size());

        for slice in 0..gpu::RANDOM_ELEMENTS {
            assert_eq!(uvec2(33, 5), target.depth_slices.layer(slice).size());
            assert_eq!(uvec2(33, 5), target.ao_slices.layer(slice).size());
        }
    }

    #[test]
    fn new_with_invalid_size() {
        assert!(matches!(
            HbaoBuffers::new(uvec2(16, 0)),
            Err(Error::InvalidSize { .. })
        ));
    }
}
