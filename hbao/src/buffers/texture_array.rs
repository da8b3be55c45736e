use glam::UVec2;
use log::debug;

use crate::{Result, Texture};

/// A bunch of same-sized textures.
#[derive(Clone, Debug)]
pub struct TextureArray<T> {
    layers: Vec<Texture<T>>,
}

impl<T> TextureArray<T>
where
    T: Copy + Default,
{
    pub fn new(
        label: impl AsRef<str>,
        size: UVec2,
        layers: usize,
    ) -> Result<Self> {
        let label = label.as_ref();

        debug!(
            "Allocating texture array `{label}`; size={:?}, layers={}",
            size, layers
        );

        let layers = (0..layers)
            .map(|layer| Texture::new(format!("{label}_{layer}"), size))
            .collect::<Result<_>>()?;

        Ok(Self { layers })
    }

    pub fn layer(&self, idx: usize) -> &Texture<T> {
        &self.layers[idx]
    }

    pub fn layers_mut(&mut self) -> &mut [Texture<T>] {
        &mut self.layers
    }
}
