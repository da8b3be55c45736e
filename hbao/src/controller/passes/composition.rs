use glam::Vec2;
use image::Rgba32FImage;
use rayon::prelude::*;

use crate::{ComputePass, Result, Settings, Texture};

/// Multiplies the color target by the ambient occlusion; alpha is kept
/// as-is.
#[derive(Debug)]
pub struct CompositionPass {
    pass: ComputePass,
}

impl CompositionPass {
    pub fn new(_: &Settings) -> Result<Self> {
        Ok(Self {
            pass: ComputePass::new("composition"),
        })
    }

    pub fn run(&self, ao: &Texture<Vec2>, color: &mut Rgba32FImage) {
        let color: &mut [f32] = color;

        self.pass.dispatch(|| {
            color
                .par_chunks_mut(4)
                .zip(ao.as_slice().par_iter())
                .for_each(|(pixel, ao)| {
                    for channel in &mut pixel[0..3] {
                        *channel *= ao.x;
                    }
                });
        });
    }
}
