use crate::{gpu, ComputePass, Error, Result, Settings, Texture, TextureArray};

/// Splits a full-resolution texture into 16 quarter-resolution slices.
///
/// Slices are written in batches of `Settings::render_targets` layers at a
/// time.
#[derive(Debug)]
pub struct DeinterleavePass {
    pass: ComputePass,
    batch_size: usize,
}

impl DeinterleavePass {
    pub fn new(settings: &Settings) -> Result<Self> {
        if !(1..=gpu::MAX_RENDER_TARGETS).contains(&settings.render_targets) {
            return Err(Error::PipelineUnavailable {
                pass: "deinterleave",
                reason: format!(
                    "render_targets must be within 1..={}, got {}",
                    gpu::MAX_RENDER_TARGETS,
                    settings.render_targets
                ),
            });
        }

        Ok(Self {
            pass: ComputePass::new("deinterleave"),
            batch_size: settings.render_targets,
        })
    }

    pub fn run<T>(&self, input: &Texture<T>, slices: &mut TextureArray<T>)
    where
        T: Copy + Default + Send + Sync,
    {
        for (batch_idx, batch) in slices
            .layers_mut()
            .chunks_mut(self.batch_size)
            .enumerate()
        {
            let first_slice = batch_idx * self.batch_size;

            self.pass.run_layers(batch, |layer, pos| {
                let texel = gpu::Slice::to_full_res(first_slice + layer, pos);

                input.get_clamped(texel.as_ivec2())
            });
        }
    }
}
