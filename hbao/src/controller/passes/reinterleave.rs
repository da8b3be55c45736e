use crate::{gpu, ComputePass, Result, Settings, Texture, TextureArray};

/// Gathers 16 quarter-resolution slices back into a full-resolution texture;
/// the opposite of [`super::DeinterleavePass`].
#[derive(Debug)]
pub struct ReinterleavePass {
    pass: ComputePass,
}

impl ReinterleavePass {
    pub fn new(_: &Settings) -> Result<Self> {
        Ok(Self {
            pass: ComputePass::new("reinterleave"),
        })
    }

    pub fn run<T>(&self, slices: &TextureArray<T>, output: &mut Texture<T>)
    where
        T: Copy + Default + Send + Sync,
    {
        self.pass.run(output, |pos| {
            let (slice, pos) = gpu::Slice::of(pos);

            slices.layer(slice).get(pos)
        });
    }
}
