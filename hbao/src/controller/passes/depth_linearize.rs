use crate::{gpu, ComputePass, Result, Settings, Texture};

#[derive(Debug)]
pub struct DepthLinearizePass {
    pass: ComputePass,
}

impl DepthLinearizePass {
    pub fn new(_: &Settings) -> Result<Self> {
        Ok(Self {
            pass: ComputePass::new("depth_linearize"),
        })
    }

    pub fn run(
        &self,
        clip_info: gpu::ClipInfo,
        depth: &Texture<f32>,
        depth_linear: &mut Texture<f32>,
    ) {
        self.pass
            .run(depth_linear, |pos| clip_info.linearize(depth.get(pos)));
    }
}
