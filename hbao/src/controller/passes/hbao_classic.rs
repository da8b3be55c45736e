use glam::{vec2, IVec2, Vec2, Vec3};

use crate::{gpu, ComputePass, Result, RotationTable, Settings, Texture};

/// Estimates ambient occlusion directly on the full-resolution depth; the
/// rotation is picked per texel, repeating every 4x4 texels.
#[derive(Debug)]
pub struct HbaoClassicPass {
    pass: ComputePass,
}

impl HbaoClassicPass {
    pub fn new(_: &Settings) -> Result<Self> {
        Ok(Self {
            pass: ComputePass::new("hbao_classic"),
        })
    }

    pub fn run(
        &self,
        data: &gpu::HbaoData,
        rotations: &RotationTable,
        depth_linear: &Texture<f32>,
        view_normal: &Texture<Vec3>,
        ao_result: &mut Texture<Vec2>,
    ) {
        let position = |texel: IVec2| {
            data.uv_to_view(
                data.texel_to_uv(texel),
                depth_linear.get_clamped(texel),
            )
        };

        self.pass.run(ao_result, |pos| {
            let (slice, _) = gpu::Slice::of(pos);
            let pos = pos.as_ivec2();
            let center = position(pos);

            let ao = gpu::Horizon::eval(
                data,
                rotations.get(slice),
                center,
                view_normal.get_clamped(pos),
                data.radius_pixels(center.z),
                |offset| position(pos + offset),
            );

            vec2(ao, center.z)
        });
    }
}
