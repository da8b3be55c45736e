use glam::{vec2, IVec2, Vec2, Vec3};
use rayon::prelude::*;

use crate::{
    gpu, ComputePass, Result, RotationTable, Settings, Texture, TextureArray,
};

/// Estimates ambient occlusion on deinterleaved (quarter-resolution) depth;
/// each slice is processed with its own, constant rotation.
#[derive(Debug)]
pub struct HbaoCalcPass {
    pass: ComputePass,
}

struct SliceTask<'a> {
    slice: usize,
    rotation: gpu::RotationSample,
    output: &'a mut Texture<Vec2>,
}

impl HbaoCalcPass {
    pub fn new(_: &Settings) -> Result<Self> {
        Ok(Self {
            pass: ComputePass::new("hbao_calc"),
        })
    }

    pub fn run(
        &self,
        data: &gpu::HbaoData,
        rotations: &RotationTable,
        depth_slices: &TextureArray<f32>,
        view_normal: &Texture<Vec3>,
        ao_slices: &mut TextureArray<Vec2>,
    ) {
        let tasks: Vec<_> = ao_slices
            .layers_mut()
            .iter_mut()
            .enumerate()
            .map(|(slice, output)| SliceTask {
                slice,
                rotation: rotations.get(slice),
                output,
            })
            .collect();

        self.pass.dispatch(|| {
            tasks.into_par_iter().for_each(|task| {
                Self::run_slice(
                    data,
                    depth_slices.layer(task.slice),
                    view_normal,
                    task,
                );
            });
        });
    }

    fn run_slice(
        data: &gpu::HbaoData,
        depth: &Texture<f32>,
        view_normal: &Texture<Vec3>,
        task: SliceTask,
    ) {
        let slice_offset = gpu::Slice::offset(task.slice).as_ivec2();
        let to_full_res = |texel: IVec2| texel * 4 + slice_offset;
        let rotation = task.rotation;

        // View-space position of a texel of this slice; `texel` might lie
        // outside of the slice, in which case its depth gets clamped, but
        // its uv does not
        let position = |texel: IVec2| {
            data.uv_to_view(
                data.texel_to_uv(to_full_res(texel)),
                depth.get_clamped(texel),
            )
        };

        task.output.par_fill(|pos| {
            let pos = pos.as_ivec2();
            let center = position(pos);

            let normal = view_normal.get_clamped(to_full_res(pos));
            let radius_texels = data.radius_pixels(center.z) / 4.0;

            let ao = gpu::Horizon::eval(
                data,
                rotation,
                center,
                normal,
                radius_texels,
                |offset| position(pos + offset),
            );

            vec2(ao, center.z)
        });
    }
}
