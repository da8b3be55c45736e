use glam::Vec3;

use crate::{gpu, ComputePass, Result, Settings, Texture};

#[derive(Debug)]
pub struct ViewNormalPass {
    pass: ComputePass,
}

impl ViewNormalPass {
    pub fn new(_: &Settings) -> Result<Self> {
        Ok(Self {
            pass: ComputePass::new("view_normal"),
        })
    }

    pub fn run(
        &self,
        data: &gpu::HbaoData,
        depth_linear: &Texture<f32>,
        view_normal: &mut Texture<Vec3>,
    ) {
        self.pass.run(view_normal, |pos| {
            gpu::Normal::reconstruct(|offset| {
                let texel = pos.as_ivec2() + offset;

                data.uv_to_view(
                    data.texel_to_uv(texel),
                    depth_linear.get_clamped(texel),
                )
            })
        });
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use glam::{uvec2, UVec2};

    use super::*;
    use crate::{AoParameters, Projection};

    fn run(
        size: UVec2,
        depth: impl Fn(UVec2) -> f32 + Sync,
    ) -> Texture<Vec3> {
        let data =
            AoParameters::new(&Projection::default(), size, &Default::default())
                .serialize();

        let mut depth_linear = Texture::new("depth_linear", size).unwrap();
        let mut target = Texture::new("target", size).unwrap();

        depth_linear.par_fill(depth);

        ViewNormalPass::new(&Default::default()).unwrap().run(
            &data,
            &depth_linear,
            &mut target,
        );

        target
    }

    #[test]
    fn flat_wall() {
        let target = run(uvec2(9, 7), |_| 10.0);

        for normal in target.as_slice() {
            assert_abs_diff_eq!(normal.x, 0.0, epsilon = 1e-5);
            assert_abs_diff_eq!(normal.y, 0.0, epsilon = 1e-5);
            assert_abs_diff_eq!(normal.z, -1.0, epsilon = 1e-5);
        }
    }

    #[test]
    fn single_texel() {
        let target = run(uvec2(1, 1), |_| 3.0);
        let normal = target.get(uvec2(0, 0));

        assert!(normal.is_finite());
        assert_abs_diff_eq!(normal.length(), 1.0, epsilon = 1e-5);
    }

    #[test]
    fn normals_face_the_camera() {
        // Floor-like surface, receding as the row index decreases
        let target = run(uvec2(16, 16), |pos| 5.0 + (16 - pos.y) as f32 * 0.5);

        for normal in target.as_slice() {
            assert!(normal.z < 0.0, "normal = {normal}");
            assert_abs_diff_eq!(normal.length(), 1.0, epsilon = 1e-5);
        }
    }
}
