use core::f32::consts::PI;

use glam::{vec2, IVec2, Vec2, Vec3};

use crate::{F32Ext, HbaoData, RotationSample, NUM_DIRECTIONS, NUM_STEPS};

/// Horizon-based ambient occlusion estimator.
pub struct Horizon;

impl Horizon {
    /// Estimates visibility (`1.0` = unoccluded) of a single texel.
    ///
    /// - `position` and `normal` describe the texel in view space,
    /// - `radius_texels` is the AO radius expressed in texels of the buffer
    ///   `sample` reads from,
    /// - `sample` returns view-space position of the texel at given offset
    ///   relative to the center (clamped to the edge of the buffer).
    pub fn eval(
        data: &HbaoData,
        rotation: RotationSample,
        position: Vec3,
        normal: Vec3,
        radius_texels: f32,
        sample: impl Fn(IVec2) -> Vec3,
    ) -> f32 {
        let step_size = radius_texels / (NUM_STEPS as f32 + 1.0);
        let alpha = 2.0 * PI / (NUM_DIRECTIONS as f32);
        let mut ao = 0.0;

        for direction_idx in 0..NUM_DIRECTIONS {
            let angle = alpha * (direction_idx as f32);
            let direction = rotation.rotate(vec2(angle.cos(), angle.sin()));

            // Sine of the highest horizon seen so far along this direction
            let mut horizon = -1.0f32;
            let mut ray_texels = rotation.jitter() * step_size + 1.0;

            for _ in 0..NUM_STEPS {
                let offset = Self::snap(ray_texels * direction);

                ray_texels += step_size;

                let v = sample(offset) - position;
                let vv = v.length_squared();

                if vv <= 0.0 {
                    continue;
                }

                horizon = horizon.max(normal.dot(v) * vv.sqrt().recip());

                ao += (horizon - data.n_dot_v_bias).saturate()
                    * data.falloff(vv).saturate();
            }
        }

        ao *= data.ao_multiplier / ((NUM_DIRECTIONS * NUM_STEPS) as f32);

        ao.to_visibility(data.pow_exponent)
    }

    fn snap(offset: Vec2) -> IVec2 {
        offset.round().as_ivec2()
    }
}
