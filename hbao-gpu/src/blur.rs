use glam::{vec2, Vec2};

use crate::F32Ext;

/// Depth-aware (cross-bilateral) blur, evaluated along a single axis.
///
/// Texels are `(ao, view_z)` pairs; the blurred value is returned together
/// with the center's depth so that the output can be fed into a subsequent
/// pass along the other axis.
#[derive(Clone, Copy, Debug)]
pub struct BilateralBlur {
    pub radius: u32,
    pub sharpness: f32,
}

impl BilateralBlur {
    pub fn new(radius: u32, sharpness: f32) -> Self {
        Self { radius, sharpness }
    }

    /// Weight of a neighbour `r` texels away whose depth differs from the
    /// center's by `depth_diff`.
    ///
    /// With zero sharpness the depth term is always 1, so the kernel turns
    /// into a plain Gaussian (not a box).
    pub fn weight(&self, r: f32, depth_diff: f32) -> f32 {
        let spatial = r.gaussian((self.radius as f32) * 0.5);
        let range = (-self.sharpness * depth_diff.abs()).exp();

        spatial * range
    }

    /// Blurs texel at the center; `sample` returns `(ao, view_z)` of texel at
    /// given (signed) distance along the axis.
    pub fn eval(&self, sample: impl Fn(i32) -> Vec2) -> Vec2 {
        let center = sample(0);
        let mut total = center.x;
        let mut total_weight = 1.0;

        for r in 1..=(self.radius as i32) {
            for s in [sample(r), sample(-r)] {
                let w = self.weight(r as f32, s.y - center.y);

                total += s.x * w;
                total_weight += w;
            }
        }

        vec2(total / total_weight, center.y)
    }
}
