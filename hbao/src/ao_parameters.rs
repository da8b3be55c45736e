use glam::{vec2, vec4, Mat4, UVec2, Vec2, Vec4};

use crate::{gpu, Projection, Tunables};

/// Frame-wide parameters derived from the projection, the viewport and the
/// tunables.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AoParameters {
    pub radius_to_screen: f32,
    pub radius_squared: f32,
    pub neg_inv_radius_squared: f32,
    pub n_dot_v_bias: f32,
    pub ao_multiplier: f32,
    pub pow_exponent: f32,
    pub inv_full_resolution: Vec2,
    pub inv_quarter_resolution: Vec2,

    /// Maps full-resolution uv (and depth) into view space; see
    /// [`Self::proj_info()`].
    pub proj_info: Vec4,

    /// Pixels per view-space unit, horizontally and vertically, at depth 1.0
    /// (for orthographic projections: at any depth).
    pub proj_scale: Vec2,

    pub is_ortho: bool,
}

impl AoParameters {
    pub fn new(
        projection: &Projection,
        size: UVec2,
        tunables: &Tunables,
    ) -> Self {
        let tunables = tunables.sanitized();
        let matrix = projection.matrix(size);
        let is_ortho = projection.is_ortho();
        let quarter_size = gpu::Slice::quarter_resolution(size);

        let proj_scale = vec2(
            size.x as f32 * matrix.x_axis.x * 0.5,
            size.y as f32 * matrix.y_axis.y * 0.5,
        );

        let radius = tunables.radius;
        let radius_squared = radius * radius;

        let neg_inv_radius_squared = if radius_squared > 0.0 {
            -1.0 / radius_squared
        } else {
            f32::NEG_INFINITY
        };

        Self {
            radius_to_screen: radius * 0.5 * proj_scale.y,
            radius_squared,
            neg_inv_radius_squared,
            n_dot_v_bias: tunables.bias,
            ao_multiplier: 1.0 / (1.0 - tunables.bias),
            pow_exponent: tunables.intensity,
            inv_full_resolution: 1.0 / size.as_vec2(),
            inv_quarter_resolution: 1.0 / quarter_size.as_vec2(),
            proj_info: Self::proj_info(matrix, is_ortho),
            proj_scale,
            is_ortho,
        }
    }

    /// Extracts `(a, b, c, d)` such that the view-space position of a point
    /// at uv `(u, v)` and linear depth `z` is:
    ///
    /// - perspective: `((u * a + c) * z, (v * b + d) * z, z)`,
    /// - orthographic: `(u * a + c, v * b + d, z)`.
    pub fn proj_info(matrix: Mat4, is_ortho: bool) -> Vec4 {
        let p00 = matrix.x_axis.x;
        let p11 = matrix.y_axis.y;

        if is_ortho {
            vec4(
                2.0 / p00,
                2.0 / p11,
                -(1.0 + matrix.w_axis.x) / p00,
                -(1.0 + matrix.w_axis.y) / p11,
            )
        } else {
            vec4(
                2.0 / p00,
                2.0 / p11,
                -(1.0 - matrix.z_axis.x) / p00,
                -(1.0 - matrix.z_axis.y) / p11,
            )
        }
    }

    pub fn serialize(&self) -> gpu::HbaoData {
        gpu::HbaoData {
            radius_to_screen: self.radius_to_screen,
            r2: self.radius_squared,
            neg_inv_r2: self.neg_inv_radius_squared,
            n_dot_v_bias: self.n_dot_v_bias,
            inv_full_resolution: self.inv_full_resolution,
            inv_quarter_resolution: self.inv_quarter_resolution,
            ao_multiplier: self.ao_multiplier,
            pow_exponent: self.pow_exponent,
            _pad0: Default::default(),
            proj_info: self.proj_info,
            proj_scale: self.proj_scale,
            proj_ortho: self.is_ortho as u32,
            _pad1: Default::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use glam::{uvec2, Vec4Swizzles};

    use super::*;

    #[test]
    fn perspective() {
        let projection =
            Projection::perspective(60.0f32.to_radians(), 0.1, 100.0);

        let target = AoParameters::new(
            &projection,
            uvec2(130, 98),
            &Tunables::default(),
        );

        let proj_scale = 98.0 / (2.0 * 30.0f32.to_radians().tan());

        assert_relative_eq!(
            target.proj_scale.y,
            proj_scale,
            max_relative = 1e-5
        );

        assert_relative_eq!(
            target.proj_scale.x,
            proj_scale,
            max_relative = 1e-5
        );

        assert_relative_eq!(
            target.radius_to_screen,
            2.0 * 0.5 * proj_scale,
            max_relative = 1e-5
        );

        assert_relative_eq!(target.radius_squared, 4.0);
        assert_relative_eq!(target.neg_inv_radius_squared, -0.25);
        assert_relative_eq!(target.n_dot_v_bias, 0.1);
        assert_relative_eq!(target.ao_multiplier, 1.0 / 0.9);
        assert_relative_eq!(target.pow_exponent, 1.5);
        assert_relative_eq!(target.inv_full_resolution.x, 1.0 / 130.0);
        assert_relative_eq!(target.inv_full_resolution.y, 1.0 / 98.0);
        assert_relative_eq!(target.inv_quarter_resolution.x, 1.0 / 33.0);
        assert_relative_eq!(target.inv_quarter_resolution.y, 1.0 / 25.0);
        assert!(!target.is_ortho);
    }

    #[test]
    fn proj_info_unprojects_screen_corners() {
        let size = uvec2(160, 90);

        for projection in [
            Projection::perspective(1.2, 0.1, 100.0),
            Projection::orthographic(6.0, 0.1, 100.0),
        ] {
            let matrix = projection.matrix(size);
            let target =
                AoParameters::new(&projection, size, &Tunables::default())
                    .serialize();

            for (uv, ndc) in [
                (vec2(0.0, 0.0), vec2(-1.0, -1.0)),
                (vec2(1.0, 1.0), vec2(1.0, 1.0)),
                (vec2(0.5, 0.5), vec2(0.0, 0.0)),
                (vec2(0.25, 1.0), vec2(-0.5, 1.0)),
            ] {
                let pos = target.uv_to_view(uv, 7.0);

                // Our view space looks towards +z, the matrix towards -z
                let clip = matrix * vec4(pos.x, pos.y, -pos.z, 1.0);
                let actual = clip.xy() / clip.w;

                assert_relative_eq!(actual.x, ndc.x, epsilon = 1e-5);
                assert_relative_eq!(actual.y, ndc.y, epsilon = 1e-5);
            }
        }
    }

    #[test]
    fn orthographic() {
        let projection = Projection::orthographic(10.0, 1.0, 50.0);

        let target = AoParameters::new(
            &projection,
            uvec2(200, 100),
            &Tunables::default(),
        );

        assert!(target.is_ortho);
        assert_relative_eq!(target.proj_scale.y, 10.0, max_relative = 1e-6);
        assert_relative_eq!(target.radius_to_screen, 10.0, max_relative = 1e-6);

        let data = target.serialize();

        assert!(data.is_ortho());
        assert_relative_eq!(data.radius_pixels(3.0), data.radius_pixels(30.0));
    }

    #[test]
    fn sanitizes_tunables() {
        let tunables = Tunables {
            intensity: -3.0,
            bias: 0.7,
            ..Default::default()
        };

        let target = AoParameters::new(
            &Default::default(),
            uvec2(16, 16),
            &tunables,
        );

        assert_relative_eq!(target.pow_exponent, 0.0);
        assert_relative_eq!(target.n_dot_v_bias, 0.1);
        assert_relative_eq!(target.ao_multiplier, 1.0 / 0.9);
    }

    #[test]
    fn serialize() {
        let target = AoParameters::new(
            &Default::default(),
            uvec2(64, 48),
            &Default::default(),
        );

        let data = target.serialize();

        assert_eq!(target.radius_to_screen, data.radius_to_screen);
        assert_eq!(target.radius_squared, data.r2);
        assert_eq!(target.neg_inv_radius_squared, data.neg_inv_r2);
        assert_eq!(target.proj_info, data.proj_info);
        assert_eq!(0, data.proj_ortho);
    }
}
