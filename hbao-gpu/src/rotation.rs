use bytemuck::{Pod, Zeroable};
use glam::{vec2, vec4, Vec2, Vec4};

/// Random rotation (and jitter) applied to the sampling directions of a
/// single slice.
///
/// Stored as `(cos(angle), sin(angle), jitter, 0)`.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct RotationSample {
    pub d0: Vec4,
}

impl RotationSample {
    pub fn new(angle: f32, jitter: f32) -> Self {
        Self {
            d0: vec4(angle.cos(), angle.sin(), jitter, 0.0),
        }
    }

    pub fn cos_sin(&self) -> Vec2 {
        vec2(self.d0.x, self.d0.y)
    }

    /// Offset (in units of a single step) at which marching starts.
    pub fn jitter(&self) -> f32 {
        self.d0.z
    }

    /// Rotates given direction by this sample's angle.
    pub fn rotate(&self, dir: Vec2) -> Vec2 {
        let cs = self.cos_sin();

        vec2(dir.x * cs.x - dir.y * cs.y, dir.x * cs.y + dir.y * cs.x)
    }
}

#[cfg(test)]
mod tests {
    use core::f32::consts::FRAC_PI_2;

    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn rotate() {
        let target = RotationSample::new(FRAC_PI_2, 0.25);
        let dir = target.rotate(vec2(1.0, 0.0));

        assert_abs_diff_eq!(dir.x, 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(dir.y, 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(target.jitter(), 0.25);
    }

    #[test]
    fn identity() {
        let target = RotationSample::new(0.0, 0.0);
        let dir = vec2(0.6, -0.8);

        assert_eq!(dir, target.rotate(dir));
    }
}
