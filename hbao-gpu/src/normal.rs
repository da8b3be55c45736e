use glam::{ivec2, vec3, IVec2, Vec3};

pub struct Normal;

impl Normal {
    /// Normal returned when the neighbourhood carries no slope information
    /// (e.g. a 1x1 buffer); faces the camera.
    pub const FACING_CAMERA: Vec3 = vec3(0.0, 0.0, -1.0);

    /// Reconstructs view-space normal at a texel from view-space positions of
    /// its immediate neighbours.
    ///
    /// `position` returns view-space position of the texel at given offset
    /// relative to the center; it's expected to clamp lookups to the edge of
    /// the buffer.
    ///
    /// For each axis the shorter of the forward and backward differences is
    /// used, which keeps normals crisp at depth discontinuities.
    pub fn reconstruct(position: impl Fn(IVec2) -> Vec3) -> Vec3 {
        let p = position(IVec2::ZERO);
        let pr = position(ivec2(1, 0));
        let pl = position(ivec2(-1, 0));
        let pt = position(ivec2(0, 1));
        let pb = position(ivec2(0, -1));

        let dx = Self::min_diff(p, pr, pl);
        let dy = Self::min_diff(p, pt, pb);

        dy.cross(dx).try_normalize().unwrap_or(Self::FACING_CAMERA)
    }

    fn min_diff(p: Vec3, forward: Vec3, backward: Vec3) -> Vec3 {
        let v1 = forward - p;
        let v2 = p - backward;

        if v1.length_squared() < v2.length_squared() && v1 != Vec3::ZERO {
            v1
        } else if v2 != Vec3::ZERO {
            v2
        } else {
            v1
        }
    }
}
