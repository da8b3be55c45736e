use glam::{vec2, vec3, UVec2, Vec3, Vec4Swizzles};

use crate::{AoParameters, Projection, Texture};

/// Analytic scene: an infinite wall facing the camera plus a couple of
/// axis-aligned boxes floating in front of it.
pub struct Scene {
    pub wall_z: f32,
    pub boxes: Vec<(Vec3, Vec3)>,
}

impl Scene {
    pub fn wall(wall_z: f32) -> Self {
        Self {
            wall_z,
            boxes: Default::default(),
        }
    }

    pub fn floating_cube() -> Self {
        Self {
            wall_z: 10.0,
            boxes: vec![(vec3(-1.0, -1.0, 8.5), vec3(1.0, 1.0, 9.5))],
        }
    }

    /// Ray-casts the scene, returning hardware depth of each texel.
    pub fn depth(&self, projection: &Projection, size: UVec2) -> Texture<f32> {
        let params = AoParameters::new(projection, size, &Default::default());
        let proj_info = params.proj_info;
        let mut depth = Texture::new("depth", size).unwrap();

        depth.par_fill(|pos| {
            let uv = (pos.as_vec2() + vec2(0.5, 0.5)) / size.as_vec2();
            let xy = uv * proj_info.xy() + proj_info.zw();

            // Rays are parametrized by their view-space depth
            let (origin, dir) = if params.is_ortho {
                (vec3(xy.x, xy.y, 0.0), vec3(0.0, 0.0, 1.0))
            } else {
                (Vec3::ZERO, vec3(xy.x, xy.y, 1.0))
            };

            let z = self
                .boxes
                .iter()
                .filter_map(|&(min, max)| Self::hit(origin, dir, min, max))
                .fold(self.wall_z, f32::min);

            projection.hardware_depth(z)
        });

        depth
    }

    fn hit(origin: Vec3, dir: Vec3, min: Vec3, max: Vec3) -> Option<f32> {
        let mut t_min = f32::NEG_INFINITY;
        let mut t_max = f32::INFINITY;

        for axis in 0..3 {
            if dir[axis] == 0.0 {
                if origin[axis] < min[axis] || origin[axis] > max[axis] {
                    return None;
                }
            } else {
                let t0 = (min[axis] - origin[axis]) / dir[axis];
                let t1 = (max[axis] - origin[axis]) / dir[axis];

                t_min = t_min.max(t0.min(t1));
                t_max = t_max.min(t0.max(t1));
            }
        }

        (t_min <= t_max && t_min > 0.0).then_some(t_min)
    }
}
