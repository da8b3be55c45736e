use glam::{Mat4, UVec2, Vec3, Vec4Swizzles};

use crate::gpu;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ProjectionKind {
    /// Perspective projection with given vertical field of view (radians).
    Perspective { fov_y: f32 },

    /// Orthographic projection with given view-space height of the frustum.
    Orthographic { height: f32 },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projection {
    pub kind: ProjectionKind,
    pub near: f32,
    pub far: f32,
}

impl Projection {
    pub fn perspective(fov_y: f32, near: f32, far: f32) -> Self {
        Self {
            kind: ProjectionKind::Perspective { fov_y },
            near,
            far,
        }
    }

    pub fn orthographic(height: f32, near: f32, far: f32) -> Self {
        Self {
            kind: ProjectionKind::Orthographic { height },
            near,
            far,
        }
    }

    pub fn is_ortho(&self) -> bool {
        matches!(self.kind, ProjectionKind::Orthographic { .. })
    }

    /// Returns OpenGL-style (right-handed, `[-1, 1]` clip depth) projection
    /// matrix for a viewport of given size.
    pub fn matrix(&self, size: UVec2) -> Mat4 {
        let aspect = (size.x as f32) / (size.y.max(1) as f32);

        match self.kind {
            ProjectionKind::Perspective { fov_y } => {
                Mat4::perspective_rh_gl(fov_y, aspect, self.near, self.far)
            }

            ProjectionKind::Orthographic { height } => {
                let half_h = height * 0.5;
                let half_w = half_h * aspect;

                Mat4::orthographic_rh_gl(
                    -half_w, half_w, -half_h, half_h, self.near, self.far,
                )
            }
        }
    }

    pub fn clip_info(&self) -> gpu::ClipInfo {
        gpu::ClipInfo::new(self.near, self.far, self.is_ortho())
    }

    /// Converts linear view-space depth into hardware depth, i.e. does the
    /// opposite of [`gpu::ClipInfo::linearize()`].
    pub fn hardware_depth(&self, eye_z: f32) -> f32 {
        let (near, far) = (self.near, self.far);

        if self.is_ortho() {
            (eye_z - near) / (far - near)
        } else {
            far * (eye_z - near) / (eye_z * (far - near))
        }
    }

    pub fn describe(&self) -> String {
        match self.kind {
            ProjectionKind::Perspective { fov_y } => format!(
                "perspective; fov_y={:.1}°, near={}, far={}",
                fov_y.to_degrees(),
                self.near,
                self.far
            ),

            ProjectionKind::Orthographic { height } => format!(
                "orthographic; height={}, near={}, far={}",
                height, self.near, self.far
            ),
        }
    }
}

impl Default for Projection {
    fn default() -> Self {
        Self::perspective(45.0f32.to_radians(), 0.1, 100.0)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Camera {
    pub projection: Projection,

    /// World-to-view transform; the pipeline itself works purely in view
    /// space, so this is used for diagnostics only.
    pub view: Mat4,
}

impl Camera {
    pub fn describe(&self) -> String {
        // `+ 0.0` turns `-0.0` into `0.0`
        let origin = self.view.inverse().w_axis.xyz() + Vec3::ZERO;

        format!(
            "{}; origin={:.2},{:.2},{:.2}",
            self.projection.describe(),
            origin.x,
            origin.y,
            origin.z
        )
    }
}
