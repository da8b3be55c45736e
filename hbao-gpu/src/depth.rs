use glam::{vec4, Vec4};

/// Describes how to turn hardware (window-space, `[0, 1]`) depth back into
/// linear view-space depth.
///
/// Stored as `(near * far, near - far, far, perspective)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClipInfo {
    pub d0: Vec4,
}

impl ClipInfo {
    pub fn new(near: f32, far: f32, ortho: bool) -> Self {
        let perspective = if ortho { 0.0 } else { 1.0 };

        Self {
            d0: vec4(near * far, near - far, far, perspective),
        }
    }

    pub fn is_ortho(&self) -> bool {
        self.d0.w == 0.0
    }

    /// Converts hardware depth into linear view-space depth.
    pub fn linearize(&self, depth: f32) -> f32 {
        if self.is_ortho() {
            self.d0.y + self.d0.z - depth * self.d0.y
        } else {
            self.d0.x / (self.d0.y * depth + self.d0.z)
        }
    }
}
