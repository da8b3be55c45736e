use bytemuck::{Pod, Zeroable};
use glam::{vec2, vec3, IVec2, Vec2, Vec3, Vec4, Vec4Swizzles};

/// Parameters shared by every HBAO pass within a frame.
///
/// Layout is fixed (`std140`-compatible, 80 bytes, every `vec4` starting at a
/// 16-byte boundary) so that the record can be uploaded as-is to any
/// substrate:
///
/// | offset | field                                                   |
/// |--------|---------------------------------------------------------|
/// | 0      | radius_to_screen, r2, neg_inv_r2, n_dot_v_bias           |
/// | 16     | inv_full_resolution.xy, inv_quarter_resolution.xy        |
/// | 32     | ao_multiplier, pow_exponent, `_pad0`.xy                  |
/// | 48     | proj_info.xyzw                                           |
/// | 64     | proj_scale.xy, proj_ortho, `_pad1`                       |
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct HbaoData {
    pub radius_to_screen: f32,
    pub r2: f32,
    pub neg_inv_r2: f32,
    pub n_dot_v_bias: f32,
    pub inv_full_resolution: Vec2,
    pub inv_quarter_resolution: Vec2,
    pub ao_multiplier: f32,
    pub pow_exponent: f32,
    pub _pad0: Vec2,
    pub proj_info: Vec4,
    pub proj_scale: Vec2,
    pub proj_ortho: u32,
    pub _pad1: u32,
}

const _: () = assert!(core::mem::size_of::<HbaoData>() == 80);

impl HbaoData {
    pub fn is_ortho(&self) -> bool {
        self.proj_ortho != 0
    }

    /// Given a full-resolution uv and a linear depth, returns the view-space
    /// position of that point (z pointing away from the camera).
    pub fn uv_to_view(&self, uv: Vec2, eye_z: f32) -> Vec3 {
        let xy = uv * self.proj_info.xy() + self.proj_info.zw();
        let xy = if self.is_ortho() { xy } else { xy * eye_z };

        vec3(xy.x, xy.y, eye_z)
    }

    /// Returns uv of the center of given full-resolution texel; texels lying
    /// outside of the buffer map outside of `[0, 1]`.
    pub fn texel_to_uv(&self, texel: IVec2) -> Vec2 {
        (texel.as_vec2() + vec2(0.5, 0.5)) * self.inv_full_resolution
    }

    /// Returns how many full-resolution pixels the AO radius covers at given
    /// view-space depth.
    pub fn radius_pixels(&self, eye_z: f32) -> f32 {
        if self.is_ortho() {
            self.radius_to_screen
        } else {
            self.radius_to_screen / eye_z
        }
    }

    /// Distance-based attenuation; reaches zero at the AO radius.
    pub fn falloff(&self, distance_sqr: f32) -> f32 {
        distance_sqr * self.neg_inv_r2 + 1.0
    }
}
