use log::debug;

/// Per-frame knobs of the effect; can be freely changed between frames.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tunables {
    /// Exponent applied to the final visibility.
    pub intensity: f32,

    /// World-space radius within which occluders are considered.
    pub radius: f32,

    /// Angle bias suppressing self-occlusion on tessellated surfaces.
    pub bias: f32,

    /// How strongly the blur refuses to cross depth discontinuities.
    pub blur_sharpness: f32,
}

impl Tunables {
    pub const MAX_BIAS: f32 = 0.1;

    /// Returns a copy with every knob brought into its valid range.
    pub fn sanitized(&self) -> Self {
        let default = Self::default();

        let this = Self {
            intensity: Self::sanitize(self.intensity, default.intensity)
                .max(0.0),
            radius: Self::sanitize(self.radius, default.radius).max(0.0),
            bias: Self::sanitize(self.bias, default.bias)
                .clamp(0.0, Self::MAX_BIAS),
            blur_sharpness: Self::sanitize(
                self.blur_sharpness,
                default.blur_sharpness,
            )
            .max(0.0),
        };

        if this != *self {
            debug!("Tunables sanitized: {:?} -> {:?}", self, this);
        }

        this
    }

    fn sanitize(value: f32, default: f32) -> f32 {
        if value.is_finite() {
            value
        } else {
            default
        }
    }
}

impl Default for Tunables {
    fn default() -> Self {
        Self {
            intensity: 1.5,
            radius: 2.0,
            bias: 0.1,
            blur_sharpness: 40.0,
        }
    }
}
