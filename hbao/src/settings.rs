use crate::gpu;

/// Which ambient-occlusion variant gets rendered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Algorithm {
    /// Skips ambient occlusion; the color target is left as-is.
    None,

    /// Cache-aware HBAO: the depth buffer is split into 16 quarter-resolution
    /// slices, each processed with a single rotation.
    #[default]
    CacheAware,

    /// Full-resolution HBAO, rotation picked per texel from a 4x4 tile.
    Classic,
}

impl Algorithm {
    pub fn describe(&self) -> &'static str {
        match self {
            Algorithm::None => "none",
            Algorithm::CacheAware => "cache-aware",
            Algorithm::Classic => "classic",
        }
    }
}

/// Structural settings; changing them requires rebuilding the passes.
#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    pub algorithm: Algorithm,

    /// How many slices a single deinterleaving dispatch writes at once.
    ///
    /// Must be within `1..=MAX_RENDER_TARGETS`.
    pub render_targets: usize,

    /// Radius of the cross-bilateral blur, in texels; `1..=8`.
    pub blur_radius: u32,
}

impl Settings {
    pub const MAX_BLUR_RADIUS: u32 = 8;
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            algorithm: Default::default(),
            render_targets: gpu::MAX_RENDER_TARGETS,
            blur_radius: gpu::BLUR_RADIUS,
        }
    }
}
