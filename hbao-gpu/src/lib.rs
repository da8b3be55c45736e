//! Per-texel kernels and parameter records used by the HBAO passes.
//!
//! Everything here is a pure function of its inputs: kernels receive texel
//! fetches as closures, so the very same code can be driven by any substrate
//! that is able to evaluate a function per texel.

mod blur;
mod depth;
mod hbao_data;
mod horizon;
mod normal;
mod rotation;
mod slice;
mod utils;

pub use self::blur::*;
pub use self::depth::*;
pub use self::hbao_data::*;
pub use self::horizon::*;
pub use self::normal::*;
pub use self::rotation::*;
pub use self::slice::*;
pub use self::utils::*;

/// Number of angular directions marched per texel.
///
/// Must stay in sync with the rotation table: random angles are drawn from
/// `[0, 2π / NUM_DIRECTIONS)`, i.e. a single sector between two directions.
pub const NUM_DIRECTIONS: usize = 8;

/// Number of steps marched along each direction.
pub const NUM_STEPS: usize = 4;

/// Side of the square grid of sub-pixel offsets (and of random rotations).
pub const RANDOM_SIZE: usize = 4;

/// Number of deinterleaved slices (and of random rotations).
pub const RANDOM_ELEMENTS: usize = RANDOM_SIZE * RANDOM_SIZE;

/// Maximum number of layers a single deinterleaving dispatch may write.
pub const MAX_RENDER_TARGETS: usize = 8;

/// Default radius (in texels) of the cross-bilateral blur.
pub const BLUR_RADIUS: u32 = 3;

/// Scales the averaged occlusion before it's turned into visibility.
pub const OCCLUSION_STRENGTH: f32 = 2.0;
