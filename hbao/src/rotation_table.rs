use std::f32::consts::PI;

use log::debug;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::gpu;

/// Table of random rotations, one per deinterleaved slice (or per texel of a
/// 4x4 tile, when rendering at full resolution).
///
/// The table is generated from a fixed seed with ChaCha8, so that frames (and
/// runs, across platforms and releases) are reproducible.
#[derive(Clone, Debug, PartialEq)]
pub struct RotationTable {
    samples: [gpu::RotationSample; gpu::RANDOM_ELEMENTS],
    num_directions: usize,
}

impl RotationTable {
    pub const SEED: u64 = 0;

    pub fn new() -> Self {
        Self::generate(Self::SEED, gpu::NUM_DIRECTIONS)
    }

    /// Generates a table whose angles cover a single sector between two of
    /// `num_directions` directions.
    pub fn generate(seed: u64, num_directions: usize) -> Self {
        debug!(
            "Generating rotation table; seed={}, num_directions={}",
            seed, num_directions
        );

        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        let samples = std::array::from_fn(|_| {
            let r1: f32 = rng.gen();
            let r2: f32 = rng.gen();
            let angle = 2.0 * PI * r1 / (num_directions as f32);

            gpu::RotationSample::new(angle, r2)
        });

        Self {
            samples,
            num_directions,
        }
    }

    pub fn get(&self, idx: usize) -> gpu::RotationSample {
        self.samples[idx % gpu::RANDOM_ELEMENTS]
    }

    pub fn samples(&self) -> &[gpu::RotationSample] {
        &self.samples
    }

    pub fn num_directions(&self) -> usize {
        self.num_directions
    }

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.samples)
    }

    /// Returns the table in a signed-normalized 16-bit form; values are
    /// scaled by `2^15` and saturated (so `1.0` becomes `i16::MAX`).
    pub fn to_snorm16(&self) -> [[i16; 4]; gpu::RANDOM_ELEMENTS] {
        const SCALE: f32 = (1 << 15) as f32;

        self.samples.map(|sample| {
            sample.d0.to_array().map(|value| (value * SCALE) as i16)
        })
    }
}

impl Default for RotationTable {
    fn default() -> Self {
        Self::new()
    }
}
