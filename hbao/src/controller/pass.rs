use glam::UVec2;
use log::{debug, trace};
use rayon::prelude::*;

use crate::{utils, Texture};

/// A single stage of the pipeline that evaluates a kernel per texel.
#[derive(Debug)]
pub struct ComputePass {
    label: String,
}

impl ComputePass {
    pub fn new(label: impl ToString) -> Self {
        let label = label.to_string();

        debug!("Initializing pass: {}", label);

        Self { label }
    }

    /// Evaluates `kernel` for each texel of `output`.
    pub fn run<T>(
        &self,
        output: &mut Texture<T>,
        kernel: impl Fn(UVec2) -> T + Sync,
    ) where
        T: Copy + Default + Send,
    {
        trace!(
            "Dispatching pass: {}; output=`{}`, size={:?}",
            self.label,
            output.label(),
            output.size()
        );

        utils::measure(&self.label, || output.par_fill(kernel));
    }

    /// Evaluates `kernel` for each texel of each given layer, processing the
    /// layers concurrently; the kernel receives index of the layer within
    /// `outputs`.
    pub fn run_layers<T>(
        &self,
        outputs: &mut [Texture<T>],
        kernel: impl Fn(usize, UVec2) -> T + Sync,
    ) where
        T: Copy + Default + Send,
    {
        trace!(
            "Dispatching pass: {}; layers={}",
            self.label,
            outputs.len()
        );

        utils::measure(&self.label, || {
            outputs
                .par_iter_mut()
                .enumerate()
                .for_each(|(layer, output)| {
                    output.par_fill(|pos| kernel(layer, pos));
                });
        });
    }

    /// Runs a custom dispatch under this pass' label.
    pub fn dispatch<R>(&self, f: impl FnOnce() -> R) -> R {
        trace!("Dispatching pass: {}", self.label);

        utils::measure(&self.label, f)
    }
}
