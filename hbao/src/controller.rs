mod buffers;
mod pass;
mod passes;

use derivative::Derivative;
use glam::{uvec2, UVec2};
use image::Rgba32FImage;
use log::{debug, info, trace, warn};

pub use self::buffers::*;
pub use self::pass::*;
pub use self::passes::*;
use crate::{
    gpu, utils, Algorithm, AoParameters, Camera, Error, Result, RotationTable,
    Settings, Texture, Tunables,
};

/// Inputs of a single frame.
#[derive(Clone, Copy, Debug)]
pub struct Frame<'a> {
    /// Hardware depth (`[0, 1]`), same size as the viewport.
    pub depth: &'a Texture<f32>,
    pub camera: &'a Camera,
    pub tunables: &'a Tunables,
}

/// Screen-space ambient occlusion renderer.
///
/// Owns all of the intermediate buffers and passes; buffers are sized to the
/// viewport (see [`Self::resize()`]), passes follow the settings (see
/// [`Self::configure()`]).
#[derive(Derivative)]
#[derivative(Debug)]
pub struct Hbao {
    settings: Settings,
    #[derivative(Debug = "ignore")]
    rotations: RotationTable,
    buffers: Option<HbaoBuffers>,
    passes: Option<HbaoPasses>,
}

impl Hbao {
    /// Creates the renderer; failures are logged and leave the renderer in a
    /// state where frames get skipped until a successful [`Self::resize()`]
    /// or [`Self::configure()`].
    pub fn new(settings: Settings, size: UVec2) -> Self {
        Self::with_rotations(settings, size, RotationTable::new())
    }

    /// Same as [`Self::new()`], but samples directions using given table
    /// instead of the default one.
    pub fn with_rotations(
        settings: Settings,
        size: UVec2,
        rotations: RotationTable,
    ) -> Self {
        info!(
            "Initializing; algorithm={}, size={}x{}",
            settings.algorithm.describe(),
            size.x,
            size.y
        );

        if rotations.num_directions() != gpu::NUM_DIRECTIONS {
            warn!(
                "Rotation table was generated for {} directions, but the \
                 estimator marches {}",
                rotations.num_directions(),
                gpu::NUM_DIRECTIONS
            );
        }

        let mut this = Self {
            settings,
            rotations,
            buffers: None,
            passes: None,
        };

        // Both log their failures; frames get skipped until fixed
        this.rebuild_passes().ok();
        this.resize(size).ok();

        debug!("Initialized");

        this
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn rotations(&self) -> &RotationTable {
        &self.rotations
    }

    /// Returns the size buffers are currently allocated for, if any.
    pub fn size(&self) -> Option<UVec2> {
        self.buffers.as_ref().map(|buffers| buffers.size)
    }

    /// Changes the settings, rebuilding the passes.
    ///
    /// When the new settings are invalid, passes get dropped and frames are
    /// skipped until the next successful call.
    pub fn configure(&mut self, settings: Settings) -> Result<()> {
        if settings == self.settings && self.passes.is_some() {
            return Ok(());
        }

        info!(
            "Reconfiguring; algorithm={}, render_targets={}, blur_radius={}",
            settings.algorithm.describe(),
            settings.render_targets,
            settings.blur_radius
        );

        self.settings = settings;
        self.rebuild_passes()
    }

    fn rebuild_passes(&mut self) -> Result<()> {
        self.passes = None;

        match HbaoPasses::new(&self.settings) {
            Ok(passes) => {
                self.passes = Some(passes);
                Ok(())
            }

            Err(err) => {
                warn!("Couldn't build passes: {}", err);
                Err(err)
            }
        }
    }

    /// Reallocates buffers for a viewport of given size; does nothing if the
    /// size didn't change.
    ///
    /// On failure the previous buffers are gone and frames are skipped until
    /// the next successful call.
    pub fn resize(&mut self, size: UVec2) -> Result<()> {
        if self.size() == Some(size) {
            debug!("Size unchanged ({}x{}); keeping buffers", size.x, size.y);
            return Ok(());
        }

        info!("Resizing; size={}x{}", size.x, size.y);

        self.buffers = None;

        match HbaoBuffers::new(size) {
            Ok(buffers) => {
                self.buffers = Some(buffers);
                Ok(())
            }

            Err(err) => {
                warn!("Couldn't allocate buffers: {}", err);
                Err(err)
            }
        }
    }

    /// Renders ambient occlusion and composites it onto `color`.
    ///
    /// If the frame can't be rendered, an error is returned and `color` is
    /// left untouched.
    pub fn render(
        &mut self,
        frame: Frame<'_>,
        color: &mut Rgba32FImage,
    ) -> Result<()> {
        if let Algorithm::None = self.settings.algorithm {
            return Ok(());
        }

        let result = self.try_render(frame, color);

        if let Err(err) = &result {
            warn!("Skipping frame: {}", err);
        }

        result
    }

    fn try_render(
        &mut self,
        frame: Frame<'_>,
        color: &mut Rgba32FImage,
    ) -> Result<()> {
        let passes = self.passes.as_ref().ok_or_else(|| {
            Error::PipelineUnavailable {
                pass: "hbao",
                reason: "passes haven't been built".into(),
            }
        })?;

        let buffers = self.buffers.as_mut().ok_or(Error::ResourceUnavailable)?;
        let size = buffers.size;

        if frame.depth.size() != size {
            return Err(Error::SizeMismatch {
                what: "depth",
                expected: size,
                actual: frame.depth.size(),
            });
        }

        let color_size = uvec2(color.width(), color.height());

        if color_size != size {
            return Err(Error::SizeMismatch {
                what: "color",
                expected: size,
                actual: color_size,
            });
        }

        trace!("Rendering frame; camera={}", frame.camera.describe());

        let tunables = frame.tunables.sanitized();
        let projection = &frame.camera.projection;
        let data = AoParameters::new(projection, size, &tunables).serialize();

        utils::measure("frame", || {
            passes.depth_linearize.run(
                projection.clip_info(),
                frame.depth,
                &mut buffers.depth_linear,
            );

            passes.view_normal.run(
                &data,
                &buffers.depth_linear,
                &mut buffers.view_normal,
            );

            match self.settings.algorithm {
                Algorithm::CacheAware => {
                    passes
                        .deinterleave
                        .run(&buffers.depth_linear, &mut buffers.depth_slices);

                    passes.hbao_calc.run(
                        &data,
                        &self.rotations,
                        &buffers.depth_slices,
                        &buffers.view_normal,
                        &mut buffers.ao_slices,
                    );

                    passes
                        .reinterleave
                        .run(&buffers.ao_slices, &mut buffers.ao_result);
                }

                Algorithm::Classic => {
                    passes.hbao_classic.run(
                        &data,
                        &self.rotations,
                        &buffers.depth_linear,
                        &buffers.view_normal,
                        &mut buffers.ao_result,
                    );
                }

                Algorithm::None => return,
            }

            passes.blur.run(
                tunables.blur_sharpness,
                &mut buffers.ao_result,
                &mut buffers.ao_blur,
            );

            passes.composition.run(&buffers.ao_result, color);
        });

        Ok(())
    }
}

impl Drop for Hbao {
    fn drop(&mut self) {
        info!("Releasing; size={:?}", self.size());
    }
}
