use glam::{ivec2, Vec2};

use crate::{gpu, ComputePass, Error, Result, Settings, Texture};

/// Separable, depth-aware blur of the AO buffer.
#[derive(Debug)]
pub struct BlurPass {
    horizontal: ComputePass,
    vertical: ComputePass,
    radius: u32,
}

impl BlurPass {
    pub fn new(settings: &Settings) -> Result<Self> {
        let radius = settings.blur_radius;

        if !(1..=Settings::MAX_BLUR_RADIUS).contains(&radius) {
            return Err(Error::PipelineUnavailable {
                pass: "blur",
                reason: format!(
                    "blur_radius must be within 1..={}, got {}",
                    Settings::MAX_BLUR_RADIUS,
                    radius
                ),
            });
        }

        Ok(Self {
            horizontal: ComputePass::new("blur_horizontal"),
            vertical: ComputePass::new("blur_vertical"),
            radius,
        })
    }

    /// Blurs `ao` in place, using `scratch` as the intermediate target.
    pub fn run(
        &self,
        sharpness: f32,
        ao: &mut Texture<Vec2>,
        scratch: &mut Texture<Vec2>,
    ) {
        let blur = gpu::BilateralBlur::new(self.radius, sharpness);

        self.horizontal.run(scratch, |pos| {
            let pos = pos.as_ivec2();

            blur.eval(|r| ao.get_clamped(pos + ivec2(r, 0)))
        });

        self.vertical.run(ao, |pos| {
            let pos = pos.as_ivec2();

            blur.eval(|r| scratch.get_clamped(pos + ivec2(0, r)))
        });
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use glam::{uvec2, vec2};

    use super::*;

    fn run(sharpness: f32) -> Texture<Vec2> {
        let size = uvec2(16, 4);
        let mut ao = Texture::new("ao", size).unwrap();
        let mut scratch = Texture::new("scratch", size).unwrap();

        // Dark foreground on the left, bright background on the right
        ao.par_fill(|pos| {
            if pos.x < 8 {
                vec2(0.0, 5.0)
            } else {
                vec2(1.0, 5.5)
            }
        });

        BlurPass::new(&Default::default())
            .unwrap()
            .run(sharpness, &mut ao, &mut scratch);

        ao
    }

    #[test]
    fn keeps_depth() {
        let target = run(1.0);

        assert_eq!(5.0, target.get(uvec2(7, 2)).y);
        assert_eq!(5.5, target.get(uvec2(8, 2)).y);
    }

    #[test]
    fn leakage_decreases_with_sharpness() {
        let leakage: Vec<_> = [0.0, 0.5, 2.0, 8.0]
            .into_iter()
            .map(|sharpness| run(sharpness).get(uvec2(7, 1)).x)
            .collect();

        for pair in leakage.windows(2) {
            assert!(pair[0] > pair[1], "leakage = {leakage:?}");
        }
    }

    #[test]
    fn uniform_input() {
        let size = uvec2(5, 5);
        let mut ao = Texture::new("ao", size).unwrap();
        let mut scratch = Texture::new("scratch", size).unwrap();

        ao.par_fill(|_| vec2(0.75, 1.0));

        BlurPass::new(&Default::default())
            .unwrap()
            .run(40.0, &mut ao, &mut scratch);

        for texel in ao.as_slice() {
            assert_relative_eq!(texel.x, 0.75, epsilon = 1e-6);
        }
    }

    #[test]
    fn invalid_radius() {
        for blur_radius in [0, 9] {
            let settings = Settings {
                blur_radius,
                ..Default::default()
            };

            assert!(matches!(
                BlurPass::new(&settings),
                Err(Error::PipelineUnavailable { .. })
            ));
        }
    }
}
