use crate::OCCLUSION_STRENGTH;

pub trait F32Ext
where
    Self: Sized,
{
    fn sqr(self) -> Self;
    fn saturate(self) -> Self;

    /// Unnormalized Gaussian bell (base 2) with given standard deviation,
    /// evaluated at `self`; equals `1.0` at zero.
    fn gaussian(self, sigma: Self) -> Self;

    /// Turns accumulated occlusion into visibility (`1.0` = unoccluded),
    /// sharpened by `exponent`.
    fn to_visibility(self, exponent: Self) -> Self;
}

impl F32Ext for f32 {
    fn sqr(self) -> Self {
        self * self
    }

    fn saturate(self) -> Self {
        self.clamp(0.0, 1.0)
    }

    fn gaussian(self, sigma: Self) -> Self {
        (-self.sqr() / (2.0 * sigma.sqr())).exp2()
    }

    fn to_visibility(self, exponent: Self) -> Self {
        (1.0 - self * OCCLUSION_STRENGTH).saturate().powf(exponent)
    }
}
