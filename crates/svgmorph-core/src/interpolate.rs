use crate::Result;

/// Linear blend of `from` toward `to`; `p = 0` is `from`, `p = 1` is `to`.
#[inline]
pub fn lerp(from: f64, to: f64, p: f64) -> f64 {
    from + (to - from) * p
}

/// The interior fractions `(i + 1) / (steps + 1)` for `i in 0..steps`.
///
/// Endpoints are excluded: `fractions(1)` yields only `0.5`.
pub fn fractions(steps: usize) -> impl ExactSizeIterator<Item = f64> {
    let denom = (steps + 1) as f64;
    (0..steps).map(move |i| (i + 1) as f64 / denom)
}

/// Something that can be blended with a structurally compatible partner.
pub trait Interpolate: Sized {
    /// Structural precondition for [`Interpolate::interpolated`]. Never fails, only answers.
    fn can_interpolate(&self, other: &Self) -> bool;

    /// One intermediate value at fraction `p`.
    fn interpolated(&self, other: &Self, p: f64) -> Result<Self>;
}
