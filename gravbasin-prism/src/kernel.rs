use ndarray::{Array1, ArrayView1, Zip};

/// Evaluates the prism-gravity antiderivative at one corner offset.
///
/// The offsets run from the observation point to a prism corner, in meters.
/// This is the closed-form term of Nagy et al. (2000):
///
/// ```text
/// r = sqrt(e² + n² + u²)
/// e·ln(n + r) + n·ln(e + r) + u·atan2(e·n, -u·r)
/// ```
///
/// Nothing guards the singular case `r = 0` (or `n + r = 0`, `e + r = 0`):
/// the logarithms produce NaN or infinities, which propagate to the caller.
#[must_use]
pub fn kernel(east: f64, north: f64, upward: f64) -> f64 {
    let radius = (east * east + north * north + upward * upward).sqrt();
    east * (north + radius).ln()
        + north * (east + radius).ln()
        + upward * (east * north).atan2(-upward * radius)
}

/// Elementwise [`kernel`] over equally sized arrays of offsets.
///
/// # Panics
///
/// Panics if the three views differ in length.
#[must_use]
pub fn kernel_array(
    east: ArrayView1<f64>,
    north: ArrayView1<f64>,
    upward: ArrayView1<f64>,
) -> Array1<f64> {
    Zip::from(&east)
        .and(&north)
        .and(&upward)
        .map_collect(|&e, &n, &u| kernel(e, n, u))
}
