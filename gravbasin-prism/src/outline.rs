use crate::{BasinBoundaries, DepthProfile, prism_boundaries};

const METERS_PER_KM: f64 = 1000.0;

/// Outline of the prism chain as `[x, depth]` points in kilometers.
///
/// The path starts at the surface at the basin start, steps across the flat
/// bottom of every prism, and returns to the surface at the basin end. Depth
/// is positive downward.
#[must_use]
pub fn outline(depths: &DepthProfile, boundaries: &BasinBoundaries) -> Vec<[f64; 2]> {
    let edges = prism_boundaries(depths, boundaries);
    let n = depths.len();

    let mut points = Vec::with_capacity(2 * n + 2);
    points.push([edges[0], 0.0]);
    for (i, &depth) in depths.iter().enumerate() {
        points.push([edges[i], depth]);
        points.push([edges[i + 1], depth]);
    }
    points.push([edges[n], 0.0]);

    points
        .into_iter()
        .map(|[x, depth]| [x / METERS_PER_KM, depth / METERS_PER_KM])
        .collect()
}

/// Lower limit of a depth axis that fits the whole outline, in kilometers.
#[must_use]
pub fn outline_depth_limit(depths: &DepthProfile) -> f64 {
    depths.max_depth() / METERS_PER_KM * 1.05
}
