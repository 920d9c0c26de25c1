use ndarray::Array1;
use uom::si::length::meter;

use crate::{BasinBoundaries, Config, DepthProfile, Prism};

/// Easting of every prism edge, in meters.
///
/// Returns `depths.len() + 1` evenly spaced values; the first and last are
/// exactly the basin start and end.
#[must_use]
pub fn prism_boundaries(depths: &DepthProfile, boundaries: &BasinBoundaries) -> Array1<f64> {
    edges(depths.len(), boundaries)
}

/// Edges of `count` equal-width prisms spanning `boundaries`.
pub(crate) fn edges(count: usize, boundaries: &BasinBoundaries) -> Array1<f64> {
    let (start, end) = boundaries.meters();

    let mut edges = Array1::linspace(start, end, count + 1);
    edges[count] = end;
    edges
}

/// Builds the chain of adjoining prisms under a basin profile.
///
/// Prism `i` spans the `i`-th pair of [`prism_boundaries`], reaches from the
/// surface down to `depths[i]`, and extends [`Config::strike_half_width`]
/// to either side of the profile.
#[must_use]
pub fn make_prisms(
    depths: &DepthProfile,
    boundaries: &BasinBoundaries,
    config: &Config,
) -> Vec<Prism> {
    let edges = prism_boundaries(depths, boundaries);
    let half_width = config.strike_half_width.get::<meter>();

    edges
        .windows(2)
        .into_iter()
        .zip(depths.iter())
        .map(|(pair, &depth)| Prism {
            east: pair[0],
            west: pair[1],
            south: -half_width,
            north: half_width,
            bottom: -depth,
            top: 0.0,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn evenly_spaced_edges() {
        let depths = DepthProfile::new(array![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0]).unwrap();
        let boundaries = BasinBoundaries::from_meters(0.0, 100e3).unwrap();

        let edges = prism_boundaries(&depths, &boundaries);

        assert_eq!(edges.len(), 8);
        assert_eq!(edges[0], 0.0);
        assert_eq!(edges[7], 100e3);
        let width = 100e3 / 7.0;
        for pair in edges.windows(2) {
            assert_relative_eq!(pair[1] - pair[0], width, max_relative = 1e-9);
        }
    }

    #[test]
    fn single_prism_spans_everything() {
        let depths = DepthProfile::new(array![5000.0]).unwrap();
        let boundaries = BasinBoundaries::from_meters(-3.3, 7.7).unwrap();

        assert_eq!(prism_boundaries(&depths, &boundaries), array![-3.3, 7.7]);
    }

    #[test]
    fn prisms_adjoin() {
        let depths = DepthProfile::new(array![100.0, 0.0, 300.0]).unwrap();
        let boundaries = BasinBoundaries::from_meters(0.0, 3000.0).unwrap();

        let prisms = make_prisms(&depths, &boundaries, &Config::default());

        assert_eq!(prisms.len(), 3);
        assert_eq!(
            prisms[0],
            Prism {
                east: 0.0,
                west: 1000.0,
                south: -200e3,
                north: 200e3,
                bottom: -100.0,
                top: 0.0,
            }
        );
        assert_eq!(prisms[1].bottom, 0.0);
        assert_eq!(prisms[2].bottom, -300.0);
        for pair in prisms.windows(2) {
            assert_eq!(pair[0].west, pair[1].east);
        }
        assert_eq!(prisms[2].west, 3000.0);
    }
}
