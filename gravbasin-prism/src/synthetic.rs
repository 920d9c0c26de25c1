use ndarray::{Array1, ArrayView1};
use uom::si::{
    f64::Length,
    length::{kilometer, meter},
};

use crate::{BasinBoundaries, DepthProfile, ForwardError, chain};

/// A Gaussian bump, `amplitude * exp(-((x - shift) / std)²)`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Gaussian {
    pub shift: Length,
    pub std: Length,
    pub amplitude: Length,
}

impl Gaussian {
    /// Evaluates the bump at each easting, all values in meters.
    #[must_use]
    pub fn eval(&self, x: ArrayView1<f64>) -> Array1<f64> {
        let shift = self.shift.get::<meter>();
        let std = self.std.get::<meter>();
        let amplitude = self.amplitude.get::<meter>();
        x.mapv(|x| amplitude * (-((x - shift) / std).powi(2)).exp())
    }
}

/// Recipe for a smooth synthetic basin built from Gaussian bumps.
///
/// Depths are sampled at prism centers and shifted so the shallowest prism
/// sits exactly at the surface, which keeps the basin edges free of steps.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SyntheticModel {
    /// Number of prisms.
    pub size: usize,
    pub start: Length,
    pub end: Length,
    pub bumps: Vec<Gaussian>,
}

impl Default for SyntheticModel {
    /// A 100 km wide basin: a deep main trough plus a shallow side lobe.
    fn default() -> Self {
        Self {
            size: 100,
            start: Length::new::<kilometer>(0.0),
            end: Length::new::<kilometer>(100.0),
            bumps: vec![
                Gaussian {
                    shift: Length::new::<kilometer>(45.0),
                    std: Length::new::<kilometer>(20.0),
                    amplitude: Length::new::<kilometer>(5.0),
                },
                Gaussian {
                    shift: Length::new::<kilometer>(80.0),
                    std: Length::new::<kilometer>(10.0),
                    amplitude: Length::new::<kilometer>(1.0),
                },
            ],
        }
    }
}

impl SyntheticModel {
    /// Generates the depth profile and its boundaries.
    ///
    /// # Errors
    ///
    /// Fails if `size` is zero, the extent is invalid, or the bumps produce
    /// NaN depths (for example a bump with zero width centered on a prism).
    pub fn build(&self) -> Result<(DepthProfile, BasinBoundaries), ForwardError> {
        if self.size == 0 {
            return Err(ForwardError::EmptyDepthProfile);
        }
        let boundaries = BasinBoundaries::new(self.start, self.end)?;

        let edges = chain::edges(self.size, &boundaries);
        let half_width = 0.5 * (edges[1] - edges[0]);
        let centers = edges.slice(ndarray::s![..-1]).mapv(|edge| edge + half_width);

        let mut depths = self
            .bumps
            .iter()
            .fold(Array1::<f64>::zeros(self.size), |total, bump| {
                total + bump.eval(centers.view())
            });
        let shallowest = depths.fold(f64::INFINITY, |min, &depth| f64::min(min, depth));
        if shallowest.is_finite() {
            depths.mapv_inplace(|depth| depth - shallowest);
        }

        Ok((DepthProfile::new(depths)?, boundaries))
    }
}

/// The default [`SyntheticModel`], ready to use.
///
/// # Errors
///
/// Never fails for the default recipe; the signature mirrors [`SyntheticModel::build`].
pub fn synthetic_model() -> Result<(DepthProfile, BasinBoundaries), ForwardError> {
    SyntheticModel::default().build()
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn gaussian_shape() {
        let bump = Gaussian {
            shift: Length::new::<meter>(10.0),
            std: Length::new::<meter>(2.0),
            amplitude: Length::new::<meter>(3.0),
        };

        let values = bump.eval(array![10.0, 12.0, 8.0].view());

        assert_relative_eq!(values[0], 3.0);
        assert_relative_eq!(values[1], 3.0 * (-1.0_f64).exp());
        assert_relative_eq!(values[1], values[2]);
    }

    #[test]
    fn default_model() {
        let (depths, boundaries) = synthetic_model().unwrap();

        assert_eq!(depths.len(), 100);
        assert_eq!(boundaries.meters(), (0.0, 100e3));

        let shallowest = depths.iter().copied().fold(f64::INFINITY, f64::min);
        assert_eq!(shallowest, 0.0);

        // The side lobe at 80 km pulls the deepest prism just past 45 km.
        let (deepest, _) = depths
            .iter()
            .enumerate()
            .fold((0, 0.0), |best, (i, &d)| if d > best.1 { (i, d) } else { best });
        assert_eq!(deepest, 45);
        assert!(depths.max_depth() > 4000.0 && depths.max_depth() < 6000.0);
    }

    #[test]
    fn no_bumps_is_flat() {
        let model = SyntheticModel {
            bumps: vec![],
            ..SyntheticModel::default()
        };

        let (depths, _) = model.build().unwrap();

        assert!(depths.iter().all(|d| *d == 0.0));
    }

    #[test]
    fn zero_size_is_rejected() {
        let model = SyntheticModel {
            size: 0,
            ..SyntheticModel::default()
        };
        assert_eq!(model.build(), Err(ForwardError::EmptyDepthProfile));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_round_trip() {
        let model = SyntheticModel::default();

        let json = serde_json::to_string(&model).unwrap();
        let restored: SyntheticModel = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, model);
        assert_eq!(restored.build(), model.build());
    }
}
