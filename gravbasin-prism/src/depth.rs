use std::ops::Deref;

use gravbasin_core::constraint::{ConstraintError, NonNegative};
use ndarray::Array1;

use crate::ForwardError;

/// Depths to the basin bottom, in meters, one per prism.
///
/// A profile is never empty and holds only finite, non-negative values.
#[derive(Debug, Clone, PartialEq)]
pub struct DepthProfile(Array1<f64>);

impl DepthProfile {
    /// Validates and wraps a sequence of depths.
    ///
    /// # Errors
    ///
    /// Returns [`ForwardError::EmptyDepthProfile`] for an empty sequence, or
    /// [`ForwardError::InvalidDepth`] for the first negative, NaN, or
    /// infinite depth.
    pub fn new(depths: impl Into<Array1<f64>>) -> Result<Self, ForwardError> {
        let depths = depths.into();
        if depths.is_empty() {
            return Err(ForwardError::EmptyDepthProfile);
        }
        for (index, &depth) in depths.iter().enumerate() {
            NonNegative::new(depth).map_err(|source| ForwardError::InvalidDepth { index, source })?;
            if !depth.is_finite() {
                return Err(ForwardError::InvalidDepth {
                    index,
                    source: ConstraintError::NotFinite,
                });
            }
        }
        Ok(Self(depths))
    }

    /// Deepest point of the profile.
    #[must_use]
    pub fn max_depth(&self) -> f64 {
        self.0.fold(0.0, |max, &depth| f64::max(max, depth))
    }

    /// Consumes the profile and returns the underlying array.
    #[must_use]
    pub fn into_inner(self) -> Array1<f64> {
        self.0
    }
}

impl Deref for DepthProfile {
    type Target = Array1<f64>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use ndarray::array;

    #[test]
    fn accepts_valid_depths() {
        let depths = DepthProfile::new(array![0.0, 150.0, 4000.0, 20.0]).unwrap();
        assert_eq!(depths.len(), 4);
        assert_eq!(depths.max_depth(), 4000.0);
    }

    #[test]
    fn accepts_vec() {
        let depths = DepthProfile::new(vec![5000.0]).unwrap();
        assert_eq!(depths.into_inner(), array![5000.0]);
    }

    #[test]
    fn rejects_empty() {
        assert_eq!(
            DepthProfile::new(Array1::<f64>::zeros(0)),
            Err(ForwardError::EmptyDepthProfile)
        );
    }

    #[test]
    fn rejects_negative_and_nan() {
        assert_eq!(
            DepthProfile::new(array![1.0, -2.0, 3.0]),
            Err(ForwardError::InvalidDepth {
                index: 1,
                source: ConstraintError::Negative,
            })
        );
        assert_eq!(
            DepthProfile::new(array![1.0, 2.0, f64::NAN]),
            Err(ForwardError::InvalidDepth {
                index: 2,
                source: ConstraintError::NotANumber,
            })
        );
    }

    #[test]
    fn rejects_infinite() {
        assert_eq!(
            DepthProfile::new(array![10.0, f64::INFINITY]),
            Err(ForwardError::InvalidDepth {
                index: 1,
                source: ConstraintError::NotFinite,
            })
        );
        assert_eq!(
            DepthProfile::new(array![f64::NEG_INFINITY]),
            Err(ForwardError::InvalidDepth {
                index: 0,
                source: ConstraintError::Negative,
            })
        );
    }
}
