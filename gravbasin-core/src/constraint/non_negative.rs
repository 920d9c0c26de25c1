use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError, ConstraintResult};

/// Marker type enforcing that a value is zero or greater.
///
/// Works for primitive floats and for unit-safe `uom` quantities alike.
/// `NaN` is rejected with [`ConstraintError::NotANumber`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct NonNegative;

impl NonNegative {
    /// Constructs a [`Constrained<T, NonNegative>`] if the value is non-negative.
    ///
    /// # Errors
    ///
    /// Fails if the value is negative or not a number.
    pub fn new<T: PartialOrd + Zero>(value: T) -> ConstraintResult<Constrained<T, NonNegative>> {
        Constrained::<T, NonNegative>::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for NonNegative {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(std::cmp::Ordering::Less) => Err(ConstraintError::Negative),
            Some(_) => Ok(()),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{f64::Length, length::meter};

    #[test]
    fn floats() {
        assert!(NonNegative::new(2.0).is_ok(), "Positive value is ok");
        assert!(NonNegative::new(0.0).is_ok(), "Zero value is ok");
        assert_eq!(NonNegative::new(-2.0), Err(ConstraintError::Negative));
        assert_eq!(NonNegative::new(f64::NAN), Err(ConstraintError::NotANumber));
    }

    #[test]
    fn lengths() {
        let depth = NonNegative::new(Length::new::<meter>(5000.0)).unwrap();
        assert_eq!(depth.as_ref().get::<meter>(), 5000.0);

        assert!(
            NonNegative::new(Length::new::<meter>(-1.0)).is_err(),
            "A negative depth is not ok",
        );
    }
}
