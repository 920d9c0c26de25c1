use std::ops::{Add, AddAssign, Deref};

use ndarray::Array1;

/// Vertical gravity values in milligal, one per observation point.
///
/// Fields are combined by superposition: evaluators hand back fresh fields,
/// and callers add them together rather than sharing a mutable buffer.
///
/// Adding fields of different lengths panics.
#[derive(Debug, Clone, PartialEq)]
pub struct GravityField(Array1<f64>);

impl GravityField {
    /// A field of zeros, the identity for superposition.
    #[must_use]
    pub fn zeros(len: usize) -> Self {
        Self(Array1::zeros(len))
    }

    /// Sums any number of fields of length `len`.
    ///
    /// An empty iterator yields [`GravityField::zeros`].
    #[must_use]
    pub fn superpose(len: usize, fields: impl IntoIterator<Item = GravityField>) -> Self {
        fields.into_iter().fold(Self::zeros(len), |mut total, field| {
            total += &field;
            total
        })
    }

    /// Consumes the field and returns the underlying array.
    #[must_use]
    pub fn into_inner(self) -> Array1<f64> {
        self.0
    }
}

impl From<Array1<f64>> for GravityField {
    fn from(values: Array1<f64>) -> Self {
        Self(values)
    }
}

impl Deref for GravityField {
    type Target = Array1<f64>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AddAssign<&GravityField> for GravityField {
    fn add_assign(&mut self, rhs: &GravityField) {
        self.0 += &rhs.0;
    }
}

impl Add for GravityField {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self += &rhs;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use ndarray::array;

    #[test]
    fn superpose_adds_elementwise() {
        let fields = vec![
            GravityField::from(array![1.0, 2.0, 3.0]),
            GravityField::from(array![0.5, -2.0, 1.0]),
            GravityField::from(array![0.0, 0.0, -4.0]),
        ];

        let total = GravityField::superpose(3, fields);

        assert_eq!(total.into_inner(), array![1.5, 0.0, 0.0]);
    }

    #[test]
    fn superpose_nothing_is_zero() {
        let total = GravityField::superpose(4, std::iter::empty());
        assert_eq!(total, GravityField::zeros(4));
    }

    #[test]
    fn add_does_not_alias() {
        let a = GravityField::from(array![1.0, 1.0]);
        let b = GravityField::from(array![2.0, 3.0]);

        let sum = a.clone() + b;

        assert_eq!(*sum, array![3.0, 4.0]);
        assert_eq!(*a, array![1.0, 1.0]);
    }

    #[test]
    fn nan_propagates() {
        let a = GravityField::from(array![f64::NAN, 1.0]);
        let total = GravityField::superpose(2, [a, GravityField::from(array![1.0, 1.0])]);
        assert!(total[0].is_nan());
        assert_eq!(total[1], 2.0);
    }

    #[test]
    #[should_panic]
    fn mismatched_lengths_panic() {
        let mut a = GravityField::zeros(2);
        a += &GravityField::zeros(3);
    }
}
