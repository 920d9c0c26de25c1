use uom::si::{f64::Length, length::meter};

use crate::ForwardError;

/// Horizontal extent of a basin, split evenly among its prisms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BasinBoundaries {
    start: Length,
    end: Length,
}

impl BasinBoundaries {
    /// Creates boundaries spanning `start..end`.
    ///
    /// # Errors
    ///
    /// Returns [`ForwardError::InvalidBoundaries`] unless both ends are finite
    /// and `start < end`.
    pub fn new(start: Length, end: Length) -> Result<Self, ForwardError> {
        let (start_m, end_m) = (start.get::<meter>(), end.get::<meter>());
        if !start_m.is_finite() || !end_m.is_finite() || start_m >= end_m {
            return Err(ForwardError::InvalidBoundaries {
                start: start_m,
                end: end_m,
            });
        }
        Ok(Self { start, end })
    }

    /// Creates boundaries from a `(start, end)` pair in meters.
    ///
    /// # Errors
    ///
    /// See [`BasinBoundaries::new`].
    pub fn from_meters(start: f64, end: f64) -> Result<Self, ForwardError> {
        Self::new(Length::new::<meter>(start), Length::new::<meter>(end))
    }

    #[must_use]
    pub fn start(&self) -> Length {
        self.start
    }

    #[must_use]
    pub fn end(&self) -> Length {
        self.end
    }

    /// Both ends in meters.
    #[must_use]
    pub fn meters(&self) -> (f64, f64) {
        (self.start.get::<meter>(), self.end.get::<meter>())
    }
}
