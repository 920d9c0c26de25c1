use ndarray::{Array1, ArrayView1};
use uom::si::{f64::MassDensity, length::meter, mass_density::kilogram_per_cubic_meter};

use crate::{Config, GRAVITATIONAL_CONST, GravityField, SI_TO_MGAL, kernel, kernel_array};

/// An axis-aligned rectangular box of uniform density.
///
/// Coordinates are in meters: easting along the profile, northing along
/// strike, and upward positive. `east` is the lower easting edge and `west`
/// the upper one; a basin prism has `top = 0` and `bottom = -depth`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prism {
    pub east: f64,
    pub west: f64,
    pub south: f64,
    pub north: f64,
    pub bottom: f64,
    pub top: f64,
}

impl Prism {
    /// Vertical gravity of this prism at each observation easting, in mGal.
    ///
    /// Observation points lie on the profile (northing 0) at
    /// [`Config::sensor_height`] above the surface.
    #[must_use]
    pub fn gravity(
        &self,
        observations: ArrayView1<f64>,
        density: MassDensity,
        config: &Config,
    ) -> GravityField {
        let len = observations.len();
        let northing = Array1::<f64>::zeros(len);
        let upward = Array1::from_elem(len, config.sensor_height.get::<meter>());

        let mut sum = Array1::<f64>::zeros(len);
        for (sign, [east, north, up]) in self.corners() {
            let values = kernel_array(
                (east - &observations).view(),
                (north - &northing).view(),
                (up - &upward).view(),
            );
            sum.scaled_add(sign, &values);
        }

        sum.mapv(|sum| to_mgal(sum, density)).into()
    }

    /// Vertical gravity of this prism at a single observation easting, in mGal.
    #[must_use]
    pub fn gravity_at(&self, easting: f64, density: MassDensity, config: &Config) -> f64 {
        let northing = 0.0;
        let upward = config.sensor_height.get::<meter>();

        let mut sum = 0.0;
        for (sign, [east, north, up]) in self.corners() {
            sum += sign * kernel(east - easting, north - northing, up - upward);
        }

        to_mgal(sum, density)
    }

    /// The eight corners with their signs, in `(i, j, k)` loop order.
    fn corners(&self) -> [(f64, [f64; 3]); 8] {
        let mut corners = [(0.0, [0.0; 3]); 8];
        for i in 0..2 {
            for j in 0..2 {
                for k in 0..2 {
                    let sign = if (i + j + k) % 2 == 0 { 1.0 } else { -1.0 };
                    corners[4 * i + 2 * j + k] = (
                        sign,
                        [
                            [self.east, self.west][1 - i],
                            [self.south, self.north][1 - j],
                            [self.bottom, self.top][1 - k],
                        ],
                    );
                }
            }
        }
        corners
    }
}

fn to_mgal(sum: f64, density: MassDensity) -> f64 {
    sum * GRAVITATIONAL_CONST * density.get::<kilogram_per_cubic_meter>() * SI_TO_MGAL
}
