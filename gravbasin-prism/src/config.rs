use gravbasin_core::constraint::{NonNegative, StrictlyPositive};
use uom::si::{
    f64::Length,
    length::{kilometer, meter},
};

use crate::ForwardError;

/// The gravitational constant, in m³/(kg·s²).
pub const GRAVITATIONAL_CONST: f64 = 6.673e-11;

/// Conversion factor from m/s² to milligal.
pub const SI_TO_MGAL: f64 = 1e5;

/// Geometry settings shared by every prism in a model.
///
/// Basins are modelled in 2.5-D: each prism extends `strike_half_width` to
/// either side of the profile, which approximates an infinitely long body.
/// Results are only meaningful for profiles much shorter than that length.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Config {
    /// Half of the prism length perpendicular to the profile.
    pub strike_half_width: Length,
    /// Height of the observation points above the surface.
    pub sensor_height: Length,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            strike_half_width: Length::new::<kilometer>(200.0),
            sensor_height: Length::new::<meter>(10.0),
        }
    }
}

impl Config {
    /// Validates that the strike half-width is positive and the sensor height
    /// is non-negative, both finite.
    ///
    /// # Errors
    ///
    /// Returns [`ForwardError::InvalidConfig`] describing the first problem found.
    pub fn validate(&self) -> Result<(), ForwardError> {
        let half_width = self.strike_half_width.get::<meter>();
        if !half_width.is_finite() || StrictlyPositive::new(half_width).is_err() {
            return Err(ForwardError::InvalidConfig {
                reason: "strike_half_width must be finite and positive",
            });
        }
        let height = self.sensor_height.get::<meter>();
        if !height.is_finite() || NonNegative::new(height).is_err() {
            return Err(ForwardError::InvalidConfig {
                reason: "sensor_height must be finite and non-negative",
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.strike_half_width.get::<meter>(), 200e3);
        assert_eq!(config.sensor_height.get::<meter>(), 10.0);
    }

    #[test]
    fn rejects_bad_geometry() {
        let zero_width = Config {
            strike_half_width: Length::new::<meter>(0.0),
            ..Config::default()
        };
        assert!(matches!(
            zero_width.validate(),
            Err(ForwardError::InvalidConfig { .. })
        ));

        let infinite_width = Config {
            strike_half_width: Length::new::<meter>(f64::INFINITY),
            ..Config::default()
        };
        assert!(infinite_width.validate().is_err());

        let buried_sensor = Config {
            sensor_height: Length::new::<meter>(-1.0),
            ..Config::default()
        };
        assert!(buried_sensor.validate().is_err());

        let surface_sensor = Config {
            sensor_height: Length::new::<meter>(0.0),
            ..Config::default()
        };
        assert!(surface_sensor.validate().is_ok());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_round_trip() {
        let config = Config {
            strike_half_width: Length::new::<kilometer>(500.0),
            sensor_height: Length::new::<meter>(1.0),
        };

        let json = serde_json::to_string(&config).unwrap();
        let restored: Config = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, config);
        assert!(restored.validate().is_ok());
    }
}
