use gravbasin_core::Model;
use ndarray::{Array1, ArrayView1};
use tracing::{debug, trace, warn};
use uom::si::{f64::MassDensity, mass_density::kilogram_per_cubic_meter};

use crate::{BasinBoundaries, Config, DepthProfile, ForwardError, GravityField, make_prisms};

/// Predicted gravity of a basin at each observation easting, in mGal.
///
/// The basin is the chain of prisms from [`make_prisms`], all sharing one
/// density (a contrast, so it may be negative). The result is the
/// superposition of every prism's field. Cost is eight kernel evaluations per
/// prism per observation point.
///
/// NaN produced by an observation point sitting on a prism corner is kept in
/// the result.
///
/// # Errors
///
/// Returns [`ForwardError::InvalidConfig`] if `config` fails validation.
pub fn forward_model(
    depths: &DepthProfile,
    boundaries: &BasinBoundaries,
    density: MassDensity,
    observations: ArrayView1<f64>,
    config: &Config,
) -> Result<GravityField, ForwardError> {
    config.validate()?;

    let prisms = make_prisms(depths, boundaries, config);
    debug!(
        prisms = prisms.len(),
        observations = observations.len(),
        density = density.get::<kilogram_per_cubic_meter>(),
        "running forward model"
    );

    let field = GravityField::superpose(
        observations.len(),
        prisms.iter().enumerate().map(|(index, prism)| {
            trace!(index, east = prism.east, west = prism.west, bottom = prism.bottom, "prism");
            prism.gravity(observations, density, config)
        }),
    );

    let non_finite = field.iter().filter(|g| !g.is_finite()).count();
    if non_finite > 0 {
        warn!(non_finite, "forward model produced non-finite gravity values");
    }

    Ok(field)
}

/// A basin with fixed geometry and density, callable on observation eastings.
#[derive(Debug, Clone)]
pub struct ForwardModel {
    pub depths: DepthProfile,
    pub boundaries: BasinBoundaries,
    pub density: MassDensity,
    pub config: Config,
}

impl ForwardModel {
    /// Creates a model using the default [`Config`].
    #[must_use]
    pub fn new(depths: DepthProfile, boundaries: BasinBoundaries, density: MassDensity) -> Self {
        Self {
            depths,
            boundaries,
            density,
            config: Config::default(),
        }
    }

    #[must_use]
    pub fn with_config(self, config: Config) -> Self {
        Self { config, ..self }
    }
}

impl Model for ForwardModel {
    type Input = Array1<f64>;
    type Output = GravityField;
    type Error = ForwardError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        forward_model(
            &self.depths,
            &self.boundaries,
            self.density,
            input.view(),
            &self.config,
        )
    }
}
