//! # Synthetic Basin Gravity
//!
//! Builds the default two-bump synthetic basin, computes its gravity profile,
//! and plots both.
//!
//! To run this example:
//!
//! ```sh
//! cargo run --example basin_gravity --release
//! ```

use gravbasin_core::Model;
use gravbasin_plot::{Color32, OutlineStyle, PlotApp};
use gravbasin_prism::{ForwardModel, outline, outline_depth_limit, synthetic_model};
use ndarray::Array1;
use tracing::info;
use uom::si::{f64::MassDensity, mass_density::kilogram_per_cubic_meter};

/// Density contrast of the basin fill against basement, in kg/m³.
const DENSITY_CONTRAST: f64 = -300.0;

/// Number of evenly spaced gravity stations across the profile.
const STATIONS: usize = 201;

fn main() {
    gravbasin_examples::init_logging();

    let (depths, boundaries) = synthetic_model().unwrap();
    let basin = outline(&depths, &boundaries);
    let depth_limit = outline_depth_limit(&depths);

    let (start, end) = boundaries.meters();
    let x = Array1::linspace(start, end, STATIONS);

    let model = ForwardModel::new(
        depths,
        boundaries,
        MassDensity::new::<kilogram_per_cubic_meter>(DENSITY_CONTRAST),
    );
    let gravity = model.call(&x).unwrap();

    let lowest = gravity.iter().copied().fold(f64::INFINITY, f64::min);
    info!(lowest_mgal = lowest, "computed gravity profile");

    let profile: Vec<[f64; 2]> = x
        .iter()
        .zip(gravity.iter())
        .map(|(x, g)| [x / 1000.0, *g])
        .collect();

    PlotApp::new()
        .axis_labels("x [km]", "gravity [mGal]")
        .add_series("gravity", &profile)
        .new_panel()
        .axis_labels("x [km]", "depth [km]")
        .add_styled_outline(
            "basin",
            &basin,
            OutlineStyle {
                fill: Color32::from_rgb(230, 200, 140),
                ..OutlineStyle::default()
            },
        )
        .depth_bounds(depth_limit)
        .run("Basin Gravity")
        .unwrap();
}
