//! # Single Prism
//!
//! Prints the gravity of a 5 km deep, 10 km wide prism along a profile,
//! showing how the signal falls off away from the body.
//!
//! ```sh
//! cargo run --example single_prism
//! ```

use gravbasin_prism::{BasinBoundaries, Config, DepthProfile, forward_model};
use ndarray::array;
use uom::si::{f64::MassDensity, mass_density::kilogram_per_cubic_meter};

fn main() {
    gravbasin_examples::init_logging();

    let depths = DepthProfile::new(array![5000.0]).unwrap();
    let boundaries = BasinBoundaries::from_meters(0.0, 10e3).unwrap();
    let density = MassDensity::new::<kilogram_per_cubic_meter>(1000.0);
    let x = array![-20e3, -5e3, 0.0, 5e3, 10e3, 15e3, 30e3];

    let config = Config::default();
    let gravity = forward_model(&depths, &boundaries, density, x.view(), &config).unwrap();

    println!("config: {}", serde_json::to_string(&config).unwrap());

    println!("{:>10}  {:>12}", "x [km]", "g_z [mGal]");
    for (x, g) in x.iter().zip(gravity.iter()) {
        println!("{:>10.1}  {:>12.4}", x / 1000.0, g);
    }
}
