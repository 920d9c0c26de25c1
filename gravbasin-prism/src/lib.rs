//! Forward gravity modelling of a basin cross-section.
//!
//! A 1-D profile of basin-bottom depths is turned into a chain of adjoining
//! rectangular prisms, each extending far along strike. The vertical gravity
//! of every prism is evaluated with the closed-form solution of
//! Nagy et al. (2000) and the contributions are superposed.
//!
//! ```
//! use gravbasin_prism::{BasinBoundaries, Config, DepthProfile, forward_model};
//! use ndarray::array;
//! use uom::si::{
//!     f64::{Length, MassDensity},
//!     length::kilometer,
//!     mass_density::kilogram_per_cubic_meter,
//! };
//!
//! let depths = DepthProfile::new(array![1000.0, 2000.0, 1000.0]).unwrap();
//! let boundaries =
//!     BasinBoundaries::new(Length::new::<kilometer>(0.0), Length::new::<kilometer>(30.0))
//!         .unwrap();
//! let density = MassDensity::new::<kilogram_per_cubic_meter>(-300.0);
//!
//! let field = forward_model(
//!     &depths,
//!     &boundaries,
//!     density,
//!     array![5e3, 15e3, 25e3].view(),
//!     &Config::default(),
//! )
//! .unwrap();
//!
//! assert_eq!(field.len(), 3);
//! assert!(field.iter().all(|g| *g < 0.0));
//! ```

mod boundaries;
mod chain;
mod config;
mod depth;
mod error;
mod field;
mod forward;
mod kernel;
mod outline;
mod prism;
mod synthetic;

pub use boundaries::BasinBoundaries;
pub use chain::{make_prisms, prism_boundaries};
pub use config::{Config, GRAVITATIONAL_CONST, SI_TO_MGAL};
pub use depth::DepthProfile;
pub use error::ForwardError;
pub use field::GravityField;
pub use forward::{ForwardModel, forward_model};
pub use kernel::{kernel, kernel_array};
pub use outline::{outline, outline_depth_limit};
pub use prism::Prism;
pub use synthetic::{Gaussian, SyntheticModel, synthetic_model};
