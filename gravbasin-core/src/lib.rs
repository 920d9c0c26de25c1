pub mod constraint;
mod model;

pub use model::Model;
