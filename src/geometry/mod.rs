//! Integer-coordinate geometry: the `Point` type and distance functions.

pub mod domain;
pub mod service;

pub use domain::Point;
