// lib.rs - integer point distance with a C ABI
pub mod api;
pub mod common;
pub mod geometry;

pub use common::{DistCode, DistError, DistResult};
pub use geometry::service::{
    checked_distance, distance, distance_exact, distance_squared, distance_wide,
};
pub use geometry::Point;
