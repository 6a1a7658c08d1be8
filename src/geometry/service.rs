//! Euclidean distance between integer points.
//!
//! Every integer variant truncates toward zero: the result is
//! `floor(sqrt(dx² + dy²))`. Differences are taken in `i64` and squares summed
//! in `u128`, so no input pair can overflow an intermediate.

use crate::common::error::{DistError, DistResult};

use super::domain::Point;

/// Exact `dx² + dy²`.
pub fn distance_squared(p1: &Point, p2: &Point) -> u128 {
    let (dx, dy) = p1.delta(p2);
    let dx = u128::from(dx.unsigned_abs());
    let dy = u128::from(dy.unsigned_abs());
    dx * dx + dy * dy
}

/// Truncated distance without any narrowing. Never saturates.
pub fn distance_wide(p1: &Point, p2: &Point) -> i64 {
    // sqrt(2 * (2^32 - 1)^2) < 2^33, well within i64.
    distance_squared(p1, p2).isqrt() as i64
}

/// Truncated distance as `i32`, the width of the classic C entry point.
///
/// Distances above `i32::MAX` (only reachable for points near opposite edges
/// of the plane) saturate to `i32::MAX`.
pub fn distance(p1: &Point, p2: &Point) -> i32 {
    let wide = distance_wide(p1, p2);
    i32::try_from(wide).unwrap_or_else(|_| {
        tracing::debug!(%p1, %p2, wide, "distance saturated to i32::MAX");
        i32::MAX
    })
}

/// Truncated distance as `i32`, failing with `Overflow` instead of saturating.
pub fn checked_distance(p1: &Point, p2: &Point) -> DistResult<i32> {
    i32::try_from(distance_wide(p1, p2))
        .map_err(|_| DistError::overflow("distance exceeds i32 range"))
}

/// Real-valued distance, leaving the narrowing policy to the caller.
pub fn distance_exact(p1: &Point, p2: &Point) -> f64 {
    let (dx, dy) = p1.delta(p2);
    (dx as f64).hypot(dy as f64)
}
