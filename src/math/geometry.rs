//! Planar distance helpers used by the layer rasterizers

use num_traits::Float;

/// Squared Euclidean distance between two points
pub fn distance_squared<F: Float>(a: [F; 2], b: [F; 2]) -> F {
    let dx = a[0] - b[0];
    let dy = a[1] - b[1];
    dx.mul_add(dx, dy * dy)
}

/// Squared distance from `point` to the closed segment `from`..`to`
///
/// A zero-length segment degenerates to the distance to `from`.
pub fn segment_distance_squared<F: Float>(point: [F; 2], from: [F; 2], to: [F; 2]) -> F {
    let dx = to[0] - from[0];
    let dy = to[1] - from[1];
    let length_squared = dx.mul_add(dx, dy * dy);
    if length_squared <= F::epsilon() {
        return distance_squared(point, from);
    }

    let projection = (point[0] - from[0]).mul_add(dx, (point[1] - from[1]) * dy) / length_squared;
    let t = projection.max(F::zero()).min(F::one());
    let closest = [t.mul_add(dx, from[0]), t.mul_add(dy, from[1])];
    distance_squared(point, closest)
}

/// Order two values ascending
pub fn ordered<F: Float>(a: F, b: F) -> (F, F) {
    if a <= b { (a, b) } else { (b, a) }
}

/// Check that every coordinate of the given points is finite
pub fn all_finite<F: Float>(points: &[[F; 2]]) -> bool {
    points.iter().all(|p| p[0].is_finite() && p[1].is_finite())
}
