//! Scalar helpers shared by hit testing and the resize engine.
//!
//! Points are `[f32; 2]` canvas coordinates throughout the crate.

/// Euclidean distance between two points.
pub fn distance(a: [f32; 2], b: [f32; 2]) -> f32 {
    ((a[0] - b[0]).powi(2) + (a[1] - b[1]).powi(2)).sqrt()
}

/// Distance from `point` to the segment `[start, end]`, clamped to the
/// segment. A zero-length segment degrades to the distance to `start`.
pub fn point_segment_distance(point: [f32; 2], start: [f32; 2], end: [f32; 2]) -> f32 {
    let length_squared = (end[0] - start[0]).powi(2) + (end[1] - start[1]).powi(2);

    if length_squared == 0.0 {
        return distance(point, start);
    }

    let t = ((point[0] - start[0]) * (end[0] - start[0])
        + (point[1] - start[1]) * (end[1] - start[1]))
        / length_squared;

    let t = t.clamp(0.0, 1.0);

    let projection = [
        start[0] + t * (end[0] - start[0]),
        start[1] + t * (end[1] - start[1]),
    ];

    distance(point, projection)
}

/// Center of a circle whose bounding box has its top-left corner at `(x, y)`.
pub fn circle_center(x: f32, y: f32, radius: f32) -> [f32; 2] {
    [x + radius, y + radius]
}

/// Barycentric coordinates `(s, t, u)` of `point` with respect to the
/// triangle `(a, b, c)`, with `u = 1 - s - t`. Returns `None` for a
/// zero-area triangle instead of dividing by zero.
pub fn barycentric(
    point: [f32; 2],
    a: [f32; 2],
    b: [f32; 2],
    c: [f32; 2],
) -> Option<(f32, f32, f32)> {
    let denom = (b[1] - c[1]) * (a[0] - c[0]) + (c[0] - b[0]) * (a[1] - c[1]);
    if denom.abs() < f32::EPSILON {
        return None;
    }

    let s = ((b[1] - c[1]) * (point[0] - c[0]) + (c[0] - b[0]) * (point[1] - c[1])) / denom;
    let t = ((c[1] - a[1]) * (point[0] - c[0]) + (a[0] - c[0]) * (point[1] - c[1])) / denom;

    Some((s, t, 1.0 - s - t))
}

/// True if `point` lies inside or on the boundary of the triangle `(a, b, c)`.
/// A degenerate triangle contains nothing.
pub fn point_in_triangle(point: [f32; 2], a: [f32; 2], b: [f32; 2], c: [f32; 2]) -> bool {
    match barycentric(point, a, b, c) {
        Some((s, t, u)) => s >= 0.0 && t >= 0.0 && u >= 0.0,
        None => false,
    }
}
