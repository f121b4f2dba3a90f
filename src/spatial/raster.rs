//! Rasterization primitives for painting marker layers
//!
//! All shapes take floating-point coordinates in cell units. A cell `(x, y)` is
//! covered when its integer coordinate falls inside the shape, so a circle
//! centred on `(2.0, 2.0)` with radius 1 covers `(2, 2)` and its four direct
//! neighbours. Walks are clamped to the layer bounds, so huge or partially
//! off-layer coordinates cost no more than the visible part.

use crate::math::geometry::{all_finite, distance_squared, ordered, segment_distance_squared};
use crate::spatial::layer::Layer;
use std::ops::RangeInclusive;

// Extents shorter than this are treated as zero length
const DEGENERATE_EXTENT: f32 = 1e-6;

impl<T: Copy> Layer<T> {
    /// Draw a one-cell-wide line between two points
    ///
    /// Walks the dominant axis through every integer crossing between the
    /// endpoints and writes the cell nearest the line at each crossing. A
    /// zero-length line writes the single cell nearest `from`.
    pub fn line(&mut self, value: T, from: [f32; 2], to: [f32; 2]) {
        if !all_finite(&[from, to]) {
            return;
        }

        let walk = AxisWalk::new(from, to);
        if walk.is_degenerate() {
            self.set(from[0].round() as i32, from[1].round() as i32, value);
            return;
        }

        let major_limit = self.major_limit(walk.x_major);
        let (low, high) = walk.major_bounds();
        for major in cell_span(low.ceil(), high.floor(), major_limit) {
            let minor = walk.minor_at(major as f32).round() as i32;
            let [x, y] = walk.to_xy(major, minor);
            self.set(x, y, value);
        }
    }

    /// Draw a capsule-shaped stroke of the given radius between two points
    ///
    /// The walk along the dominant axis runs one radius past each endpoint so
    /// the rounded end caps are covered. A zero-length stroke is a disc.
    pub fn thick_line(&mut self, value: T, radius: f32, from: [f32; 2], to: [f32; 2]) {
        if !all_finite(&[from, to]) || !radius.is_finite() || radius < 0.0 {
            return;
        }

        let walk = AxisWalk::new(from, to);
        let major_limit = self.major_limit(walk.x_major);
        let minor_limit = self.major_limit(!walk.x_major);
        let (low, high) = walk.major_bounds();
        // Cells within `radius` of the segment lie at most this far from the
        // centre line along the minor axis (slope is at most 1 in magnitude)
        let half_span = radius.mul_add(1.0 + walk.slope.abs(), 1.0);
        let radius_squared = radius * radius;

        for major in cell_span((low - radius).floor(), (high + radius).ceil(), major_limit) {
            let centre = walk.minor_at((major as f32).clamp(low, high));
            for minor in cell_span(
                (centre - half_span).floor(),
                (centre + half_span).ceil(),
                minor_limit,
            ) {
                let [x, y] = walk.to_xy(major, minor);
                if segment_distance_squared([x as f32, y as f32], from, to) <= radius_squared {
                    self.set(x, y, value);
                }
            }
        }
    }

    /// Fill every cell within `radius` of `center`
    pub fn circle(&mut self, value: T, radius: f32, center: [f32; 2]) {
        if !all_finite(&[center]) || !radius.is_finite() || radius < 0.0 {
            return;
        }

        let radius_squared = radius * radius;
        let columns = cell_span(
            (center[0] - radius).floor(),
            (center[0] + radius).ceil(),
            self.width(),
        );
        for y in cell_span(
            (center[1] - radius).floor(),
            (center[1] + radius).ceil(),
            self.height(),
        ) {
            for x in columns.clone() {
                if distance_squared([x as f32, y as f32], center) <= radius_squared {
                    self.set(x, y, value);
                }
            }
        }
    }

    /// Draw thin lines through consecutive points
    ///
    /// A single point draws a dot.
    pub fn polyline(&mut self, value: T, points: &[[f32; 2]]) {
        if let [point] = points {
            self.line(value, *point, *point);
        }
        for pair in points.windows(2) {
            if let [from, to] = pair {
                self.line(value, *from, *to);
            }
        }
    }

    /// Draw thick strokes through consecutive points
    pub fn thick_polyline(&mut self, value: T, radius: f32, points: &[[f32; 2]]) {
        if let [point] = points {
            self.thick_line(value, radius, *point, *point);
        }
        for pair in points.windows(2) {
            if let [from, to] = pair {
                self.thick_line(value, radius, *from, *to);
            }
        }
    }

    /// Draw a closed outline with thin lines
    pub fn polygon(&mut self, value: T, points: &[[f32; 2]]) {
        self.polyline(value, points);
        if let (Some(first), Some(last)) = (points.first(), points.last()) {
            if points.len() > 2 {
                self.line(value, *last, *first);
            }
        }
    }

    /// Draw a closed outline with thick strokes
    pub fn thick_polygon(&mut self, value: T, radius: f32, points: &[[f32; 2]]) {
        self.thick_polyline(value, radius, points);
        if let (Some(first), Some(last)) = (points.first(), points.last()) {
            if points.len() > 2 {
                self.thick_line(value, radius, *last, *first);
            }
        }
    }

    fn major_limit(&self, x_major: bool) -> usize {
        if x_major { self.width() } else { self.height() }
    }
}

/// Parametrisation of a segment along its dominant axis
#[derive(Debug, Clone, Copy)]
struct AxisWalk {
    x_major: bool,
    major_from: f32,
    major_delta: f32,
    minor_from: f32,
    slope: f32,
}

impl AxisWalk {
    fn new(from: [f32; 2], to: [f32; 2]) -> Self {
        let dx = to[0] - from[0];
        let dy = to[1] - from[1];
        let x_major = dx.abs() >= dy.abs();
        let (major_from, major_delta, minor_from, minor_delta) = if x_major {
            (from[0], dx, from[1], dy)
        } else {
            (from[1], dy, from[0], dx)
        };
        let slope = if major_delta.abs() < DEGENERATE_EXTENT {
            0.0
        } else {
            minor_delta / major_delta
        };

        Self {
            x_major,
            major_from,
            major_delta,
            minor_from,
            slope,
        }
    }

    fn is_degenerate(&self) -> bool {
        self.major_delta.abs() < DEGENERATE_EXTENT
    }

    fn major_bounds(&self) -> (f32, f32) {
        ordered(self.major_from, self.major_from + self.major_delta)
    }

    fn minor_at(&self, major: f32) -> f32 {
        (major - self.major_from).mul_add(self.slope, self.minor_from)
    }

    const fn to_xy(&self, major: i32, minor: i32) -> [i32; 2] {
        if self.x_major {
            [major, minor]
        } else {
            [minor, major]
        }
    }
}

// Integer cells between two already-rounded bounds, clamped to `[0, limit)`
fn cell_span(low: f32, high: f32, limit: usize) -> RangeInclusive<i32> {
    let upper = i32::try_from(limit).unwrap_or(i32::MAX).saturating_sub(1);
    let start = (low.max(0.0) as i32).max(0);
    let end = (high as i32).min(upper);
    start..=end
}
