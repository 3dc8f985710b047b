//! The parametric heart curve and the two heart layouts.
//!
//! The curve is the classic
//!
//! ```text
//! x(t) = 16 sin³ t
//! y(t) = 13 cos t − 5 cos 2t − 2 cos 3t − cos 4t
//! ```
//!
//! scaled around a center point, with y flipped so the heart stands upright
//! on screen.

use std::f64::consts::TAU;

use super::polygon::{Point, Polygon, Rect};

/// Upper bound on interior grid rows/columns.
const MAX_GRID_RESOLUTION: usize = 512;

/// Heart curve placed on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeartCurve {
    center: Point,
    scale: f64,
}

impl HeartCurve {
    pub fn new(center: Point, scale: f64) -> Self {
        Self { center, scale }
    }

    pub fn center(&self) -> Point {
        self.center
    }

    /// Unscaled `(x, y)` factors at parameter `t`, y pointing up.
    pub fn factors(t: f64) -> (f64, f64) {
        let x = 16.0 * t.sin().powi(3);
        let y = 13.0 * t.cos() - 5.0 * (2.0 * t).cos() - 2.0 * (3.0 * t).cos() - (4.0 * t).cos();
        (x, y)
    }

    /// Screen point at parameter `t`.
    pub fn point_at(&self, t: f64) -> Point {
        let (fx, fy) = Self::factors(t);
        Point::new(self.center.x + fx * self.scale, self.center.y - fy * self.scale)
    }

    /// `count` points at `t = i / count · 2π`, `i` in `0..count`.
    ///
    /// The last point stops one step short of `2π`, which would coincide with
    /// the first.
    pub fn sample(&self, count: usize) -> Vec<Point> {
        (0..count)
            .map(|i| self.point_at(i as f64 / count as f64 * TAU))
            .collect()
    }

    /// Polygon approximating the curve with `steps` vertices.
    pub fn polygon(&self, steps: usize) -> Polygon {
        Polygon::new(self.sample(steps))
    }
}

/// Box centers for the heart-fill layout.
///
/// The first `floor(total · outline_fraction)` centers sit on polygon
/// vertices at equal index steps; the rest come from [`interior_points`].
pub fn fill_centers(
    curve: &HeartCurve,
    total: usize,
    outline_fraction: f64,
    grid_factor: f64,
    polygon_steps: usize,
) -> Vec<Point> {
    if total == 0 {
        return Vec::new();
    }

    let polygon = curve.polygon(polygon_steps);
    let Some(bbox) = polygon.bounding_box() else {
        return vec![curve.center(); total];
    };

    let outline_count = ((total as f64 * outline_fraction).floor() as usize).min(total);
    let interior_count = total - outline_count;

    let vertices = polygon.vertices();
    let mut centers: Vec<Point> = (0..outline_count)
        .map(|i| vertices[i * vertices.len() / outline_count])
        .collect();
    centers.extend(interior_points(&polygon, bbox, interior_count, grid_factor));
    centers
}

/// Exactly `count` points inside `polygon`, spread over a square grid.
///
/// The grid has `ceil(sqrt(count) · grid_factor)` rows and columns over
/// `bbox`. Cell centers inside the polygon are ordered top to bottom, left to
/// right, then sampled at an even stride. When the grid yields fewer
/// candidates than needed, the remainder is filled with the center of `bbox`.
pub fn interior_points(polygon: &Polygon, bbox: Rect, count: usize, grid_factor: f64) -> Vec<Point> {
    if count == 0 {
        return Vec::new();
    }

    let resolution = ((count as f64).sqrt() * grid_factor).ceil();
    let resolution = if resolution.is_finite() {
        (resolution as usize).clamp(1, MAX_GRID_RESOLUTION)
    } else {
        1
    };
    let cell_w = bbox.width / resolution as f64;
    let cell_h = bbox.height / resolution as f64;

    let mut candidates = Vec::new();
    for row in 0..resolution {
        for col in 0..resolution {
            let p = Point::new(
                bbox.x + (col as f64 + 0.5) * cell_w,
                bbox.y + (row as f64 + 0.5) * cell_h,
            );
            if polygon.contains(p) {
                candidates.push(p);
            }
        }
    }
    candidates.sort_by(|a, b| a.y.total_cmp(&b.y).then(a.x.total_cmp(&b.x)));

    if candidates.len() < count {
        candidates.resize(count, bbox.center());
        return candidates;
    }

    let len = candidates.len();
    (0..count).map(|i| candidates[i * len / count]).collect()
}
