use crate::base::{SlipCircle, SlopeGeometry};
use serde::{Deserialize, Serialize};

/// Holds the geometry of a vertical slice between the ground surface and the slip circle
#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
pub struct Slice {
    /// Index of the column in the discretization (skipped columns keep their numbering)
    pub index: usize,

    /// x-coordinate of the midpoint
    pub x_mid: f64,

    /// x-coordinate of the left side
    pub x_left: f64,

    /// x-coordinate of the right side
    pub x_right: f64,

    /// Elevation of the ground surface at x_mid
    pub y_surface: f64,

    /// Elevation of the base (on the circle) at x_mid
    pub y_base: f64,

    /// Height (y_surface - y_base)
    pub height: f64,

    /// Width
    pub width: f64,

    /// Inclination α of the base (radians); positive when x_mid > xc
    pub alpha: f64,
}

impl Slice {
    /// Returns the elevation at mid-height
    #[inline]
    pub fn y_mid(&self) -> f64 {
        (self.y_surface + self.y_base) / 2.0
    }

    /// Returns the length of the base (width / cos α)
    #[inline]
    pub fn base_length(&self) -> f64 {
        self.width / f64::cos(self.alpha)
    }
}

/// Returns the horizontal span where the lower arc of the circle is beneath the ground surface
///
/// The span is delimited by the outermost intersections between the lower arc
/// and the ground surface. Returns `None` if the circle does not reach the toe
/// elevation or if fewer than two intersections exist.
pub fn slip_span(circle: &SlipCircle, geometry: &SlopeGeometry) -> Option<(f64, f64)> {
    let y_diff = circle.yc - geometry.toe_elevation;
    if circle.radius * circle.radius < y_diff * y_diff {
        return None;
    }
    let mut xx: Vec<f64> = Vec::new();
    for (a, b, x_min, x_max) in geometry.surface_segments() {
        for x in circle.lower_arc_intersections(a, b) {
            if x >= x_min && x <= x_max {
                xx.push(x);
            }
        }
    }
    if xx.len() < 2 {
        return None;
    }
    let x_left = xx.iter().copied().fold(f64::INFINITY, f64::min);
    let x_right = xx.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if x_right - x_left < 1e-9 {
        return None;
    }
    Some((x_left, x_right))
}

/// Cuts the soil mass above the slip circle into vertical slices
///
/// # Input
///
/// * `circle` -- the trial slip circle
/// * `geometry` -- the slope geometry
/// * `n_slices` -- number of equal-width columns spanning the slip surface
///
/// # Output
///
/// Returns the valid slices sorted from left to right. Columns whose base
/// is undefined or not below the ground surface are skipped. An empty vector
/// means that the circle does not engage the slope.
pub fn discretize(circle: &SlipCircle, geometry: &SlopeGeometry, n_slices: usize) -> Vec<Slice> {
    if n_slices < 1 {
        return Vec::new();
    }
    let (x_start, x_end) = match slip_span(circle, geometry) {
        Some(span) => span,
        None => return Vec::new(),
    };
    let width = (x_end - x_start) / (n_slices as f64);
    let mut slices = Vec::with_capacity(n_slices);
    for index in 0..n_slices {
        let x_left = x_start + (index as f64) * width;
        let x_right = x_start + ((index + 1) as f64) * width;
        let x_mid = x_start + (index as f64 + 0.5) * width;
        let y_surface = geometry.surface_elevation(x_mid);
        let y_base = match circle.lower_arc(x_mid) {
            Some(y) => y,
            None => continue,
        };
        if y_base >= y_surface {
            continue;
        }
        let height = y_surface - y_base;
        let alpha = f64::atan2(x_mid - circle.xc, circle.yc - y_base);
        slices.push(Slice {
            index,
            x_mid,
            x_left,
            x_right,
            y_surface,
            y_base,
            height,
            width,
            alpha,
        });
    }
    slices
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
