use super::SlopeGeometry;
use crate::StrError;
use serde::{Deserialize, Serialize};

/// Holds a trial circular failure surface
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub struct SlipCircle {
    /// x-coordinate of the center
    pub xc: f64,

    /// y-coordinate of the center
    pub yc: f64,

    /// Radius
    pub radius: f64,
}

impl SlipCircle {
    /// Allocates a new instance
    pub fn new(xc: f64, yc: f64, radius: f64) -> Self {
        SlipCircle { xc, yc, radius }
    }

    /// Generates a circle with given center passing nearby the toe and the top of the slope face
    ///
    /// The base radius is the average of the distances from the center to the toe
    /// point and to the crest point (top of the slope face). The final radius is
    /// the base radius times `r_factor`.
    pub fn through_slope(geometry: &SlopeGeometry, xc: f64, yc: f64, r_factor: f64) -> Result<Self, StrError> {
        if r_factor <= 0.0 {
            return Err("r_factor must be > 0.0");
        }
        let (x_toe, y_toe) = (geometry.toe_x, geometry.toe_elevation);
        let (x_crest, y_crest) = (geometry.crest_x(), geometry.crest_elevation());
        if f64::hypot(x_crest - x_toe, y_crest - y_toe) < 1e-9 {
            return Err("the toe and crest points must not coincide");
        }
        let dist_toe = f64::hypot(xc - x_toe, yc - y_toe);
        let dist_crest = f64::hypot(xc - x_crest, yc - y_crest);
        let radius = r_factor * (dist_toe + dist_crest) / 2.0;
        if !radius.is_finite() || radius < 1e-9 {
            return Err("the radius of the slip circle is degenerate");
        }
        Ok(SlipCircle { xc, yc, radius })
    }

    /// Generates a circle with the center in front of the slope
    ///
    /// The center is located at `(toe_x + x_offset, crest_elevation + 0.3·H + y_offset)`.
    pub fn generate(geometry: &SlopeGeometry, x_offset: f64, y_offset: f64, r_factor: f64) -> Result<Self, StrError> {
        let xc = geometry.toe_x + x_offset;
        let yc = geometry.crest_elevation() + 0.3 * geometry.height + y_offset;
        SlipCircle::through_slope(geometry, xc, yc, r_factor)
    }

    /// Returns the elevation of the lowest point of the circle
    #[inline]
    pub fn bottom(&self) -> f64 {
        self.yc - self.radius
    }

    /// Returns the elevation of the lower arc at x, if the vertical line crosses the circle
    pub fn lower_arc(&self, x: f64) -> Option<f64> {
        let dx = x - self.xc;
        let radicand = self.radius * self.radius - dx * dx;
        if radicand < 0.0 {
            None
        } else {
            Some(self.yc - f64::sqrt(radicand))
        }
    }

    /// Returns the x-coordinates of the intersections between the lower arc and the line y = a + b·x
    pub(crate) fn lower_arc_intersections(&self, a: f64, b: f64) -> Vec<f64> {
        // (x - xc)² + (a + b·x - yc)² = R²
        let d = a - self.yc;
        let qa = 1.0 + b * b;
        let qb = 2.0 * (b * d - self.xc);
        let qc = self.xc * self.xc + d * d - self.radius * self.radius;
        let delta = qb * qb - 4.0 * qa * qc;
        if delta < 0.0 {
            return Vec::new();
        }
        let sq = f64::sqrt(delta);
        let mut roots = vec![(-qb - sq) / (2.0 * qa)];
        if sq > 0.0 {
            roots.push((-qb + sq) / (2.0 * qa));
        }
        roots.retain(|x| a + b * x <= self.yc);
        roots
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
