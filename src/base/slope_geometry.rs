use crate::StrError;
use serde::{Deserialize, Serialize};

/// Holds the cross-section of an embankment slope
///
/// ```text
///                    crest_x
///                       ●━━━━━━━━━━━━━━━━━━━━  crest_elevation
///                     ╱ ┆   crest_width
///                   ╱   ┆
///                 ╱     ┆ height
///               ╱  m:1  ┆
/// ━━━━━━━━━━━━━●┄┄┄┄┄┄┄┄┘  toe_elevation
///            toe_x
/// ```
///
/// The ground surface is flat before the toe (apron), linear along the slope
/// face, and flat at the crest elevation beyond the crest.
#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
pub struct SlopeGeometry {
    /// Embankment height H
    pub height: f64,

    /// Slope ratio m (horizontal run per unit vertical rise)
    pub slope_ratio: f64,

    /// Width of the crest
    pub crest_width: f64,

    /// Horizontal position of the toe
    pub toe_x: f64,

    /// Elevation of the toe
    pub toe_elevation: f64,
}

impl SlopeGeometry {
    /// Allocates a new instance
    pub fn new(
        height: f64,
        slope_ratio: f64,
        crest_width: f64,
        toe_x: f64,
        toe_elevation: f64,
    ) -> Result<Self, StrError> {
        let geometry = SlopeGeometry {
            height,
            slope_ratio,
            crest_width,
            toe_x,
            toe_elevation,
        };
        geometry.validate()?;
        Ok(geometry)
    }

    /// Checks the data (e.g., after deserialization)
    pub fn validate(&self) -> Result<(), StrError> {
        if !self.height.is_finite() || self.height <= 0.0 {
            return Err("height must be > 0.0");
        }
        if !self.slope_ratio.is_finite() || self.slope_ratio <= 0.0 {
            return Err("slope_ratio must be > 0.0");
        }
        if !self.crest_width.is_finite() || self.crest_width < 0.0 {
            return Err("crest_width must be ≥ 0.0");
        }
        if !self.toe_x.is_finite() || !self.toe_elevation.is_finite() {
            return Err("toe_x and toe_elevation must be finite");
        }
        Ok(())
    }

    /// Returns the horizontal run of the slope face (H·m)
    #[inline]
    pub fn slope_width(&self) -> f64 {
        self.height * self.slope_ratio
    }

    /// Returns the elevation of the crest
    #[inline]
    pub fn crest_elevation(&self) -> f64 {
        self.toe_elevation + self.height
    }

    /// Returns the horizontal position where the crest starts
    #[inline]
    pub fn crest_x(&self) -> f64 {
        self.toe_x + self.slope_width()
    }

    /// Returns the horizontal position where the crest ends
    #[inline]
    pub fn crest_end_x(&self) -> f64 {
        self.crest_x() + self.crest_width
    }

    /// Returns the elevation of the ground surface at x
    pub fn surface_elevation(&self, x: f64) -> f64 {
        if x < self.toe_x {
            self.toe_elevation
        } else if x < self.crest_x() {
            self.toe_elevation + (x - self.toe_x) / self.slope_ratio
        } else {
            self.crest_elevation()
        }
    }

    /// Returns the straight segments of the ground surface as (a, b, x_min, x_max) with y = a + b·x
    ///
    /// The first and last segments are unbounded (± infinity).
    pub(crate) fn surface_segments(&self) -> [(f64, f64, f64, f64); 3] {
        let (x_toe, x_crest) = (self.toe_x, self.crest_x());
        let b = 1.0 / self.slope_ratio;
        [
            (self.toe_elevation, 0.0, f64::NEG_INFINITY, x_toe),
            (self.toe_elevation - b * x_toe, b, x_toe, x_crest),
            (self.crest_elevation(), 0.0, x_crest, f64::INFINITY),
        ]
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::SlopeGeometry;
    use russell_chk::assert_approx_eq;

    #[test]
    fn handle_errors() {
        assert_eq!(SlopeGeometry::new(0.0, 1.5, 10.0, 5.0, 0.0).err(), Some("height must be > 0.0"));
        assert_eq!(SlopeGeometry::new(-1.0, 1.5, 10.0, 5.0, 0.0).err(), Some("height must be > 0.0"));
        assert_eq!(SlopeGeometry::new(8.0, 0.0, 10.0, 5.0, 0.0).err(), Some("slope_ratio must be > 0.0"));
        assert_eq!(SlopeGeometry::new(8.0, 1.5, -1.0, 5.0, 0.0).err(), Some("crest_width must be ≥ 0.0"));
        assert_eq!(
            SlopeGeometry::new(8.0, 1.5, 10.0, f64::NAN, 0.0).err(),
            Some("toe_x and toe_elevation must be finite")
        );
    }

    #[test]
    fn derived_values_work() {
        let geo = SlopeGeometry::new(8.0, 1.5, 10.0, 5.0, 1.0).unwrap();
        assert_eq!(geo.slope_width(), 12.0);
        assert_eq!(geo.crest_elevation(), 9.0);
        assert_eq!(geo.crest_x(), 17.0);
        assert_eq!(geo.crest_end_x(), 27.0);
    }

    #[test]
    fn surface_elevation_works() {
        let geo = SlopeGeometry::new(8.0, 1.5, 10.0, 5.0, 0.0).unwrap();
        assert_eq!(geo.surface_elevation(-100.0), 0.0);
        assert_eq!(geo.surface_elevation(4.999), 0.0);
        assert_eq!(geo.surface_elevation(5.0), 0.0);
        assert_approx_eq!(geo.surface_elevation(11.0), 4.0, 1e-15);
        assert_approx_eq!(geo.surface_elevation(16.999), 8.0, 1e-3);
        assert_eq!(geo.surface_elevation(17.0), 8.0);
        assert_eq!(geo.surface_elevation(25.0), 8.0);
        assert_eq!(geo.surface_elevation(1000.0), 8.0);
    }

    #[test]
    fn surface_segments_match_surface_elevation() {
        let geo = SlopeGeometry::new(6.0, 2.0, 4.0, -3.0, 2.0).unwrap();
        for x in [-20.0, -3.0, -1.0, 4.0, 8.9, 9.0, 15.0] {
            let (a, b, _, _) = geo
                .surface_segments()
                .into_iter()
                .find(|(_, _, x_min, x_max)| x >= *x_min && x < *x_max)
                .unwrap();
            assert_approx_eq!(a + b * x, geo.surface_elevation(x), 1e-14);
        }
    }
}
