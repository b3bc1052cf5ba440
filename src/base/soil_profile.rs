use super::{SlopeGeometry, SoilLayer};
use crate::StrError;
use serde::{Deserialize, Serialize};

/// Holds the stack of soil layers and the groundwater level
///
/// The layers are sorted from the ground surface downwards and follow the
/// ground surface; i.e., the depth of each layer is measured from the surface
/// elevation at the same horizontal position. The last layer extends indefinitely.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct SoilProfile {
    /// Layers sorted from top to bottom
    pub layers: Vec<SoilLayer>,

    /// Groundwater level (elevation)
    pub gwl: f64,
}

impl SoilProfile {
    /// Allocates a new instance
    pub fn new(layers: Vec<SoilLayer>, gwl: f64) -> Result<Self, StrError> {
        let profile = SoilProfile { layers, gwl };
        profile.validate()?;
        Ok(profile)
    }

    /// Checks the data (e.g., after deserialization)
    pub fn validate(&self) -> Result<(), StrError> {
        if self.layers.len() < 1 {
            return Err("at least one soil layer is required");
        }
        if self.gwl.is_nan() {
            return Err("groundwater level must not be NaN");
        }
        for layer in &self.layers {
            layer.validate()?;
        }
        Ok(())
    }

    /// Returns the total thickness of the stack
    pub fn total_thickness(&self) -> f64 {
        self.layers.iter().map(|l| l.thickness).sum()
    }

    /// Returns the layer at (x, y) and whether the point is below the groundwater level
    ///
    /// Returns `None` if the point is above the ground surface.
    pub fn soil_at(&self, geometry: &SlopeGeometry, x: f64, y: f64) -> Option<(&SoilLayer, bool)> {
        let surface = geometry.surface_elevation(x);
        if y > surface {
            return None;
        }
        let depth = surface - y;
        let submerged = y < self.gwl;
        let mut cumulated = 0.0;
        for layer in &self.layers {
            cumulated += layer.thickness;
            if depth <= cumulated {
                return Some((layer, submerged));
            }
        }
        self.layers.last().map(|layer| (layer, submerged))
    }

    /// Returns the pore-water pressure at an elevation (zero above the groundwater level)
    #[inline]
    pub fn pore_pressure(&self, y: f64, unit_weight_water: f64) -> f64 {
        if y < self.gwl {
            unit_weight_water * (self.gwl - y)
        } else {
            0.0
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
