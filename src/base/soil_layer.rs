use crate::StrError;
use serde::{Deserialize, Serialize};

/// Holds compressibility parameters used by the settlement calculations
#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
pub struct ParamCompressibility {
    /// Young's modulus E (kPa)
    pub young: f64,

    /// Compression index Cc
    pub cc: f64,

    /// Recompression index Cr
    pub cr: f64,

    /// Initial void ratio e0
    pub e0: f64,

    /// Over-consolidation ratio OCR
    pub ocr: f64,

    /// Coefficient of consolidation Cv (m²/year)
    pub cv: f64,
}

impl ParamCompressibility {
    /// Checks the parameters
    pub fn validate(&self) -> Result<(), StrError> {
        if self.young <= 0.0 {
            return Err("Young's modulus must be > 0.0");
        }
        if self.cc < 0.0 || self.cr < 0.0 {
            return Err("compression indices must be ≥ 0.0");
        }
        if self.e0 <= 0.0 {
            return Err("initial void ratio must be > 0.0");
        }
        if self.ocr < 1.0 {
            return Err("over-consolidation ratio must be ≥ 1.0");
        }
        if self.cv <= 0.0 {
            return Err("coefficient of consolidation must be > 0.0");
        }
        Ok(())
    }
}

/// Holds the data of a soil layer
///
/// # Notation
///
/// * `gamma` -- moist unit weight γ (kN/m³)
/// * `gamma_sat` -- saturated unit weight γsat (kN/m³), used below the groundwater level
/// * `cohesion` -- effective cohesion c' (kPa)
/// * `phi` -- effective friction angle φ' (degrees)
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct SoilLayer {
    /// Label of the layer
    pub name: String,

    /// Thickness of the layer (m)
    pub thickness: f64,

    /// Moist unit weight
    pub gamma: f64,

    /// Saturated unit weight
    pub gamma_sat: f64,

    /// Cohesion
    pub cohesion: f64,

    /// Friction angle in degrees
    pub phi: f64,

    /// Parameters for settlement analyses
    pub compressibility: Option<ParamCompressibility>,
}

impl SoilLayer {
    /// Allocates a new instance
    pub fn new(
        name: &str,
        thickness: f64,
        gamma: f64,
        gamma_sat: f64,
        cohesion: f64,
        phi: f64,
    ) -> Result<Self, StrError> {
        let layer = SoilLayer {
            name: name.to_string(),
            thickness,
            gamma,
            gamma_sat,
            cohesion,
            phi,
            compressibility: None,
        };
        layer.validate()?;
        Ok(layer)
    }

    /// Sets the parameters for settlement analyses
    pub fn with_compressibility(mut self, param: ParamCompressibility) -> Result<Self, StrError> {
        param.validate()?;
        self.compressibility = Some(param);
        Ok(self)
    }

    /// Checks the data (e.g., after deserialization)
    pub fn validate(&self) -> Result<(), StrError> {
        if !self.thickness.is_finite() || self.thickness <= 0.0 {
            return Err("thickness must be > 0.0");
        }
        if !self.gamma.is_finite() || self.gamma <= 0.0 {
            return Err("unit weight must be > 0.0");
        }
        if !self.gamma_sat.is_finite() || self.gamma_sat < self.gamma {
            return Err("saturated unit weight must be ≥ unit weight");
        }
        if !self.cohesion.is_finite() || self.cohesion < 0.0 {
            return Err("cohesion must be ≥ 0.0");
        }
        if !self.phi.is_finite() || self.phi < 0.0 || self.phi > 90.0 {
            return Err("friction angle must be in [0, 90] degrees");
        }
        if let Some(param) = &self.compressibility {
            param.validate()?;
        }
        Ok(())
    }

    /// Returns the unit weight for the given saturation state
    #[inline]
    pub fn unit_weight(&self, submerged: bool) -> f64 {
        if submerged {
            self.gamma_sat
        } else {
            self.gamma
        }
    }

    /// Returns tan(φ)
    #[inline]
    pub fn tan_phi(&self) -> f64 {
        f64::tan(self.phi.to_radians())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
