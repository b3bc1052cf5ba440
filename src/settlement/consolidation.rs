use super::compressibility_of;
use crate::base::{SoilLayer, UNIT_WEIGHT_WATER};
use crate::StrError;
use serde::{Deserialize, Serialize};

/// Holds the consolidation settlement of a layer
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct LayerSettlement {
    /// Name of the layer
    pub name: String,

    /// Thickness of the layer (m)
    pub thickness: f64,

    /// Initial effective vertical stress σ'v0 at mid-layer (kPa)
    pub sigma_v0: f64,

    /// Vertical stress increase Δσ at mid-layer (kPa)
    pub delta_sigma: f64,

    /// Settlement of the layer (mm)
    pub settlement: f64,
}

/// Calculates the primary consolidation settlement of a layered deposit
///
/// The stresses are evaluated at the middle of each layer, assumed submerged:
///
/// ```text
/// σ'v0 = z·(γ - γw)              (or 0.5·z·γ if the former is ≤ 0)
/// Δσ   = q / (1 + z/5)²
/// σ'p  = OCR·σ'v0
///
///          ⎧ H·Cr/(1+e0)·log(σ'f/σ'v0)                              if σ'f ≤ σ'p
/// Sc   =   ⎨ H·Cr/(1+e0)·log(σ'p/σ'v0) + H·Cc/(1+e0)·log(σ'f/σ'p)   if σ'v0 < σ'p < σ'f
///          ⎩ H·Cc/(1+e0)·log(σ'f/σ'v0)                              otherwise
///
/// σ'f  = σ'v0 + Δσ
/// ```
///
/// # Input
///
/// * `q` -- net foundation pressure (kPa)
/// * `layers` -- the soil layers below the foundation, from top to bottom
/// * `foundation_depth` -- depth of the foundation level (m)
///
/// # Output
///
/// Returns `(sc, layers)` where `sc` is the total settlement in mm
pub fn consolidation_settlement(
    q: f64,
    layers: &[SoilLayer],
    foundation_depth: f64,
) -> Result<(f64, Vec<LayerSettlement>), StrError> {
    if q < 0.0 {
        return Err("foundation pressure must be ≥ 0.0");
    }
    if foundation_depth < 0.0 {
        return Err("foundation depth must be ≥ 0.0");
    }
    if layers.len() < 1 {
        return Err("at least one soil layer is required");
    }
    let mut total = 0.0;
    let mut results = Vec::with_capacity(layers.len());
    let mut depth = foundation_depth;
    for layer in layers {
        let param = compressibility_of(layer)?;
        let z = depth + layer.thickness / 2.0;
        let mut sigma_v0 = z * (layer.gamma - UNIT_WEIGHT_WATER);
        if sigma_v0 <= 0.0 {
            sigma_v0 = 0.5 * z * layer.gamma;
        }
        let delta_sigma = q / f64::powi(1.0 + z / 5.0, 2);
        let sigma_p = param.ocr * sigma_v0;
        let sigma_f = sigma_v0 + delta_sigma;
        let h = layer.thickness / (1.0 + param.e0);
        let sc = if sigma_f <= sigma_p {
            h * param.cr * f64::log10(sigma_f / sigma_v0)
        } else if sigma_v0 < sigma_p {
            h * param.cr * f64::log10(sigma_p / sigma_v0) + h * param.cc * f64::log10(sigma_f / sigma_p)
        } else {
            h * param.cc * f64::log10(sigma_f / sigma_v0)
        };
        total += sc;
        results.push(LayerSettlement {
            name: layer.name.clone(),
            thickness: layer.thickness,
            sigma_v0,
            delta_sigma,
            settlement: 1000.0 * sc,
        });
        depth += layer.thickness;
    }
    Ok((1000.0 * total, results))
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
