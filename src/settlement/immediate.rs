use crate::base::{ParamCompressibility, SoilLayer};
use crate::StrError;

/// Poisson's coefficient assumed for the immediate settlement
pub const POISSON_IMMEDIATE: f64 = 0.3;

/// Influence factor of the corner of a flexible rectangular foundation
pub const INFLUENCE_FLEXIBLE_CORNER: f64 = 0.88;

/// Returns the compressibility parameters of a layer or an error
pub(crate) fn compressibility_of(layer: &SoilLayer) -> Result<&ParamCompressibility, StrError> {
    layer
        .compressibility
        .as_ref()
        .ok_or("compressibility parameters are required by the settlement calculations")
}

/// Calculates the immediate (elastic) settlement of a flexible foundation
///
/// ```text
/// Si = q·B·(1 - ν²)·I / E
/// ```
///
/// where E is the thickness-weighted average of the Young's moduli.
///
/// # Input
///
/// * `q` -- net foundation pressure (kPa)
/// * `b` -- width of the foundation (m)
/// * `layers` -- the soil layers below the foundation
/// * `shape_factor` -- multiplier of the influence factor I = 0.88
///
/// # Output
///
/// Returns the settlement in mm.
pub fn immediate_settlement(q: f64, b: f64, layers: &[SoilLayer], shape_factor: f64) -> Result<f64, StrError> {
    if q < 0.0 {
        return Err("foundation pressure must be ≥ 0.0");
    }
    if b <= 0.0 {
        return Err("foundation width must be > 0.0");
    }
    if shape_factor <= 0.0 {
        return Err("shape factor must be > 0.0");
    }
    if layers.len() < 1 {
        return Err("at least one soil layer is required");
    }
    let mut sum_thickness = 0.0;
    let mut sum_young = 0.0;
    for layer in layers {
        let param = compressibility_of(layer)?;
        sum_thickness += layer.thickness;
        sum_young += param.young * layer.thickness;
    }
    let young = sum_young / sum_thickness;
    let nu = POISSON_IMMEDIATE;
    let influence = shape_factor * INFLUENCE_FLEXIBLE_CORNER;
    Ok(1000.0 * q * b * (1.0 - nu * nu) * influence / young)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
