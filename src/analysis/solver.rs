use super::{AnalysisResult, Bishop, Slice, Swedish};
use crate::base::{BishopControl, Method, Seismic, SlipCircle, SlopeGeometry, SoilLayer, SoilProfile, UNIT_WEIGHT_WATER};
use crate::StrError;

/// Defines the trait for limit-equilibrium methods
pub trait Solver: Sync {
    /// Returns the method implemented by this solver
    fn method(&self) -> Method;

    /// Computes the factor of safety of a discretized slip circle
    fn solve(&self, slices: &[Slice], circle: &SlipCircle) -> AnalysisResult;
}

/// Holds the loads on a slice that do not depend on the factor of safety
pub(crate) struct SliceLoad<'a> {
    pub slice: &'a Slice,
    pub soil: &'a SoilLayer,
    pub weight: f64,
    pub pore_pressure: f64,
    pub tan_phi: f64,
    pub seismic_driving: f64,
}

/// Computes the weight, pore pressure, and seismic driving force of each slice
///
/// Slices without soil at their mid-height are skipped.
pub(crate) fn slice_loads<'a>(
    slices: &'a [Slice],
    circle: &SlipCircle,
    geometry: &SlopeGeometry,
    profile: &'a SoilProfile,
    seismic: &Seismic,
) -> Vec<SliceLoad<'a>> {
    let mut loads = Vec::with_capacity(slices.len());
    for slice in slices {
        let y_mid = slice.y_mid();
        let (soil, submerged) = match profile.soil_at(geometry, slice.x_mid, y_mid) {
            Some(found) => found,
            None => continue,
        };
        let weight = soil.unit_weight(submerged) * slice.height * slice.width;
        let pore_pressure = profile.pore_pressure(slice.y_base, UNIT_WEIGHT_WATER);
        let seismic_driving = if seismic.kh > 0.0 {
            let arm = circle.yc - y_mid;
            seismic.kh * weight * arm / circle.radius
        } else {
            0.0
        };
        loads.push(SliceLoad {
            slice,
            soil,
            weight,
            pore_pressure,
            tan_phi: soil.tan_phi(),
            seismic_driving,
        });
    }
    loads
}

/// Allocates the solver of a single method
pub fn allocate_solver<'a>(
    method: Method,
    geometry: &'a SlopeGeometry,
    profile: &'a SoilProfile,
    seismic: Seismic,
    control: BishopControl,
) -> Result<Box<dyn Solver + 'a>, StrError> {
    seismic.validate()?;
    match method {
        Method::Swedish => Ok(Box::new(Swedish::new(geometry, profile, seismic))),
        Method::Bishop => {
            control.validate()?;
            Ok(Box::new(Bishop::new(geometry, profile, seismic, control)))
        }
        Method::Both => Err("a solver requires a single method (Swedish or Bishop)"),
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
