use super::{slice_loads, AnalysisResult, Slice, SliceForces, Solver};
use crate::base::{FactorOfSafety, Method, Seismic, SlipCircle, SlopeGeometry, SoilProfile, DRIVING_EPSILON};

/// Implements the Swedish (Ordinary) Method of Slices
///
/// ```text
///      Σ (c'·l + max(0, N)·tan φ')
/// FS = ───────────────────────────
///          | Σ (T + Tₛ) |
///
/// N  = W·(cos α - kv·sin α) - u·l
/// T  = W·sin α
/// Tₛ = kh·W·(yc - y_mid) / R
/// ```
///
/// The inter-slice forces are neglected; thus, no iterations are needed.
pub struct Swedish<'a> {
    geometry: &'a SlopeGeometry,
    profile: &'a SoilProfile,
    seismic: Seismic,
}

impl<'a> Swedish<'a> {
    /// Allocates a new instance
    pub fn new(geometry: &'a SlopeGeometry, profile: &'a SoilProfile, seismic: Seismic) -> Self {
        Swedish {
            geometry,
            profile,
            seismic,
        }
    }
}

impl<'a> Solver for Swedish<'a> {
    fn method(&self) -> Method {
        Method::Swedish
    }

    fn solve(&self, slices: &[Slice], circle: &SlipCircle) -> AnalysisResult {
        let loads = slice_loads(slices, circle, self.geometry, self.profile, &self.seismic);
        let kv = self.seismic.kv;
        let mut sum_resisting = 0.0;
        let mut sum_driving = 0.0;
        let mut forces = Vec::with_capacity(loads.len());
        for load in &loads {
            let s = load.slice;
            let (sin_a, cos_a) = f64::sin_cos(s.alpha);
            let l = s.base_length();
            let w = load.weight;
            let u = load.pore_pressure;
            let normal = w * (cos_a - kv * sin_a) - u * l;
            let shear = w * sin_a;
            let driving = shear + load.seismic_driving;
            let c = load.soil.cohesion;
            let resisting = c * l + f64::max(0.0, normal) * load.tan_phi;
            sum_resisting += resisting;
            sum_driving += driving;
            forces.push(SliceForces {
                index: s.index,
                x_mid: s.x_mid,
                width: s.width,
                height: s.height,
                weight: w,
                alpha_deg: s.alpha.to_degrees(),
                base_length: l,
                pore_pressure: u,
                normal,
                shear,
                m_alpha: None,
                cohesion: c,
                phi: load.soil.phi,
                resisting,
                driving,
                soil_name: load.soil.name.clone(),
            });
        }
        AnalysisResult {
            method: Method::Swedish,
            label: AnalysisResult::make_label(Method::Swedish, &self.seismic),
            fs: FactorOfSafety::from_sums(sum_resisting, sum_driving, DRIVING_EPSILON),
            slices: forces,
            circle: *circle,
            seismic: self.seismic,
            converged: true,
            iterations: 1,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
