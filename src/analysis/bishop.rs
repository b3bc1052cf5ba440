use super::{slice_loads, AnalysisResult, Slice, SliceForces, SliceLoad, Solver};
use crate::base::{BishopControl, FactorOfSafety, Method, Seismic, SlipCircle, SlopeGeometry, SoilProfile, DRIVING_EPSILON};

/// Implements Bishop's Simplified Method
///
/// ```text
///      Σ [(c'·b + (Wᵥ - u·b)·tan φ') / mα]
/// FS = ───────────────────────────────────
///           | Σ (W·sin α + Tₛ) |
///
/// mα = cos α + sin α·tan φ' / FS
/// Wᵥ = W·(1 - kv·tan α)
/// Tₛ = kh·W·(yc - y_mid) / R
/// ```
///
/// The factor of safety appears on both sides; thus, it is found by fixed-point iterations.
pub struct Bishop<'a> {
    geometry: &'a SlopeGeometry,
    profile: &'a SoilProfile,
    seismic: Seismic,
    control: BishopControl,
}

impl<'a> Bishop<'a> {
    /// Allocates a new instance
    pub fn new(
        geometry: &'a SlopeGeometry,
        profile: &'a SoilProfile,
        seismic: Seismic,
        control: BishopControl,
    ) -> Self {
        Bishop {
            geometry,
            profile,
            seismic,
            control,
        }
    }

    /// Computes the forces on all slices for a trial factor of safety
    fn calc_forces(&self, loads: &[SliceLoad], fs: &FactorOfSafety) -> Vec<SliceForces> {
        let kv = self.seismic.kv;
        let mut forces = Vec::with_capacity(loads.len());
        for load in loads {
            let s = load.slice;
            let (sin_a, cos_a) = f64::sin_cos(s.alpha);
            let b = s.width;
            let w = load.weight;
            let u = load.pore_pressure;
            let c = load.soil.cohesion;
            let tan_phi = load.tan_phi;
            let tan_a = sin_a / cos_a;
            let (mut m_alpha, cohesion_term) = match fs {
                FactorOfSafety::Finite(f) => (cos_a + sin_a * tan_phi / f, c * b * tan_a / f),
                FactorOfSafety::Unbounded => (cos_a, 0.0),
            };
            if f64::abs(m_alpha) < self.control.m_alpha_min {
                m_alpha = self.control.m_alpha_min;
            }
            let w_v = w * (1.0 - kv * tan_a);
            let resisting = (c * b + (w_v - u * b) * tan_phi) / m_alpha;
            let shear = w * sin_a;
            let driving = shear + load.seismic_driving;
            let normal = (w_v - u * b - cohesion_term) / m_alpha;
            forces.push(SliceForces {
                index: s.index,
                x_mid: s.x_mid,
                width: b,
                height: s.height,
                weight: w,
                alpha_deg: s.alpha.to_degrees(),
                base_length: s.base_length(),
                pore_pressure: u,
                normal,
                shear,
                m_alpha: Some(m_alpha),
                cohesion: c,
                phi: load.soil.phi,
                resisting,
                driving,
                soil_name: load.soil.name.clone(),
            });
        }
        forces
    }

    /// Allocates the results
    fn results(
        &self,
        fs: FactorOfSafety,
        forces: Vec<SliceForces>,
        circle: &SlipCircle,
        converged: bool,
        iterations: usize,
    ) -> AnalysisResult {
        AnalysisResult {
            method: Method::Bishop,
            label: AnalysisResult::make_label(Method::Bishop, &self.seismic),
            fs,
            slices: forces,
            circle: *circle,
            seismic: self.seismic,
            converged,
            iterations,
        }
    }
}

impl<'a> Solver for Bishop<'a> {
    fn method(&self) -> Method {
        Method::Bishop
    }

    fn solve(&self, slices: &[Slice], circle: &SlipCircle) -> AnalysisResult {
        let loads = slice_loads(slices, circle, self.geometry, self.profile, &self.seismic);

        // the driving sum does not depend on FS
        let sum_driving: f64 = loads
            .iter()
            .map(|load| load.weight * f64::sin(load.slice.alpha) + load.seismic_driving)
            .sum();
        if f64::abs(sum_driving) < DRIVING_EPSILON {
            let fs = FactorOfSafety::Unbounded;
            let forces = self.calc_forces(&loads, &fs);
            return self.results(fs, forces, circle, true, 1);
        }

        // fixed-point iterations
        let mut fs = FactorOfSafety::Finite(self.control.fs_initial);
        let mut forces = Vec::new();
        for iteration in 0..self.control.n_max_iterations {
            forces = self.calc_forces(&loads, &fs);
            let sum_resisting: f64 = forces.iter().map(|f| f.resisting).sum();
            let fs_new = FactorOfSafety::from_sums(sum_resisting, sum_driving, DRIVING_EPSILON);
            if fs_new.distance(&fs) < self.control.tolerance {
                return self.results(fs_new, forces, circle, true, iteration + 1);
            }
            // negative estimates are kept because mα changes sign with FS
            match fs_new {
                FactorOfSafety::Finite(value) if !value.is_finite() => {
                    log::debug!("Bishop: non-finite FS at iteration {}", iteration + 1);
                    return self.results(fs_new, forces, circle, false, iteration + 1);
                }
                _ => (),
            }
            fs = fs_new;
        }
        log::debug!(
            "Bishop: no convergence after {} iterations (FS = {})",
            self.control.n_max_iterations,
            fs
        );
        self.results(fs, forces, circle, false, self.control.n_max_iterations)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
