use super::{allocate_solver, discretize, AnalysisResult, Solver};
use crate::base::{Method, SearchConfig, SlipCircle, SlopeGeometry, SoilProfile};
use crate::StrError;
use rayon::prelude::*;
use std::cmp::Ordering;

/// Holds a trial circle of the search grid
#[derive(Clone, Copy, Debug)]
pub struct Candidate {
    /// Position in the enumeration order (used to break ties)
    pub index: usize,

    /// x-coordinate of the trial center
    pub xc: f64,

    /// y-coordinate of the trial center
    pub yc: f64,

    /// Scaling factor of the base radius
    pub r_factor: f64,
}

/// Enumerates the trial centers crossed with the radius factors
///
/// Centers span x ∈ [toe_x - 0.5·H, toe_x + 0.3·slope_width] and
/// y ∈ [crest + 0.2·H, crest + 1.5·H] with ⌊√n_circles⌋ points along each direction.
/// The radius factor runs fastest, then y, then x.
pub struct CandidateGrid {
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
    n: usize,
    r_factors: Vec<f64>,
    index: usize,
}

impl CandidateGrid {
    /// Allocates a new instance
    pub fn new(geometry: &SlopeGeometry, config: &SearchConfig) -> Self {
        let h = geometry.height;
        let crest = geometry.crest_elevation();
        CandidateGrid {
            x_min: geometry.toe_x - 0.5 * h,
            x_max: geometry.toe_x + 0.3 * geometry.slope_width(),
            y_min: crest + 0.2 * h,
            y_max: crest + 1.5 * h,
            n: config.n_grid(),
            r_factors: config.r_factors.clone(),
            index: 0,
        }
    }

    /// Returns the total number of candidates
    pub fn size(&self) -> usize {
        self.n * self.n * self.r_factors.len()
    }

    fn coordinate(&self, min: f64, max: f64, i: usize) -> f64 {
        if self.n == 1 {
            min
        } else {
            min + (i as f64) * (max - min) / ((self.n - 1) as f64)
        }
    }
}

impl Iterator for CandidateGrid {
    type Item = Candidate;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.size() {
            return None;
        }
        let nr = self.r_factors.len();
        let k = self.index % nr;
        let j = (self.index / nr) % self.n;
        let i = self.index / (nr * self.n);
        let candidate = Candidate {
            index: self.index,
            xc: self.coordinate(self.x_min, self.x_max, i),
            yc: self.coordinate(self.y_min, self.y_max, j),
            r_factor: self.r_factors[k],
        };
        self.index += 1;
        Some(candidate)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.size() - usize::min(self.index, self.size());
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for CandidateGrid {}

/// Evaluates a candidate with the coarse slice count
///
/// Returns `None` if the candidate must be skipped.
fn evaluate(
    solver: &dyn Solver,
    geometry: &SlopeGeometry,
    config: &SearchConfig,
    candidate: &Candidate,
) -> Option<AnalysisResult> {
    let circle = match SlipCircle::through_slope(geometry, candidate.xc, candidate.yc, candidate.r_factor) {
        Ok(c) => c,
        Err(e) => {
            log::debug!("candidate {}: skipped ({})", candidate.index, e);
            return None;
        }
    };
    if !config.policy.accepts(&circle, geometry) {
        return None;
    }
    let slices = discretize(&circle, geometry, config.n_slices_coarse);
    if slices.len() < config.min_slices {
        return None;
    }
    let result = solver.solve(&slices, &circle);
    if result.slices.len() < config.min_slices {
        return None;
    }
    match result.fs.finite() {
        Some(value) if !(value > config.fs_floor) => None,
        _ => Some(result),
    }
}

/// Selects the best of two evaluated candidates (smallest FS, then smallest index)
fn best_of(a: (usize, AnalysisResult), b: (usize, AnalysisResult)) -> (usize, AnalysisResult) {
    match a.1.fs.compare(&b.1.fs) {
        Ordering::Less => a,
        Ordering::Greater => b,
        Ordering::Equal => {
            if a.0 <= b.0 {
                a
            } else {
                b
            }
        }
    }
}

/// Finds the critical slip circle (minimum factor of safety) of a slope
///
/// # Input
///
/// * `geometry` -- the slope geometry
/// * `profile` -- the soil layers and groundwater level
/// * `method` -- Swedish or Bishop (`Both` is handled by [analyze])
/// * `config` -- the search configuration
///
/// # Output
///
/// Returns the result of the critical circle re-evaluated with the refined slice count.
pub fn search_critical_circle(
    geometry: &SlopeGeometry,
    profile: &SoilProfile,
    method: Method,
    config: &SearchConfig,
) -> Result<AnalysisResult, StrError> {
    geometry.validate()?;
    profile.validate()?;
    let solver = allocate_solver(method, geometry, profile, config.seismic, config.bishop)?;
    let grid = CandidateGrid::new(geometry, config);
    let n_candidates = grid.size();
    if n_candidates > config.max_candidates {
        return Err("the number of candidates exceeds max_candidates");
    }
    log::debug!("{:?} search with {} candidates", method, n_candidates);

    // grid pass
    let best = if config.parallel {
        let candidates: Vec<_> = grid.collect();
        candidates
            .par_iter()
            .filter_map(|c| evaluate(solver.as_ref(), geometry, config, c).map(|r| (c.index, r)))
            .reduce_with(best_of)
    } else {
        grid.filter_map(|c| evaluate(solver.as_ref(), geometry, config, &c).map(|r| (c.index, r)))
            .reduce(best_of)
    };
    let (index, coarse) = best.ok_or("no critical slip surface found")?;
    log::debug!("{:?} coarse minimum: FS = {} (candidate {})", method, coarse.fs, index);

    // refinement
    let circle = coarse.circle;
    let slices = discretize(&circle, geometry, config.n_slices_refined);
    let result = if slices.is_empty() {
        coarse
    } else {
        solver.solve(&slices, &circle)
    };
    if !result.converged {
        log::warn!("{}: iterations did not converge (FS = {})", result.label, result.fs);
    }
    log::info!(
        "{}: FS = {} at xc = {:.3}, yc = {:.3}, R = {:.3}",
        result.label,
        result.fs,
        circle.xc,
        circle.yc,
        circle.radius
    );
    Ok(result)
}

/// Runs the critical circle search for one or both methods
///
/// With `Method::Both`, the results are ordered as Bishop then Swedish.
pub fn analyze(
    geometry: &SlopeGeometry,
    profile: &SoilProfile,
    method: Method,
    config: &SearchConfig,
) -> Result<Vec<AnalysisResult>, StrError> {
    let mut results = Vec::new();
    for single in method.singles() {
        results.push(search_critical_circle(geometry, profile, single, config)?);
    }
    Ok(results)
}

/// Analyzes a given slip circle (no search)
pub fn analyze_circle(
    geometry: &SlopeGeometry,
    profile: &SoilProfile,
    method: Method,
    circle: &SlipCircle,
    n_slices: usize,
    config: &SearchConfig,
) -> Result<AnalysisResult, StrError> {
    geometry.validate()?;
    profile.validate()?;
    let solver = allocate_solver(method, geometry, profile, config.seismic, config.bishop)?;
    let slices = discretize(circle, geometry, n_slices);
    if slices.len() < config.min_slices {
        return Err("the slip circle does not produce enough slices");
    }
    Ok(solver.solve(&slices, circle))
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
