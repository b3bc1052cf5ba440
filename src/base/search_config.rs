use super::{Seismic, SlipCircle, SlopeGeometry};
use crate::StrError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Holds the iteration parameters of Bishop's method
#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
pub struct BishopControl {
    /// Initial guess of the factor of safety
    pub fs_initial: f64,

    /// Absolute tolerance on the change of the factor of safety
    pub tolerance: f64,

    /// Maximum number of iterations
    pub n_max_iterations: usize,

    /// Minimum absolute value of the m_α factor
    pub m_alpha_min: f64,
}

impl BishopControl {
    /// Allocates a new instance with default values
    pub fn new() -> Self {
        BishopControl {
            fs_initial: 1.5,
            tolerance: 0.001,
            n_max_iterations: 100,
            m_alpha_min: 0.001,
        }
    }

    /// Checks the parameters
    pub fn validate(&self) -> Result<(), StrError> {
        if self.fs_initial <= 0.0 {
            return Err("initial factor of safety must be > 0.0");
        }
        if self.tolerance < 1e-15 {
            return Err("tolerance must be ≥ 1e-15");
        }
        if self.n_max_iterations < 1 {
            return Err("the maximum number of iterations must be ≥ 1");
        }
        if self.m_alpha_min <= 0.0 {
            return Err("m_alpha_min must be > 0.0");
        }
        Ok(())
    }
}

impl Default for BishopControl {
    fn default() -> Self {
        BishopControl::new()
    }
}

/// Holds the plausibility guards applied to trial circles during the search
///
/// All lengths are multiples of the slope height H, except `bottom_clearance`.
#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
pub struct CirclePolicy {
    /// The radius must be ≥ min_radius_factor·H
    pub min_radius_factor: f64,

    /// The radius must be ≤ max_radius_factor·H
    pub max_radius_factor: f64,

    /// The lowest point of the circle must be ≤ toe_elevation - bottom_clearance
    pub bottom_clearance: f64,

    /// The center must be ≥ toe_elevation + min_center_height_factor·H
    pub min_center_height_factor: f64,
}

impl CirclePolicy {
    /// Allocates a new instance with default values
    pub fn new() -> Self {
        CirclePolicy {
            min_radius_factor: 0.5,
            max_radius_factor: 4.0,
            bottom_clearance: 0.5,
            min_center_height_factor: 0.5,
        }
    }

    /// Returns a policy that accepts every circle
    pub fn permissive() -> Self {
        CirclePolicy {
            min_radius_factor: 0.0,
            max_radius_factor: f64::INFINITY,
            bottom_clearance: f64::NEG_INFINITY,
            min_center_height_factor: f64::NEG_INFINITY,
        }
    }

    /// Checks the parameters
    pub fn validate(&self) -> Result<(), StrError> {
        if self.min_radius_factor < 0.0 {
            return Err("min_radius_factor must be ≥ 0.0");
        }
        if self.max_radius_factor <= self.min_radius_factor {
            return Err("max_radius_factor must be > min_radius_factor");
        }
        if self.bottom_clearance.is_nan() || self.min_center_height_factor.is_nan() {
            return Err("bottom_clearance and min_center_height_factor must not be NaN");
        }
        Ok(())
    }

    /// Returns true if the circle is physically meaningful for the given slope
    pub fn accepts(&self, circle: &SlipCircle, geometry: &SlopeGeometry) -> bool {
        let h = geometry.height;
        if circle.radius < self.min_radius_factor * h || circle.radius > self.max_radius_factor * h {
            return false;
        }
        if circle.bottom() > geometry.toe_elevation - self.bottom_clearance {
            return false;
        }
        circle.yc >= geometry.toe_elevation + self.min_center_height_factor * h
    }
}

impl Default for CirclePolicy {
    fn default() -> Self {
        CirclePolicy::new()
    }
}

/// Holds the configuration of the critical slip-circle search
pub struct SearchConfig {
    /// Hint of the number of trial centers; the grid has ⌊√n_circles⌋ × ⌊√n_circles⌋ centers
    pub(crate) n_circles: usize,

    /// Scaling factors applied to the base radius of each center
    pub(crate) r_factors: Vec<f64>,

    /// Number of slices during the grid pass
    pub(crate) n_slices_coarse: usize,

    /// Number of slices for the refinement of the best circle
    pub(crate) n_slices_refined: usize,

    /// Minimum number of valid slices
    pub(crate) min_slices: usize,

    /// Factors of safety ≤ fs_floor are discarded
    pub(crate) fs_floor: f64,

    /// Maximum number of candidates (centers × radius factors)
    pub(crate) max_candidates: usize,

    /// Evaluates the candidates in parallel
    pub(crate) parallel: bool,

    /// Pseudo-static seismic loading
    pub(crate) seismic: Seismic,

    /// Iteration parameters of Bishop's method
    pub(crate) bishop: BishopControl,

    /// Plausibility guards
    pub(crate) policy: CirclePolicy,
}

impl SearchConfig {
    /// Allocates a new instance with default values
    pub fn new() -> Self {
        SearchConfig {
            n_circles: 50,
            r_factors: vec![0.8, 0.9, 1.0, 1.1, 1.2, 1.3, 1.4, 1.5],
            n_slices_coarse: 15,
            n_slices_refined: 25,
            min_slices: 5,
            fs_floor: 0.1,
            max_candidates: 100_000,
            parallel: false,
            seismic: Seismic::none(),
            bishop: BishopControl::new(),
            policy: CirclePolicy::new(),
        }
    }

    /// Sets the number of trial centers (hint)
    pub fn set_n_circles(&mut self, value: usize) -> Result<&mut Self, StrError> {
        if value < 1 {
            return Err("n_circles must be ≥ 1");
        }
        self.n_circles = value;
        Ok(self)
    }

    /// Sets the radius scaling factors
    pub fn set_r_factors(&mut self, values: &[f64]) -> Result<&mut Self, StrError> {
        if values.len() < 1 {
            return Err("at least one radius factor is required");
        }
        if values.iter().any(|r| !r.is_finite() || *r <= 0.0) {
            return Err("radius factors must be > 0.0");
        }
        self.r_factors = values.to_vec();
        Ok(self)
    }

    /// Sets the number of slices of the grid pass and of the refinement
    pub fn set_n_slices(&mut self, coarse: usize, refined: usize) -> Result<&mut Self, StrError> {
        if coarse < 1 || refined < 1 {
            return Err("the number of slices must be ≥ 1");
        }
        self.n_slices_coarse = coarse;
        self.n_slices_refined = refined;
        Ok(self)
    }

    /// Sets the minimum number of valid slices of an acceptable circle
    pub fn set_min_slices(&mut self, value: usize) -> Result<&mut Self, StrError> {
        if value < 1 {
            return Err("min_slices must be ≥ 1");
        }
        self.min_slices = value;
        Ok(self)
    }

    /// Sets the floor below which factors of safety are discarded
    pub fn set_fs_floor(&mut self, value: f64) -> Result<&mut Self, StrError> {
        if value < 0.0 {
            return Err("fs_floor must be ≥ 0.0");
        }
        self.fs_floor = value;
        Ok(self)
    }

    /// Sets the maximum number of candidates
    pub fn set_max_candidates(&mut self, value: usize) -> Result<&mut Self, StrError> {
        if value < 1 {
            return Err("max_candidates must be ≥ 1");
        }
        self.max_candidates = value;
        Ok(self)
    }

    /// Enables the parallel evaluation of candidates
    pub fn set_parallel(&mut self, flag: bool) -> Result<&mut Self, StrError> {
        self.parallel = flag;
        Ok(self)
    }

    /// Sets the pseudo-static seismic loading
    pub fn set_seismic(&mut self, seismic: Seismic) -> Result<&mut Self, StrError> {
        seismic.validate()?;
        self.seismic = seismic;
        Ok(self)
    }

    /// Sets the iteration parameters of Bishop's method
    pub fn set_bishop(&mut self, control: BishopControl) -> Result<&mut Self, StrError> {
        control.validate()?;
        self.bishop = control;
        Ok(self)
    }

    /// Sets the plausibility guards
    pub fn set_policy(&mut self, policy: CirclePolicy) -> Result<&mut Self, StrError> {
        policy.validate()?;
        self.policy = policy;
        Ok(self)
    }

    /// Returns the number of grid points along each direction
    pub fn n_grid(&self) -> usize {
        usize::max(1, f64::sqrt(self.n_circles as f64) as usize)
    }

    /// Returns the total number of candidates
    pub fn n_candidates(&self) -> usize {
        let n = self.n_grid();
        n * n * self.r_factors.len()
    }

    /// Returns the seismic loading
    pub fn seismic(&self) -> Seismic {
        self.seismic
    }

    /// Returns the iteration parameters of Bishop's method
    pub fn bishop(&self) -> &BishopControl {
        &self.bishop
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig::new()
    }
}

impl fmt::Display for SearchConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Search configuration\n")?;
        write!(f, "====================\n")?;
        write!(f, "n_circles = {:?}\n", self.n_circles)?;
        write!(f, "n_grid = {:?}\n", self.n_grid())?;
        write!(f, "r_factors = {:?}\n", self.r_factors)?;
        write!(f, "n_candidates = {:?}\n", self.n_candidates())?;
        write!(f, "n_slices_coarse = {:?}\n", self.n_slices_coarse)?;
        write!(f, "n_slices_refined = {:?}\n", self.n_slices_refined)?;
        write!(f, "min_slices = {:?}\n", self.min_slices)?;
        write!(f, "fs_floor = {:?}\n", self.fs_floor)?;
        write!(f, "parallel = {:?}\n", self.parallel)?;
        write!(f, "seismic = {}\n", self.seismic)?;
        write!(f, "bishop = {:?}\n", self.bishop)?;
        write!(f, "policy = {:?}\n", self.policy)?;
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{BishopControl, CirclePolicy, SearchConfig};
    use crate::base::{SampleData, Seismic, SlipCircle};

    #[test]
    fn handle_errors() {
        let mut config = SearchConfig::new();
        assert_eq!(config.set_n_circles(0).err(), Some("n_circles must be ≥ 1"));
        assert_eq!(config.set_r_factors(&[]).err(), Some("at least one radius factor is required"));
        assert_eq!(config.set_r_factors(&[1.0, 0.0]).err(), Some("radius factors must be > 0.0"));
        assert_eq!(config.set_n_slices(0, 25).err(), Some("the number of slices must be ≥ 1"));
        assert_eq!(config.set_min_slices(0).err(), Some("min_slices must be ≥ 1"));
        assert_eq!(config.set_fs_floor(-1.0).err(), Some("fs_floor must be ≥ 0.0"));
        assert_eq!(config.set_max_candidates(0).err(), Some("max_candidates must be ≥ 1"));
        assert_eq!(
            config.set_seismic(Seismic { kh: -1.0, kv: 0.0 }).err(),
            Some("horizontal seismic coefficient must be ≥ 0.0")
        );
        let mut control = BishopControl::new();
        control.n_max_iterations = 0;
        assert_eq!(
            config.set_bishop(control).err(),
            Some("the maximum number of iterations must be ≥ 1")
        );
        let mut policy = CirclePolicy::new();
        policy.max_radius_factor = 0.1;
        assert_eq!(
            config.set_policy(policy).err(),
            Some("max_radius_factor must be > min_radius_factor")
        );
    }

    #[test]
    fn new_works() {
        let config = SearchConfig::new();
        assert_eq!(config.n_grid(), 7);
        assert_eq!(config.n_candidates(), 7 * 7 * 8);
        assert_eq!(config.seismic(), Seismic::none());
        assert_eq!(config.bishop().n_max_iterations, 100);
        assert!(CirclePolicy::permissive().validate().is_ok());
    }

    #[test]
    fn default_works() {
        let config = SearchConfig::default();
        assert_eq!(config.n_candidates(), SearchConfig::new().n_candidates());
        assert_eq!(BishopControl::default().fs_initial, 1.5);
        assert_eq!(CirclePolicy::default().max_radius_factor, 4.0);
        assert_eq!(config.seismic(), Seismic::none());
    }

    #[test]
    fn policy_accepts_works() {
        let geo = SampleData::geometry_embankment(); // H = 8, toe at (5, 0)
        let policy = CirclePolicy::new();
        assert!(policy.accepts(&SlipCircle::new(5.0, 15.0, 16.0), &geo));
        assert!(!policy.accepts(&SlipCircle::new(5.0, 3.0, 3.9), &geo)); // radius < 4
        assert!(!policy.accepts(&SlipCircle::new(5.0, 40.0, 33.0), &geo)); // radius > 32
        assert!(!policy.accepts(&SlipCircle::new(5.0, 15.0, 15.2), &geo)); // bottom above -0.5
        assert!(!policy.accepts(&SlipCircle::new(5.0, 3.5, 8.0), &geo)); // center below 4
        assert!(CirclePolicy::permissive().accepts(&SlipCircle::new(5.0, 3.0, 1.0), &geo));
    }

    #[test]
    fn setters_work() -> Result<(), &'static str> {
        let mut config = SearchConfig::new();
        config
            .set_n_circles(20)?
            .set_r_factors(&[1.0, 1.2])?
            .set_n_slices(10, 30)?
            .set_min_slices(3)?
            .set_fs_floor(0.2)?
            .set_max_candidates(1000)?
            .set_parallel(true)?
            .set_seismic(Seismic::horizontal(0.1)?)?;
        assert_eq!(config.n_grid(), 4);
        assert_eq!(config.n_candidates(), 32);
        assert_eq!(config.n_slices_coarse, 10);
        assert_eq!(config.n_slices_refined, 30);
        assert!(config.parallel);
        let text = format!("{}", config);
        assert!(text.contains("n_candidates = 32"));
        assert!(text.contains("seismic = kh=0.1"));
        Ok(())
    }
}
