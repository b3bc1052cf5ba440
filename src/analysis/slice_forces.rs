use serde::{Deserialize, Serialize};

/// Holds the forces acting on a slice, as computed by a limit-equilibrium method
///
/// Forces are per unit length of the slope (kN/m); pressures and strengths in kPa.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct SliceForces {
    /// Index of the slice (column) in the discretization
    pub index: usize,

    /// x-coordinate of the midpoint
    pub x_mid: f64,

    /// Width
    pub width: f64,

    /// Height
    pub height: f64,

    /// Weight W
    pub weight: f64,

    /// Inclination of the base in degrees
    pub alpha_deg: f64,

    /// Length of the base l = width / cos α
    pub base_length: f64,

    /// Pore-water pressure u at the base
    pub pore_pressure: f64,

    /// Effective normal force on the base
    pub normal: f64,

    /// Tangential component of the weight (W·sin α)
    pub shear: f64,

    /// Bishop's m_α factor (not used by the Swedish method)
    pub m_alpha: Option<f64>,

    /// Cohesion used
    pub cohesion: f64,

    /// Friction angle used (degrees)
    pub phi: f64,

    /// Resisting contribution
    pub resisting: f64,

    /// Driving contribution (tangential weight plus seismic addendum)
    pub driving: f64,

    /// Name of the soil layer at the slice
    pub soil_name: String,
}
