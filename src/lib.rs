//! Slope stability analysis by limit equilibrium methods
//!
//! This crate implements the Swedish (Ordinary) Method of Slices and Bishop's
//! Simplified Method with a search for the critical slip circle through layered
//! soil with groundwater and optional pseudo-static seismic loading.
//!
//! # Example
//!
//! ```
//! use slopesim::prelude::*;
//!
//! fn main() -> Result<(), StrError> {
//!     let geometry = SlopeGeometry::new(8.0, 1.5, 10.0, 5.0, 0.0)?;
//!     let clay = SoilLayer::new("Clay", 20.0, 18.0, 19.0, 20.0, 20.0)?;
//!     let profile = SoilProfile::new(vec![clay], 2.0)?;
//!     let mut config = SearchConfig::new();
//!     config.set_n_circles(25)?;
//!     let res = search_critical_circle(&geometry, &profile, Method::Bishop, &config)?;
//!     assert!(res.converged);
//!     assert!(res.fs.value() > 1.0);
//!     Ok(())
//! }
//! ```

/// Defines a type alias for the error type as a static string
pub type StrError = &'static str;

pub mod analysis;
pub mod base;
pub mod prelude;
pub mod settlement;
pub mod util;
