//! Implements the base structures for a slope stability analysis

mod constants;
mod enums;
mod factor_of_safety;
mod sample_data;
mod search_config;
mod seismic;
mod slip_circle;
mod slope_geometry;
mod soil_layer;
mod soil_profile;
pub use crate::base::constants::*;
pub use crate::base::enums::*;
pub use crate::base::factor_of_safety::*;
pub use crate::base::sample_data::*;
pub use crate::base::search_config::*;
pub use crate::base::seismic::*;
pub use crate::base::slip_circle::*;
pub use crate::base::slope_geometry::*;
pub use crate::base::soil_layer::*;
pub use crate::base::soil_profile::*;
