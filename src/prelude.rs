//! Makes available common structures needed to run an analysis
//!
//! You may write `use slopesim::prelude::*` in your code and obtain
//! access to commonly used functionality.

pub use crate::analysis::{analyze, analyze_circle, search_critical_circle, AnalysisResult, SliceForces};
pub use crate::base::{
    BishopControl, CirclePolicy, FactorOfSafety, Method, ParamCompressibility, Safety, SearchConfig, Seismic,
    SeismicZone, SlipCircle, SlopeGeometry, SoilLayer, SoilProfile, DEFAULT_OUT_DIR, DEFAULT_TEST_DIR,
};
pub use crate::settlement::{consolidation_settlement, immediate_settlement, time_rate_settlement};
pub use crate::util::{AnalysisInput, PlotSection};
pub use crate::StrError;
