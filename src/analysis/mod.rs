//! Implements the limit-equilibrium methods and the critical slip-circle search

mod analysis_result;
mod bishop;
mod search;
mod slice_forces;
mod slices;
mod solver;
mod swedish;
pub use crate::analysis::analysis_result::*;
pub use crate::analysis::bishop::*;
pub use crate::analysis::search::*;
pub use crate::analysis::slice_forces::*;
pub use crate::analysis::slices::*;
pub use crate::analysis::solver::*;
pub use crate::analysis::swedish::*;
