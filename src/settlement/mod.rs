//! Implements settlement calculations for foundations on layered soil

mod consolidation;
mod immediate;
mod time_rate;
pub use crate::settlement::consolidation::*;
pub use crate::settlement::immediate::*;
pub use crate::settlement::time_rate::*;
