//! Contains the input data and plotting utilities

mod input_data;
mod plot_section;

pub use input_data::*;
pub use plot_section::*;
