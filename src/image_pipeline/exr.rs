//! EXR reading module
//!
//! This module provides header inspection and flat-plane decoding of EXR
//! images behind a narrow reader trait.

mod exrs_reader;
mod reader;
pub mod types;

pub use exrs_reader::ExrsReader;
pub use reader::ExrReader;
pub use types::{ExrHeader, PlaneStore};
