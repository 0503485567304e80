//! Pipeline conversions module
//!
//! This module contains orchestration logic for the EXR to TIFF conversion.

mod exr_to_tiff;

pub use exr_to_tiff::ExrToTiffPipeline;
