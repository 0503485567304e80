//! TIFF writing module
//!
//! This module provides scanline-oriented float TIFF writing with various
//! compression options.

mod standard_tiff_writer;
mod writer;
pub mod types;

pub use standard_tiff_writer::StandardTiffWriter;
pub use writer::TiffWriter;
pub use types::{ConversionConfig, ConversionConfigBuilder, TiffCompression, WriteOutcome};
