//! Image processing pipeline module
//!
//! This module provides a structured approach to EXR to TIFF conversion,
//! with separate modules for channel resolution, EXR reading, row
//! interleaving, TIFF writing, and conversion orchestration.

pub mod channels;
pub mod common;
pub mod conversions;
pub mod exr;
pub mod interleave;
pub mod tiff;

pub use common::{
    ConversionError,
    Result,
};

pub use channels::{
    ChannelBinding,
    OutputChannel,
    ResolvedChannels,
};

pub use exr::{
    ExrHeader,
    ExrReader,
    ExrsReader,
    PlaneStore,
};

pub use interleave::RowInterleaver;

pub use tiff::{
    TiffCompression,
    ConversionConfig,
    ConversionConfigBuilder,
    TiffWriter,
    StandardTiffWriter,
    WriteOutcome,
};

pub use conversions::{
    ExrToTiffPipeline,
};
