use std::io::Write;

use crate::image_pipeline::channels::ResolvedChannels;
use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::exr::PlaneStore;
use crate::image_pipeline::tiff::types::{ConversionConfig, WriteOutcome};

pub trait TiffWriter {
    fn write_tiff(
        &self,
        planes: &PlaneStore,
        resolved: &ResolvedChannels,
        output: &mut dyn Write,
        config: &ConversionConfig,
    ) -> Result<WriteOutcome>;
}
