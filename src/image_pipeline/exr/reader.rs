use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::exr::types::{ExrHeader, PlaneStore};

pub trait ExrReader {
    /// Reads only the header: image bounds and the declared channel list.
    fn read_header(&self, data: &[u8]) -> Result<ExrHeader>;

    /// Decodes every declared channel into a freshly allocated plane store.
    fn read_planes(&self, data: &[u8], header: &ExrHeader) -> Result<PlaneStore>;
}
