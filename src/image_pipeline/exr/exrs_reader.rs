//! EXR reader implementation using the exr library.
//!
//! Decodes flat sample data from the first valid layer. Every channel is
//! requested as f32; half-float and integer channels are widened during
//! decoding, which also converts the rarely supported f16 data to a format
//! TIFF consumers understand.

use std::io::Cursor;

use tracing::debug;

use ::exr::prelude::*;

use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::exr::reader::ExrReader;
use crate::image_pipeline::exr::types::{ExrHeader, PlaneStore};

pub struct ExrsReader;

impl ExrReader for ExrsReader {
    fn read_header(&self, data: &[u8]) -> Result<ExrHeader> {
        debug!("Reading EXR header, {} bytes", data.len());

        let meta = MetaData::read_from_buffered(Cursor::new(data), false)
            .map_err(|e| ConversionError::DecodeError(e.to_string()))?;

        let header = meta
            .headers
            .first()
            .ok_or_else(|| ConversionError::DecodeError("image contains no layers".to_string()))?;

        let width = header.layer_size.width();
        let height = header.layer_size.height();
        let channel_names = header
            .channels
            .list
            .iter()
            .map(|channel| channel.name.to_string())
            .collect();

        Ok(ExrHeader {
            width,
            height,
            channel_names,
        })
    }

    fn read_planes(&self, data: &[u8], header: &ExrHeader) -> Result<PlaneStore> {
        let mut store = PlaneStore::new(
            header.width,
            header.height,
            header.channel_names.iter().cloned(),
        );

        let image = read()
            .no_deep_data()
            .largest_resolution_level()
            .all_channels()
            .first_valid_layer()
            .all_attributes()
            .from_buffered(Cursor::new(data))
            .map_err(|e| ConversionError::DecodeError(e.to_string()))?;

        let layer = &image.layer_data;
        for channel in &layer.channel_data.list {
            let name = channel.name.to_string();
            if let Some(plane) = store.plane_mut(&name) {
                for (slot, value) in plane.iter_mut().zip(channel.sample_data.values_as_f32()) {
                    *slot = value;
                }
            }
        }

        debug!(
            width = header.width,
            height = header.height,
            channels = header.channel_names.len(),
            "Decoded EXR planes"
        );

        Ok(store)
    }
}
