//! Interleave/transform pass
//!
//! Walks the resolved output channels per scanline and produces interleaved
//! rows, applying the normal-vector domain remap when required.

use crate::image_pipeline::channels::ResolvedChannels;
use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::exr::PlaneStore;

/// Produces interleaved output rows from the decoded planes.
///
/// Holds one plane slice per bound output channel, in output order; the
/// luma broadcast simply references the same plane three times.
pub struct RowInterleaver<'a> {
    planes: Vec<&'a [f32]>,
    width: usize,
    height: usize,
    convert_normals: bool,
}

impl<'a> RowInterleaver<'a> {
    pub fn new(store: &'a PlaneStore, resolved: &ResolvedChannels) -> Result<Self> {
        let planes = resolved
            .bindings
            .iter()
            .map(|binding| {
                store
                    .plane(&binding.source)
                    .ok_or_else(|| ConversionError::MissingPlane(binding.source.clone()))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            planes,
            width: store.width(),
            height: store.height(),
            convert_normals: resolved.convert_normals,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Samples per interleaved row: `width * samples_per_pixel`.
    pub fn row_len(&self) -> usize {
        self.width * self.planes.len()
    }

    /// Fills `row` with the samples of scanline `y`, pixel-major and
    /// channel-minor.
    ///
    /// The remap is not selective: once any `NX` channel was seen, every
    /// sample of every bound channel moves from [-1, 1] to [0, 1].
    pub fn fill_row(&self, y: usize, row: &mut [f32]) {
        debug_assert_eq!(row.len(), self.row_len());

        let channels = self.planes.len();
        let offset = y * self.width;

        for x in 0..self.width {
            for (c, plane) in self.planes.iter().enumerate() {
                let value = plane[offset + x];
                row[x * channels + c] = if self.convert_normals {
                    value / 2.0 + 0.5
                } else {
                    value
                };
            }
        }
    }
}
