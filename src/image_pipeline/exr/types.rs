//! EXR header and pixel plane types

use std::collections::HashMap;

/// Header metadata of the first image part: the data-window size and the
/// declared channel list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExrHeader {
    pub width: usize,
    pub height: usize,
    /// Raw channel names in header order, layer prefixes intact.
    pub channel_names: Vec<String>,
}

/// One decoded float plane per declared source channel.
///
/// Planes are initialized to 1.0, so any sample the decoder never fills
/// reads as opaque/white rather than black.
#[derive(Debug, Clone)]
pub struct PlaneStore {
    width: usize,
    height: usize,
    planes: HashMap<String, Vec<f32>>,
}

impl PlaneStore {
    pub fn new<I, S>(width: usize, height: usize, channel_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let planes = channel_names
            .into_iter()
            .map(|name| (name.into(), vec![1.0; width * height]))
            .collect();

        Self {
            width,
            height,
            planes,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Read access by raw channel name; samples are indexed `y*width + x`.
    pub fn plane(&self, name: &str) -> Option<&[f32]> {
        self.planes.get(name).map(Vec::as_slice)
    }

    /// Write access for the decoder filling pass.
    pub fn plane_mut(&mut self, name: &str) -> Option<&mut [f32]> {
        self.planes.get_mut(name).map(Vec::as_mut_slice)
    }
}
