//! Channel resolution types

use std::fmt;

/// The four destination channels of the flat output raster, in write order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputChannel {
    R,
    G,
    B,
    A,
}

impl OutputChannel {
    /// All output channels in the order they appear in an output pixel.
    pub const ALL: [OutputChannel; 4] = [
        OutputChannel::R,
        OutputChannel::G,
        OutputChannel::B,
        OutputChannel::A,
    ];

    pub const fn index(self) -> usize {
        match self {
            OutputChannel::R => 0,
            OutputChannel::G => 1,
            OutputChannel::B => 2,
            OutputChannel::A => 3,
        }
    }

    pub const fn is_alpha(self) -> bool {
        matches!(self, OutputChannel::A)
    }
}

impl fmt::Display for OutputChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OutputChannel::R => "R",
            OutputChannel::G => "G",
            OutputChannel::B => "B",
            OutputChannel::A => "A",
        })
    }
}

/// Target of one channel-map entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapTarget {
    /// A single output channel.
    Output(OutputChannel),
    /// Monochrome source that feeds R, G and B at once.
    Luma,
}

/// One output slot bound to the source channel that feeds it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelBinding {
    pub output: OutputChannel,
    /// Full original channel name, layer prefix included.
    pub source: String,
}

/// Outcome of channel resolution: the bound output slots in R, G, B, A
/// order, plus whether the normal-vector domain remap applies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedChannels {
    pub bindings: Vec<ChannelBinding>,
    /// True iff any source channel had the semantic identity `NX`. Once
    /// set, the `v/2 + 0.5` remap applies to every written sample.
    pub convert_normals: bool,
}

impl ResolvedChannels {
    pub fn samples_per_pixel(&self) -> usize {
        self.bindings.len()
    }

    pub fn has_alpha(&self) -> bool {
        self.bindings.iter().any(|b| b.output.is_alpha())
    }

    /// Number of non-alpha samples per pixel.
    pub fn color_samples(&self) -> usize {
        self.bindings.iter().filter(|b| !b.output.is_alpha()).count()
    }

    /// The output is RGB-like iff exactly three color channels are bound;
    /// anything else is written as min-is-black samples.
    pub fn is_rgb(&self) -> bool {
        self.color_samples() == 3
    }
}
