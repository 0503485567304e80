//! Channel resolver: semantic identities to output channel bindings.

use tracing::warn;

use crate::image_pipeline::channels::catalog::CatalogEntry;
use crate::image_pipeline::channels::types::{
    ChannelBinding, MapTarget, OutputChannel, ResolvedChannels,
};
use crate::image_pipeline::common::error::{ConversionError, Result};

/// Static mapping from semantic channel identity to output target.
/// Z and Y are monochrome sources broadcast to all three color channels;
/// normal-map components land on the color channel of the matching axis.
const CHANNEL_MAP: &[(&str, MapTarget)] = &[
    ("Z", MapTarget::Luma),
    ("Y", MapTarget::Luma),
    ("R", MapTarget::Output(OutputChannel::R)),
    ("G", MapTarget::Output(OutputChannel::G)),
    ("B", MapTarget::Output(OutputChannel::B)),
    ("NX", MapTarget::Output(OutputChannel::R)),
    ("NY", MapTarget::Output(OutputChannel::G)),
    ("NZ", MapTarget::Output(OutputChannel::B)),
    ("A", MapTarget::Output(OutputChannel::A)),
];

fn lookup(semantic: &str) -> Option<MapTarget> {
    CHANNEL_MAP
        .iter()
        .find(|(id, _)| *id == semantic)
        .map(|(_, target)| *target)
}

/// Resolves a channel catalog into output bindings.
///
/// Pure apart from diagnostics: unknown identities are skipped with a
/// warning, while a second distinct claim on any output slot is fatal.
/// Evaluated fully before any pixel I/O happens, so a conflict never
/// leaves a partial output file behind.
pub fn resolve_channels(catalog: &[CatalogEntry]) -> Result<ResolvedChannels> {
    let mut slots: [Option<&str>; 4] = [None; 4];
    let mut convert_normals = false;

    for entry in catalog {
        if entry.semantic == "NX" {
            convert_normals = true;
        }

        let Some(target) = lookup(&entry.semantic) else {
            warn!(channel = %entry.raw, "Unknown channel, skipping");
            continue;
        };

        match target {
            MapTarget::Luma => {
                for output in [OutputChannel::R, OutputChannel::G, OutputChannel::B] {
                    bind(&mut slots, output, &entry.raw)?;
                }
            }
            MapTarget::Output(output) => bind(&mut slots, output, &entry.raw)?,
        }
    }

    let bindings = OutputChannel::ALL
        .iter()
        .filter_map(|&output| {
            slots[output.index()].map(|source| ChannelBinding {
                output,
                source: source.to_string(),
            })
        })
        .collect();

    Ok(ResolvedChannels {
        bindings,
        convert_normals,
    })
}

/// Claims an output slot for `raw`. Re-binding the same source is a no-op;
/// a distinct prior claim is a conflict.
fn bind<'a>(
    slots: &mut [Option<&'a str>; 4],
    output: OutputChannel,
    raw: &'a str,
) -> Result<()> {
    match slots[output.index()] {
        None => {
            slots[output.index()] = Some(raw);
            Ok(())
        }
        Some(existing) if existing == raw => Ok(()),
        Some(existing) => Err(ConversionError::ChannelConflict {
            output,
            first: existing.to_string(),
            second: raw.to_string(),
        }),
    }
}
