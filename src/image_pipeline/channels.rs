//! Channel identity and resolution module
//!
//! Parses raw EXR channel names into semantic identities and resolves them
//! onto the fixed output channel set {R, G, B, A}.

mod catalog;
mod resolver;
pub mod types;

pub use catalog::{CatalogEntry, build_catalog, semantic_id};
pub use resolver::resolve_channels;
pub use types::{ChannelBinding, MapTarget, OutputChannel, ResolvedChannels};
