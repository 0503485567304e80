//! Channel catalog: raw header names to semantic identities.

/// A raw channel name from the source header paired with its semantic
/// identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    /// The name exactly as the header reports it, e.g. `"ABC:def.NX"`.
    pub raw: String,
    /// The suffix after the last `.`, or the whole name if there is none.
    pub semantic: String,
}

/// Extracts the semantic identity from a raw channel name.
///
/// Layered names like `"ABC:def.NX"` carry the identity after the last
/// delimiter; unlayered names are their own identity. Total over all
/// strings.
pub fn semantic_id(raw: &str) -> &str {
    match raw.rfind('.') {
        Some(idx) => &raw[idx + 1..],
        None => raw,
    }
}

/// Builds the catalog for a header's channel list, preserving source order.
pub fn build_catalog<I, S>(names: I) -> Vec<CatalogEntry>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    names
        .into_iter()
        .map(|name| {
            let raw = name.as_ref();
            CatalogEntry {
                raw: raw.to_string(),
                semantic: semantic_id(raw).to_string(),
            }
        })
        .collect()
}
