//! Permutation enumeration with an encode/decode self-check.
//!
//! Walks a format's taxonomy to every leaf, encodes the classification,
//! decodes the result and requires the field tuple to come back unchanged.
//! A mismatch means packing and unpacking have drifted apart, which is a
//! bug in this crate, so it panics instead of returning an error.

use serde::Serialize;

use crate::format::{Code, Format};

/// One enumerated, verified classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Permutation {
    pub format: Format,
    /// Encoded code string.
    pub code: String,
    /// Field values in layout order.
    pub fields: Vec<u32>,
    /// Name at each level, root first.
    pub names: Vec<&'static str>,
    /// Dotted name path.
    pub path: String,
    /// Description of the leaf entry.
    pub description: &'static str,
}

impl Permutation {
    /// Display row: code, dotted path, description.
    pub fn row(&self) -> Vec<String> {
        vec![
            self.code.clone(),
            self.path.clone(),
            self.description.to_string(),
        ]
    }
}

/// Enumerate every classification defined by `format`'s taxonomy.
///
/// The result is stable-sorted by encoded code.
///
/// # Panics
///
/// If the taxonomy is malformed, if one of its entries does not fit the
/// format's layout, or if any code fails to decode back to its fields.
pub fn enumerate(format: Format) -> Vec<Permutation> {
    let taxonomy = format.taxonomy();
    let defects = taxonomy.defects();
    assert!(defects.is_empty(), "{format} taxonomy is malformed: {defects:?}");

    let mut perms: Vec<Permutation> = taxonomy
        .leaves()
        .into_iter()
        .map(|path| {
            let fields = path.values();
            let code = Code::from_fields(format, &fields)
                .and_then(|c| c.encode())
                .unwrap_or_else(|e| {
                    panic!("{format} taxonomy entry {} is unencodable: {e}", path.name())
                });

            let decoded = match format.decode(&code) {
                Ok(decoded) => decoded.fields(),
                Err(e) => panic!("{format} code {code} failed to decode: {e}"),
            };
            assert_eq!(
                decoded, fields,
                "{format} code {code} decoded to different fields"
            );

            Permutation {
                format,
                code,
                fields,
                names: path.names(),
                path: path.name(),
                description: path.description(),
            }
        })
        .collect();

    perms.sort_by(|a, b| a.code.cmp(&b.code));
    tracing::debug!(%format, count = perms.len(), "enumerated permutations");
    perms
}
