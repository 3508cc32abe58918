//! Format registry: the ordered list of every code format.
//!
//! Consumers iterate [`FORMATS`] instead of naming concrete formats. Adding
//! a format means one more [`Format`] variant and one more entry here; the
//! lookups below carry no per-format logic.

use crate::codec;
use crate::error::{CodecError, CodecResult};
use crate::format::{Code, Format};

/// All registered formats, in documentation order.
pub const FORMATS: [Format; 4] = [
    Format::Tiny,
    Format::Simple,
    Format::Simple511,
    Format::AppComponent,
];

/// All registered formats.
pub fn all() -> &'static [Format] {
    &FORMATS
}

/// Look up a format by its type tag.
pub fn by_tag(tag: u32) -> Option<Format> {
    FORMATS.iter().copied().find(|f| f.tag() == tag)
}

/// Look up a format by name (case-insensitive; `_` and `-` are interchangeable).
pub fn by_name(name: &str) -> CodecResult<Format> {
    let normalized = name.trim().to_lowercase().replace('_', "-");
    FORMATS
        .iter()
        .copied()
        .find(|f| f.name() == normalized)
        .ok_or_else(|| CodecError::UnknownFormat {
            name: name.to_string(),
        })
}

/// Decode a code of any format by inspecting its type tag first.
pub fn decode(code: &str) -> CodecResult<Code> {
    let tag = codec::peek_tag(code)?;
    let format = by_tag(tag).ok_or_else(|| CodecError::UnknownCodeType {
        code: code.to_string(),
        tag,
    })?;
    format.decode(code)
}

/// Dotted name of any code, or `"invalid"` when it decodes but has no
/// taxonomy entry.
pub fn render_name(code: &str) -> CodecResult<String> {
    Ok(decode(code)?.render_name())
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn tags_are_unique() {
        let tags: HashSet<u32> = FORMATS.iter().map(|f| f.tag()).collect();
        assert_eq!(tags.len(), FORMATS.len());
    }

    #[test]
    fn canonical_tags() {
        assert_eq!(Format::Tiny.tag(), 0);
        assert_eq!(Format::Simple.tag(), 1);
        assert_eq!(Format::Simple511.tag(), 3);
        assert_eq!(Format::AppComponent.tag(), 10);
    }

    #[test]
    fn tags_fit_one_digit() {
        for format in all() {
            assert!(format.tag() < 36, "{format}");
        }
    }

    #[test]
    fn lookup_by_tag() {
        assert_eq!(by_tag(10), Some(Format::AppComponent));
        assert_eq!(by_tag(2), None);
    }

    #[test]
    fn lookup_by_name() {
        assert_eq!(by_name("simple-5-11").unwrap(), Format::Simple511);
        assert_eq!(by_name("App_Component").unwrap(), Format::AppComponent);
        assert!(matches!(
            by_name("huge"),
            Err(CodecError::UnknownFormat { .. })
        ));
    }

    #[test]
    fn decode_dispatches_on_tag() {
        assert_eq!(decode("E000").unwrap().format(), Format::Tiny);
        assert_eq!(decode("E10075").unwrap().format(), Format::Simple);
        assert_eq!(decode("E31EKF").unwrap().format(), Format::Simple511);
        assert_eq!(decode("EA0MTXD").unwrap().format(), Format::AppComponent);
    }

    #[test]
    fn decode_unknown_tag() {
        assert_eq!(
            decode("E20000"),
            Err(CodecError::UnknownCodeType {
                code: "E20000".into(),
                tag: 2
            })
        );
    }

    #[test]
    fn render_any_code() {
        assert_eq!(
            render_name("EA0MTXD").unwrap(),
            "backend.handler.users.validation_error"
        );
        assert_eq!(render_name("E0ZY").unwrap(), "invalid");
        assert!(render_name("E0Z").is_err());
    }
}
