//! Tiny format: a bare error type, `E0XX`.
//!
//! The error type is declared as an 11-bit field but the payload is only two
//! base-36 digits, so values are capped at 1295 (`ZZ`). Larger values pass
//! the field check and are rejected by the transcoder with `OutOfRange`.

use crate::codec::{FieldSpec, Layout};
use crate::error::CodecResult;
use crate::taxonomy::{TaxonNode, Taxonomy};

use super::{FormatDescriptor, checked_fields};

/// Largest error type a tiny code can carry.
pub const MAX_ERROR_TYPE: u16 = 1295;

pub static DESCRIPTOR: FormatDescriptor = FormatDescriptor {
    name: "tiny",
    tag: 0,
    title: "Tiny Format",
    summary: "\
Simplest possible error code format using just an error type value.

The format provides:
- Values from 0 to 1295 (00 to ZZ in base-36)
- Total of 1,296 possible unique error codes

The code is encoded as E0XX where:
- E: Fixed prefix
- 0: Fixed type identifier
- XX: Two base-36 characters encoding the error type (00-ZZ)

Examples:
- E000: Unknown error
- E001: Validation error
- E0ZZ: Maximum value (1295)",
    headers: &["Code", "Type", "Description"],
    layout: Layout {
        fields: &[FieldSpec {
            name: "ErrorType",
            bits: 11,
            description: "Error type value (0-1295)",
            values: "unknown(0), validation(1), not_found(2), etc",
        }],
        payload_width: 2,
    },
    taxonomy: &TREE,
};

pub static TREE: Taxonomy = Taxonomy {
    levels: &["ErrorType"],
    roots: &[
        TaxonNode::leaf(0, "unknown", "Unknown error"),
        TaxonNode::leaf(1, "validation", "Validation error"),
        TaxonNode::leaf(2, "not_found", "Resource not found"),
        TaxonNode::leaf(3, "unauthorized", "Unauthorized access"),
        TaxonNode::leaf(4, "bad_request", "Bad request"),
        TaxonNode::leaf(1295, "max", "Maximum error value (ZZ)"),
    ],
};

/// A tiny-format classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TinyCode {
    pub error_type: u16,
}

impl TinyCode {
    pub const fn new(error_type: u16) -> Self {
        Self { error_type }
    }

    pub fn from_fields(values: &[u32]) -> CodecResult<Self> {
        let [error_type] = checked_fields(&DESCRIPTOR.layout, values)?;
        Ok(Self::new(error_type as u16))
    }

    pub fn fields(&self) -> [u32; 1] {
        [u32::from(self.error_type)]
    }

    pub fn encode(&self) -> CodecResult<String> {
        DESCRIPTOR.encode_fields(&self.fields())
    }

    pub fn decode(code: &str) -> CodecResult<Self> {
        Self::from_fields(&DESCRIPTOR.decode_fields(code)?)
    }

    pub fn render_name(&self) -> String {
        DESCRIPTOR.render_name(&self.fields())
    }
}
