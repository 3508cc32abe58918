//! Simple 5-11 format: a 5-bit class and an 11-bit error type.
//!
//! Trades class count for error types: 32 classes of 2048 errors each, in
//! the same six characters as [`simple`](super::simple).

use crate::codec::{FieldSpec, Layout};
use crate::error::CodecResult;
use crate::taxonomy::{TaxonNode, Taxonomy};

use super::{FormatDescriptor, checked_fields};

pub static DESCRIPTOR: FormatDescriptor = FormatDescriptor {
    name: "simple-5-11",
    tag: 3,
    title: "Simple 5-11 Format",
    summary: "\
Each error code is composed of 16 bits encoded as follows:
- Class (5 bits): Identifies the error class (allows up to 32 distinct classes)
- ErrorType (11 bits): Identifies the specific error (allows up to 2048 errors per class)

The format provides:
- Up to 32 different classes
- Up to 2048 different error types per class
- Total of 65,536 possible unique error codes

The code is encoded as E<type><data> where:
- E: Fixed prefix
- type: 1 character in base-36 identifying the format (3)
- data: 4 characters in base-36 encoding the class and error type bits

Bit layout before encoding:
```
[CCCCCEEE][EEEEEEEE]
C: Class bits (5)
E: ErrorType bits (11)
```",
    headers: &["Code", "Class.Type", "Description"],
    layout: Layout {
        fields: &[
            FieldSpec {
                name: "Class",
                bits: 5,
                description: "Identifies the error class (0-31)",
                values: "http(1), max(31)",
            },
            FieldSpec {
                name: "ErrorType",
                bits: 11,
                description: "Identifies the specific error (0-2047)",
                values: "unknown(0), bad_request(1), unauthorized(2), etc",
            },
        ],
        payload_width: 4,
    },
    taxonomy: &TREE,
};

pub static TREE: Taxonomy = Taxonomy {
    levels: &["Class", "ErrorType"],
    roots: &[
        TaxonNode::branch(
            0,
            "unknown",
            "Unknown error class",
            &[TaxonNode::leaf(0, "unknown", "Unknown error")],
        ),
        TaxonNode::branch(
            1,
            "http",
            "HTTP-related errors",
            &[
                TaxonNode::leaf(0, "unknown", "Unknown HTTP error"),
                TaxonNode::leaf(1, "bad_request", "Bad request error (400)"),
                TaxonNode::leaf(2, "unauthorized", "Unauthorized error (401)"),
                TaxonNode::leaf(3, "forbidden", "Forbidden error (403)"),
                TaxonNode::leaf(4, "not_found", "Not found error (404)"),
            ],
        ),
        TaxonNode::branch(
            31,
            "max",
            "Maximum class value example",
            &[TaxonNode::leaf(2047, "max", "Maximum error type value")],
        ),
    ],
};

/// A simple 5-11 classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Simple511Code {
    /// 5 bits.
    pub class: u8,
    /// 11 bits.
    pub error_type: u16,
}

impl Simple511Code {
    pub const fn new(class: u8, error_type: u16) -> Self {
        Self { class, error_type }
    }

    pub fn from_fields(values: &[u32]) -> CodecResult<Self> {
        let [class, error_type] = checked_fields(&DESCRIPTOR.layout, values)?;
        Ok(Self::new(class as u8, error_type as u16))
    }

    pub fn fields(&self) -> [u32; 2] {
        [u32::from(self.class), u32::from(self.error_type)]
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CodecError;

    #[test]
    fn max_values_fill_sixteen_bits() {
        let code = Simple511Code::new(31, 2047);
        assert_eq!(code.encode().unwrap(), "E31EKF");
        assert_eq!(code.render_name(), "max.max");
        assert_eq!(Simple511Code::new(1, 4).encode().unwrap(), "E301L0");
    }

    #[test]
    fn overflow_is_reported_per_field() {
        assert!(matches!(
            Simple511Code::new(32, 0).encode(),
            Err(CodecError::FieldOverflow { field: "Class", bits: 5, .. })
        ));
        assert!(matches!(
            Simple511Code::new(0, 2048).encode(),
            Err(CodecError::FieldOverflow { field: "ErrorType", bits: 11, .. })
        ));
    }

    #[test]
    fn exhaustive_roundtrip() {
        for class in 0..32u8 {
            for error_type in 0..2048u16 {
                let code = Simple511Code::new(class, error_type);
                let encoded = code.encode().unwrap();
                assert_eq!(Simple511Code::decode(&encoded).unwrap(), code, "{encoded}");
            }
        }
    }

    #[test]
    fn payload_above_sixteen_bits_is_masked() {
        // "1EKG" is 65536: only bit 16 is set, which no field owns.
        assert_eq!(
            Simple511Code::decode("E31EKG").unwrap(),
            Simple511Code::new(0, 0)
        );
    }

    #[test]
    fn http_names() {
        assert_eq!(Simple511Code::new(1, 3).render_name(), "http.forbidden");
        assert_eq!(Simple511Code::new(1, 5).render_name(), "invalid");
    }
}
