//! Simple format: one byte of class and one byte of error type.
//!
//! ```text
//! [CCCCCCCC][EEEEEEEE]  ->  E1XXXX
//! ```

use crate::codec::{FieldSpec, Layout};
use crate::error::CodecResult;
use crate::taxonomy::{TaxonNode, Taxonomy};

use super::{FormatDescriptor, checked_fields};

pub static DESCRIPTOR: FormatDescriptor = FormatDescriptor {
    name: "simple",
    tag: 1,
    title: "Simple Format",
    summary: "\
Each error code is composed of two bytes encoded as follows:
- Class (8 bits): Identifies the error class (allows up to 256 distinct classes)
- ErrorType (8 bits): Identifies the specific error (allows up to 256 errors per class)

The format provides:
- Up to 256 different classes
- Up to 256 different error types per class
- Total of 65,536 possible unique error codes

The code is encoded as E<type><data> where:
- E: Fixed prefix
- type: 1 character in base-36 identifying the format (1)
- data: 4 characters in base-36 encoding the class and error type bits

Bit layout before encoding:
```
[CCCCCCCC][EEEEEEEE]
C: Class bits
E: ErrorType bits
```",
    headers: &["Code", "Class.Type", "Description"],
    layout: Layout {
        fields: &[
            FieldSpec {
                name: "Class",
                bits: 8,
                description: "Identifies the error class (0-255)",
                values: "api(1), jobs(2)",
            },
            FieldSpec {
                name: "ErrorType",
                bits: 8,
                description: "Identifies the specific error (0-255)",
                values: "unknown(0), validation(1), etc",
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
            "Unknown",
            &[TaxonNode::leaf(0, "unknown", "Unknown API error")],
        ),
        TaxonNode::branch(
            1,
            "api",
            "API related errors",
            &[
                TaxonNode::leaf(0, "unknown", "Unknown API error"),
                TaxonNode::leaf(1, "validation_error", "API validation error"),
                TaxonNode::leaf(2, "authorization_error", "API authorization error"),
            ],
        ),
        TaxonNode::branch(
            2,
            "jobs",
            "Background job errors",
            &[
                TaxonNode::leaf(0, "unknown", "Unknown job error"),
                TaxonNode::leaf(1, "database_query", "Database query error in job"),
                TaxonNode::leaf(2, "timeout", "Job execution timeout"),
            ],
        ),
        TaxonNode::branch(
            255,
            "max",
            "Example max value",
            &[TaxonNode::leaf(255, "max", "Max error type number")],
        ),
    ],
};

/// A simple-format classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SimpleCode {
    pub class: u8,
    pub error_type: u8,
}

impl SimpleCode {
    pub const fn new(class: u8, error_type: u8) -> Self {
        Self { class, error_type }
    }

    pub fn from_fields(values: &[u32]) -> CodecResult<Self> {
        let [class, error_type] = checked_fields(&DESCRIPTOR.layout, values)?;
        Ok(Self::new(class as u8, error_type as u8))
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
