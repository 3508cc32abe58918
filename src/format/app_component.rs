//! App-component format: four-level classification in 24 bits.
//!
//! ```text
//! [AAAA][CCCCCC][SSSSSS][EEEEEEEE]  ->  EAXXXXX
//! ```
//!
//! App, component, sub-component and error type each resolve through a
//! nested taxonomy, giving dotted names such as
//! `backend.handler.users.validation_error`.

use crate::codec::{FieldSpec, Layout};
use crate::error::CodecResult;
use crate::taxonomy::{TaxonNode, Taxonomy};

use super::{FormatDescriptor, checked_fields};

pub static DESCRIPTOR: FormatDescriptor = FormatDescriptor {
    name: "app-component",
    tag: 10,
    title: "App Component Format",
    summary: "\
Each error code packs four fields into 24 bits:
- App (4 bits): Identifies the application (allows up to 16 apps)
- Component (6 bits): Identifies the major component (allows up to 64 components per app)
- SubComponent (6 bits): Identifies the specific sub-component (allows up to 64 sub-components per component)
- ErrorType (8 bits): Identifies the specific error (allows up to 256 error types per sub-component)

The format provides:
- Up to 16 different applications
- Up to 64 different components per application
- Up to 64 different sub-components per component
- Up to 256 different error types per sub-component
- Total of 16,777,216 possible unique error codes (16 * 64 * 64 * 256)

The code is encoded as EA<data> where:
- E: Fixed prefix
- A: 1 character in base-36 identifying the format (10)
- data: 5 characters in base-36 encoding the 24 field bits

Bit layout before encoding:
```
[AAAACCCC][CCSSSSSS][EEEEEEEE]
A: App bits
C: Component bits
S: SubComponent bits
E: ErrorType bits
```",
    headers: &["Code", "App.Component.SubComponent.Type", "Description"],
    layout: Layout {
        fields: &[
            FieldSpec {
                name: "App",
                bits: 4,
                description: "Identifies the application (0-15)",
                values: "backend(1), frontend(2)",
            },
            FieldSpec {
                name: "Component",
                bits: 6,
                description: "Identifies the major component (0-63)",
                values: "handler(1), job(2), ui(1), state(2), api(3)",
            },
            FieldSpec {
                name: "SubComponent",
                bits: 6,
                description: "Identifies the specific sub-component (0-63)",
                values: "unknown(0), users(1), records(2), analytics(3), forms(1), routing(2), \
                         store(1), persistence(2), request(1), cache(2)",
            },
            FieldSpec {
                name: "ErrorType",
                bits: 8,
                description: "Identifies the specific error (0-255)",
                values: "unknown(0), validation_error(1), authorization_error(2), database_error(1), \
                         external_api_error(2), timeout(3), etc",
            },
        ],
        payload_width: 5,
    },
    taxonomy: &TREE,
};

pub static TREE: Taxonomy = Taxonomy {
    levels: &["App", "Component", "SubComponent", "ErrorType"],
    roots: &[
        TaxonNode::branch(
            1,
            "backend",
            "Backend application services",
            &[
                TaxonNode::branch(
                    1,
                    "handler",
                    "Request handler services",
                    &[
                        TaxonNode::branch(
                            0,
                            "unknown",
                            "Unknown handler component",
                            &[TaxonNode::leaf(0, "unknown", "Unknown handler error")],
                        ),
                        TaxonNode::branch(
                            1,
                            "users",
                            "User management handler",
                            &[
                                TaxonNode::leaf(
                                    1,
                                    "validation_error",
                                    "Input validation failed for user operation",
                                ),
                                TaxonNode::leaf(
                                    2,
                                    "authorization_error",
                                    "User lacks required permissions for operation",
                                ),
                            ],
                        ),
                        TaxonNode::branch(
                            2,
                            "records",
                            "Record management handler",
                            &[
                                TaxonNode::leaf(
                                    1,
                                    "validation_error",
                                    "Input validation failed for record operation",
                                ),
                                TaxonNode::leaf(
                                    2,
                                    "authorization_error",
                                    "User lacks required permissions for record operation",
                                ),
                            ],
                        ),
                        TaxonNode::branch(
                            3,
                            "analytics",
                            "Analytics data handler",
                            &[
                                TaxonNode::leaf(
                                    1,
                                    "validation_error",
                                    "Input validation failed for analytics operation",
                                ),
                                TaxonNode::leaf(
                                    2,
                                    "authorization_error",
                                    "User lacks required permissions for analytics operation",
                                ),
                            ],
                        ),
                    ],
                ),
                TaxonNode::branch(
                    2,
                    "job",
                    "Background job processor",
                    &[
                        TaxonNode::branch(
                            0,
                            "unknown",
                            "Unknown job component",
                            &[TaxonNode::leaf(0, "unknown", "Unknown job error")],
                        ),
                        TaxonNode::branch(
                            1,
                            "sync",
                            "Data synchronization job",
                            &[
                                TaxonNode::leaf(
                                    1,
                                    "database_error",
                                    "Database operation failed during sync",
                                ),
                                TaxonNode::leaf(
                                    2,
                                    "external_api_error",
                                    "External API call failed during sync",
                                ),
                                TaxonNode::leaf(3, "timeout", "Operation timed out during sync"),
                            ],
                        ),
                        TaxonNode::branch(
                            2,
                            "analytics",
                            "Analytics processing job",
                            &[
                                TaxonNode::leaf(
                                    1,
                                    "database_error",
                                    "Database operation failed during analytics processing",
                                ),
                                TaxonNode::leaf(
                                    2,
                                    "external_api_error",
                                    "External API call failed during analytics processing",
                                ),
                                TaxonNode::leaf(
                                    3,
                                    "timeout",
                                    "Operation timed out during analytics processing",
                                ),
                            ],
                        ),
                    ],
                ),
            ],
        ),
        TaxonNode::branch(
            2,
            "frontend",
            "Frontend application",
            &[
                TaxonNode::branch(
                    1,
                    "ui",
                    "User interface components",
                    &[
                        TaxonNode::branch(
                            0,
                            "unknown",
                            "Unknown UI component",
                            &[TaxonNode::leaf(0, "unknown", "Unknown UI error")],
                        ),
                        TaxonNode::branch(
                            1,
                            "forms",
                            "Form handling and validation",
                            &[
                                TaxonNode::leaf(1, "validation_error", "Form validation failed"),
                                TaxonNode::leaf(2, "submission_error", "Form submission failed"),
                            ],
                        ),
                        TaxonNode::branch(
                            2,
                            "routing",
                            "Client-side routing",
                            &[
                                TaxonNode::leaf(1, "not_found", "Route not found"),
                                TaxonNode::leaf(2, "unauthorized", "Route access unauthorized"),
                            ],
                        ),
                    ],
                ),
                TaxonNode::branch(
                    2,
                    "state",
                    "State management",
                    &[
                        TaxonNode::branch(
                            0,
                            "unknown",
                            "Unknown state management error",
                            &[TaxonNode::leaf(0, "unknown", "Unknown state error")],
                        ),
                        TaxonNode::branch(
                            1,
                            "store",
                            "State store operations",
                            &[
                                TaxonNode::leaf(1, "update_failed", "State update operation failed"),
                                TaxonNode::leaf(2, "invalid_action", "Invalid state action dispatched"),
                            ],
                        ),
                        TaxonNode::branch(
                            2,
                            "persistence",
                            "State persistence",
                            &[
                                TaxonNode::leaf(1, "storage_error", "Local storage operation failed"),
                                TaxonNode::leaf(2, "sync_error", "State synchronization failed"),
                            ],
                        ),
                    ],
                ),
                TaxonNode::branch(
                    3,
                    "api",
                    "API client",
                    &[
                        TaxonNode::branch(
                            0,
                            "unknown",
                            "Unknown API client error",
                            &[TaxonNode::leaf(0, "unknown", "Unknown API error")],
                        ),
                        TaxonNode::branch(
                            1,
                            "request",
                            "API request handling",
                            &[
                                TaxonNode::leaf(1, "network_error", "Network request failed"),
                                TaxonNode::leaf(2, "timeout", "Request timed out"),
                                TaxonNode::leaf(3, "invalid_response", "Invalid response received"),
                            ],
                        ),
                        TaxonNode::branch(
                            2,
                            "cache",
                            "API response caching",
                            &[
                                TaxonNode::leaf(1, "cache_miss", "Cache miss error"),
                                TaxonNode::leaf(2, "cache_invalid", "Cache invalidation error"),
                            ],
                        ),
                    ],
                ),
            ],
        ),
    ],
};

/// An app-component classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AppComponentCode {
    /// 4 bits.
    pub app: u8,
    /// 6 bits.
    pub component: u8,
    /// 6 bits.
    pub sub_component: u8,
    /// 8 bits.
    pub error_type: u8,
}

impl AppComponentCode {
    pub const fn new(app: u8, component: u8, sub_component: u8, error_type: u8) -> Self {
        Self {
            app,
            component,
            sub_component,
            error_type,
        }
    }

    pub fn from_fields(values: &[u32]) -> CodecResult<Self> {
        let [app, component, sub_component, error_type] =
            checked_fields(&DESCRIPTOR.layout, values)?;
        // Widths were checked above; every field fits in a byte.
        Ok(Self::new(
            app as u8,
            component as u8,
            sub_component as u8,
            error_type as u8,
        ))
    }

    pub fn fields(&self) -> [u32; 4] {
        [
            u32::from(self.app),
            u32::from(self.component),
            u32::from(self.sub_component),
            u32::from(self.error_type),
        ]
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
    fn backend_handler_users_validation() {
        let code = AppComponentCode::new(1, 1, 1, 1);
        let encoded = code.encode().unwrap();
        assert_eq!(encoded, "EA0MTXD");
        assert_eq!(AppComponentCode::decode(&encoded).unwrap(), code);
        assert_eq!(code.render_name(), "backend.handler.users.validation_error");
    }

    #[test]
    fn all_ones_is_the_largest_payload() {
        let code = AppComponentCode::new(15, 63, 63, 255);
        assert_eq!(code.encode().unwrap(), "EA9ZLDR");
        assert_eq!(AppComponentCode::decode("EA9ZLDR").unwrap(), code);
    }

    #[test]
    fn simple_code_is_the_wrong_variant() {
        assert_eq!(
            AppComponentCode::decode("E1ZZZZ"),
            Err(CodecError::WrongVariant {
                code: "E1ZZZZ".into(),
                format: "app-component",
                expected: 10,
                found: 1,
            })
        );
    }

    #[test]
    fn each_field_is_width_checked() {
        let cases = [
            (AppComponentCode::new(16, 0, 0, 0), "App"),
            (AppComponentCode::new(0, 64, 0, 0), "Component"),
            (AppComponentCode::new(0, 0, 64, 0), "SubComponent"),
        ];
        for (code, field) in cases {
            assert!(
                matches!(code.encode(), Err(CodecError::FieldOverflow { field: f, .. }) if f == field),
                "{field}"
            );
        }
    }

    #[test]
    fn fields_do_not_bleed_into_neighbours() {
        for (i, expected) in [
            AppComponentCode::new(15, 0, 0, 0),
            AppComponentCode::new(0, 63, 0, 0),
            AppComponentCode::new(0, 0, 63, 0),
            AppComponentCode::new(0, 0, 0, 255),
        ]
        .into_iter()
        .enumerate()
        {
            let decoded = AppComponentCode::decode(&expected.encode().unwrap()).unwrap();
            assert_eq!(decoded, expected, "field {i}");
        }
    }

    #[test]
    fn partial_paths_render_invalid() {
        // backend.handler.users exists but has no error type 0.
        assert_eq!(AppComponentCode::new(1, 1, 1, 0).render_name(), "invalid");
        assert_eq!(AppComponentCode::new(3, 1, 1, 1).render_name(), "invalid");
        assert_eq!(
            AppComponentCode::new(2, 3, 2, 2).render_name(),
            "frontend.api.cache.cache_invalid"
        );
    }

    #[test]
    fn oversized_payload_is_masked_to_24_bits() {
        // "ZZZZZ" is 36^5 - 1; only its low 24 bits survive.
        let decoded = AppComponentCode::decode("EAZZZZZ").unwrap();
        let low = (36u64.pow(5) - 1) & 0xFF_FFFF;
        assert_eq!(
            decoded.fields(),
            [
                ((low >> 20) & 0xF) as u32,
                ((low >> 14) & 0x3F) as u32,
                ((low >> 8) & 0x3F) as u32,
                (low & 0xFF) as u32,
            ]
        );
    }
}
