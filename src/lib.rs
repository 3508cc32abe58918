// thiserror's #[error("...{field}...")] format strings reference struct fields,
// but the compiler doesn't see through the derive macro and reports false positives.
#![allow(unused_assignments)]

//! # taxocode
//!
//! Compact, human-typable error codes. Each code format packs a small
//! hierarchical classification into a fixed number of bits and renders it as
//! a short base-36 string such as `EA0MTXD`, which decodes back to the exact
//! field tuple and resolves to a dotted name through a static taxonomy.
//!
//! ## Architecture
//!
//! - **Transcoder** (`base36`): fixed-width radix-36 over `0-9A-Z`
//! - **Framing** (`codec`): `E` prefix, one-digit type tag, MSB-first bit packing
//! - **Taxonomies** (`taxonomy`): immutable `static` trees, resolve and enumerate
//! - **Formats** (`format`): tiny, simple, simple 5-11, app-component
//! - **Enumerator** (`permutation`): every taxonomy entry, round-trip verified
//! - **Registry** (`registry`): ordered formats, decode by type tag
//! - **Docs** (`docs`): per-format tables rendered as Markdown
//!
//! ## Library usage
//!
//! ```
//! use taxocode::format::{AppComponentCode, Code};
//!
//! let code = AppComponentCode::new(1, 1, 1, 1);
//! let encoded = code.encode().unwrap();
//! assert_eq!(encoded, "EA0MTXD");
//!
//! let decoded: Code = encoded.parse().unwrap();
//! assert_eq!(decoded.render_name(), "backend.handler.users.validation_error");
//! ```

pub mod base36;
pub mod codec;
pub mod config;
pub mod docs;
pub mod error;
pub mod format;
pub mod permutation;
pub mod registry;
pub mod taxonomy;

pub use error::{CodecError, CodecResult, TaxoError, TaxoResult};
pub use format::{Code, Format};
