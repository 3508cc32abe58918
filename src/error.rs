//! Rich diagnostic error types for taxocode.
//!
//! Caller-input failures (bad field values, malformed code strings, a code
//! handed to the wrong format) are typed and recoverable. Each variant carries
//! a miette error code and help text so the CLI can tell the user what went
//! wrong and how to fix it.

use miette::Diagnostic;
use thiserror::Error;

use crate::config::ConfigError;

/// Top-level error type for taxocode.
///
/// Each variant wraps a subsystem-specific error, preserving the full diagnostic
/// chain through to the user.
#[derive(Debug, Error, Diagnostic)]
pub enum TaxoError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Codec(#[from] CodecError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to serialize JSON output: {0}")]
    #[diagnostic(
        code(taxocode::output::json),
        help("This indicates a bug in the output types. Please file a report.")
    )]
    Json(#[from] serde_json::Error),
}

// ---------------------------------------------------------------------------
// Codec errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum CodecError {
    #[error("value {value} does not fit in {width} base-36 digit(s) (max {max})")]
    #[diagnostic(
        code(taxocode::base36::out_of_range),
        help("Base-36 with width w holds values in 0..36^w. Use a wider field or a smaller value.")
    )]
    OutOfRange { value: u64, width: usize, max: u64 },

    #[error("invalid base-36 character {character:?} at position {position}")]
    #[diagnostic(
        code(taxocode::base36::invalid_character),
        help("Codes use only the digits 0-9 and uppercase letters A-Z. Lowercase is not accepted.")
    )]
    InvalidCharacter { character: char, position: usize },

    #[error("cannot decode an empty base-36 string")]
    #[diagnostic(
        code(taxocode::base36::empty_input),
        help("Provide at least one base-36 digit.")
    )]
    EmptyInput,

    #[error("field {field} = {value} exceeds its {bits}-bit width (max {max})")]
    #[diagnostic(
        code(taxocode::codec::field_overflow),
        help("Each classification field is packed into a fixed number of bits. Values are never truncated.")
    )]
    FieldOverflow {
        field: &'static str,
        value: u64,
        bits: u32,
        max: u64,
    },

    #[error("expected {expected} field value(s), got {found}")]
    #[diagnostic(
        code(taxocode::codec::field_count),
        help("Supply exactly one value per field of the format. Run `taxocode formats` to see each layout.")
    )]
    FieldCount { expected: usize, found: usize },

    #[error("code {code:?} has length {found}, expected {expected}")]
    #[diagnostic(
        code(taxocode::codec::malformed_length),
        help("Every format has a fixed encoded length. Check the code was copied completely.")
    )]
    MalformedLength {
        code: String,
        expected: usize,
        found: usize,
    },

    #[error("code {code:?} does not start with the prefix '{expected}'")]
    #[diagnostic(
        code(taxocode::codec::invalid_prefix),
        help("All error codes begin with the letter 'E'.")
    )]
    InvalidPrefix { code: String, expected: char },

    #[error("code {code:?} carries type tag {found}, but the {format} format uses tag {expected}")]
    #[diagnostic(
        code(taxocode::codec::wrong_variant),
        help("Decode through `registry::decode`, which dispatches on the type tag, or pick the matching format.")
    )]
    WrongVariant {
        code: String,
        format: &'static str,
        expected: u32,
        found: u32,
    },

    #[error("code {code:?} carries unknown type tag {tag}")]
    #[diagnostic(
        code(taxocode::registry::unknown_code_type),
        help("No registered format uses this tag. Run `taxocode formats` to list the known tags.")
    )]
    UnknownCodeType { code: String, tag: u32 },

    #[error("unknown format name {name:?}")]
    #[diagnostic(
        code(taxocode::registry::unknown_format),
        help("Known formats: tiny, simple, simple-5-11, app-component.")
    )]
    UnknownFormat { name: String },
}

/// Result type for codec operations.
pub type CodecResult<T> = std::result::Result<T, CodecError>;

/// Result type for operations that may fail in any subsystem.
pub type TaxoResult<T> = std::result::Result<T, TaxoError>;
