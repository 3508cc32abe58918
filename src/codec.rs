//! Wire framing shared by every code format.
//!
//! An encoded code is `<prefix><tag><payload>`: the fixed prefix character,
//! one base-36 digit naming the format, then the packed classification
//! fields as a fixed-width base-36 number. Fields are concatenated
//! most-significant first, so the first field occupies the highest bits.

use serde::Serialize;

use crate::base36;
use crate::error::{CodecError, CodecResult};

/// Leading character of every code.
pub const PREFIX: char = 'E';

/// Number of base-36 digits carrying the format tag.
pub const TAG_WIDTH: usize = 1;

const HEADER_LEN: usize = 1 + TAG_WIDTH;

/// One bit field of a classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldSpec {
    /// Field name, e.g. `"Component"`.
    pub name: &'static str,
    /// Width in bits.
    pub bits: u32,
    /// What the field identifies.
    pub description: &'static str,
    /// Example values, for documentation.
    pub values: &'static str,
}

impl FieldSpec {
    /// Largest value the field can hold.
    pub const fn max(&self) -> u64 {
        (1u64 << self.bits) - 1
    }
}

/// The bit layout and payload width of one format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Layout {
    pub fields: &'static [FieldSpec],
    /// Payload width in base-36 digits.
    pub payload_width: usize,
}

impl Layout {
    /// Sum of all field widths.
    pub const fn total_bits(&self) -> u32 {
        let mut total = 0;
        let mut i = 0;
        while i < self.fields.len() {
            total += self.fields[i].bits;
            i += 1;
        }
        total
    }

    /// Full length of an encoded code in characters.
    pub const fn encoded_len(&self) -> usize {
        HEADER_LEN + self.payload_width
    }

    /// Check a field tuple against the layout without packing it.
    pub fn check(&self, values: &[u32]) -> CodecResult<()> {
        if values.len() != self.fields.len() {
            return Err(CodecError::FieldCount {
                expected: self.fields.len(),
                found: values.len(),
            });
        }
        for (field, &value) in self.fields.iter().zip(values) {
            if u64::from(value) > field.max() {
                return Err(CodecError::FieldOverflow {
                    field: field.name,
                    value: u64::from(value),
                    bits: field.bits,
                    max: field.max(),
                });
            }
        }
        Ok(())
    }

    /// Pack fields MSB-first into a single integer. Never masks.
    pub fn pack(&self, values: &[u32]) -> CodecResult<u64> {
        self.check(values)?;
        let mut remaining = self.total_bits();
        let mut packed = 0u64;
        for (field, &value) in self.fields.iter().zip(values) {
            remaining -= field.bits;
            packed |= u64::from(value) << remaining;
        }
        Ok(packed)
    }

    /// Inverse of [`pack`](Self::pack). Bits above `total_bits` are ignored.
    pub fn unpack(&self, packed: u64) -> Vec<u32> {
        let mut remaining = self.total_bits();
        self.fields
            .iter()
            .map(|field| {
                remaining -= field.bits;
                // Field widths are at most 32 bits, so the masked value fits.
                ((packed >> remaining) & field.max()) as u32
            })
            .collect()
    }
}

/// Encode a field tuple as `<prefix><tag><payload>`.
pub fn encode(tag: u32, layout: &Layout, values: &[u32]) -> CodecResult<String> {
    let packed = layout.pack(values)?;
    let mut code = String::with_capacity(layout.encoded_len());
    code.push(PREFIX);
    code.push_str(&base36::encode(u64::from(tag), TAG_WIDTH)?);
    code.push_str(&base36::encode(packed, layout.payload_width)?);
    Ok(code)
}

/// Read the format tag of a code without decoding its payload.
pub fn peek_tag(code: &str) -> CodecResult<u32> {
    if code.is_empty() {
        return Err(CodecError::EmptyInput);
    }
    if let Some((position, character)) = code.chars().enumerate().find(|(_, c)| !c.is_ascii()) {
        return Err(CodecError::InvalidCharacter {
            character,
            position,
        });
    }
    if code.len() < HEADER_LEN {
        return Err(CodecError::MalformedLength {
            code: code.to_string(),
            expected: HEADER_LEN,
            found: code.len(),
        });
    }
    if !code.starts_with(PREFIX) {
        return Err(CodecError::InvalidPrefix {
            code: code.to_string(),
            expected: PREFIX,
        });
    }
    // Tag width is one digit, so the decoded value is below 36.
    Ok(base36::decode(&code[1..HEADER_LEN])? as u32)
}

/// Decode a code belonging to the format `name` with tag `tag`.
///
/// Checks, in order: prefix, tag, total length, payload digits.
pub fn decode(name: &'static str, tag: u32, layout: &Layout, code: &str) -> CodecResult<Vec<u32>> {
    let found = peek_tag(code)?;
    if found != tag {
        return Err(CodecError::WrongVariant {
            code: code.to_string(),
            format: name,
            expected: tag,
            found,
        });
    }
    if code.len() != layout.encoded_len() {
        return Err(CodecError::MalformedLength {
            code: code.to_string(),
            expected: layout.encoded_len(),
            found: code.len(),
        });
    }

    let packed = base36::decode(&code[HEADER_LEN..])?;
    if packed >> layout.total_bits() != 0 {
        tracing::debug!(
            code,
            format = name,
            bits = layout.total_bits(),
            "payload exceeds layout width; high bits ignored"
        );
    }
    let fields = layout.unpack(packed);
    tracing::trace!(code, format = name, ?fields, "decoded");
    Ok(fields)
}
