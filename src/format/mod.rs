//! Code formats: one bit layout, type tag and taxonomy per variant.
//!
//! [`Format`] names a variant and dispatches every capability to its
//! [`FormatDescriptor`]. [`Code`] holds a decoded, typed classification of
//! any variant.
//!
//! | Format | Tag | Fields (bits) | Length |
//! |---|---|---|---|
//! | [`tiny`] | `0` | ErrorType(11, capped at 1295) | 4 |
//! | [`simple`] | `1` | Class(8) ErrorType(8) | 6 |
//! | [`simple511`] | `3` | Class(5) ErrorType(11) | 6 |
//! | [`app_component`] | `A` | App(4) Component(6) SubComponent(6) ErrorType(8) | 7 |

pub mod app_component;
pub mod simple;
pub mod simple511;
pub mod tiny;

pub use app_component::AppComponentCode;
pub use simple::SimpleCode;
pub use simple511::Simple511Code;
pub use tiny::TinyCode;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::codec::{self, FieldSpec, Layout, PREFIX};
use crate::docs::DocSection;
use crate::error::{CodecError, CodecResult};
use crate::permutation::{self, Permutation};
use crate::taxonomy::{TaxonPath, Taxonomy};

/// Everything that distinguishes one format from another.
#[derive(Debug)]
pub struct FormatDescriptor {
    /// Machine name, e.g. `"app-component"`.
    pub name: &'static str,
    /// Type tag embedded after the prefix.
    pub tag: u32,
    /// Documentation title.
    pub title: &'static str,
    /// Free-text documentation.
    pub summary: &'static str,
    /// Documentation table column headers.
    pub headers: &'static [&'static str],
    pub layout: Layout,
    pub taxonomy: &'static Taxonomy,
}

impl FormatDescriptor {
    pub fn encode_fields(&self, values: &[u32]) -> CodecResult<String> {
        codec::encode(self.tag, &self.layout, values)
    }

    pub fn decode_fields(&self, code: &str) -> CodecResult<Vec<u32>> {
        codec::decode(self.name, self.tag, &self.layout, code)
    }

    pub fn render_name(&self, values: &[u32]) -> String {
        self.taxonomy.render_name(values)
    }
}

/// A registered code format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Format {
    #[serde(rename = "tiny")]
    Tiny,
    #[serde(rename = "simple")]
    Simple,
    #[serde(rename = "simple-5-11")]
    Simple511,
    #[serde(rename = "app-component")]
    AppComponent,
}

impl Format {
    pub fn descriptor(self) -> &'static FormatDescriptor {
        match self {
            Format::Tiny => &tiny::DESCRIPTOR,
            Format::Simple => &simple::DESCRIPTOR,
            Format::Simple511 => &simple511::DESCRIPTOR,
            Format::AppComponent => &app_component::DESCRIPTOR,
        }
    }

    pub fn name(self) -> &'static str {
        self.descriptor().name
    }

    /// Type tag embedded in every code of this format.
    pub fn tag(self) -> u32 {
        self.descriptor().tag
    }

    /// Leading character of every code.
    pub fn prefix(self) -> char {
        PREFIX
    }

    pub fn layout(self) -> &'static Layout {
        &self.descriptor().layout
    }

    /// Field widths and descriptions, for documentation.
    pub fn field_layout(self) -> &'static [FieldSpec] {
        self.descriptor().layout.fields
    }

    pub fn taxonomy(self) -> &'static Taxonomy {
        self.descriptor().taxonomy
    }

    /// Fixed length of every code of this format.
    pub fn encoded_len(self) -> usize {
        self.descriptor().layout.encoded_len()
    }

    /// Encode a generic field tuple.
    pub fn encode(self, values: &[u32]) -> CodecResult<String> {
        self.descriptor().encode_fields(values)
    }

    /// Decode a code into this format's typed classification.
    pub fn decode(self, code: &str) -> CodecResult<Code> {
        Ok(match self {
            Format::Tiny => Code::Tiny(TinyCode::decode(code)?),
            Format::Simple => Code::Simple(SimpleCode::decode(code)?),
            Format::Simple511 => Code::Simple511(Simple511Code::decode(code)?),
            Format::AppComponent => Code::AppComponent(AppComponentCode::decode(code)?),
        })
    }

    /// Dotted taxonomy name of a field tuple, or `"invalid"`.
    pub fn render_name(self, values: &[u32]) -> String {
        self.descriptor().render_name(values)
    }

    /// Title, description and headers of this format's table, without rows.
    pub fn doc_section(self) -> DocSection {
        let d = self.descriptor();
        DocSection {
            title: d.title.to_string(),
            description: d.summary.to_string(),
            headers: d.headers.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    /// Every classification in this format's taxonomy, verified and sorted.
    pub fn permutations(self) -> Vec<Permutation> {
        permutation::enumerate(self)
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// A decoded classification of any format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Code {
    Tiny(TinyCode),
    Simple(SimpleCode),
    Simple511(Simple511Code),
    AppComponent(AppComponentCode),
}

impl Code {
    /// Build a typed classification from a generic field tuple.
    pub fn from_fields(format: Format, values: &[u32]) -> CodecResult<Self> {
        Ok(match format {
            Format::Tiny => Code::Tiny(TinyCode::from_fields(values)?),
            Format::Simple => Code::Simple(SimpleCode::from_fields(values)?),
            Format::Simple511 => Code::Simple511(Simple511Code::from_fields(values)?),
            Format::AppComponent => Code::AppComponent(AppComponentCode::from_fields(values)?),
        })
    }

    pub fn format(&self) -> Format {
        match self {
            Code::Tiny(_) => Format::Tiny,
            Code::Simple(_) => Format::Simple,
            Code::Simple511(_) => Format::Simple511,
            Code::AppComponent(_) => Format::AppComponent,
        }
    }

    /// Field values in layout order.
    pub fn fields(&self) -> Vec<u32> {
        match self {
            Code::Tiny(c) => c.fields().to_vec(),
            Code::Simple(c) => c.fields().to_vec(),
            Code::Simple511(c) => c.fields().to_vec(),
            Code::AppComponent(c) => c.fields().to_vec(),
        }
    }

    pub fn encode(&self) -> CodecResult<String> {
        match self {
            Code::Tiny(c) => c.encode(),
            Code::Simple(c) => c.encode(),
            Code::Simple511(c) => c.encode(),
            Code::AppComponent(c) => c.encode(),
        }
    }

    /// Taxonomy entry for this classification, if one exists.
    pub fn resolve(&self) -> Option<TaxonPath> {
        self.format().taxonomy().resolve(&self.fields())
    }

    pub fn render_name(&self) -> String {
        self.format().render_name(&self.fields())
    }
}

impl FromStr for Code {
    type Err = CodecError;

    /// Decode a code of any registered format, dispatching on its tag.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::registry::decode(s)
    }
}

/// Narrow a field tuple to a fixed-size array after checking it against `layout`.
fn checked_fields<const N: usize>(layout: &Layout, values: &[u32]) -> CodecResult<[u32; N]> {
    layout.check(values)?;
    values.try_into().map_err(|_| CodecError::FieldCount {
        expected: N,
        found: values.len(),
    })
}
