//! Documentation tables for every registered format.
//!
//! [`sections`] gathers, per format, a title, free-text description, column
//! headers and the sorted permutation rows. [`render_markdown`] turns them
//! into a single Markdown document.

use std::fmt::Write as _;
use std::path::Path;

use serde::Serialize;

use crate::config::{self, ConfigResult};
use crate::permutation::Permutation;
use crate::registry;

/// Default document title.
pub const DEFAULT_TITLE: &str = "Error Codes Documentation";

/// One documentation table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocSection {
    pub title: String,
    pub description: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// One section per registered format, with rows sorted by code.
pub fn sections() -> Vec<DocSection> {
    registry::all()
        .iter()
        .map(|&format| {
            let mut section = format.doc_section();
            section.rows = format.permutations().iter().map(Permutation::row).collect();
            section
        })
        .collect()
}

/// Markdown anchor for a heading: lowercase, spaces become hyphens.
pub fn anchor_id(title: &str) -> String {
    title
        .chars()
        .map(|c| if c == ' ' { '-' } else { c })
        .collect::<String>()
        .to_lowercase()
}

/// Render the full Markdown document.
pub fn render_markdown(title: &str, sections: &[DocSection]) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_markdown(&mut out, title, sections);
    out
}

/// Render the document for every registered format and write it to `path`.
///
/// Returns the number of sections written.
pub fn generate(path: &Path, title: &str) -> ConfigResult<usize> {
    let sections = sections();
    config::write_file(path, &render_markdown(title, &sections))?;
    tracing::info!(path = %path.display(), sections = sections.len(), "documentation written");
    Ok(sections.len())
}

fn write_markdown(out: &mut String, title: &str, sections: &[DocSection]) -> std::fmt::Result {
    writeln!(out, "# {title}")?;
    writeln!(out)?;
    writeln!(out, "This document is auto-generated. Do not edit manually.")?;
    writeln!(out)?;
    writeln!(out, "## Table of Contents")?;
    writeln!(out)?;
    writeln!(out, "- [Error Code Format](#error-code-format)")?;
    for section in sections {
        writeln!(out, "- [{}](#{})", section.title, anchor_id(&section.title))?;
    }
    writeln!(out)?;
    writeln!(out, "## Error Code Format")?;
    writeln!(out)?;
    writeln!(out, "All error codes follow the format: E<type><data> where:")?;
    writeln!(out, "- E: Fixed prefix identifying this as an error code")?;
    writeln!(
        out,
        "- type: Single base-36 character (0-9,A-Z) identifying the error code format"
    )?;
    writeln!(
        out,
        "- data: Fixed-length base-36 encoded data specific to each format"
    )?;
    writeln!(out)?;
    writeln!(
        out,
        "Base-36 encoding uses digits 0-9 and letters A-Z to pack more information \
         into fewer characters while remaining human-readable."
    )?;

    for section in sections {
        writeln!(out)?;
        writeln!(out, "## {}", section.title)?;
        writeln!(out)?;
        writeln!(out, "{}", section.description)?;
        writeln!(out)?;
        writeln!(out, "| {} |", section.headers.join(" | "))?;
        writeln!(out, "|{}", "----|".repeat(section.headers.len()))?;
        for row in &section.rows {
            writeln!(out, "| {} |", row.join(" | "))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchors() {
        assert_eq!(anchor_id("Simple 5-11 Format"), "simple-5-11-format");
        assert_eq!(anchor_id("Tiny Format"), "tiny-format");
    }

    #[test]
    fn one_section_per_format() {
        let sections = sections();
        assert_eq!(sections.len(), registry::FORMATS.len());
        let titles: Vec<&str> = sections.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(
            titles,
            ["Tiny Format", "Simple Format", "Simple 5-11 Format", "App Component Format"]
        );
        for section in &sections {
            assert!(!section.rows.is_empty());
            for row in &section.rows {
                assert_eq!(row.len(), section.headers.len(), "{}", section.title);
            }
        }
    }

    #[test]
    fn markdown_contains_tables() {
        let doc = render_markdown(DEFAULT_TITLE, &sections());
        assert!(doc.starts_with("# Error Codes Documentation\n"));
        assert!(doc.contains("- [App Component Format](#app-component-format)"));
        assert!(doc.contains("| Code | Class.Type | Description |"));
        assert!(doc.contains("|----|----|----|"));
        assert!(doc.contains("| E10075 | api.validation_error | API validation error |"));
        assert!(doc.contains(
            "| EA0MTXD | backend.handler.users.validation_error | \
             Input validation failed for user operation |"
        ));
    }

    #[test]
    fn generate_writes_file() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("docs").join("error-codes.md");
        assert_eq!(generate(&path, "Codes").unwrap(), 4);
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("# Codes\n"));
        assert!(written.contains("## Tiny Format"));
    }

    #[test]
    fn rows_follow_code_order() {
        let doc = render_markdown(DEFAULT_TITLE, &sections());
        let first = doc.find("| E000 |").unwrap();
        let last = doc.find("| E0ZZ |").unwrap();
        assert!(first < last);
    }
}
