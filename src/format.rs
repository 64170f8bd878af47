//! Persisted table formats.
//!
//! The table is exchanged with the binding layer as the body of a JavaScript
//! object literal, one category per block:
//!
//! ```text
//!     CompareFunction: [
//!       undefined,
//!       'never',
//!       ...
//!     ],
//! ```
//!
//! This module renders that layout (and a JSON equivalent) from the compiled
//! table, and parses an existing file back so it can be checked slot by slot.

use crate::error::{Error, Result};
use crate::table::{EnumNameTable, Slot};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

/// Largest indentation `render_js` honours; larger values are clamped.
pub const MAX_INDENT: usize = 16;

/// Write the table as a JS object-literal body.
///
/// `indent` is the category-line indentation (clamped to [`MAX_INDENT`]);
/// variant lines get two more spaces. An indent of 4 reproduces the
/// persisted layout byte for byte.
pub fn write_js<W: fmt::Write>(out: &mut W, table: &EnumNameTable, indent: usize) -> fmt::Result {
    let indent = indent.min(MAX_INDENT);
    let pad = " ".repeat(indent);
    let inner = " ".repeat(indent.saturating_add(2));

    for category in table.categories() {
        writeln!(out, "{pad}{}: [", category.name())?;
        for slot in category.slots() {
            match slot {
                Slot::Named(name) => writeln!(out, "{inner}'{name}',")?,
                Slot::Unnamed => writeln!(out, "{inner}undefined,")?,
            }
        }
        writeln!(out, "{pad}],")?;
    }
    Ok(())
}

/// [`write_js`] into a fresh `String`.
pub fn render_js(table: &EnumNameTable, indent: usize) -> String {
    let mut out = String::new();
    // fmt::Write for String never fails
    let _ = write_js(&mut out, table, indent);
    out
}

/// Table as a JSON object: category → array of names, `null` where unnamed.
pub fn to_json(table: &EnumNameTable) -> Result<Value> {
    let map: BTreeMap<&'static str, Vec<Slot>> = table
        .categories()
        .map(|category| (category.name(), category.slots().collect()))
        .collect();
    Ok(serde_json::to_value(map)?)
}

pub fn to_json_string(table: &EnumNameTable) -> Result<String> {
    Ok(serde_json::to_string_pretty(&to_json(table)?)?)
}

/// One category read back from a persisted table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCategory {
    pub name: String,
    /// `None` for `undefined` slots.
    pub slots: Vec<Option<String>>,
    /// 1-based line of the category header.
    pub line: usize,
}

fn parse_error(line: usize, message: impl Into<String>) -> Error {
    Error::Parse {
        line,
        message: message.into(),
    }
}

fn is_identifier(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Strip matching single or double quotes from a variant literal.
fn unquote(s: &str) -> Option<&str> {
    ['\'', '"'].into_iter().find_map(|q| {
        s.strip_prefix(q)
            .and_then(|rest| rest.strip_suffix(q))
            .filter(|inner| !inner.contains(q))
    })
}

/// Validate a `Name: [` header and start a new category.
fn open_category(
    header: &str,
    line: &str,
    line_no: usize,
    current: Option<&ParsedCategory>,
    seen: &[ParsedCategory],
) -> Result<ParsedCategory> {
    let name = header.trim_end().strip_suffix(':').map(str::trim).unwrap_or("");
    if !is_identifier(name) {
        return Err(parse_error(line_no, format!("invalid category header '{line}'")));
    }
    if let Some(open) = current {
        return Err(parse_error(
            line_no,
            format!("category '{}' opened before '{}' was closed", name, open.name),
        ));
    }
    if seen.iter().any(|c| c.name == name) {
        return Err(parse_error(line_no, format!("duplicate category '{name}'")));
    }
    Ok(ParsedCategory {
        name: name.to_string(),
        slots: Vec::new(),
        line: line_no,
    })
}

/// Parse a JS object-literal body back into categories.
///
/// Indentation is free; blank lines and `//` comments are skipped.
pub fn parse_js(contents: &str) -> Result<Vec<ParsedCategory>> {
    let mut categories: Vec<ParsedCategory> = Vec::new();
    let mut current: Option<ParsedCategory> = None;

    for (i, raw) in contents.lines().enumerate() {
        let line_no = i + 1;
        let line = raw.trim();
        if line.is_empty() || line.starts_with("//") {
            continue;
        }

        // `Name: [],` declares a category with no slots
        if let Some(header) = line.strip_suffix(',').unwrap_or(line).strip_suffix("[]") {
            let empty = open_category(header, line, line_no, current.as_ref(), &categories)?;
            categories.push(empty);
            continue;
        }

        if let Some(header) = line.strip_suffix('[') {
            current = Some(open_category(header, line, line_no, current.as_ref(), &categories)?);
            continue;
        }

        if line == "]," || line == "]" {
            match current.take() {
                Some(done) => categories.push(done),
                None => return Err(parse_error(line_no, "']' without an open category")),
            }
            continue;
        }

        let Some(open) = current.as_mut() else {
            return Err(parse_error(line_no, format!("variant '{line}' outside a category")));
        };
        let value = line.strip_suffix(',').unwrap_or(line).trim();
        if value == "undefined" {
            open.slots.push(None);
        } else if let Some(name) = unquote(value) {
            open.slots.push(Some(name.to_string()));
        } else {
            return Err(parse_error(line_no, format!("unrecognized line '{line}'")));
        }
    }

    if let Some(open) = current {
        return Err(parse_error(open.line, format!("category '{}' is never closed", open.name)));
    }
    Ok(categories)
}

/// A difference between a persisted table and the compiled one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mismatch {
    /// Compiled category absent from the persisted table.
    MissingCategory(String),
    /// Persisted category the compiled table does not know.
    UnexpectedCategory(String),
    LengthDiffers {
        category: String,
        expected: usize,
        found: usize,
    },
    SlotDiffers {
        category: String,
        ordinal: u32,
        expected: Option<String>,
        found: Option<String>,
    },
}

fn fmt_slot(slot: &Option<String>) -> String {
    match slot {
        Some(name) => format!("'{name}'"),
        None => "undefined".to_string(),
    }
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mismatch::MissingCategory(name) => write!(f, "{name}: missing from persisted table"),
            Mismatch::UnexpectedCategory(name) => write!(f, "{name}: not a known category"),
            Mismatch::LengthDiffers { category, expected, found } => {
                write!(f, "{category}: expected {expected} slots, found {found}")
            }
            Mismatch::SlotDiffers { category, ordinal, expected, found } => write!(
                f,
                "{category}[{ordinal}]: expected {}, found {}",
                fmt_slot(expected),
                fmt_slot(found)
            ),
        }
    }
}

/// Compare parsed categories against the compiled table. Empty means the
/// persisted table encodes every ordinal the same way.
pub fn verify(table: &EnumNameTable, parsed: &[ParsedCategory]) -> Vec<Mismatch> {
    let mut mismatches = Vec::new();

    for category in table.categories() {
        let Some(found) = parsed.iter().find(|p| p.name == category.name()) else {
            mismatches.push(Mismatch::MissingCategory(category.name().to_string()));
            continue;
        };

        if found.slots.len() != category.len() {
            mismatches.push(Mismatch::LengthDiffers {
                category: category.name().to_string(),
                expected: category.len(),
                found: found.slots.len(),
            });
        }

        for ((ordinal, slot), persisted) in category.iter().zip(&found.slots) {
            if slot.name() != persisted.as_deref() {
                mismatches.push(Mismatch::SlotDiffers {
                    category: category.name().to_string(),
                    ordinal,
                    expected: slot.name().map(str::to_string),
                    found: persisted.clone(),
                });
            }
        }
    }

    for p in parsed.iter().filter(|p| !table.contains(&p.name)) {
        mismatches.push(Mismatch::UnexpectedCategory(p.name.clone()));
    }
    mismatches
}

/// Read, parse and verify a persisted table file.
pub fn verify_file(table: &EnumNameTable, path: &Path) -> Result<Vec<Mismatch>> {
    let contents = std::fs::read_to_string(path)?;
    let parsed = parse_js(&contents)?;
    tracing::debug!("Parsed {} categories from {}", parsed.len(), path.display());
    Ok(verify(table, &parsed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_js_block_layout() {
        let js = render_js(EnumNameTable::global(), 4);
        let expected = "    \
StoreOp: [
      undefined,
      'store',
      'discard',
    ],
";
        assert!(js.contains(expected), "StoreOp block not rendered as expected");
        assert!(js.starts_with("    AddressMode: [\n      'repeat',\n"));
        assert!(js.ends_with("      undefined,\n    ],\n"));
    }

    #[test]
    fn test_render_js_custom_indent() {
        let js = render_js(EnumNameTable::global(), 0);
        assert!(js.starts_with("AddressMode: [\n  'repeat',\n"));
    }

    #[test]
    fn test_render_js_clamps_indent() {
        let js = render_js(EnumNameTable::global(), usize::MAX);
        let pad = " ".repeat(MAX_INDENT);
        assert!(js.starts_with(&format!("{pad}AddressMode: [\n{pad}  'repeat',\n")));
    }

    #[test]
    fn test_write_js_into_any_writer() {
        let mut out = String::new();
        write_js(&mut out, EnumNameTable::global(), 4).unwrap();
        assert_eq!(out, render_js(EnumNameTable::global(), 4));
    }

    #[test]
    fn test_to_json_nulls_for_unnamed() {
        let json = to_json(EnumNameTable::global()).unwrap();
        assert_eq!(json["LoadOp"], serde_json::json!([null, "clear", "load"]));
        assert_eq!(json["TextureDimension"][2], "3d");
        assert_eq!(json.as_object().map(|m| m.len()), Some(32));
    }

    #[test]
    fn test_parse_simple_table() {
        let contents = r#"
    // generated
    FrontFace: [
      'ccw',
      "cw",
    ],

    LoadOp: [
      undefined,
      'clear',
      'load',
    ]
"#;
        let parsed = parse_js(contents).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].name, "FrontFace");
        assert_eq!(parsed[0].line, 3);
        assert_eq!(parsed[0].slots, vec![Some("ccw".to_string()), Some("cw".to_string())]);
        assert_eq!(parsed[1].slots[0], None);
        assert_eq!(parsed[1].slots.len(), 3);
    }

    #[test]
    fn test_parse_inline_empty_category() {
        let parsed = parse_js("A: [],\nB: []\nFrontFace: [\n  'ccw',\n],\n").unwrap();
        assert_eq!(parsed.len(), 3);
        assert_eq!(parsed[0].name, "A");
        assert!(parsed[0].slots.is_empty());
        assert_eq!(parsed[1].name, "B");
        assert_eq!(parsed[1].line, 2);
        assert_eq!(parsed[2].slots, vec![Some("ccw".to_string())]);

        // Inline empty arrays obey the same header rules
        assert!(matches!(parse_js("A: [],\nA: [],\n"), Err(Error::Parse { line: 2, .. })));
        assert!(matches!(
            parse_js("CullMode: [\nA: [],\n"),
            Err(Error::Parse { line: 2, .. })
        ));
    }

    #[test]
    fn test_parse_rejects_variant_outside_category() {
        let err = parse_js("  'orphan',\n").unwrap_err();
        assert!(matches!(err, Error::Parse { line: 1, .. }));
    }

    #[test]
    fn test_parse_rejects_unclosed_category() {
        let err = parse_js("CullMode: [\n  'none',\nFrontFace: [\n").unwrap_err();
        assert!(matches!(err, Error::Parse { line: 3, .. }));

        let err = parse_js("CullMode: [\n  'none',\n").unwrap_err();
        assert!(matches!(err, Error::Parse { line: 1, .. }));
    }

    #[test]
    fn test_parse_rejects_garbage_and_duplicates() {
        assert!(parse_js("CullMode: [\n  none,\n],\n").is_err());
        assert!(parse_js("CullMode: [\n],\nCullMode: [\n],\n").is_err());
        assert!(parse_js("],\n").is_err());
        assert!(parse_js("Cull Mode: [\n],\n").is_err());
    }

    #[test]
    fn test_verify_reports_differences() {
        let parsed = parse_js(
            "CullMode: [\n  'none',\n  'back',\n],\nMadeUp: [\n  'x',\n],\nStoreOp: [\n  undefined,\n],\n",
        )
        .unwrap();
        let mismatches = verify(EnumNameTable::global(), &parsed);

        assert!(mismatches.contains(&Mismatch::LengthDiffers {
            category: "CullMode".to_string(),
            expected: 3,
            found: 2,
        }));
        assert!(mismatches.contains(&Mismatch::SlotDiffers {
            category: "CullMode".to_string(),
            ordinal: 1,
            expected: Some("front".to_string()),
            found: Some("back".to_string()),
        }));
        assert!(mismatches.contains(&Mismatch::UnexpectedCategory("MadeUp".to_string())));
        assert!(mismatches.contains(&Mismatch::MissingCategory("TextureFormat".to_string())));
        assert_eq!(
            mismatches.iter().filter(|m| matches!(m, Mismatch::MissingCategory(_))).count(),
            30
        );
    }

    #[test]
    fn test_mismatch_display() {
        let m = Mismatch::SlotDiffers {
            category: "LoadOp".to_string(),
            ordinal: 0,
            expected: None,
            found: Some("clear".to_string()),
        };
        insta::assert_snapshot!(m.to_string(), @"LoadOp[0]: expected undefined, found 'clear'");
    }
}
