//! `--fields` listing: how every field of a document was classified.

use formgen_core::field::as_str as kind_str;
use formgen_core::{FormField, classify};
use serde::Serialize;

use crate::backend::emit::render_literal;
use crate::backend::ir::IrLiteral;

/// One classified field, flattened for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldRow {
    pub index: usize,
    pub raw_name: String,
    pub kind: &'static str,
    pub identifier: String,
    pub alias: Option<String>,
    pub return_type: &'static str,
    pub optional: bool,
    /// The stub's return value as it appears in generated code
    pub default: String,
}

/// Classification report for one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldReport {
    pub unit: String,
    pub fields: Vec<FieldRow>,
}

impl FieldReport {
    pub fn new(unit: impl Into<String>, fields: &[FormField]) -> Self {
        let fields = fields
            .iter()
            .enumerate()
            .map(|(index, field)| {
                let c = classify(field, index);
                FieldRow {
                    index,
                    raw_name: field.raw_name.clone(),
                    kind: kind_str(field.kind),
                    identifier: c.identifier,
                    alias: c.alias,
                    return_type: c.return_type.as_str(),
                    optional: c.optional,
                    default: render_literal(&IrLiteral::from(c.default_literal)),
                }
            })
            .collect();
        Self {
            unit: unit.into(),
            fields,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Render an aligned plain-text table, one row per field.
    pub fn to_table(&self) -> String {
        const HEADER: [&str; 7] = ["INDEX", "IDENTIFIER", "ALIAS", "TYPE", "DEFAULT", "KIND", "LABEL"];

        let mut rows: Vec<[String; 7]> = vec![HEADER.map(str::to_string)];
        for f in &self.fields {
            let ty = if f.optional {
                format!("{}?", f.return_type)
            } else {
                f.return_type.to_string()
            };
            rows.push([
                f.index.to_string(),
                f.identifier.clone(),
                f.alias.clone().unwrap_or_else(|| "-".to_string()),
                ty,
                f.default.clone(),
                f.kind.to_string(),
                f.raw_name.clone(),
            ]);
        }

        let mut widths = [0usize; 7];
        for row in &rows {
            for (w, cell) in widths.iter_mut().zip(row) {
                *w = (*w).max(cell.chars().count());
            }
        }

        let mut out = String::new();
        for row in &rows {
            let line: Vec<String> = row
                .iter()
                .zip(widths)
                .map(|(cell, w)| format!("{cell:<w$}"))
                .collect();
            out.push_str(line.join("  ").trim_end());
            out.push('\n');
        }
        out
    }
}
