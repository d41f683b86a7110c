//! Classify form fields: addressing mode, identifiers, return type and default value.
//!
//! ## Addressing
//!
//! A field whose normalized label is a bare line number (`12`, `5a`) is *numeric-addressed*: its only accessor is
//! the line identifier (`l12`, `l5a`). Every other field is *name-addressed*: it gets an accessor named after its
//! label (`spouseSocialNumber`) and a positional alias (`f7`) derived from its document index. Document order is
//! the only identifier guaranteed never to collide, which is why the alias exists.
//!
//! ## Typing
//!
//! - Checkbox fields return `Boolean`, whatever their addressing.
//! - Other numeric-addressed fields return `Number`; other name-addressed fields return `String`.
//! - Fields not marked required are optional and default to the absent value. Required checkboxes default to
//!   `false`, every other required field to the empty string (including `Number` line fields; the stub body is
//!   left for a human to replace).

use crate::field::FormField;
use crate::naming::{is_line_number, line_identifier, method_case, normalize_name, positional_identifier};
use std::collections::HashMap;

/// How generated code addresses a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Addressing {
    /// Label is a printed line number.
    NumericAddressed,
    /// Label is a meaningful name.
    NameAddressed,
}

/// Semantic return type of an accessor, before any optional union.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReturnType {
    Number,
    Boolean,
    String,
}

impl ReturnType {
    pub fn as_str(self) -> &'static str {
        match self {
            ReturnType::Number => "number",
            ReturnType::Boolean => "boolean",
            ReturnType::String => "string",
        }
    }
}

/// The value an accessor stub returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DefaultLiteral {
    /// The host language's "no value" literal.
    Absent,
    False,
    EmptyString,
}

/// A field plus every naming and typing decision derived from it.
///
/// Recomputed on demand from a [`FormField`] and its index; never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedField {
    /// Document index of the field.
    pub index: usize,
    /// Normalized label.
    pub name: String,
    /// Canonical accessor identifier; the registry refers to the field by this name.
    pub identifier: String,
    /// Positional alias (`f{index}`), present only for name-addressed fields.
    pub alias: Option<String>,
    pub addressing: Addressing,
    pub return_type: ReturnType,
    /// Whether the accessor may return the absent value.
    pub optional: bool,
    pub default_literal: DefaultLiteral,
}

/// Classify one field at its document index.
///
/// ## Parameters
/// - `field`: the field as supplied by the document provider.
/// - `index`: 0-based position of the field in document order.
///
/// ## Returns
/// - (`ClassifiedField`): the derived decisions. Degenerate labels (no letters or digits) produce an empty
///   identifier rather than an error.
///
/// ## Examples
/// ```rust
/// use formgen_core::{Addressing, DefaultLiteral, FieldKind, FormField, ReturnType, classify};
///
/// let line = classify(&FormField::new("123", true, FieldKind::Text), 0);
/// assert_eq!(line.identifier, "l123");
/// assert_eq!(line.addressing, Addressing::NumericAddressed);
/// assert_eq!(line.return_type, ReturnType::Number);
/// assert_eq!(line.default_literal, DefaultLiteral::EmptyString);
///
/// let married = classify(&FormField::new("isMarried", true, FieldKind::Checkbox), 1);
/// assert_eq!(married.identifier, "isMarried");
/// assert_eq!(married.alias.as_deref(), Some("f1"));
/// assert_eq!(married.default_literal, DefaultLiteral::False);
/// ```
pub fn classify(field: &FormField, index: usize) -> ClassifiedField {
    let name = normalize_name(&field.raw_name);

    let addressing = if is_line_number(&name) {
        Addressing::NumericAddressed
    } else {
        Addressing::NameAddressed
    };

    let (identifier, alias) = match addressing {
        Addressing::NumericAddressed => (line_identifier(&name), None),
        Addressing::NameAddressed => (method_case(&name), Some(positional_identifier(index))),
    };

    // Checkbox typing and addressing are decided independently; a checkbox labelled "7" is `l7: boolean`.
    let boolean_valued = field.kind.is_boolean_valued();
    let return_type = match (boolean_valued, addressing) {
        (true, _) => ReturnType::Boolean,
        (false, Addressing::NumericAddressed) => ReturnType::Number,
        (false, Addressing::NameAddressed) => ReturnType::String,
    };

    let default_literal = match (field.required, boolean_valued) {
        (false, _) => DefaultLiteral::Absent,
        (true, true) => DefaultLiteral::False,
        (true, false) => DefaultLiteral::EmptyString,
    };

    ClassifiedField {
        index,
        name,
        identifier,
        alias,
        addressing,
        return_type,
        optional: !field.required,
        default_literal,
    }
}

/// A naming problem in a classified field list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Collision {
    /// The field's label has no letters or digits, so its accessor has no name.
    EmptyIdentifier { index: usize },
    /// The identifier starts with a digit (a name-addressed label such as `5A`), so it is not a legal member name.
    LeadingDigit { index: usize, identifier: String },
    /// Several bindings share one identifier. `indices` lists the owning field of each binding, in document order;
    /// an index appears twice when a field's accessor and alias coincide.
    Duplicate { identifier: String, indices: Vec<usize> },
}

/// Report empty, digit-leading and duplicated identifiers across accessors and aliases.
///
/// Detection only: nothing is renamed. Per-field findings come first in document order, then duplicates in order
/// of first occurrence.
pub fn find_collisions(fields: &[ClassifiedField]) -> Vec<Collision> {
    let mut collisions = Vec::new();
    let mut order: Vec<&str> = Vec::new();
    let mut owners: HashMap<&str, Vec<usize>> = HashMap::new();

    for field in fields {
        if field.identifier.is_empty() {
            collisions.push(Collision::EmptyIdentifier { index: field.index });
        } else if field.identifier.starts_with(|c: char| c.is_ascii_digit()) {
            collisions.push(Collision::LeadingDigit {
                index: field.index,
                identifier: field.identifier.clone(),
            });
        }
        let bindings = std::iter::once(field.identifier.as_str()).chain(field.alias.as_deref());
        for binding in bindings.filter(|b| !b.is_empty()) {
            let entry = owners.entry(binding).or_default();
            if entry.is_empty() {
                order.push(binding);
            }
            entry.push(field.index);
        }
    }

    for identifier in order {
        match owners.remove(identifier) {
            Some(indices) if indices.len() > 1 => collisions.push(Collision::Duplicate {
                identifier: identifier.to_string(),
                indices,
            }),
            _ => {}
        }
    }

    collisions
}
