//! Define the form-field data model consumed by the classifier.
//!
//! A document provider hands the generator an ordered list of [`FormField`]s. Order is significant: a field's
//! position becomes its positional alias, so providers must preserve document order.
//!
//! Field kinds are a closed vocabulary ([`FieldKind`]) with a const metadata table ([`FIELD_KINDS`]) so that
//! tooling (listings, diagnostics) and the classifier agree on spellings.
//!
//! ## Examples
//! ```rust
//! use formgen_core::field::{self, FieldKind};
//!
//! assert_eq!(field::from_str("checkbox"), Some(FieldKind::Checkbox));
//! assert_eq!(field::as_str(FieldKind::Dropdown), "dropdown");
//! ```

/// Stable identifier for every interactive field kind.
///
/// ## Notes
/// - Only [`FieldKind::Checkbox`] changes the derived accessor type; every other kind is treated as text-valued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Text,
    Checkbox,
    RadioGroup,
    Dropdown,
    OptionList,
    Button,
    Signature,
    /// A field whose type the provider could not recognize.
    Unknown,
}

/// Metadata for a field kind.
#[derive(Debug, Clone, Copy)]
pub struct FieldKindInfo {
    pub id: FieldKind,
    /// Canonical spelling used in listings and reports.
    pub canonical: &'static str,
    /// Whether accessors for this kind return a boolean.
    pub boolean_valued: bool,
}

/// Registry of all field kinds.
pub const FIELD_KINDS: &[FieldKindInfo] = &[
    FieldKindInfo {
        id: FieldKind::Text,
        canonical: "text",
        boolean_valued: false,
    },
    FieldKindInfo {
        id: FieldKind::Checkbox,
        canonical: "checkbox",
        boolean_valued: true,
    },
    FieldKindInfo {
        id: FieldKind::RadioGroup,
        canonical: "radio",
        boolean_valued: false,
    },
    FieldKindInfo {
        id: FieldKind::Dropdown,
        canonical: "dropdown",
        boolean_valued: false,
    },
    FieldKindInfo {
        id: FieldKind::OptionList,
        canonical: "option-list",
        boolean_valued: false,
    },
    FieldKindInfo {
        id: FieldKind::Button,
        canonical: "button",
        boolean_valued: false,
    },
    FieldKindInfo {
        id: FieldKind::Signature,
        canonical: "signature",
        boolean_valued: false,
    },
    FieldKindInfo {
        id: FieldKind::Unknown,
        canonical: "unknown",
        boolean_valued: false,
    },
];

/// Look up metadata for a field kind.
///
/// ## Panics
/// - If the registry is missing an entry (a bug in [`FIELD_KINDS`]; guarded by tests).
pub fn info_for(id: FieldKind) -> &'static FieldKindInfo {
    FIELD_KINDS
        .iter()
        .find(|k| k.id == id)
        .expect("INVARIANT: every FieldKind has a FIELD_KINDS entry")
}

/// Canonical spelling of a field kind.
pub fn as_str(id: FieldKind) -> &'static str {
    info_for(id).canonical
}

/// Lookup by canonical spelling (case-sensitive).
pub fn from_str(s: &str) -> Option<FieldKind> {
    FIELD_KINDS.iter().find(|k| k.canonical == s).map(|k| k.id)
}

impl FieldKind {
    /// Whether accessors for this kind return a boolean.
    pub fn is_boolean_valued(self) -> bool {
        info_for(self).boolean_valued
    }
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(as_str(*self))
    }
}

/// One interactive element of a fillable document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    /// Label exactly as stored in the document (fully qualified for nested fields).
    pub raw_name: String,
    /// Whether the document marks the field as required.
    pub required: bool,
    pub kind: FieldKind,
}

impl FormField {
    pub fn new(raw_name: impl Into<String>, required: bool, kind: FieldKind) -> Self {
        Self {
            raw_name: raw_name.into(),
            required,
            kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_checkbox_is_boolean_valued() {
        for info in FIELD_KINDS {
            assert_eq!(info.boolean_valued, info.id == FieldKind::Checkbox, "{:?}", info.id);
        }
    }

    #[test]
    fn test_display_uses_canonical_spelling() {
        assert_eq!(FieldKind::OptionList.to_string(), "option-list");
        assert_eq!(FieldKind::RadioGroup.to_string(), "radio");
    }

    #[test]
    fn test_from_str_unknown_spelling() {
        assert_eq!(from_str("Checkbox"), None);
        assert_eq!(from_str("combo"), None);
    }

    #[test]
    fn test_form_field_new() {
        let field = FormField::new("isMarried", true, FieldKind::Checkbox);
        assert_eq!(field.raw_name, "isMarried");
        assert!(field.required);
        assert_eq!(field.kind, FieldKind::Checkbox);
    }
}
