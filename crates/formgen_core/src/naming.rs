//! Turn arbitrary form-field labels into identifier fragments.
//!
//! Form labels in real documents carry punctuation, spaces, brackets and export suffixes
//! (`topmostSubform[0].Page1[0].f1_01[0]`). Generated code needs plain identifiers, so every label passes through
//! [`normalize_name`] before any other decision is made.
//!
//! ## Notes
//! - Filtering is by ASCII character class only; there is no locale awareness and no transliteration.
//! - An all-symbol label normalizes to the empty string. Callers receive it unchanged (see
//!   [`crate::classify::find_collisions`] for detection).

/// Prefix for accessors of fields addressed by a printed line number (`l12a`).
pub const LINE_PREFIX: &str = "l";

/// Prefix for positional aliases (`f7` is the field at document index 7).
pub const POSITIONAL_PREFIX: &str = "f";

/// Prefix for the generated factory function (`makeF8889`).
pub const FACTORY_PREFIX: &str = "make";

/// Strip every non-alphanumeric ASCII character and capitalize the first survivor.
///
/// ## Parameters
/// - `raw`: the label as stored in the document.
///
/// ## Returns
/// - (`String`): the normalized fragment; empty when `raw` has no ASCII letters or digits.
///
/// ## Examples
/// ```rust
/// use formgen_core::normalize_name;
///
/// assert_eq!(normalize_name("Hello-World!"), "HelloWorld");
/// assert_eq!(normalize_name("123.45"), "12345");
/// assert_eq!(normalize_name(""), "");
/// ```
pub fn normalize_name(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars().filter(char::is_ascii_alphanumeric) {
        if out.is_empty() {
            out.push(ch.to_ascii_uppercase());
        } else {
            out.push(ch);
        }
    }
    out
}

/// Check whether a normalized name is a bare line number: one or more digits, then only lowercase letters.
///
/// `"12"`, `"5a"` and `"16bc"` match; `"F1040"`, `"5A"` and `"12a3"` do not.
pub fn is_line_number(name: &str) -> bool {
    let digits = name.bytes().take_while(u8::is_ascii_digit).count();
    digits > 0 && name.bytes().skip(digits).all(|b| b.is_ascii_lowercase())
}

/// Lower the first character of a normalized name, giving the method spelling of a label.
///
/// `"IsMarried"` becomes `"isMarried"`; names starting with a digit are returned unchanged.
pub fn method_case(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(name.len());
            out.push(first.to_ascii_lowercase());
            out.push_str(chars.as_str());
            out
        }
        None => String::new(),
    }
}

/// Identifier for a line-number field (`"12a"` becomes `"l12a"`).
pub fn line_identifier(name: &str) -> String {
    format!("{LINE_PREFIX}{name}")
}

/// Positional alias for the field at `index` in document order.
pub fn positional_identifier(index: usize) -> String {
    format!("{POSITIONAL_PREFIX}{index}")
}

/// Factory function name for a unit identifier (`"F8889"` becomes `"makeF8889"`).
pub fn factory_identifier(unit: &str) -> String {
    format!("{FACTORY_PREFIX}{unit}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_symbols() {
        let cases = [
            ("Hello-World!", "HelloWorld"),
            ("Form_1040(2023)", "Form10402023"),
            ("123.45", "12345"),
            ("f1040", "F1040"),
            ("topmostSubform[0].Page1[0].f1_01[0]", "TopmostSubform0Page10f1010"),
        ];
        for (input, expected) in cases {
            assert_eq!(normalize_name(input), expected, "normalizing {input:?}");
        }
    }

    #[test]
    fn test_normalize_empty_and_symbol_only() {
        assert_eq!(normalize_name(""), "");
        assert_eq!(normalize_name("-_()[]. "), "");
    }

    #[test]
    fn test_normalize_drops_non_ascii() {
        assert_eq!(normalize_name("café"), "Caf");
        assert_eq!(normalize_name("ñandú1"), "And1");
    }

    #[test]
    fn test_normalize_capitalizes_after_leading_symbols() {
        assert_eq!(normalize_name("  _married"), "Married");
    }

    #[test]
    fn test_normalize_keeps_rest_unchanged() {
        assert_eq!(normalize_name("spouseSSN"), "SpouseSSN");
    }

    #[test]
    fn test_is_line_number() {
        assert!(is_line_number("123"));
        assert!(is_line_number("5a"));
        assert!(is_line_number("16bc"));
        assert!(!is_line_number(""));
        assert!(!is_line_number("a5"));
        assert!(!is_line_number("5A"));
        assert!(!is_line_number("12a3"));
        assert!(!is_line_number("F1040"));
    }

    #[test]
    fn test_method_case() {
        assert_eq!(method_case("IsMarried"), "isMarried");
        assert_eq!(method_case("12a"), "12a");
        assert_eq!(method_case(""), "");
    }

    #[test]
    fn test_prefixed_identifiers() {
        assert_eq!(line_identifier("12a"), "l12a");
        assert_eq!(positional_identifier(0), "f0");
        assert_eq!(positional_identifier(42), "f42");
        assert_eq!(factory_identifier("F8889"), "makeF8889");
    }
}
