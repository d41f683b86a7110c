//! Document provider: where the ordered field list comes from.
//!
//! The generator itself never touches files. It consumes a [`FieldSource`], which yields every form field in
//! document order; [`PdfFormSource`] reads the AcroForm of a PDF, and a plain `Vec<FormField>` serves callers that
//! already hold the fields.

pub mod pdf;

use std::io;
use std::path::PathBuf;

use formgen_core::FormField;
use thiserror::Error;

pub use pdf::PdfFormSource;

/// Errors raised while reading fields from a document
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{} is not a readable form document: {message}", path.display())]
    Parse { path: PathBuf, message: String },
}

/// Supplies the ordered field list of one document.
pub trait FieldSource {
    /// Every field, in document order. Order is significant: positional aliases are derived from it.
    fn ordered_fields(&mut self) -> Result<Vec<FormField>, SourceError>;
}

impl FieldSource for Vec<FormField> {
    fn ordered_fields(&mut self) -> Result<Vec<FormField>, SourceError> {
        Ok(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use formgen_core::FieldKind;

    #[test]
    fn test_vec_source_preserves_order() {
        let mut source = vec![
            FormField::new("b", true, FieldKind::Text),
            FormField::new("a", false, FieldKind::Checkbox),
        ];
        let fields = source.ordered_fields().unwrap();
        assert_eq!(fields[0].raw_name, "b");
        assert_eq!(fields[1].raw_name, "a");
    }

    #[test]
    fn test_error_messages_name_the_path() {
        let err = SourceError::Parse {
            path: PathBuf::from("f1040.pdf"),
            message: "no trailer".to_string(),
        };
        assert_eq!(err.to_string(), "f1040.pdf is not a readable form document: no trailer");
    }
}
