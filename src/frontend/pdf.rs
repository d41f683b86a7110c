//! AcroForm field extraction backed by `pdf_oxide`.

use std::fs;
use std::path::{Path, PathBuf};

use formgen_core::{FieldKind, FormField};
use pdf_oxide::PdfDocument;
use pdf_oxide::extractors::{FieldType, FormExtractor};

use super::{FieldSource, SourceError};

/// `/Ff` bit 2: the field must have a value when the form is submitted.
pub const FLAG_REQUIRED: u32 = 1 << 1;
/// `/Ff` bit 16: button field is a radio group.
pub const FLAG_RADIO: u32 = 1 << 15;
/// `/Ff` bit 17: button field is a push button.
pub const FLAG_PUSH_BUTTON: u32 = 1 << 16;
/// `/Ff` bit 18: choice field is a combo box.
pub const FLAG_COMBO: u32 = 1 << 17;

/// A PDF whose interactive form supplies the fields.
pub struct PdfFormSource {
    path: PathBuf,
    document: PdfDocument,
}

impl PdfFormSource {
    /// Open a PDF for field extraction.
    ///
    /// Fails with [`SourceError::Io`] when the file cannot be read and [`SourceError::Parse`] when it is not a
    /// well-formed PDF.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        let path = path.as_ref().to_path_buf();
        fs::metadata(&path).map_err(|source| SourceError::Io {
            path: path.clone(),
            source,
        })?;
        let document = PdfDocument::open(&path).map_err(|e| source_error(&path, e))?;
        tracing::debug!(path = %path.display(), "opened form document");
        Ok(Self { path, document })
    }
}

impl FieldSource for PdfFormSource {
    fn ordered_fields(&mut self) -> Result<Vec<FormField>, SourceError> {
        let extracted = FormExtractor::extract_fields(&mut self.document).map_err(|e| source_error(&self.path, e))?;
        let entries = extracted
            .into_iter()
            .map(|f| ExtractedField {
                name: if f.full_name.is_empty() { f.name } else { f.full_name },
                field_type: f.field_type,
                flags: f.flags,
            })
            .collect();
        let fields = resolve_hierarchy(entries);
        tracing::debug!(path = %self.path.display(), count = fields.len(), "extracted form fields");
        Ok(fields)
    }
}

/// One entry of the extractor's output, before inheritance is applied.
#[derive(Debug, Clone, PartialEq)]
struct ExtractedField {
    /// Fully qualified name (`parent.child`)
    name: String,
    field_type: FieldType,
    flags: Option<u32>,
}

/// Turn the extractor's flat output into the terminal fields of the form.
///
/// The extractor lists a typed parent after its kids and does not pass its inheritable `/FT` and `/Ff` down. A
/// parent is recognised by an earlier entry named `{parent}.*`; its type fills kids left `Unknown`, its flags fill
/// kids without their own, and the parent itself is dropped.
fn resolve_hierarchy(mut entries: Vec<ExtractedField>) -> Vec<FormField> {
    let mut terminal = vec![true; entries.len()];

    for i in 0..entries.len() {
        if entries[i].name.is_empty() {
            continue;
        }
        let prefix = format!("{}.", entries[i].name);
        let (earlier, rest) = entries.split_at_mut(i);
        let parent = &rest[0];
        for (j, kid) in earlier.iter_mut().enumerate() {
            if !kid.name.starts_with(&prefix) {
                continue;
            }
            terminal[i] = false;
            if matches!(kid.field_type, FieldType::Unknown(_)) {
                kid.field_type = parent.field_type.clone();
            }
            if kid.flags.is_none() {
                kid.flags = parent.flags;
            }
            tracing::trace!(parent = %parent.name, kid = %kid.name, index = j, "inherited field attributes");
        }
    }

    entries
        .into_iter()
        .zip(terminal)
        .filter(|(_, terminal)| *terminal)
        .map(|(f, _)| FormField::new(f.name, is_required(f.flags), field_kind(&f.field_type, f.flags)))
        .collect()
}

fn source_error(path: &Path, err: pdf_oxide::Error) -> SourceError {
    match err {
        pdf_oxide::Error::Io(source) => SourceError::Io {
            path: path.to_path_buf(),
            source,
        },
        other => SourceError::Parse {
            path: path.to_path_buf(),
            message: other.to_string(),
        },
    }
}

/// Whether the `/Ff` flags mark a field as required.
pub fn is_required(flags: Option<u32>) -> bool {
    flags.is_some_and(|f| f & FLAG_REQUIRED != 0)
}

/// Map a PDF field type and its `/Ff` flags onto the field-kind vocabulary.
pub fn field_kind(field_type: &FieldType, flags: Option<u32>) -> FieldKind {
    let flags = flags.unwrap_or(0);
    match field_type {
        FieldType::Text => FieldKind::Text,
        FieldType::Button if flags & FLAG_PUSH_BUTTON != 0 => FieldKind::Button,
        FieldType::Button if flags & FLAG_RADIO != 0 => FieldKind::RadioGroup,
        FieldType::Button => FieldKind::Checkbox,
        FieldType::Choice if flags & FLAG_COMBO != 0 => FieldKind::Dropdown,
        FieldType::Choice => FieldKind::OptionList,
        FieldType::Signature => FieldKind::Signature,
        FieldType::Unknown(_) => FieldKind::Unknown,
    }
}
