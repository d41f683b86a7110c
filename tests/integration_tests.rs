//! Integration tests: PDF in, generated unit out
//!
//! The fixture PDF is assembled in memory with a correct cross-reference table so the tests do not depend on
//! binary files in the repository.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use formgen::backend::{UnitConfig, UnitGenerator};
use formgen::frontend::{FieldSource, PdfFormSource, SourceError};
use formgen_core::{FieldKind, FormField};

/// Field dictionaries (without object wrapper) in document order
const FIELDS: [&str; 4] = [
    "/FT /Tx /T (1) /Ff 2",
    "/FT /Btn /T (isMarried) /Ff 2",
    "/FT /Tx /T (Spouse Name)",
    "/FT /Ch /T (Filing Status) /Ff 131074",
];

/// Build a one-page PDF whose AcroForm holds `fields`.
fn form_pdf(fields: &[&str]) -> Vec<u8> {
    form_pdf_with_kids(fields, &[])
}

/// Like [`form_pdf`], with `kids` appended as objects numbered after the top-level fields.
fn form_pdf_with_kids(fields: &[&str], kids: &[&str]) -> Vec<u8> {
    let first_field = 5;
    let refs: Vec<String> = (0..fields.len()).map(|i| format!("{} 0 R", first_field + i)).collect();
    let refs = refs.join(" ");

    let mut objects = vec![
        "<< /Type /Catalog /Pages 2 0 R /AcroForm 4 0 R >>".to_string(),
        "<< /Type /Pages /Kids [3 0 R] /Count 1 >>".to_string(),
        format!("<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] /Annots [{refs}] >>"),
        format!("<< /Fields [{refs}] >>"),
    ];
    for field in fields.iter().chain(kids) {
        objects.push(format!("<< /Type /Annot /Subtype /Widget {field} /Rect [0 0 100 20] /P 3 0 R >>"));
    }

    let mut pdf = b"%PDF-1.7\n".to_vec();
    let mut offsets = Vec::with_capacity(objects.len());
    for (i, body) in objects.iter().enumerate() {
        offsets.push(pdf.len());
        pdf.extend_from_slice(format!("{} 0 obj\n{}\nendobj\n", i + 1, body).as_bytes());
    }

    let xref_offset = pdf.len();
    pdf.extend_from_slice(format!("xref\n0 {}\n", objects.len() + 1).as_bytes());
    pdf.extend_from_slice(b"0000000000 65535 f \n");
    for offset in offsets {
        pdf.extend_from_slice(format!("{offset:010} 00000 n \n").as_bytes());
    }
    pdf.extend_from_slice(
        format!(
            "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{xref_offset}\n%%EOF\n",
            objects.len() + 1
        )
        .as_bytes(),
    );
    pdf
}

fn write_fixture(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, form_pdf(&FIELDS)).unwrap();
    path
}

fn expected_fields() -> Vec<FormField> {
    vec![
        FormField::new("1", true, FieldKind::Text),
        FormField::new("isMarried", true, FieldKind::Checkbox),
        FormField::new("Spouse Name", false, FieldKind::Text),
        FormField::new("Filing Status", true, FieldKind::Dropdown),
    ]
}

#[test]
fn test_pdf_fields_in_document_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(dir.path(), "f1040x.pdf");
    let mut source = PdfFormSource::open(&path).unwrap();
    assert_eq!(source.ordered_fields().unwrap(), expected_fields());
}

#[test]
fn test_pdf_hierarchical_field_yields_its_kids() {
    // objects 5 and 6 are top-level fields; 7 and 8 are the kids of 6
    let pdf = form_pdf_with_kids(
        &[
            "/FT /Btn /T (isMarried) /Ff 2",
            "/FT /Tx /Ff 2 /T (addr) /Kids [7 0 R 8 0 R]",
        ],
        &["/T (line1) /Parent 6 0 R", "/T (line2) /Parent 6 0 R"],
    );
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("address.pdf");
    fs::write(&path, pdf).unwrap();

    let mut source = PdfFormSource::open(&path).unwrap();
    assert_eq!(
        source.ordered_fields().unwrap(),
        vec![
            FormField::new("isMarried", true, FieldKind::Checkbox),
            FormField::new("addr.line1", true, FieldKind::Text),
            FormField::new("addr.line2", true, FieldKind::Text),
        ]
    );
}

#[test]
fn test_pdf_without_acroform_has_no_fields() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("blank.pdf");
    fs::write(&path, form_pdf(&[])).unwrap();
    let mut source = PdfFormSource::open(&path).unwrap();
    assert!(source.ordered_fields().unwrap().is_empty());
}

#[test]
fn test_missing_document_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = PdfFormSource::open(dir.path().join("absent.pdf")).err().unwrap();
    assert!(matches!(err, SourceError::Io { .. }));
}

#[test]
fn test_generate_to_output_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(dir.path(), "f1040x.pdf");
    let out = dir.path().join("F1040x.ts");

    let generator = UnitGenerator::new();
    let mut source = PdfFormSource::open(&path).unwrap();
    generator.generate_to(&mut source, "f1040x", &out).unwrap();

    let written = fs::read_to_string(&out).unwrap();
    assert_eq!(written, generator.generate(&expected_fields(), "f1040x"));
    assert!(written.contains("export class F1040x extends Form {"));
    assert!(written.contains("filingStatus = (): string => {"));
    assert!(written.contains("f3 = (): string => this.filingStatus()"));
}

// ============================================================================
// Binary
// ============================================================================

fn formgen() -> Command {
    Command::new(env!("CARGO_BIN_EXE_formgen"))
}

#[test]
fn test_cli_without_file_prints_usage() {
    let output = formgen().output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage: formgen"), "stdout: {stdout}");
}

#[test]
fn test_cli_stdout_is_the_unit() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(dir.path(), "Schedule1.pdf");

    let output = formgen().arg(&path).output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout, UnitGenerator::new().generate(&expected_fields(), "Schedule1"));
}

#[test]
fn test_cli_writes_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(dir.path(), "Schedule1.pdf");
    let out = dir.path().join("Schedule1.ts");

    let output = formgen()
        .args(["--state", "WA", "--indent", "4"])
        .arg(&path)
        .arg(&out)
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(output.stdout.is_empty());

    let config = UnitConfig::new().with_jurisdiction("WA").with_indent_width(4);
    let expected = UnitGenerator::with_config(config).generate(&expected_fields(), "Schedule1");
    assert_eq!(fs::read_to_string(&out).unwrap(), expected);
}

#[test]
fn test_cli_missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = formgen().arg(dir.path().join("nope.pdf")).output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: cannot read"), "stderr: {stderr}");
    assert!(output.stdout.is_empty());
}

#[test]
fn test_cli_fields_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(dir.path(), "Schedule1.pdf");

    let output = formgen().args(["--fields", "--json"]).arg(&path).output().unwrap();
    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["unit"], "Schedule1");
    assert_eq!(report["fields"].as_array().unwrap().len(), 4);
    assert_eq!(report["fields"][0]["identifier"], "l1");
    assert_eq!(report["fields"][3]["kind"], "dropdown");
    assert_eq!(report["fields"][2]["alias"], "f2");
}
