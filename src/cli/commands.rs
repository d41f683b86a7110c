//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::path::Path;

use crate::backend::{UnitConfig, UnitGenerator};
use crate::frontend::{FieldSource, PdfFormSource};

use super::report::FieldReport;
use super::{CliError, CliResult, ExitCode};

/// Unit name used when the document path has no usable file stem.
pub const FALLBACK_UNIT_NAME: &str = "Form";

/// Derive the unit name from a document path (its file stem).
pub fn unit_name_for(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .filter(|stem| !stem.is_empty())
        .unwrap_or_else(|| FALLBACK_UNIT_NAME.to_string())
}

/// Generate the unit for a form document.
///
/// With `output`, the text is written to that path; otherwise it goes to stdout.
pub fn generate_file(file: &Path, output: Option<&Path>, config: UnitConfig) -> CliResult<ExitCode> {
    let mut source = open_source(file)?;
    let unit_name = unit_name_for(file);
    let generator = UnitGenerator::with_config(config);

    match output {
        Some(path) => generator
            .generate_to(&mut source, &unit_name, path)
            .map_err(|e| CliError::failure(format!("Error: {}", e)))?,
        None => {
            let text = generator
                .generate_from(&mut source, &unit_name)
                .map_err(|e| CliError::failure(format!("Error: {}", e)))?;
            print!("{}", text);
        }
    }
    Ok(ExitCode::SUCCESS)
}

/// Print how every field of a document is classified.
pub fn list_fields(file: &Path, json: bool) -> CliResult<ExitCode> {
    let mut source = open_source(file)?;
    let fields = source
        .ordered_fields()
        .map_err(|e| CliError::failure(format!("Error: {}", e)))?;
    let report = FieldReport::new(unit_name_for(file), &fields);

    if json {
        let text = report
            .to_json()
            .map_err(|e| CliError::failure(format!("Error serializing field report: {}", e)))?;
        println!("{}", text);
    } else {
        print!("{}", report.to_table());
    }
    Ok(ExitCode::SUCCESS)
}

fn open_source(file: &Path) -> CliResult<PdfFormSource> {
    PdfFormSource::open(file).map_err(|e| CliError::failure(format!("Error: {}", e)))
}
