//! CLI module for the form accessor generator
//!
//! This module provides the command-line interface.
//!
//! ## Usage
//!
//! - `formgen <FILE>` - Print the generated unit for a form document
//! - `formgen <FILE> <OUTPUT>` - Write the generated unit to `OUTPUT`
//! - `formgen --fields [--json] <FILE>` - List how every field is classified
//!
//! ## Modules
//!
//! - `commands` - Command implementations
//! - `report` - Field classification listing
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;
pub mod report;

use std::env;
use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::{CommandFactory, Parser};

use crate::backend::UnitConfig;
use crate::backend::config::{DEFAULT_INDENT_WIDTH, DEFAULT_JURISDICTION};

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Generate accessor stubs from the fields of a fillable form
#[derive(Parser, Debug)]
#[command(name = "formgen")]
#[command(version = VERSION)]
#[command(about = "Generate accessor stubs from the fields of a fillable form", long_about = None)]
pub struct Cli {
    /// Form document (PDF) to read
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Write the generated unit here instead of stdout
    #[arg(value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// List classified fields instead of generating code
    #[arg(long = "fields", conflicts_with = "output")]
    pub fields: bool,

    /// Print the field listing as JSON
    #[arg(long = "json", requires = "fields")]
    pub json: bool,

    /// Jurisdiction placeholder written into the constructor
    #[arg(long = "state", value_name = "CODE", default_value = DEFAULT_JURISDICTION)]
    pub state: String,

    /// Spaces per indentation level
    #[arg(long = "indent", value_name = "N", default_value_t = DEFAULT_INDENT_WIDTH)]
    pub indent: usize,
}

impl Cli {
    /// Generation settings selected on the command line.
    pub fn unit_config(&self) -> UnitConfig {
        UnitConfig::new()
            .with_indent_width(self.indent)
            .with_jurisdiction(self.state.as_str())
    }
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    tracing::debug!(args = ?env::args().collect::<Vec<_>>(), "command line");

    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    let config = cli.unit_config();

    let Some(file) = cli.file else {
        // No document - show usage
        Cli::command()
            .print_help()
            .map_err(|e| CliError::failure(format!("Error printing help: {}", e)))?;
        return Ok(ExitCode::SUCCESS);
    };

    if cli.fields {
        return commands::list_fields(&file, cli.json);
    }

    commands::generate_file(&file, cli.output.as_deref(), config)
}

// ============================================================================
// Tests
// ============================================================================
