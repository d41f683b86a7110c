//! Unit generation facade
//!
//! `UnitGenerator` ties the pipeline together:
//!
//! ```text
//! FieldSource → FormField list → classify → render → IrUnit → IrEmitter → source text
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use formgen::backend::{UnitConfig, UnitGenerator};
//! use formgen_core::{FieldKind, FormField};
//!
//! let generator = UnitGenerator::with_config(UnitConfig::new().with_jurisdiction("OR"));
//! let text = generator.generate(&[FormField::new("1", true, FieldKind::Text)], "Schedule1");
//! assert!(text.contains("l1 = (): number =>"));
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use formgen_core::FormField;
use thiserror::Error;

use super::assemble::{assemble, build_unit};
use super::config::UnitConfig;
use super::ir::IrUnit;
use crate::frontend::{FieldSource, SourceError};

/// Error during unit generation.
///
/// Generation itself is infallible; only reading the document and writing the result can fail.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error("cannot write {}: {source}", path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Generates accessor-stub units with a fixed configuration.
#[derive(Debug, Clone, Default)]
pub struct UnitGenerator {
    config: UnitConfig,
}

impl UnitGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: UnitConfig) -> Self {
        Self { config }
    }

    /// Generate the source text for an ordered field list.
    pub fn generate(&self, fields: &[FormField], unit_name: &str) -> String {
        assemble(fields, unit_name, &self.config)
    }

    /// Build the IR without serializing it.
    pub fn lower(&self, fields: &[FormField], unit_name: &str) -> IrUnit {
        build_unit(fields, unit_name, &self.config)
    }

    /// Read every field from `source` and generate its unit.
    pub fn generate_from(&self, source: &mut dyn FieldSource, unit_name: &str) -> Result<String, GenerationError> {
        let fields = source.ordered_fields()?;
        Ok(self.generate(&fields, unit_name))
    }

    /// Generate a unit and write it to `path`.
    pub fn generate_to(
        &self,
        source: &mut dyn FieldSource,
        unit_name: &str,
        path: &Path,
    ) -> Result<(), GenerationError> {
        let text = self.generate_from(source, unit_name)?;
        fs::write(path, text).map_err(|source| GenerationError::Output {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(path = %path.display(), "wrote generated unit");
        Ok(())
    }
}
