//! Generation settings for a unit of accessor stubs.
//!
//! Everything the generated class needs that does not come from the form itself lives here: the import preamble,
//! the host base class and constructor argument, the jurisdiction placeholder and layout.

use super::ir::IrImport;

/// Default jurisdiction written into the generated constructor.
pub const DEFAULT_JURISDICTION: &str = "AK";

/// Default spaces per indentation level.
pub const DEFAULT_INDENT_WIDTH: usize = 2;

/// Configuration for one generated unit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitConfig {
    /// Number of spaces per indentation level
    pub indent_width: usize,
    /// Jurisdiction code assigned to `state`; a placeholder for the author to fill in
    pub jurisdiction: String,
    /// Class the generated form extends
    pub base_class: String,
    /// Name of the constructor parameter holding the parent return
    pub host_param: String,
    /// Type of the constructor parameter
    pub host_type: String,
    /// Import lines emitted before the class, in order
    pub imports: Vec<IrImport>,
    /// Name of the registry method
    pub registry_name: String,
    /// Element type of the registry array
    pub registry_element: String,
}

impl Default for UnitConfig {
    fn default() -> Self {
        Self {
            indent_width: DEFAULT_INDENT_WIDTH,
            jurisdiction: DEFAULT_JURISDICTION.to_string(),
            base_class: "Form".to_string(),
            host_param: "f1040".to_string(),
            host_type: "F1040".to_string(),
            imports: default_imports(),
            registry_name: "fields".to_string(),
            registry_element: "Field".to_string(),
        }
    }
}

impl UnitConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the indentation width
    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }

    /// Set the jurisdiction placeholder
    pub fn with_jurisdiction(mut self, code: impl Into<String>) -> Self {
        self.jurisdiction = code.into();
        self
    }

    /// Set the base class
    pub fn with_base_class(mut self, base: impl Into<String>) -> Self {
        self.base_class = base.into();
        self
    }

    /// Replace the import preamble
    pub fn with_imports(mut self, imports: Vec<IrImport>) -> Self {
        self.imports = imports;
        self
    }
}

/// The preamble a tax-form module expects.
fn default_imports() -> Vec<IrImport> {
    vec![
        IrImport::default_import("Form", "@core/irsForms/Form"),
        IrImport::default_import("F1040", "@core/irsForms/F1040"),
        IrImport::named(&["Field"], "@core/pdfFiller"),
        IrImport::named(&["displayNumber", "sumFields"], "@core/irsForms/util"),
        IrImport::named(&["AccountType", "FilingStatus", "State"], "@core/data"),
        IrImport::named(&["ValidatedInformation"], "ustaxes/forms/F1040Base"),
    ]
}
