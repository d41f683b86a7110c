//! IR declaration definitions

use super::{IrExpr, IrType};

/// A complete generated unit: imports, one class, and its factory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IrUnit {
    pub imports: Vec<IrImport>,
    pub class: IrClass,
    pub factory: IrFactory,
}

/// Import line (`import Form from '...'`, `import { A, B } from '...'`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IrImport {
    /// Default binding, if any
    pub default: Option<String>,
    /// Named bindings, in order
    pub named: Vec<String>,
    /// Module specifier
    pub from: String,
}

impl IrImport {
    pub fn default_import(binding: &str, from: &str) -> Self {
        Self {
            default: Some(binding.to_string()),
            named: Vec::new(),
            from: from.to_string(),
        }
    }

    pub fn named(bindings: &[&str], from: &str) -> Self {
        Self {
            default: None,
            named: bindings.iter().map(|b| b.to_string()).collect(),
            from: from.to_string(),
        }
    }
}

/// IR class definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IrClass {
    pub name: String,
    /// Base class, if any
    pub extends: Option<String>,
    /// Declared properties, emitted before the constructor
    pub properties: Vec<IrProperty>,
    pub constructor: Option<IrConstructor>,
    /// Member declarations, in emission order
    pub members: Vec<IrDecl>,
}

/// Declared class property (`state: State`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IrProperty {
    pub name: String,
    pub ty: IrType,
}

/// Function or constructor parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IrParam {
    pub name: String,
    pub ty: IrType,
}

/// IR constructor definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IrConstructor {
    pub params: Vec<IrParam>,
    /// Whether the body starts with `super()`
    pub calls_super: bool,
    /// Property assignments, in order
    pub assignments: Vec<IrAssign>,
}

/// Assignment to a property of `this`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IrAssign {
    pub property: String,
    pub value: IrExpr,
    /// Trailing line comment
    pub comment: Option<String>,
}

/// Class member declarations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IrDecl {
    /// Stub accessor for one form field
    Accessor(IrAccessor),
    /// Positional alias forwarding to an accessor
    Alias(IrAlias),
    /// Registry of every accessor
    Registry(IrRegistry),
}

/// Zero-argument accessor returning a fixed expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IrAccessor {
    /// Documentation comment lines
    pub doc: Vec<String>,
    pub name: String,
    pub return_type: IrType,
    pub body: IrExpr,
}

/// Alias whose body calls `target` on `this`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IrAlias {
    pub name: String,
    pub return_type: IrType,
    pub target: String,
}

/// Registry pairing each accessor's name with a reference to it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IrRegistry {
    pub name: String,
    pub return_type: IrType,
    /// Accessor identifiers, in field order
    pub entries: Vec<String>,
}

/// Factory function constructing the class from the host parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IrFactory {
    pub name: String,
    pub param: IrParam,
    pub class_name: String,
    /// Whether the factory is the module's default export
    pub export_default: bool,
}
