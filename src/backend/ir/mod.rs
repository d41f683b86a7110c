//! Structured Intermediate Representation (IR) of a generated unit
//!
//! Accessors, aliases and the class scaffolding are built as a small declaration tree first and serialized to text
//! in a separate step ([`crate::backend::emit`]). The tree can be inspected directly, which keeps checks on the
//! generated shape independent of formatting.
//!
//! ## Pipeline
//!
//! ```text
//! FormField → classify → ClassifiedField → render → IrDecl* → assemble → IrUnit → IrEmitter → text
//! ```

pub mod decl;
pub mod expr;
pub mod types;

pub use decl::{
    IrAccessor, IrAlias, IrAssign, IrClass, IrConstructor, IrDecl, IrFactory, IrImport, IrParam, IrProperty,
    IrRegistry, IrUnit,
};
pub use expr::{IrExpr, IrLiteral};
pub use types::IrType;
