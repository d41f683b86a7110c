#![forbid(unsafe_code)]
//! formgen: accessor stubs from fillable forms
//!
//! Reads the interactive fields of a fillable PDF and generates a TypeScript class with one typed accessor stub per
//! field, a positional alias for every name-addressed field, and a registry listing all accessors in document order.
//! The naming and classification rules live in the `formgen_core` crate; this crate provides the document provider
//! (frontend), code generation (backend) and the command line.
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` and `backend` modules
//!   enforce `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! - **True invariants**: If a panic represents a generator bug (logic error), use `.expect("INVARIANT: reason")` with
//!   a clear explanation.

pub mod backend;
pub mod cli;
pub mod frontend;

pub use backend::{GenerationError, UnitConfig, UnitGenerator, assemble};
pub use frontend::{FieldSource, PdfFormSource, SourceError};
