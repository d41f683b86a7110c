//! Code generation backend
//!
//! Turns an ordered field list into the source text of one generated unit.
//!
//! ## Module Organization
//!
//! - `render` - one classified field → accessor (and alias) declarations
//! - `assemble` - every field → complete `IrUnit` (imports, class, registry, factory)
//! - `ir/` - the declaration tree the generator builds
//! - `emit` - `IrUnit` → text
//! - `writer` - indentation-tracking string builder used by the emitter
//! - `config` - `UnitConfig`, the scaffolding and layout settings
//! - `codegen` - `UnitGenerator`, the entry point used by the CLI

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]

pub mod assemble;
pub mod codegen;
pub mod config;
pub mod emit;
pub mod ir;
pub mod render;
pub mod writer;

pub use assemble::assemble;
pub use codegen::{GenerationError, UnitGenerator};
pub use config::UnitConfig;
pub use render::{RenderedAccessor, render};
