//! Provide the pure semantic core of the form-field code generator.
//!
//! This crate decides *what* gets generated for each form field: the identifier an accessor is known by,
//! whether the field is addressed by a printed line number or by its label, the accessor's return type, and the
//! stub's default value. Rendering that decision as source text lives in the `formgen` crate.
//!
//! ## Notes
//!
//! - This is a “semantic core” crate: **no IO**, no global state, no third-party dependencies.
//! - Every helper is a deterministic function of its inputs; running the same field list twice yields the same
//!   classifications.
//!
//! ## Examples
//! ```rust
//! use formgen_core::{FieldKind, FormField, classify};
//!
//! let field = FormField::new("Spouse Social Number", true, FieldKind::Text);
//! let classified = classify(&field, 7);
//! assert_eq!(classified.identifier, "spouseSocialNumber");
//! assert_eq!(classified.alias.as_deref(), Some("f7"));
//! ```

pub mod classify;
pub mod field;
pub mod naming;

pub use classify::{Addressing, ClassifiedField, Collision, DefaultLiteral, ReturnType, classify, find_collisions};
pub use field::{FieldKind, FormField};
pub use naming::{is_line_number, method_case, normalize_name};
