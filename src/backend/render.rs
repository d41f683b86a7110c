//! Render one classified field as accessor declarations.
//!
//! Every field becomes a stub accessor that returns its default value. Name-addressed fields also get a positional
//! alias (`f7 = (): T => this.spouseSocialNumber()`) that forwards to the named accessor, so both access paths stay
//! in sync.

use formgen_core::{ClassifiedField, FormField};

use super::emit::IrEmitter;
use super::ir::{IrAccessor, IrAlias, IrDecl, IrExpr, IrType};

/// Declarations for one field plus the identifier the registry must use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedAccessor {
    /// The accessor, followed by its alias when the field is name-addressed
    pub decls: Vec<IrDecl>,
    /// Canonical accessor identifier (never the alias)
    pub public_name: String,
}

impl RenderedAccessor {
    /// Serialize the declarations on their own, unindented.
    pub fn source_text(&self, indent_width: usize) -> String {
        let mut emitter = IrEmitter::new(indent_width);
        emitter.emit_members(&self.decls);
        emitter.finish()
    }
}

/// Build the accessor (and alias) declarations for a field.
///
/// ## Parameters
/// - `classified`: decisions from [`formgen_core::classify`] for this field.
/// - `field`: the field as read from the document; its raw label is recorded in the doc comment.
/// - `index`: the field's document index.
pub fn render(classified: &ClassifiedField, field: &FormField, index: usize) -> RenderedAccessor {
    let return_type = IrType::accessor(classified.return_type, classified.optional);

    let accessor = IrAccessor {
        doc: vec![format!("Index {index}: {}", field.raw_name)],
        name: classified.identifier.clone(),
        return_type: return_type.clone(),
        body: IrExpr::Literal(classified.default_literal.into()),
    };

    let mut decls = vec![IrDecl::Accessor(accessor)];
    if let Some(alias) = &classified.alias {
        decls.push(IrDecl::Alias(IrAlias {
            name: alias.clone(),
            return_type,
            target: classified.identifier.clone(),
        }));
    }

    RenderedAccessor {
        decls,
        public_name: classified.identifier.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::ir::IrLiteral;
    use formgen_core::{FieldKind, classify};

    fn rendered(name: &str, required: bool, kind: FieldKind, index: usize) -> RenderedAccessor {
        let field = FormField::new(name, required, kind);
        render(&classify(&field, index), &field, index)
    }

    #[test]
    fn test_numeric_field_has_no_alias() {
        let r = rendered("123", true, FieldKind::Text, 0);
        assert_eq!(r.public_name, "l123");
        assert_eq!(r.decls.len(), 1);
        match &r.decls[0] {
            IrDecl::Accessor(a) => {
                assert_eq!(a.name, "l123");
                assert_eq!(a.return_type, IrType::Number);
                assert_eq!(a.body, IrExpr::Literal(IrLiteral::Str(String::new())));
                assert_eq!(a.doc, vec!["Index 0: 123".to_string()]);
            }
            other => panic!("expected accessor, got {other:?}"),
        }
    }

    #[test]
    fn test_named_field_gets_forwarding_alias() {
        let r = rendered("isMarried", true, FieldKind::Checkbox, 1);
        assert_eq!(r.public_name, "isMarried");
        assert_eq!(r.decls.len(), 2);
        assert_eq!(
            r.decls[1],
            IrDecl::Alias(IrAlias {
                name: "f1".to_string(),
                return_type: IrType::Boolean,
                target: "isMarried".to_string(),
            })
        );
    }

    #[test]
    fn test_public_name_is_never_the_alias() {
        let r = rendered("optionalField", false, FieldKind::Text, 2);
        assert_eq!(r.public_name, "optionalField");
        assert_ne!(r.public_name, "f2");
    }

    #[test]
    fn test_source_text_numeric() {
        let r = rendered("123", true, FieldKind::Text, 0);
        assert_eq!(
            r.source_text(2),
            "/**\n * Index 0: 123\n */\nl123 = (): number => {\n  return ''\n}\n"
        );
    }

    #[test]
    fn test_source_text_optional_with_alias() {
        let r = rendered("optionalField", false, FieldKind::Text, 2);
        let text = r.source_text(2);
        assert!(text.contains("optionalField = (): string | undefined => {"));
        assert!(text.contains("  return undefined\n"));
        assert!(text.contains("f2 = (): string | undefined => this.optionalField()"));
    }

    #[test]
    fn test_source_text_checkbox() {
        let r = rendered("isMarried", true, FieldKind::Checkbox, 1);
        let text = r.source_text(2);
        assert!(text.contains("isMarried = (): boolean => {"));
        assert!(text.contains("return false"));
        assert!(text.contains("f1 = (): boolean => this.isMarried()"));
    }
}
