//! IR type definitions
//!
//! These types describe the declared types of generated members.

use formgen_core::ReturnType;

/// IR type representation
///
/// Maps directly onto the generated language's type syntax.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IrType {
    Number,
    Boolean,
    String,
    /// A host type referenced by name (`F1040`, `State`)
    Named(String),
    /// Array of the element type (`Field[]`)
    Array(Box<IrType>),
    /// The inner type or the absent value (`string | undefined`)
    Optional(Box<IrType>),
}

impl IrType {
    /// Type of an accessor returning `base`, optionally unioned with absent.
    pub fn accessor(base: ReturnType, optional: bool) -> Self {
        let ty = match base {
            ReturnType::Number => IrType::Number,
            ReturnType::Boolean => IrType::Boolean,
            ReturnType::String => IrType::String,
        };
        if optional { IrType::Optional(Box::new(ty)) } else { ty }
    }

    pub fn named(name: impl Into<String>) -> Self {
        IrType::Named(name.into())
    }

    pub fn array_of(element: IrType) -> Self {
        IrType::Array(Box::new(element))
    }

    /// Whether the type admits the absent value.
    pub fn is_optional(&self) -> bool {
        matches!(self, IrType::Optional(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessor_required_types() {
        assert_eq!(IrType::accessor(ReturnType::Number, false), IrType::Number);
        assert_eq!(IrType::accessor(ReturnType::Boolean, false), IrType::Boolean);
        assert_eq!(IrType::accessor(ReturnType::String, false), IrType::String);
    }

    #[test]
    fn test_accessor_optional_wraps() {
        let ty = IrType::accessor(ReturnType::String, true);
        assert_eq!(ty, IrType::Optional(Box::new(IrType::String)));
        assert!(ty.is_optional());
    }
}
