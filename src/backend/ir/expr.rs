//! IR expression definitions

use formgen_core::DefaultLiteral;

/// Literal values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IrLiteral {
    /// The absent value (`undefined`)
    Absent,
    Bool(bool),
    Str(String),
}

impl From<DefaultLiteral> for IrLiteral {
    fn from(lit: DefaultLiteral) -> Self {
        match lit {
            DefaultLiteral::Absent => IrLiteral::Absent,
            DefaultLiteral::False => IrLiteral::Bool(false),
            DefaultLiteral::EmptyString => IrLiteral::Str(String::new()),
        }
    }
}

/// An IR expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IrExpr {
    Literal(IrLiteral),
    /// Dotted path (`f1040.info`)
    Path(Vec<String>),
    /// Zero-argument call of a member on `this` (`this.name()`)
    SelfCall(String),
    /// Member of `this` without a call (`this.name`)
    SelfRef(String),
    /// Array literal
    Array(Vec<IrExpr>),
    /// Constructor call (`new Class(args)`)
    New { class: String, args: Vec<IrExpr> },
}

impl IrExpr {
    pub fn string(s: impl Into<String>) -> Self {
        IrExpr::Literal(IrLiteral::Str(s.into()))
    }

    pub fn ident(name: impl Into<String>) -> Self {
        IrExpr::Path(vec![name.into()])
    }
}
