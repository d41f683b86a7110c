//! Serialize an [`IrUnit`] to TypeScript source text.
//!
//! Formatting decisions (blank lines, indentation, quoting, comment escaping) live only here; lowering and
//! assembly never build text.

use super::ir::{
    IrAccessor, IrAlias, IrClass, IrConstructor, IrDecl, IrExpr, IrFactory, IrImport, IrLiteral, IrRegistry, IrType,
    IrUnit,
};
use super::writer::CodeWriter;

/// Emit source text from IR.
pub struct IrEmitter {
    writer: CodeWriter,
}

impl IrEmitter {
    pub fn new(indent_width: usize) -> Self {
        Self {
            writer: CodeWriter::new(indent_width),
        }
    }

    /// Get the emitted text
    pub fn finish(self) -> String {
        self.writer.finish()
    }

    /// Emit a whole unit: imports, class, factory.
    pub fn emit_unit(&mut self, unit: &IrUnit) {
        for import in &unit.imports {
            self.emit_import(import);
        }
        if !unit.imports.is_empty() {
            self.writer.newline();
        }
        self.emit_class(&unit.class);
        self.writer.newline();
        self.emit_factory(&unit.factory);
    }

    fn emit_import(&mut self, import: &IrImport) {
        let mut bindings = Vec::new();
        if let Some(default) = &import.default {
            bindings.push(default.clone());
        }
        if !import.named.is_empty() {
            bindings.push(format!("{{ {} }}", import.named.join(", ")));
        }
        let from = quote(&import.from);
        if bindings.is_empty() {
            self.writer.writeln(&format!("import {from}"));
        } else {
            self.writer.writeln(&format!("import {} from {from}", bindings.join(", ")));
        }
    }

    fn emit_class(&mut self, class: &IrClass) {
        let header = match &class.extends {
            Some(base) => format!("export class {} extends {base}", class.name),
            None => format!("export class {}", class.name),
        };
        self.writer.writeln(&format!("{header} {{"));
        self.writer.indent();
        self.emit_class_body(class);
        self.writer.dedent();
        self.writer.writeln("}");
    }

    fn emit_class_body(&mut self, class: &IrClass) {
        let mut first_section = true;

        if !class.properties.is_empty() {
            for prop in &class.properties {
                self.writer.writeln(&format!("{}: {}", prop.name, render_type(&prop.ty)));
            }
            first_section = false;
        }

        if let Some(ctor) = &class.constructor {
            if !first_section {
                self.writer.newline();
            }
            self.emit_constructor(ctor);
            first_section = false;
        }

        if !class.members.is_empty() {
            if !first_section {
                self.writer.newline();
            }
            self.emit_members(&class.members);
        }
    }

    fn emit_constructor(&mut self, ctor: &IrConstructor) {
        let params: Vec<String> = ctor
            .params
            .iter()
            .map(|p| format!("{}: {}", p.name, render_type(&p.ty)))
            .collect();
        self.writer.block(&format!("constructor({})", params.join(", ")), |w| {
            if ctor.calls_super {
                w.writeln("super()");
            }
            for assign in &ctor.assignments {
                let line = format!("this.{} = {}", assign.property, render_expr(&assign.value));
                match &assign.comment {
                    Some(comment) => w.writeln(&format!("{line} // {comment}")),
                    None => w.writeln(&line),
                }
            }
        });
    }

    /// Emit member declarations separated by blank lines.
    pub fn emit_members(&mut self, decls: &[IrDecl]) {
        for (i, decl) in decls.iter().enumerate() {
            if i > 0 {
                self.writer.newline();
            }
            self.emit_decl(decl);
        }
    }

    fn emit_decl(&mut self, decl: &IrDecl) {
        match decl {
            IrDecl::Accessor(accessor) => self.emit_accessor(accessor),
            IrDecl::Alias(alias) => self.emit_alias(alias),
            IrDecl::Registry(registry) => self.emit_registry(registry),
        }
    }

    fn emit_accessor(&mut self, accessor: &IrAccessor) {
        if !accessor.doc.is_empty() {
            self.writer.writeln("/**");
            for line in &accessor.doc {
                self.writer.writeln(&format!(" * {}", escape_doc(line)));
            }
            self.writer.writeln(" */");
        }
        let header = format!("{} = (): {} =>", accessor.name, render_type(&accessor.return_type));
        self.writer.block(&header, |w| {
            w.writeln(&format!("return {}", render_expr(&accessor.body)));
        });
    }

    fn emit_alias(&mut self, alias: &IrAlias) {
        let call = render_expr(&IrExpr::SelfCall(alias.target.clone()));
        self.writer.writeln(&format!(
            "{} = (): {} => {call}",
            alias.name,
            render_type(&alias.return_type)
        ));
    }

    fn emit_registry(&mut self, registry: &IrRegistry) {
        let head = format!("{} = (): {} =>", registry.name, render_type(&registry.return_type));
        if registry.entries.is_empty() {
            self.writer.writeln(&format!("{head} []"));
            return;
        }
        self.writer.writeln(&format!("{head} ["));
        self.writer.indent();
        let last = registry.entries.len() - 1;
        for (i, name) in registry.entries.iter().enumerate() {
            let entry = IrExpr::Array(vec![IrExpr::string(name.as_str()), IrExpr::SelfRef(name.clone())]);
            let sep = if i == last { "" } else { "," };
            self.writer.writeln(&format!("{}{sep}", render_expr(&entry)));
        }
        self.writer.dedent();
        self.writer.writeln("]");
    }

    fn emit_factory(&mut self, factory: &IrFactory) {
        self.writer.writeln(&format!(
            "const {} = ({}: {}): {} =>",
            factory.name,
            factory.param.name,
            render_type(&factory.param.ty),
            factory.class_name
        ));
        self.writer.indent();
        let construct = IrExpr::New {
            class: factory.class_name.clone(),
            args: vec![IrExpr::ident(factory.param.name.as_str())],
        };
        self.writer.writeln(&render_expr(&construct));
        self.writer.dedent();
        if factory.export_default {
            self.writer.newline();
            self.writer.writeln(&format!("export default {}", factory.name));
        }
    }
}

/// Render a type in annotation position.
pub fn render_type(ty: &IrType) -> String {
    match ty {
        IrType::Number => "number".to_string(),
        IrType::Boolean => "boolean".to_string(),
        IrType::String => "string".to_string(),
        IrType::Named(name) => name.clone(),
        IrType::Array(element) if element.is_optional() => format!("({})[]", render_type(element)),
        IrType::Array(element) => format!("{}[]", render_type(element)),
        IrType::Optional(inner) => format!("{} | undefined", render_type(inner)),
    }
}

/// Render a literal value.
pub fn render_literal(lit: &IrLiteral) -> String {
    match lit {
        IrLiteral::Absent => "undefined".to_string(),
        IrLiteral::Bool(b) => b.to_string(),
        IrLiteral::Str(s) => quote(s),
    }
}

/// Render an expression on a single line.
pub fn render_expr(expr: &IrExpr) -> String {
    match expr {
        IrExpr::Literal(lit) => render_literal(lit),
        IrExpr::Path(segments) => segments.join("."),
        IrExpr::SelfCall(name) => format!("this.{name}()"),
        IrExpr::SelfRef(name) => format!("this.{name}"),
        IrExpr::Array(items) => {
            let items: Vec<String> = items.iter().map(render_expr).collect();
            format!("[{}]", items.join(", "))
        }
        IrExpr::New { class, args } => {
            let args: Vec<String> = args.iter().map(render_expr).collect();
            format!("new {class}({})", args.join(", "))
        }
    }
}

/// Single-quoted string literal.
fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for ch in s.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            _ => out.push(ch),
        }
    }
    out.push('\'');
    out
}

/// Keep a doc line on one line and unable to close its comment.
fn escape_doc(line: &str) -> String {
    line.replace(['\r', '\n'], " ").replace("*/", "*\\/")
}
