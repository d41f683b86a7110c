//! Fold an ordered field list into a complete generated unit.
//!
//! Each field is classified and rendered in document order; the accessors are collected into one class along with
//! the host scaffolding (properties, constructor), a registry listing every accessor, and a factory function.
//! Assembly is pure: it performs no I/O and produces the whole unit at once.

use formgen_core::naming::factory_identifier;
use formgen_core::{ClassifiedField, Collision, FormField, classify, find_collisions, normalize_name};

use super::config::UnitConfig;
use super::emit::IrEmitter;
use super::ir::{
    IrAssign, IrClass, IrConstructor, IrDecl, IrExpr, IrFactory, IrParam, IrProperty, IrRegistry, IrType, IrUnit,
};
use super::render::render;

/// Comment attached to the jurisdiction assignment.
const FILL_HERE: &str = "<-- Fill here";

/// Generate the source text of a unit.
///
/// ## Parameters
/// - `fields`: every form field, in document order.
/// - `unit_name`: the form's name (usually the document's file stem); normalized into the class name.
/// - `config`: scaffolding and layout settings.
///
/// ## Returns
/// - (`String`): the generated unit. Identical inputs always yield byte-identical output.
pub fn assemble(fields: &[FormField], unit_name: &str, config: &UnitConfig) -> String {
    let unit = build_unit(fields, unit_name, config);
    let mut emitter = IrEmitter::new(config.indent_width);
    emitter.emit_unit(&unit);
    emitter.finish()
}

/// Classify every field at its document index.
pub fn classify_all(fields: &[FormField]) -> Vec<ClassifiedField> {
    fields.iter().enumerate().map(|(i, f)| classify(f, i)).collect()
}

/// Build the IR of a unit without serializing it.
pub fn build_unit(fields: &[FormField], unit_name: &str, config: &UnitConfig) -> IrUnit {
    let classified = classify_all(fields);
    for c in &classified {
        tracing::debug!(
            index = c.index,
            identifier = %c.identifier,
            alias = ?c.alias,
            return_type = c.return_type.as_str(),
            optional = c.optional,
            "classified field"
        );
    }
    report_collisions(&classified, fields);

    let mut members = Vec::with_capacity(fields.len() * 2 + 1);
    let mut entries = Vec::with_capacity(fields.len());
    for (c, field) in classified.iter().zip(fields) {
        let rendered = render(c, field, c.index);
        members.extend(rendered.decls);
        entries.push(rendered.public_name);
    }
    members.push(IrDecl::Registry(IrRegistry {
        name: config.registry_name.clone(),
        return_type: IrType::array_of(IrType::named(config.registry_element.as_str())),
        entries,
    }));

    let class_name = normalize_name(unit_name);
    if class_name.is_empty() {
        tracing::warn!(unit_name, "unit name has no letters or digits; generated class will be unnamed");
    }
    tracing::info!(unit = %class_name, fields = fields.len(), "assembled unit");

    let host_param = IrParam {
        name: config.host_param.clone(),
        ty: IrType::named(config.host_type.as_str()),
    };

    IrUnit {
        imports: config.imports.clone(),
        class: IrClass {
            name: class_name.clone(),
            extends: Some(config.base_class.clone()),
            properties: host_properties(config),
            constructor: Some(host_constructor(config, unit_name, host_param.clone())),
            members,
        },
        factory: IrFactory {
            name: factory_identifier(&class_name),
            param: host_param,
            class_name,
            export_default: true,
        },
    }
}

fn host_properties(config: &UnitConfig) -> Vec<IrProperty> {
    vec![
        IrProperty {
            name: "info".to_string(),
            ty: IrType::named("ValidatedInformation"),
        },
        IrProperty {
            name: config.host_param.clone(),
            ty: IrType::named(config.host_type.as_str()),
        },
        IrProperty {
            name: "formName".to_string(),
            ty: IrType::String,
        },
        IrProperty {
            name: "state".to_string(),
            ty: IrType::named("State"),
        },
    ]
}

fn host_constructor(config: &UnitConfig, unit_name: &str, host_param: IrParam) -> IrConstructor {
    let assign = |property: &str, value: IrExpr| IrAssign {
        property: property.to_string(),
        value,
        comment: None,
    };
    IrConstructor {
        assignments: vec![
            assign("info", IrExpr::Path(vec![config.host_param.clone(), "info".to_string()])),
            assign(&config.host_param, IrExpr::ident(config.host_param.as_str())),
            assign("formName", IrExpr::string(unit_name)),
            IrAssign {
                property: "state".to_string(),
                value: IrExpr::string(config.jurisdiction.as_str()),
                comment: Some(FILL_HERE.to_string()),
            },
        ],
        params: vec![host_param],
        calls_super: true,
    }
}

/// Log naming problems. The generated text is left as is.
fn report_collisions(classified: &[ClassifiedField], fields: &[FormField]) {
    for collision in find_collisions(classified) {
        match collision {
            Collision::EmptyIdentifier { index } => {
                let raw_name = fields.get(index).map(|f| f.raw_name.as_str()).unwrap_or_default();
                tracing::warn!(index, raw_name, "field label has no letters or digits; accessor will be unnamed");
            }
            Collision::LeadingDigit { index, identifier } => {
                tracing::warn!(index, %identifier, "identifier starts with a digit and is not a legal member name");
            }
            Collision::Duplicate { identifier, indices } => {
                tracing::warn!(%identifier, ?indices, "identifier bound more than once");
            }
        }
    }
}
