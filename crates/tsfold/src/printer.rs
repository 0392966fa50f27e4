//! A ready-made display fold.
//!
//! [`TypePrinter`] and [`DeclarationPrinter`] fold any graph into
//! source-flavored one-liners (`string | number`, `interface Box<T =
//! string> { value: T }`). They double as the reference algebra: every
//! closed case has a rendering, and both are stateless, so re-entry is
//! trivially safe.

use crate::fold::{DeclarationFolder, TypeFolder};
use crate::shapes::{
    Class, Function, Interface, Module, Property, TypeAlias, TypeParameter, TypeReference,
};
use tsfold_common::FullyQualifiedName;

/// Folds type expressions to display strings.
pub struct TypePrinter;

impl<H> TypeFolder<H> for TypePrinter {
    type Type = String;

    fn primitive(&mut self, name: &str) -> String {
        name.to_string()
    }

    fn boolean_literal(&mut self, value: bool) -> String {
        value.to_string()
    }

    fn number_literal(&mut self, value: f64) -> String {
        value.to_string()
    }

    fn string_literal(&mut self, value: &str) -> String {
        format!("\"{}\"", value)
    }

    fn array(&mut self, element: String) -> String {
        // Multi-token element types need grouping to read back correctly.
        if element.contains(' ') {
            format!("({})[]", element)
        } else {
            format!("{}[]", element)
        }
    }

    fn tuple(&mut self, elements: Vec<String>) -> String {
        format!("[{}]", elements.join(", "))
    }

    fn union(&mut self, members: Vec<String>) -> String {
        members.join(" | ")
    }

    fn intersection(&mut self, members: Vec<String>) -> String {
        members.join(" & ")
    }

    fn function(&mut self, function: Function<String>) -> String {
        let parameters: Vec<String> = function
            .parameters
            .into_iter()
            .map(|parameter| format!("{}: {}", parameter.name, parameter.ty))
            .collect();
        format!("({}) => {}", parameters.join(", "), function.return_type)
    }

    fn anonymous_object(
        &mut self,
        _fully_qualified_name: FullyQualifiedName,
        properties: Vec<Property<String>>,
    ) -> String {
        if properties.is_empty() {
            return "{}".to_string();
        }
        format!("{{ {} }}", property_list(properties))
    }

    fn type_parameter(&mut self, parameter: TypeParameter<String>) -> String {
        parameter.name
    }

    fn type_reference(&mut self, reference: TypeReference<H, String>) -> String {
        if reference.type_arguments.is_empty() {
            reference.fully_qualified_name.to_string()
        } else {
            format!(
                "{}<{}>",
                reference.fully_qualified_name,
                reference.type_arguments.join(", ")
            )
        }
    }

    fn unknown(&mut self, diagnostic: &str) -> String {
        format!("<unknown: {}>", diagnostic)
    }
}

/// Folds declarations to display strings.
pub struct DeclarationPrinter;

impl<H> DeclarationFolder<H> for DeclarationPrinter {
    type Type = String;
    type Decl = String;

    fn class(&mut self, class: Class<String>) -> String {
        format!(
            "class {}{} {}",
            class.name,
            type_parameter_list(class.type_parameters),
            body(class.properties)
        )
    }

    fn interface(&mut self, interface: Interface<String>) -> String {
        format!(
            "interface {}{} {}",
            interface.name,
            type_parameter_list(interface.type_parameters),
            body(interface.properties)
        )
    }

    fn module(&mut self, module: Module<String>) -> String {
        if module.declarations.is_empty() {
            format!("module {} {{}}", module.fully_qualified_name)
        } else {
            format!(
                "module {} {{ {} }}",
                module.fully_qualified_name,
                module.declarations.join("; ")
            )
        }
    }

    fn type_alias(&mut self, alias: TypeAlias<String>) -> String {
        format!(
            "type {}{} = {}",
            alias.name,
            type_parameter_list(alias.type_parameters),
            alias.ty
        )
    }

    fn unknown(
        &mut self,
        diagnostic: &str,
        fully_qualified_name: Option<FullyQualifiedName>,
    ) -> String {
        match fully_qualified_name {
            Some(name) => format!("<unknown {}: {}>", name, diagnostic),
            None => format!("<unknown: {}>", diagnostic),
        }
    }
}

fn type_parameter_list(parameters: Vec<TypeParameter<String>>) -> String {
    if parameters.is_empty() {
        return String::new();
    }
    let rendered: Vec<String> = parameters
        .into_iter()
        .map(|parameter| match parameter.default {
            Some(default) => format!("{} = {}", parameter.name, default),
            None => parameter.name,
        })
        .collect();
    format!("<{}>", rendered.join(", "))
}

fn property_list(properties: Vec<Property<String>>) -> String {
    let rendered: Vec<String> = properties
        .into_iter()
        .map(|property| {
            let marker = if property.optional { "?" } else { "" };
            format!("{}{}: {}", property.name, marker, property.ty)
        })
        .collect();
    rendered.join("; ")
}

fn body(properties: Vec<Property<String>>) -> String {
    if properties.is_empty() {
        "{}".to_string()
    } else {
        format!("{{ {} }}", property_list(properties))
    }
}
