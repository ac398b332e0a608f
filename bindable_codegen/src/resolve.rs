//! Property name resolution and member-level rule checks.
//!
//! Only accepted fields claim a property name, so a rejected `pub` field
//! never shadows a later private one.

use std::collections::HashSet;

use syn::Visibility;

use crate::config::GeneratorConfig;
use crate::diagnostics::{DiagnosticKind, DiagnosticSink};
use crate::parse::metadata::{ClickHandler, FieldDecl, ObservableField};
use crate::utils::naming;

pub struct PropertyResolver<'a> {
    config: &'a GeneratorConfig,
    class: &'a str,
    diagnostics: &'a mut DiagnosticSink,
}

impl<'a> PropertyResolver<'a> {
    pub fn new(config: &'a GeneratorConfig, class: &'a str, diagnostics: &'a mut DiagnosticSink) -> Self {
        Self {
            config,
            class,
            diagnostics,
        }
    }

    /// Accepted observable fields, in declaration order.
    pub fn resolve_fields(&mut self, fields: &[FieldDecl]) -> Vec<ObservableField> {
        let prefixes = self.config.prefixes_longest_first();
        let mut claimed_properties = HashSet::new();
        // Getters and setters share one namespace on the model.
        let mut claimed_methods = HashSet::new();
        let mut accepted = Vec::new();

        for field in fields {
            let field_name = naming::unraw(&field.name);

            if matches!(field.vis, Visibility::Public(_)) {
                self.diagnostics.report(
                    DiagnosticKind::ObservableFieldMustNotBePublic,
                    self.class,
                    &field_name,
                    field.name.span(),
                    format!("observable field '{field_name}' must not be declared `pub`"),
                );
                continue;
            }

            let property = naming::property_name(&field_name, &prefixes);
            if !naming::is_valid_property_name(&property) {
                self.diagnostics.report(
                    DiagnosticKind::InvalidPropertyName,
                    self.class,
                    &field_name,
                    field.name.span(),
                    format!("field '{field_name}' derives the unusable property name '{property}'"),
                );
                continue;
            }

            let accessor = naming::accessor_name(&property);
            let setter = naming::setter_name(&property);
            if claimed_properties.contains(&property)
                || claimed_methods.contains(&accessor)
                || claimed_methods.contains(&setter)
            {
                self.diagnostics.report(
                    DiagnosticKind::DuplicatePropertyName,
                    self.class,
                    &field_name,
                    field.name.span(),
                    format!(
                        "field '{field_name}' derives property '{property}', whose name or accessors are already generated for an earlier field"
                    ),
                );
                continue;
            }

            claimed_properties.insert(property.clone());
            accepted.push(ObservableField {
                name: field.name.clone(),
                ty: field.ty.clone(),
                vis: field.vis.clone(),
                getter: naming::ident(&accessor),
                setter: naming::ident(&setter),
                property,
            });
            claimed_methods.insert(accessor);
            claimed_methods.insert(setter);
        }

        accepted
    }

    /// Handlers that keep their element; later claims on the same element
    /// name are rejected.
    pub fn resolve_handlers(&mut self, handlers: Vec<ClickHandler>) -> Vec<ClickHandler> {
        let mut claimed = HashSet::new();
        let mut accepted = Vec::new();
        for handler in handlers {
            if !claimed.insert(handler.element.clone()) {
                self.diagnostics.report(
                    DiagnosticKind::DuplicateElementName,
                    self.class,
                    &handler.name.to_string(),
                    handler.name.span(),
                    format!(
                        "element '{}' is already bound by an earlier click handler",
                        handler.element
                    ),
                );
                continue;
            }
            accepted.push(handler);
        }
        accepted
    }
}
