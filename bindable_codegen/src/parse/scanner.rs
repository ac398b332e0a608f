//! Declaration scanning
//!
//! Walks the items of a compilation unit (a file or the body of an inline
//! module) and returns every struct carrying `#[reactive_model]`, paired with
//! the inherent impl blocks of the same type found next to it. Nested inline
//! modules are scanned recursively and contribute their path to the class's
//! qualified name.

use syn::{Attribute, Fields, File, Item, ItemImpl, ItemMod, Type, spanned::Spanned, visit::Visit};

use super::markers::{Marker, MarkerKind, find_marker};
use super::metadata::CandidateClass;
use crate::diagnostics::{DiagnosticKind, DiagnosticSink};

#[derive(Debug, Default)]
pub struct DeclarationScanner<'ast> {
    path: Vec<String>,
    pub candidates: Vec<CandidateClass<'ast>>,
    pub diagnostics: DiagnosticSink,
}

impl<'ast> Visit<'ast> for DeclarationScanner<'ast> {
    fn visit_file(&mut self, i: &'ast File) {
        self.scan_items(&i.items);
    }

    fn visit_item_mod(&mut self, i: &'ast ItemMod) {
        if let Some((_, items)) = &i.content {
            self.path.push(i.ident.to_string());
            self.scan_items(items);
            self.path.pop();
        }
    }
}

impl<'ast> DeclarationScanner<'ast> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scan a whole file.
    pub fn scan_file(file: &'ast File) -> Self {
        let mut scanner = Self::new();
        scanner.visit_file(file);
        scanner
    }

    /// Scan the items of a module body without qualifying names by the
    /// module itself.
    pub fn scan_module_items(items: &'ast [Item]) -> Self {
        let mut scanner = Self::new();
        scanner.scan_items(items);
        scanner
    }

    fn qualify(&self, name: &str) -> String {
        if self.path.is_empty() {
            name.to_string()
        } else {
            format!("{}::{}", self.path.join("::"), name)
        }
    }

    fn scan_items(&mut self, items: &'ast [Item]) {
        for item in items {
            match item {
                Item::Struct(item_struct) => {
                    let Some(allow_cycles) = self.model_marker(&item_struct.attrs, &item_struct.ident)
                    else {
                        continue;
                    };
                    let qualified_name = self.qualify(&item_struct.ident.to_string());
                    if !matches!(item_struct.fields, Fields::Named(_)) {
                        self.diagnostics.report(
                            DiagnosticKind::UnsupportedDeclaration,
                            &qualified_name,
                            &item_struct.ident.to_string(),
                            item_struct.ident.span(),
                            "reactive_model only supports structs with named fields",
                        );
                        continue;
                    }
                    log::trace!("found reactive model {qualified_name}");
                    self.candidates.push(CandidateClass {
                        qualified_name,
                        item: item_struct,
                        impls: inherent_impls_of(items, &item_struct.ident.to_string()),
                        allow_cycles,
                    });
                }
                Item::Enum(item_enum) => {
                    self.reject_non_struct(&item_enum.attrs, &item_enum.ident, "an enum");
                }
                Item::Union(item_union) => {
                    self.reject_non_struct(&item_union.attrs, &item_union.ident, "a union");
                }
                Item::Mod(item_mod) => self.visit_item_mod(item_mod),
                _ => {}
            }
        }
    }

    /// `Some(allow_cycles)` when the item is marked, `None` otherwise.
    fn model_marker(&mut self, attrs: &[Attribute], ident: &syn::Ident) -> Option<bool> {
        let (attr, marker) = find_marker(attrs, MarkerKind::ReactiveModel)?;
        match marker {
            Ok(Marker::ReactiveModel { allow_cycles }) => Some(allow_cycles),
            Ok(_) => None,
            Err(e) => {
                let qualified_name = self.qualify(&ident.to_string());
                self.diagnostics.report(
                    DiagnosticKind::MalformedMarker,
                    &qualified_name,
                    &ident.to_string(),
                    attr.span(),
                    e.to_string(),
                );
                None
            }
        }
    }

    fn reject_non_struct(&mut self, attrs: &[Attribute], ident: &syn::Ident, what: &str) {
        if find_marker(attrs, MarkerKind::ReactiveModel).is_some() {
            let qualified_name = self.qualify(&ident.to_string());
            self.diagnostics.report(
                DiagnosticKind::UnsupportedDeclaration,
                &qualified_name,
                &ident.to_string(),
                ident.span(),
                format!("reactive_model cannot be applied to {what}"),
            );
        }
    }
}

/// Inherent (non-trait) impl blocks whose self type is `name`.
fn inherent_impls_of<'ast>(items: &'ast [Item], name: &str) -> Vec<&'ast ItemImpl> {
    items
        .iter()
        .filter_map(|item| match item {
            Item::Impl(item_impl) if item_impl.trait_.is_none() => Some(item_impl),
            _ => None,
        })
        .filter(|item_impl| self_type_name(&item_impl.self_ty).as_deref() == Some(name))
        .collect()
}

fn self_type_name(ty: &Type) -> Option<String> {
    match ty {
        Type::Path(type_path) if type_path.qself.is_none() => type_path
            .path
            .segments
            .last()
            .map(|segment| segment.ident.to_string()),
        _ => None,
    }
}
