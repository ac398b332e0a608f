//! Metadata structures for reactive models
//!
//! These structures hold the information extracted from the AST. Scanner and
//! extractor outputs borrow from the syntax tree; the final [`ReactiveClass`]
//! owns everything it needs so the emitter never looks back at the source.

use std::collections::BTreeMap;

use syn::{Generics, Ident, ImplItemFn, ItemImpl, ItemStruct, Type, Visibility};

/// A struct carrying `#[reactive_model]` together with its inherent impls.
#[derive(Debug, Clone)]
pub struct CandidateClass<'ast> {
    /// Name including enclosing inline modules (e.g., `ui::Counter`).
    pub qualified_name: String,
    pub item: &'ast ItemStruct,
    pub impls: Vec<&'ast ItemImpl>,
    pub allow_cycles: bool,
}

/// Raw marked members of one class, in declaration order.
#[derive(Debug, Clone)]
pub struct ExtractedClass<'ast> {
    pub name: Ident,
    pub qualified_name: String,
    pub generics: Generics,
    pub allow_cycles: bool,
    pub fields: Vec<FieldDecl>,
    pub updaters: Vec<&'ast ImplItemFn>,
    pub handlers: Vec<ClickHandler>,
}

/// A field carrying `#[observable]`, before name resolution.
#[derive(Debug, Clone)]
pub struct FieldDecl {
    pub name: Ident,
    pub ty: Type,
    pub vis: Visibility,
}

/// An accepted observable field.
#[derive(Debug, Clone)]
pub struct ObservableField {
    /// Declared field name (e.g., `_counter`)
    pub name: Ident,
    pub ty: Type,
    pub vis: Visibility,
    /// Derived public property name (e.g., `Counter`)
    pub property: String,
    /// Read accessor (e.g., `counter`)
    pub getter: Ident,
    /// Write accessor (e.g., `set_counter`)
    pub setter: Ident,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependentUpdater {
    pub name: Ident,
    /// Properties read by the body, deduplicated, in first-reference order.
    pub reads: Vec<String>,
    /// Properties written through their setter; only used for cycle checks.
    pub writes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickHandler {
    pub name: Ident,
    pub element: String,
}

/// Property -> updaters that must run when it changes, in updater
/// discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyGraph {
    edges: BTreeMap<String, Vec<Ident>>,
}

impl DependencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `property -> updater`; repeated edges are ignored.
    pub fn add_edge(&mut self, property: &str, updater: &Ident) {
        let dependents = self.edges.entry(property.to_string()).or_default();
        if !dependents.contains(updater) {
            dependents.push(updater.clone());
        }
    }

    pub fn dependents(&self, property: &str) -> &[Ident] {
        self.edges.get(property).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn edge_count(&self) -> usize {
        self.edges.values().map(Vec::len).sum()
    }
}

/// Fully analysed class, ready for emission.
#[derive(Debug, Clone)]
pub struct ReactiveClass {
    pub name: Ident,
    pub qualified_name: String,
    pub generics: Generics,
    pub fields: Vec<ObservableField>,
    pub updaters: Vec<DependentUpdater>,
    pub handlers: Vec<ClickHandler>,
    pub graph: DependencyGraph,
}

impl ReactiveClass {
    pub fn property_names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.property.as_str()).collect()
    }
}
