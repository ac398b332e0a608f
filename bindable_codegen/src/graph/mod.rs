//! Dependency graph construction.
//!
//! The scan is token-level: no type information is used. For every
//! dependent updater the builder collects
//!
//! - member names (`x.field`, `x.method()`), which are never shadowed,
//! - single-segment path expressions (`name`), skipped when a local binding
//!   of the same name exists in the method,
//! - identifiers inside macro invocations, classified the same way by
//!   looking at the preceding `.` token (a `..` range is not a member access).
//!
//! An identifier refers to a property when it equals the derived property
//! name, the declared field name or the read accessor. Calls to a setter are
//! recorded as writes, which only feed the cycle check.

pub mod cycles;
pub mod symbols;

use std::collections::HashMap;

use proc_macro2::{Spacing, TokenStream, TokenTree};
use syn::{ExprField, ExprMethodCall, ExprPath, ImplItemFn, Macro, Member, visit::Visit};

use crate::parse::metadata::{DependencyGraph, DependentUpdater, ObservableField};
use crate::utils::naming::unraw;
use symbols::LocalSymbols;

pub use cycles::{UpdaterCycle, find_cycles};

/// Name lookup tables for one class.
#[derive(Debug, Default)]
pub struct PropertyIndex {
    reads: HashMap<String, String>,
    writes: HashMap<String, String>,
}

impl PropertyIndex {
    pub fn new(fields: &[ObservableField]) -> Self {
        let mut index = Self::default();
        for field in fields {
            for alias in [field.property.clone(), unraw(&field.name), unraw(&field.getter)] {
                index.reads.entry(alias).or_insert_with(|| field.property.clone());
            }
            index
                .writes
                .insert(unraw(&field.setter), field.property.clone());
        }
        index
    }

    pub fn read(&self, ident: &str) -> Option<&str> {
        self.reads.get(ident).map(String::as_str)
    }

    pub fn write(&self, ident: &str) -> Option<&str> {
        self.writes.get(ident).map(String::as_str)
    }
}

pub struct DependencyGraphBuilder<'a> {
    index: PropertyIndex,
    fields: &'a [ObservableField],
}

impl<'a> DependencyGraphBuilder<'a> {
    pub fn new(fields: &'a [ObservableField]) -> Self {
        Self {
            index: PropertyIndex::new(fields),
            fields,
        }
    }

    /// Analyse every updater and build the property -> updater edges.
    pub fn build(&self, updaters: &[&ImplItemFn]) -> (Vec<DependentUpdater>, DependencyGraph) {
        let mut graph = DependencyGraph::new();
        let analysed: Vec<DependentUpdater> = updaters.iter().map(|method| self.analyse(method)).collect();

        // Iterate properties in field order so edge insertion is reproducible.
        for field in self.fields {
            for updater in &analysed {
                if updater.reads.contains(&field.property) {
                    graph.add_edge(&field.property, &updater.name);
                }
            }
        }

        log::trace!(
            "dependency graph: {} updaters, {} edges",
            analysed.len(),
            graph.edge_count()
        );
        (analysed, graph)
    }

    pub fn analyse(&self, method: &ImplItemFn) -> DependentUpdater {
        let mut scan = ReferenceScan {
            index: &self.index,
            locals: LocalSymbols::of_method(method),
            reads: Vec::new(),
            writes: Vec::new(),
        };
        scan.visit_block(&method.block);

        DependentUpdater {
            name: method.sig.ident.clone(),
            reads: scan.reads,
            writes: scan.writes,
        }
    }
}

struct ReferenceScan<'a> {
    index: &'a PropertyIndex,
    locals: LocalSymbols,
    reads: Vec<String>,
    writes: Vec<String>,
}

impl ReferenceScan<'_> {
    fn member(&mut self, name: &str, called: bool) {
        if called && let Some(property) = self.index.write(name) {
            push_unique(&mut self.writes, property);
            return;
        }
        if let Some(property) = self.index.read(name) {
            push_unique(&mut self.reads, property);
        }
    }

    fn bare(&mut self, name: &str) {
        if self.locals.contains(name) {
            return;
        }
        if let Some(property) = self.index.read(name) {
            push_unique(&mut self.reads, property);
        }
    }

    fn scan_tokens(&mut self, tokens: TokenStream) {
        let trees: Vec<TokenTree> = tokens.into_iter().collect();
        for (position, tree) in trees.iter().enumerate() {
            match tree {
                TokenTree::Group(group) => self.scan_tokens(group.stream()),
                TokenTree::Ident(ident) => {
                    let name = unraw(ident);
                    if is_member_position(&trees, position) {
                        let called = matches!(
                            trees.get(position + 1),
                            Some(TokenTree::Group(g)) if g.delimiter() == proc_macro2::Delimiter::Parenthesis
                        );
                        self.member(&name, called);
                    } else {
                        self.bare(&name);
                    }
                }
                TokenTree::Punct(_) | TokenTree::Literal(_) => {}
            }
        }
    }
}

impl<'ast> Visit<'ast> for ReferenceScan<'_> {
    fn visit_expr_field(&mut self, i: &'ast ExprField) {
        if let Member::Named(ident) = &i.member {
            self.member(&unraw(ident), false);
        }
        syn::visit::visit_expr_field(self, i);
    }

    fn visit_expr_method_call(&mut self, i: &'ast ExprMethodCall) {
        self.member(&unraw(&i.method), true);
        syn::visit::visit_expr_method_call(self, i);
    }

    fn visit_expr_path(&mut self, i: &'ast ExprPath) {
        if i.qself.is_none()
            && let Some(ident) = i.path.get_ident()
        {
            self.bare(&unraw(ident));
        }
        syn::visit::visit_expr_path(self, i);
    }

    fn visit_macro(&mut self, i: &'ast Macro) {
        self.scan_tokens(i.tokens.clone());
    }
}

/// An identifier is a member when it follows a single `.`. The second dot
/// of `..` or `..=` starts a range operand instead.
fn is_member_position(trees: &[TokenTree], position: usize) -> bool {
    let is_dot = |index: usize| match trees.get(index) {
        Some(TokenTree::Punct(punct)) if punct.as_char() == '.' => Some(punct.spacing()),
        _ => None,
    };
    let Some(dot) = position.checked_sub(1) else {
        return false;
    };
    if is_dot(dot).is_none() {
        return false;
    }
    !dot
        .checked_sub(1)
        .and_then(is_dot)
        .is_some_and(|spacing| spacing == Spacing::Joint)
}

fn push_unique(list: &mut Vec<String>, property: &str) {
    if !list.iter().any(|p| p == property) {
        list.push(property.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::naming;
    use syn::parse_quote;

    fn field(name: &str, property: &str) -> ObservableField {
        ObservableField {
            name: naming::ident(name),
            ty: parse_quote!(i32),
            vis: syn::Visibility::Inherited,
            property: property.to_string(),
            getter: naming::ident(&naming::accessor_name(property)),
            setter: naming::ident(&naming::setter_name(property)),
        }
    }

    fn fields() -> Vec<ObservableField> {
        vec![field("_counter", "Counter"), field("_double", "Double")]
    }

    #[test]
    fn test_getter_call_is_a_read_and_setter_call_a_write() {
        let fields = fields();
        let builder = DependencyGraphBuilder::new(&fields);
        let method: ImplItemFn = parse_quote! {
            fn update_double(&mut self) {
                self.set_double(self.counter() * 2);
            }
        };
        let updater = builder.analyse(&method);
        assert_eq!(updater.reads, vec!["Counter"]);
        assert_eq!(updater.writes, vec!["Double"]);
    }

    #[test]
    fn test_field_access_and_repeated_reads_deduplicate() {
        let fields = fields();
        let builder = DependencyGraphBuilder::new(&fields);
        let method: ImplItemFn = parse_quote! {
            fn update(&mut self) {
                let total = self._counter + self._counter + *self.counter();
                self.log(total);
            }
        };
        let updater = builder.analyse(&method);
        assert_eq!(updater.reads, vec!["Counter"]);
        assert!(updater.writes.is_empty());
    }

    #[test]
    fn test_shadowed_locals_are_not_dependencies() {
        let fields = fields();
        let builder = DependencyGraphBuilder::new(&fields);
        let method: ImplItemFn = parse_quote! {
            fn update(&mut self) {
                let counter = 3;
                let _double = counter * 2;
                println!("{}", counter);
            }
        };
        let updater = builder.analyse(&method);
        assert!(updater.reads.is_empty());
    }

    #[test]
    fn test_range_operand_in_macro_is_shadowed() {
        let fields = fields();
        let builder = DependencyGraphBuilder::new(&fields);
        let method: ImplItemFn = parse_quote! {
            fn update(&mut self) {
                let counter = 3;
                println!("{:?} {:?}", 0..counter, 0..=counter);
            }
        };
        assert!(builder.analyse(&method).reads.is_empty());
    }

    #[test]
    fn test_range_operand_in_macro_is_a_bare_read() {
        let fields = fields();
        let builder = DependencyGraphBuilder::new(&fields);
        let method: ImplItemFn = parse_quote! {
            fn update(&mut self) {
                println!("{:?} {}", 0.._double, self.counter());
            }
        };
        assert_eq!(builder.analyse(&method).reads, vec!["Double", "Counter"]);
    }

    #[test]
    fn test_unshadowed_bare_identifier_matches_property_name() {
        let fields = fields();
        let builder = DependencyGraphBuilder::new(&fields);
        let method: ImplItemFn = parse_quote! {
            fn update(&mut self) {
                let _ = Counter;
            }
        };
        assert_eq!(builder.analyse(&method).reads, vec!["Counter"]);
    }

    #[test]
    fn test_macro_tokens_are_scanned() {
        let fields = fields();
        let builder = DependencyGraphBuilder::new(&fields);
        let method: ImplItemFn = parse_quote! {
            fn update(&mut self) {
                println!("{} {}", self._double, self.counter());
            }
        };
        assert_eq!(builder.analyse(&method).reads, vec!["Double", "Counter"]);
    }

    #[test]
    fn test_graph_orders_updaters_by_discovery() {
        let fields = fields();
        let builder = DependencyGraphBuilder::new(&fields);
        let a: ImplItemFn = parse_quote!(fn a(&mut self) { let _ = self.counter(); });
        let b: ImplItemFn = parse_quote!(fn b(&mut self) { let _ = self._counter; });
        let unrelated: ImplItemFn = parse_quote!(fn c(&mut self) { let _ = self.other; });
        let (updaters, graph) = builder.build(&[&a, &b, &unrelated]);
        assert_eq!(updaters.len(), 3);
        let dependents: Vec<String> = graph.dependents("Counter").iter().map(|i| i.to_string()).collect();
        assert_eq!(dependents, vec!["a", "b"]);
        assert!(graph.dependents("Double").is_empty());
    }
}
