//! Per-method local symbol table.
//!
//! The table is flat: a name bound anywhere in the method
//! (parameter, `let`, closure parameter, `for`/`match`/`if let` pattern)
//! shadows that name everywhere in the method.

use std::collections::BTreeSet;

use syn::{FnArg, ImplItemFn, PatIdent, visit::Visit};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LocalSymbols {
    names: BTreeSet<String>,
}

impl LocalSymbols {
    pub fn of_method(method: &ImplItemFn) -> Self {
        let mut collector = BindingCollector::default();
        for input in &method.sig.inputs {
            if let FnArg::Typed(pat_type) = input {
                collector.visit_pat(&pat_type.pat);
            }
        }
        collector.visit_block(&method.block);
        collector.symbols
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }
}

#[derive(Default)]
struct BindingCollector {
    symbols: LocalSymbols,
}

impl<'ast> Visit<'ast> for BindingCollector {
    fn visit_pat_ident(&mut self, i: &'ast PatIdent) {
        self.symbols.names.insert(i.ident.to_string());
        syn::visit::visit_pat_ident(self, i);
    }
}
