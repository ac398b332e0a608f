//! Class processing and the two front-ends.
//!
//! [`process_class`] is the unit of work: it takes one candidate and returns
//! its generated tokens together with every diagnostic raised for it. Nothing
//! is shared between classes.
//!
//! - [`Generator`] is the text front-end: it parses whole source files and
//!   returns generated text plus plain diagnostic records.
//! - [`expand_module`] is the proc-macro front-end: it rewrites an inline
//!   module in place, appending generated items next to each class and
//!   stripping the markers.

use std::collections::BTreeMap;

use proc_macro2::TokenStream;
use quote::quote;
use serde::Serialize;
use syn::{File, Item, ItemMod, ItemStruct, visit_mut::VisitMut};

use crate::config::{CyclePolicy, GeneratorConfig};
use crate::diagnostics::{Diagnostic, DiagnosticKind, DiagnosticSink};
use crate::errors::{CodegenError, CodegenResult};
use crate::generate::CodeEmitter;
use crate::graph::{DependencyGraphBuilder, find_cycles};
use crate::parse::markers::MarkerKind;
use crate::parse::metadata::{CandidateClass, ExtractedClass, ReactiveClass};
use crate::parse::{DeclarationScanner, ModelExtractor};
use crate::resolve::PropertyResolver;
use crate::utils::attributes::remove_attribute;

/// Everything produced for one class.
#[derive(Debug)]
pub struct ClassOutput {
    pub qualified_name: String,
    pub class: ReactiveClass,
    pub tokens: TokenStream,
    pub diagnostics: DiagnosticSink,
}

/// Run extraction, resolution, graph building and emission for one class.
pub fn process_class(candidate: &CandidateClass<'_>, config: &GeneratorConfig) -> ClassOutput {
    log::debug!("processing {}", candidate.qualified_name);
    let mut diagnostics = DiagnosticSink::new();
    let extracted = ModelExtractor::new(candidate, &mut diagnostics).extract();
    let class = analyse(extracted, config, &mut diagnostics);
    let tokens = CodeEmitter::new(&class, config).emit();

    ClassOutput {
        qualified_name: candidate.qualified_name.clone(),
        class,
        tokens,
        diagnostics,
    }
}

/// Resolve names, build the dependency graph and check it for cycles.
pub fn analyse(
    extracted: ExtractedClass<'_>,
    config: &GeneratorConfig,
    diagnostics: &mut DiagnosticSink,
) -> ReactiveClass {
    let class_name = extracted.qualified_name.as_str();
    let mut resolver = PropertyResolver::new(config, class_name, diagnostics);
    let fields = resolver.resolve_fields(&extracted.fields);
    let handlers = resolver.resolve_handlers(extracted.handlers);

    let (updaters, graph) = DependencyGraphBuilder::new(&fields).build(&extracted.updaters);

    let cycles_allowed = extracted.allow_cycles || config.cycle_policy == CyclePolicy::Allow;
    if !cycles_allowed {
        for cycle in find_cycles(&updaters) {
            let span = updaters
                .iter()
                .find(|u| u.name == cycle.entry())
                .map(|u| u.name.span())
                .unwrap_or_else(|| extracted.name.span());
            diagnostics.report(
                DiagnosticKind::DependencyCycle,
                class_name,
                cycle.entry(),
                span,
                format!(
                    "dependent updaters form a cycle: {cycle}; mark the class #[reactive_model(allow_cycles)] to accept it"
                ),
            );
        }
    }

    ReactiveClass {
        name: extracted.name,
        qualified_name: extracted.qualified_name,
        generics: extracted.generics,
        fields,
        updaters,
        handlers,
        graph,
    }
}

/// Generated text of one class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedClass {
    pub qualified_name: String,
    pub code: String,
}

/// Result of running the text front-end over one compilation unit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GeneratedUnit {
    pub classes: Vec<GeneratedClass>,
    pub diagnostics: Vec<Diagnostic>,
}

impl GeneratedUnit {
    /// Generated code of every class, in declaration order.
    pub fn source(&self) -> String {
        self.classes
            .iter()
            .map(|class| class.code.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

#[derive(Debug, Clone, Default)]
pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate code for every reactive model in one source file.
    pub fn generate_source(&self, source: &str) -> CodegenResult<GeneratedUnit> {
        let file: File = syn::parse_file(source)?;
        let scanner = DeclarationScanner::scan_file(&file);
        let mut diagnostics = scanner.diagnostics.into_diagnostics();
        let mut classes = Vec::with_capacity(scanner.candidates.len());

        for candidate in &scanner.candidates {
            collect_class(process_class(candidate, &self.config), &mut classes, &mut diagnostics);
        }

        log::debug!(
            "generated {} classes with {} diagnostics",
            classes.len(),
            diagnostics.len()
        );
        Ok(GeneratedUnit { classes, diagnostics })
    }

    /// Generate several compilation units in parallel, one scoped thread per
    /// unit. Results are returned in input order.
    pub fn generate_many(&self, sources: &[&str]) -> Vec<CodegenResult<GeneratedUnit>> {
        std::thread::scope(|scope| {
            let workers: Vec<_> = sources
                .iter()
                .map(|source| scope.spawn(move || self.generate_source(source)))
                .collect();
            workers
                .into_iter()
                .enumerate()
                .map(|(index, worker)| {
                    worker
                        .join()
                        .unwrap_or_else(|_| Err(CodegenError::WorkerPanicked { index }))
                })
                .collect()
        })
    }
}

/// Keep a class's generated text only if it re-parses as items. A class that
/// does not is dropped with an `EmissionFailed` diagnostic; its siblings are
/// unaffected.
fn collect_class(output: ClassOutput, classes: &mut Vec<GeneratedClass>, diagnostics: &mut Vec<Diagnostic>) {
    diagnostics.extend(output.diagnostics.into_diagnostics());
    if let Err(error) = syn::parse2::<File>(output.tokens.clone()) {
        log::warn!("generated code for {} did not re-parse: {error}", output.qualified_name);
        diagnostics.push(Diagnostic {
            kind: DiagnosticKind::EmissionFailed,
            member: output.class.name.to_string(),
            class: output.qualified_name,
            message: format!("generated code did not re-parse: {error}"),
        });
        return;
    }
    classes.push(GeneratedClass {
        qualified_name: output.qualified_name,
        code: output.tokens.to_string(),
    });
}

/// Expand `#[reactive_module]`: generate every class in the module, append
/// the generated items to the module that declares the class, strip markers
/// and attach diagnostics as compile errors.
pub fn expand_module(mut item_mod: ItemMod, config: &GeneratorConfig) -> TokenStream {
    if item_mod.content.is_none() {
        return syn::Error::new_spanned(
            &item_mod,
            "reactive_module requires an inline module (`mod name { .. }`)",
        )
        .to_compile_error();
    }

    let (generated, diagnostics) = match &item_mod.content {
        Some((_, items)) => generate_module_items(items, config),
        None => (BTreeMap::new(), DiagnosticSink::new()),
    };

    if let Some((_, items)) = item_mod.content.as_mut() {
        append_generated(items, &mut Vec::new(), &generated);
    }
    MarkerStripper.visit_item_mod_mut(&mut item_mod);

    let errors = diagnostics.into_syn_error().map(|e| e.to_compile_error());
    quote! {
        #item_mod
        #errors
    }
}

/// Expand a standalone `#[reactive_model]` struct. Without a module around it
/// there are no impls to scan, so only accessors, binding and metadata for
/// its fields are produced.
pub fn expand_model(args: TokenStream, mut item: ItemStruct, config: &GeneratorConfig) -> TokenStream {
    let marker: syn::Attribute = if args.is_empty() {
        syn::parse_quote!(#[reactive_model])
    } else {
        syn::parse_quote!(#[reactive_model(#args)])
    };
    item.attrs.insert(0, marker);

    let items = vec![Item::Struct(item)];
    let (generated, diagnostics) = generate_module_items(&items, config);
    let Some(Item::Struct(mut item)) = items.into_iter().next() else {
        return TokenStream::new();
    };
    MarkerStripper.visit_item_struct_mut(&mut item);

    let tokens = generated.into_values().flatten();
    let errors = diagnostics.into_syn_error().map(|e| e.to_compile_error());
    quote! {
        #item
        #(#tokens)*
        #errors
    }
}

type GeneratedByModule = BTreeMap<Vec<String>, Vec<TokenStream>>;

fn generate_module_items(items: &[Item], config: &GeneratorConfig) -> (GeneratedByModule, DiagnosticSink) {
    let scanner = DeclarationScanner::scan_module_items(items);
    let mut diagnostics = scanner.diagnostics;
    let mut generated = GeneratedByModule::new();

    for candidate in &scanner.candidates {
        let output = process_class(candidate, config);
        let mut module: Vec<String> = output.qualified_name.split("::").map(str::to_string).collect();
        module.pop();
        generated.entry(module).or_default().push(output.tokens);
        diagnostics.append(output.diagnostics);
    }
    (generated, diagnostics)
}

fn append_generated(items: &mut Vec<Item>, path: &mut Vec<String>, generated: &GeneratedByModule) {
    for item in items.iter_mut() {
        if let Item::Mod(nested) = item
            && let Some((_, nested_items)) = nested.content.as_mut()
        {
            path.push(nested.ident.to_string());
            append_generated(nested_items, path, generated);
            path.pop();
        }
    }
    if let Some(tokens) = generated.get(path.as_slice()) {
        items.extend(tokens.iter().cloned().map(Item::Verbatim));
    }
}

/// Removes every marker attribute; unmarked attributes are kept.
struct MarkerStripper;

impl MarkerStripper {
    fn strip(attrs: &mut Vec<syn::Attribute>) {
        for name in MarkerKind::all_names() {
            remove_attribute(attrs, name);
        }
    }
}

impl VisitMut for MarkerStripper {
    fn visit_item_struct_mut(&mut self, i: &mut ItemStruct) {
        Self::strip(&mut i.attrs);
        syn::visit_mut::visit_item_struct_mut(self, i);
    }

    fn visit_item_enum_mut(&mut self, i: &mut syn::ItemEnum) {
        Self::strip(&mut i.attrs);
        syn::visit_mut::visit_item_enum_mut(self, i);
    }

    fn visit_item_union_mut(&mut self, i: &mut syn::ItemUnion) {
        Self::strip(&mut i.attrs);
        syn::visit_mut::visit_item_union_mut(self, i);
    }

    fn visit_field_mut(&mut self, i: &mut syn::Field) {
        Self::strip(&mut i.attrs);
        syn::visit_mut::visit_field_mut(self, i);
    }

    fn visit_impl_item_fn_mut(&mut self, i: &mut syn::ImplItemFn) {
        Self::strip(&mut i.attrs);
        syn::visit_mut::visit_impl_item_fn_mut(self, i);
    }
}

/// Parse a source, run the first class through analysis and return it.
#[cfg(test)]
pub(crate) fn analyse_first(source: &str, config: &GeneratorConfig) -> ReactiveClass {
    let file = syn::parse_file(source).unwrap();
    let scanner = DeclarationScanner::scan_file(&file);
    let candidate = &scanner.candidates[0];
    let mut diagnostics = DiagnosticSink::new();
    let extracted = ModelExtractor::new(candidate, &mut diagnostics).extract();
    analyse(extracted, config, &mut diagnostics)
}
