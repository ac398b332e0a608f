//! Model extraction
//!
//! Collects the marked members of one candidate class, preserving
//! declaration order: fields in field order, methods in impl-block order and
//! then method order. That order is the emission and invocation order used
//! by the generator.

use syn::{FnArg, ImplItem, ImplItemFn, ReturnType, Signature, spanned::Spanned};

use super::markers::{Marker, MarkerKind, find_marker};
use super::metadata::{CandidateClass, ClickHandler, ExtractedClass, FieldDecl};
use crate::diagnostics::{DiagnosticKind, DiagnosticSink};

pub struct ModelExtractor<'a, 'ast> {
    candidate: &'a CandidateClass<'ast>,
    diagnostics: &'a mut DiagnosticSink,
}

impl<'a, 'ast> ModelExtractor<'a, 'ast> {
    pub fn new(candidate: &'a CandidateClass<'ast>, diagnostics: &'a mut DiagnosticSink) -> Self {
        Self {
            candidate,
            diagnostics,
        }
    }

    pub fn extract(mut self) -> ExtractedClass<'ast> {
        let item = self.candidate.item;
        let fields = self.extract_fields();

        let mut updaters = Vec::new();
        let mut handlers = Vec::new();
        let candidate = self.candidate;
        for item_impl in candidate.impls.iter().copied() {
            for impl_item in &item_impl.items {
                if let ImplItem::Fn(method) = impl_item {
                    self.visit_method(method, &mut updaters, &mut handlers);
                }
            }
        }

        ExtractedClass {
            name: item.ident.clone(),
            qualified_name: self.candidate.qualified_name.clone(),
            generics: item.generics.clone(),
            allow_cycles: self.candidate.allow_cycles,
            fields,
            updaters,
            handlers,
        }
    }

    fn extract_fields(&mut self) -> Vec<FieldDecl> {
        let mut fields = Vec::new();
        let item = self.candidate.item;
        for field in item.fields.iter() {
            let Some(name) = field.ident.as_ref() else {
                continue;
            };
            let Some((attr, marker)) = find_marker(&field.attrs, MarkerKind::Observable) else {
                continue;
            };
            if let Err(e) = marker {
                self.report(DiagnosticKind::MalformedMarker, &name.to_string(), attr.span(), e.to_string());
                continue;
            }
            fields.push(FieldDecl {
                name: name.clone(),
                ty: field.ty.clone(),
                vis: field.vis.clone(),
            });
        }
        fields
    }

    fn visit_method(
        &mut self,
        method: &'ast ImplItemFn,
        updaters: &mut Vec<&'ast ImplItemFn>,
        handlers: &mut Vec<ClickHandler>,
    ) {
        let name = method.sig.ident.to_string();
        let updater = find_marker(&method.attrs, MarkerKind::DependentUpdater);
        let handler = find_marker(&method.attrs, MarkerKind::ClickHandler);
        if updater.is_none() && handler.is_none() {
            return;
        }

        if let Err(reason) = check_signature(&method.sig) {
            self.report(
                DiagnosticKind::InvalidMemberSignature,
                &name,
                method.sig.span(),
                format!("marked method must be `fn {name}(&mut self)`: {reason}"),
            );
            return;
        }

        if let Some((attr, marker)) = updater {
            match marker {
                Ok(_) => updaters.push(method),
                Err(e) => self.report(DiagnosticKind::MalformedMarker, &name, attr.span(), e.to_string()),
            }
        }

        if let Some((attr, marker)) = handler {
            match marker {
                Ok(Marker::ClickHandler { element }) => handlers.push(ClickHandler {
                    name: method.sig.ident.clone(),
                    element,
                }),
                Ok(_) => {}
                Err(e) => self.report(DiagnosticKind::MalformedMarker, &name, attr.span(), e.to_string()),
            }
        }
    }

    fn report(&mut self, kind: DiagnosticKind, member: &str, span: proc_macro2::Span, message: String) {
        let class = self.candidate.qualified_name.clone();
        self.diagnostics.report(kind, &class, member, span, message);
    }
}

fn check_signature(sig: &Signature) -> Result<(), &'static str> {
    if sig.asyncness.is_some() {
        return Err("async methods are not supported");
    }
    if !sig.generics.params.is_empty() {
        return Err("generic methods are not supported");
    }
    if !matches!(sig.output, ReturnType::Default) {
        return Err("the method must not return a value");
    }
    let mut inputs = sig.inputs.iter();
    match inputs.next() {
        Some(FnArg::Receiver(receiver))
            if receiver.reference.is_some() && receiver.mutability.is_some() => {}
        _ => return Err("the receiver must be `&mut self`"),
    }
    if inputs.next().is_some() {
        return Err("the method must not take parameters");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::scanner::DeclarationScanner;
    use syn::{File, parse_quote};

    fn extract(file: &File) -> (Vec<String>, Vec<String>, Vec<(String, String)>, DiagnosticSink) {
        let scanner = DeclarationScanner::scan_file(file);
        let mut diagnostics = DiagnosticSink::new();
        let class = ModelExtractor::new(&scanner.candidates[0], &mut diagnostics).extract();
        (
            class.fields.iter().map(|f| f.name.to_string()).collect(),
            class.updaters.iter().map(|m| m.sig.ident.to_string()).collect(),
            class
                .handlers
                .iter()
                .map(|h| (h.name.to_string(), h.element.clone()))
                .collect(),
            diagnostics,
        )
    }

    #[test]
    fn test_extract_preserves_declaration_order() {
        let file: File = parse_quote! {
            #[reactive_model]
            struct Panel {
                #[observable] _b: i32,
                ignored: i32,
                #[observable] _a: i32,
            }
            impl Panel {
                #[dependent_updater] fn second(&mut self) {}
                #[click_handler("Go")] fn on_go(&mut self) {}
                fn helper(&self) {}
            }
            impl Panel {
                #[dependent_updater] fn first(&mut self) {}
                #[click_handler("Stop")] fn on_stop(&mut self) {}
            }
        };
        let (fields, updaters, handlers, diagnostics) = extract(&file);
        assert!(diagnostics.is_empty());
        assert_eq!(fields, vec!["_b", "_a"]);
        assert_eq!(updaters, vec!["second", "first"]);
        assert_eq!(
            handlers,
            vec![
                ("on_go".to_string(), "Go".to_string()),
                ("on_stop".to_string(), "Stop".to_string())
            ]
        );
    }

    #[test]
    fn test_extract_rejects_bad_signatures() {
        let file: File = parse_quote! {
            #[reactive_model]
            struct Panel { #[observable] _a: i32 }
            impl Panel {
                #[dependent_updater] fn takes_arg(&mut self, x: i32) {}
                #[dependent_updater] fn shared(&self) {}
                #[click_handler("Go")] fn returns(&mut self) -> bool { true }
                #[dependent_updater] fn ok(&mut self) {}
            }
        };
        let (_, updaters, handlers, diagnostics) = extract(&file);
        assert_eq!(updaters, vec!["ok"]);
        assert!(handlers.is_empty());
        assert_eq!(diagnostics.count(DiagnosticKind::InvalidMemberSignature), 3);
    }

    #[test]
    fn test_extract_reports_malformed_markers() {
        let file: File = parse_quote! {
            #[reactive_model]
            struct Panel { #[observable(loud)] _a: i32, #[observable] _b: i32 }
            impl Panel {
                #[click_handler(Go)] fn on_go(&mut self) {}
            }
        };
        let (fields, _, handlers, diagnostics) = extract(&file);
        assert_eq!(fields, vec!["_b"]);
        assert!(handlers.is_empty());
        assert_eq!(diagnostics.count(DiagnosticKind::MalformedMarker), 2);
    }
}
