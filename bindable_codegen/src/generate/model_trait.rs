//! ReactiveModel implementation generation
//!
//! # Example Output
//!
//! ```rust,ignore
//! impl ::bindable::ReactiveModel for Counter {
//!     const PROPERTY_NAMES: &'static [&'static str] = &["Counter", "Double"];
//!     const CLICK_BINDINGS: &'static [::bindable::ClickBinding] = &[
//!         ::bindable::ClickBinding { element: "Reset", handler: "on_reset" },
//!     ];
//!
//!     fn dependents(property: &str) -> &'static [&'static str] {
//!         match property {
//!             "Counter" => &["update_double"],
//!             _ => &[],
//!         }
//!     }
//! }
//! ```

use proc_macro2::TokenStream;
use quote::quote;
use syn::Path;

use crate::parse::metadata::ReactiveClass;

pub fn generate_reactive_model_impl(class: &ReactiveClass, runtime: &Path) -> TokenStream {
    let name = &class.name;
    let (impl_generics, ty_generics, where_clause) = class.generics.split_for_impl();

    let properties = class.property_names();
    let bindings = class.handlers.iter().map(|handler| {
        let element = &handler.element;
        let method = handler.name.to_string();
        quote! { #runtime::ClickBinding { element: #element, handler: #method } }
    });

    // Properties without dependents fall through to the empty arm.
    let arms = class.fields.iter().filter_map(|field| {
        let dependents: Vec<String> = class
            .graph
            .dependents(&field.property)
            .iter()
            .map(ToString::to_string)
            .collect();
        if dependents.is_empty() {
            return None;
        }
        let property = &field.property;
        Some(quote! { #property => &[#(#dependents),*], })
    });

    quote! {
        impl #impl_generics #runtime::ReactiveModel for #name #ty_generics #where_clause {
            const PROPERTY_NAMES: &'static [&'static str] = &[#(#properties),*];
            const CLICK_BINDINGS: &'static [#runtime::ClickBinding] = &[#(#bindings),*];

            fn dependents(property: &str) -> &'static [&'static str] {
                match property {
                    #(#arms)*
                    _ => &[],
                }
            }
        }
    }
}
