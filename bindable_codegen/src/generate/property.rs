//! Notifying property accessors
//!
//! For a field `_counter: i32` with dependents `update_double`:
//!
//! ```rust,ignore
//! impl Counter {
//!     pub fn counter(&self) -> &i32 {
//!         &self._counter
//!     }
//!
//!     pub fn set_counter(&mut self, value: i32) {
//!         if self._counter == value {
//!             return;
//!         }
//!         self._counter = value;
//!         ::bindable::NotifyPropertyChanged::notify_property_changed(self, "Counter");
//!         self.update_double();
//!     }
//! }
//! ```

use proc_macro2::TokenStream;
use quote::quote;
use syn::Path;

use crate::parse::metadata::{ObservableField, ReactiveClass};

/// Generate the inherent impl holding every accessor pair, or nothing for a
/// class without accepted fields.
pub fn generate_accessors(class: &ReactiveClass, runtime: &Path) -> TokenStream {
    if class.fields.is_empty() {
        return TokenStream::new();
    }

    let name = &class.name;
    let (impl_generics, ty_generics, where_clause) = class.generics.split_for_impl();
    let accessors = class
        .fields
        .iter()
        .map(|field| generate_accessor_pair(class, field, runtime));

    quote! {
        impl #impl_generics #name #ty_generics #where_clause {
            #(#accessors)*
        }
    }
}

fn generate_accessor_pair(class: &ReactiveClass, field: &ObservableField, runtime: &Path) -> TokenStream {
    let field_name = &field.name;
    let ty = &field.ty;
    let getter = &field.getter;
    let setter = &field.setter;
    let property = &field.property;
    let dependents = class.graph.dependents(property);

    let getter_doc = format!("Current value of the `{property}` property.");
    let setter_doc = format!(
        "Set `{property}`, notifying observers and running its dependent updaters when the value changes."
    );

    quote! {
        #[doc = #getter_doc]
        pub fn #getter(&self) -> &#ty {
            &self.#field_name
        }

        #[doc = #setter_doc]
        pub fn #setter(&mut self, value: #ty) {
            if self.#field_name == value {
                return;
            }
            self.#field_name = value;
            #runtime::NotifyPropertyChanged::notify_property_changed(self, #property);
            #(self.#dependents();)*
        }
    }
}
