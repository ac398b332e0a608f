//! Per-class code emission
//!
//! For a class named `Counter` the emitter produces, in this order:
//! 1. **Accessors** (`property.rs`): `counter()` / `set_counter()` for every
//!    accepted observable field, in field order
//! 2. **Binding** (`binding.rs`): `impl Bindable for Counter`
//! 3. **Metadata** (`model_trait.rs`): `impl ReactiveModel for Counter`
//!
//! Every path into the runtime goes through
//! [`GeneratorConfig::runtime`](crate::config::GeneratorConfig::runtime).

pub mod binding;
pub mod model_trait;
pub mod property;

pub use binding::generate_bindable_impl;
pub use model_trait::generate_reactive_model_impl;
pub use property::generate_accessors;

use proc_macro2::TokenStream;
use quote::quote;

use crate::config::GeneratorConfig;
use crate::parse::metadata::ReactiveClass;

pub struct CodeEmitter<'a> {
    class: &'a ReactiveClass,
    config: &'a GeneratorConfig,
}

impl<'a> CodeEmitter<'a> {
    pub fn new(class: &'a ReactiveClass, config: &'a GeneratorConfig) -> Self {
        Self { class, config }
    }

    pub fn emit(&self) -> TokenStream {
        let runtime = self.config.runtime();
        let accessors = generate_accessors(self.class, &runtime);
        let binding = generate_bindable_impl(self.class, &runtime);
        let metadata = generate_reactive_model_impl(self.class, &runtime);

        log::debug!(
            "emitting {} ({} properties, {} updaters, {} handlers)",
            self.class.qualified_name,
            self.class.fields.len(),
            self.class.updaters.len(),
            self.class.handlers.len()
        );

        quote! {
            #accessors
            #binding
            #metadata
        }
    }
}
