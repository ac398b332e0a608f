use proc_macro::TokenStream;
use syn::{ItemMod, ItemStruct, parse_macro_input};

use bindable_codegen::{GeneratorConfig, expand_model, expand_module};

/// Generates observable state for every reactive model declared in a module.
///
/// Each struct marked `#[reactive_model]` inside the module is paired with the
/// inherent `impl` blocks of that struct in the same module. For each one the
/// macro generates:
/// - a read accessor `<snake>()` and a notifying write accessor
///   `set_<snake>()` for every `#[observable]` field
/// - `impl Bindable`, which sets the model as a UI root's data source and
///   subscribes every `#[click_handler("Name")]` method to the button `Name`
/// - `impl ReactiveModel`, exposing property names, click bindings and the
///   dependent updaters of each property
///
/// # Attributes
///
/// - `#[reactive_model]` - marks a struct with named fields as a model.
///   `#[reactive_model(allow_cycles)]` accepts cyclic updater dependencies
/// - `#[observable]` - on a non-`pub` field. The property name is the field
///   name with one leading `_` or `m_` removed and the first letter uppercased
/// - `#[dependent_updater]` - on a `fn(&mut self)`. Runs after any property it
///   references changes
/// - `#[click_handler("Name")]` - on a `fn(&mut self)`. Runs when the button
///   `Name` is activated
///
/// # Example
///
/// ```rust,ignore
/// use bindable::prelude::*;
///
/// #[reactive_module]
/// mod counter {
///     use bindable::prelude::*;
///
///     #[reactive_model]
///     #[derive(Default)]
///     pub struct Counter {
///         #[observable]
///         _counter: i32,
///         #[observable]
///         _double: i32,
///         pub hub: PropertyChangedHub,
///     }
///
///     impl NotifyPropertyChanged for Counter {
///         fn notify_property_changed(&mut self, property: &'static str) {
///             self.hub.notify(property);
///         }
///     }
///
///     impl Counter {
///         #[dependent_updater]
///         fn update_double(&mut self) {
///             self.set_double(self.counter() * 2);
///         }
///     }
/// }
///
/// let mut model = counter::Counter::default();
/// model.set_counter(5);
/// assert_eq!(*model.double(), 10);
/// ```
///
/// # Errors
///
/// Rule violations (a `pub` observable field, two fields deriving the same
/// property, a cycle between updaters, a malformed marker, ...) are reported
/// as compile errors on the offending member. Everything else in the module
/// is still generated.
#[proc_macro_attribute]
pub fn reactive_module(args: TokenStream, input: TokenStream) -> TokenStream {
    let item_mod = parse_macro_input!(input as ItemMod);
    if !args.is_empty() {
        return syn::Error::new(
            proc_macro2::Span::call_site(),
            "reactive_module takes no arguments",
        )
        .to_compile_error()
        .into();
    }
    expand_module(item_mod, &GeneratorConfig::default()).into()
}

/// Marks a struct as a reactive model outside a `#[reactive_module]`.
///
/// Without a module around it the macro cannot see the struct's impl blocks,
/// so only accessors, binding and metadata for its `#[observable]` fields are
/// generated. Use `#[reactive_module]` for dependent updaters and click
/// handlers.
///
/// Inside a `#[reactive_module]` this attribute is consumed by the module
/// macro and never expands on its own.
#[proc_macro_attribute]
pub fn reactive_model(args: TokenStream, input: TokenStream) -> TokenStream {
    let item = parse_macro_input!(input as ItemStruct);
    expand_model(args.into(), item, &GeneratorConfig::default()).into()
}

/// Marks a method as a dependent updater. Only meaningful inside a
/// `#[reactive_module]`, which removes the attribute before it expands.
#[proc_macro_attribute]
pub fn dependent_updater(_args: TokenStream, input: TokenStream) -> TokenStream {
    outside_module("dependent_updater", input)
}

/// Subscribes a method to a named button. Only meaningful inside a
/// `#[reactive_module]`, which removes the attribute before it expands.
#[proc_macro_attribute]
pub fn click_handler(_args: TokenStream, input: TokenStream) -> TokenStream {
    outside_module("click_handler", input)
}

fn outside_module(marker: &str, input: TokenStream) -> TokenStream {
    let item = proc_macro2::TokenStream::from(input);
    let error = syn::Error::new_spanned(
        &item,
        format!("#[{marker}] must be used on a method of a #[reactive_model] inside a #[reactive_module]"),
    )
    .to_compile_error();
    quote::quote!(#item #error).into()
}
