//! Binding routine generation
//!
//! Generates `impl Bindable for <Name>`. The routine installs the model as the
//! root's data source, then subscribes each click handler, in declaration
//! order, to the button of the same name. Handlers hold a weak reference so a
//! subscription never keeps the model alive.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{Generics, Path, parse_quote};

use crate::parse::metadata::{ClickHandler, ReactiveClass};

pub fn generate_bindable_impl(class: &ReactiveClass, runtime: &Path) -> TokenStream {
    let name = &class.name;
    let class_name = &class.qualified_name;
    let generics = static_generics(&class.generics);
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();
    let subscriptions = class
        .handlers
        .iter()
        .map(|handler| generate_subscription(class_name, handler, runtime));

    quote! {
        impl #impl_generics #runtime::Bindable for #name #ty_generics #where_clause {
            fn bind(this: &#runtime::Shared<Self>, root: &dyn #runtime::UiRoot) -> #runtime::BindReport {
                let mut report = #runtime::BindReport::new(#class_name);
                #runtime::UiRoot::set_data_source(root, ::std::rc::Rc::clone(this) as #runtime::DataSource);
                #(#subscriptions)*
                report
            }
        }
    }
}

fn generate_subscription(class_name: &str, handler: &ClickHandler, runtime: &Path) -> TokenStream {
    let method = &handler.name;
    let method_name = method.to_string();
    let element = &handler.element;

    quote! {
        match #runtime::UiRoot::find_button(root, #element) {
            ::std::option::Option::Some(button) => {
                let model = ::std::rc::Rc::downgrade(this);
                #runtime::Button::on_activate(&*button, ::std::boxed::Box::new(move || {
                    let ::std::option::Option::Some(model) = model.upgrade() else {
                        return;
                    };
                    match model.try_borrow_mut() {
                        ::std::result::Result::Ok(mut model) => model.#method(),
                        ::std::result::Result::Err(_) => #runtime::bindable_deps::log::warn!(
                            "{}: '{}' activated while the model is borrowed; '{}' skipped",
                            #class_name,
                            #element,
                            #method_name
                        ),
                    };
                }));
                report.record_subscribed(#element, #method_name);
            }
            ::std::option::Option::None => {
                #runtime::bindable_deps::log::warn!(
                    "{}: no button named '{}' for click handler '{}'",
                    #class_name,
                    #element,
                    #method_name
                );
                report.record_missing(#element, #method_name);
            }
        }
    }
}

/// The data source is an `Rc<dyn Any>`, so every bound model is `'static`.
fn static_generics(generics: &Generics) -> Generics {
    let mut generics = generics.clone();
    if !generics.params.is_empty() {
        generics
            .make_where_clause()
            .predicates
            .push(parse_quote!(Self: 'static));
    }
    generics
}
