use derive_more::Display;
use serde::Serialize;

use crate::binding::BindReport;
use crate::traits::ui::{Shared, UiRoot};

/// A click handler and the element it is subscribed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize)]
#[display("{handler} <- {element}")]
pub struct ClickBinding {
    pub element: &'static str,
    pub handler: &'static str,
}

/// Wires a shared model to a UI root.
///
/// Implemented by `#[reactive_module]` for every reactive model.
pub trait Bindable: Sized {
    /// Install `this` as the root's data source and subscribe every click
    /// handler to its button. Missing buttons are logged and reported, never
    /// fatal. Calling `bind` twice subscribes every handler twice.
    fn bind(this: &Shared<Self>, root: &dyn UiRoot) -> BindReport;
}

/// Static description of a generated model.
pub trait ReactiveModel {
    /// Derived property names in declaration order.
    const PROPERTY_NAMES: &'static [&'static str];

    /// Click handlers in declaration order.
    const CLICK_BINDINGS: &'static [ClickBinding];

    /// Updaters run after `property` changes, in invocation order. Empty for
    /// unknown properties.
    fn dependents(property: &str) -> &'static [&'static str];

    fn has_property(property: &str) -> bool {
        Self::PROPERTY_NAMES.contains(&property)
    }
}
