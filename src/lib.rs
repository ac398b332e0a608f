//! # bindable
//!
//! Ahead-of-time generated observable state for declarative Rust models.
//!
//! Annotate a struct and its methods, and `#[reactive_module]` generates:
//!
//! - **Notifying properties**: `counter()` / `set_counter()` for every
//!   `#[observable]` field. A setter that changes the value notifies the
//!   model, then runs every `#[dependent_updater]` that reads the property
//! - **UI binding**: [`Bindable::bind`] installs the model as a UI root's
//!   data source and subscribes every `#[click_handler("Name")]` method to the
//!   button `Name`
//! - **Metadata**: [`ReactiveModel`] lists properties, click bindings and
//!   the updaters depending on each property
//!
//! ## Quick Start
//!
//! ```
//! use bindable::prelude::*;
//!
//! #[reactive_module]
//! mod counter {
//!     use bindable::prelude::*;
//!
//!     #[reactive_model]
//!     #[derive(Default)]
//!     pub struct Counter {
//!         #[observable]
//!         _counter: i32,
//!         #[observable]
//!         _double: i32,
//!         pub hub: PropertyChangedHub,
//!     }
//!
//!     impl NotifyPropertyChanged for Counter {
//!         fn notify_property_changed(&mut self, property: &'static str) {
//!             self.hub.notify(property);
//!         }
//!     }
//!
//!     impl Counter {
//!         #[dependent_updater]
//!         fn update_double(&mut self) {
//!             self.set_double(self.counter() * 2);
//!         }
//!
//!         #[click_handler("Increment")]
//!         fn on_increment(&mut self) {
//!             self.set_counter(self.counter() + 1);
//!         }
//!     }
//! }
//!
//! use counter::Counter;
//!
//! let mut model = Counter::default();
//! model.set_counter(5);
//! assert_eq!(*model.double(), 10);
//! assert_eq!(Counter::dependents("Counter"), &["update_double"]);
//! ```
//!
//! Rule violations, such as a `pub` observable field or two fields deriving
//! the same property name, are compile errors on the offending member.

pub mod binding;
pub mod errors;
pub mod observers;
pub mod prelude;
pub mod traits;

pub use bindable_deps;
pub use bindable_macros::{click_handler, dependent_updater, reactive_model, reactive_module};

pub use binding::BindReport;
pub use errors::{BindableError, BindableResult};
pub use observers::{PropertyChangedHub, SubscriptionId};
pub use traits::{
    ActivationHandler, Bindable, Button, ClickBinding, DataSource, NotifyPropertyChanged, ReactiveModel,
    Shared, UiRoot, shared,
};
