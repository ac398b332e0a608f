//! Prelude module for convenient imports.
//!
//! ```rust,ignore
//! use bindable::prelude::*;
//! ```
//!
//! Brings the macros, the capability traits implemented or consumed by
//! generated code, and the runtime helpers into scope.

pub use crate::{click_handler, dependent_updater, reactive_model, reactive_module};

pub use crate::binding::BindReport;
pub use crate::errors::{BindableError, BindableResult};
pub use crate::observers::{PropertyChangedHub, SubscriptionId};
pub use crate::traits::{
    Bindable, Button, ClickBinding, NotifyPropertyChanged, ReactiveModel, Shared, UiRoot, shared,
};
