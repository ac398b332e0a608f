//! The UI tree as seen by generated binding routines.
//!
//! Only two queries are needed: installing a data source on the root and
//! looking up a button by name. Everything is single-threaded.

use std::any::Any;
use std::cell::RefCell;
use std::rc::Rc;

/// A model shared between its owner and the UI subscriptions bound to it.
pub type Shared<T> = Rc<RefCell<T>>;

/// The model installed as a root's data source.
pub type DataSource = Rc<dyn Any>;

/// Callback run when a button is activated.
pub type ActivationHandler = Box<dyn FnMut()>;

pub fn shared<T>(value: T) -> Shared<T> {
    Rc::new(RefCell::new(value))
}

pub trait Button {
    fn name(&self) -> &str;

    /// Add a handler run on every activation. Handlers are never removed.
    fn on_activate(&self, handler: ActivationHandler);
}

pub trait UiRoot {
    fn set_data_source(&self, source: DataSource);

    /// Look up a button anywhere under this root by its name.
    fn find_button(&self, name: &str) -> Option<Rc<dyn Button>>;
}
