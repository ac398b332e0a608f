pub mod model;
pub mod notify;
pub mod ui;

// Re-export commonly used types
pub use model::{Bindable, ClickBinding, ReactiveModel};
pub use notify::NotifyPropertyChanged;
pub use ui::{ActivationHandler, Button, DataSource, Shared, UiRoot, shared};
