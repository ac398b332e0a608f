//! # Bindable Dependencies
//!
//! Hygienic re-exports of the crates referenced by code generated by the
//! bindable macros, so a crate using `#[reactive_module]` does not need to
//! depend on them itself.
//!
//! This crate is an implementation detail and should not be used directly.

pub mod __private {
    //! Private re-exports for macro hygiene. Do not use directly.

    /// Logging facade used by generated binding routines
    pub use log;
}

pub use __private::*;
