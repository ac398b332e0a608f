//! # bindable_codegen
//!
//! The analysis and generation pipeline behind the `bindable` macros.
//!
//! A reactive model is a struct marked `#[reactive_model]` together with the
//! inherent impl blocks of that struct in the same compilation unit:
//!
//! ```rust,ignore
//! #[reactive_model]
//! pub struct Counter {
//!     #[observable]
//!     _counter: i32,
//!     #[observable]
//!     _double: i32,
//! }
//!
//! impl Counter {
//!     #[dependent_updater]
//!     fn update_double(&mut self) {
//!         self.set_double(self.counter() * 2);
//!     }
//!
//!     #[click_handler("Increment")]
//!     fn on_increment(&mut self) {
//!         self.set_counter(self.counter() + 1);
//!     }
//! }
//! ```
//!
//! For every class the pipeline generates notifying accessors, a `Bindable`
//! impl wiring click handlers to UI buttons, and a `ReactiveModel` metadata
//! impl. Rule violations are collected as [`Diagnostic`]s and never stop
//! generation of unrelated members or classes.
//!
//! The [`Generator`] runs over source text; [`expand_module`] and
//! [`expand_model`] are the entry points of the proc-macro crate.

pub mod config;
pub mod diagnostics;
pub mod errors;
pub mod generate;
pub mod graph;
pub mod parse;
pub mod pipeline;
pub mod resolve;
pub mod utils;

pub use config::{CyclePolicy, GeneratorConfig};
pub use diagnostics::{Diagnostic, DiagnosticKind, DiagnosticSink};
pub use errors::{CodegenError, CodegenResult};
pub use pipeline::{
    ClassOutput, GeneratedClass, GeneratedUnit, Generator, expand_model, expand_module, process_class,
};
