//! Parsing infrastructure for reactive models
//!
//! # Architecture
//!
//! 1. **Markers** (`markers.rs`) - the closed attribute vocabulary
//! 2. **Scanner** (`scanner.rs`) - finds `#[reactive_model]` structs and
//!    their inherent impls in a compilation unit
//! 3. **Extractor** (`extractor.rs`) - collects the marked members of one
//!    class in declaration order
//! 4. **Metadata** (`metadata.rs`) - data structures shared with the
//!    resolver, graph builder and emitter
//!
//! ```text
//! compilation unit
//!     ↓
//! DeclarationScanner (CandidateClass per marked struct)
//!     ↓
//! ModelExtractor (ExtractedClass)
//!     ↓
//! PropertyResolver + DependencyGraphBuilder (ReactiveClass)
//! ```

pub mod extractor;
pub mod markers;
pub mod metadata;
pub mod scanner;

pub use extractor::ModelExtractor;
pub use markers::{Marker, MarkerKind};
pub use metadata::{
    CandidateClass, ClickHandler, DependencyGraph, DependentUpdater, ExtractedClass, FieldDecl,
    ObservableField, ReactiveClass,
};
pub use scanner::DeclarationScanner;
