//! Generator configuration.
//!
//! Built with `typed-builder`; every option has a default so that
//! `GeneratorConfig::default()` is what the proc-macro front-end uses.
//!
//! # Examples
//!
//! ```
//! use bindable_codegen::config::{CyclePolicy, GeneratorConfig};
//!
//! let config = GeneratorConfig::builder()
//!     .cycle_policy(CyclePolicy::Allow)
//!     .build();
//! assert_eq!(config.field_prefixes, vec!["_".to_string(), "m_".to_string()]);
//! ```

use serde::{Deserialize, Serialize};
use syn::{Path, parse_quote};
use typed_builder::TypedBuilder;

/// What to do when the updater graph of a class contains a cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CyclePolicy {
    /// Report a `DependencyCycle` diagnostic unless the class acknowledges it.
    #[default]
    Reject,
    /// Accept cycles silently.
    Allow,
}

#[derive(Debug, Clone, PartialEq, Eq, TypedBuilder, Serialize, Deserialize)]
#[builder(doc)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Private-field prefixes stripped when deriving property names.
    /// At most one is stripped, longest match first.
    #[builder(default = vec!["_".to_string(), "m_".to_string()])]
    pub field_prefixes: Vec<String>,

    #[builder(default)]
    pub cycle_policy: CyclePolicy,

    /// Path of the runtime crate referenced by generated code.
    ///
    /// Kept as text so a configuration can cross threads.
    #[builder(default = "::bindable".to_string(), setter(into))]
    pub runtime_path: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl GeneratorConfig {
    /// Prefixes ordered longest first, so `m_` wins over a hypothetical `m`.
    pub fn prefixes_longest_first(&self) -> Vec<&str> {
        let mut prefixes: Vec<&str> = self.field_prefixes.iter().map(String::as_str).collect();
        prefixes.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        prefixes
    }

    /// The runtime path as a `syn::Path`; an unparsable path falls back to
    /// `::bindable`.
    pub fn runtime(&self) -> Path {
        syn::parse_str(&self.runtime_path).unwrap_or_else(|e| {
            log::warn!("invalid runtime path '{}': {e}; using ::bindable", self.runtime_path);
            parse_quote!(::bindable)
        })
    }
}
