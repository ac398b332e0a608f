//! Outcome of a binding routine.

use serde::Serialize;

use crate::errors::{BindableError, BindableResult};
use crate::traits::ClickBinding;

/// What one call to [`Bindable::bind`](crate::Bindable::bind) subscribed and
/// what it could not find.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BindReport {
    model: &'static str,
    subscribed: Vec<ClickBinding>,
    missing: Vec<ClickBinding>,
}

impl BindReport {
    pub fn new(model: &'static str) -> Self {
        Self {
            model,
            subscribed: Vec::new(),
            missing: Vec::new(),
        }
    }

    pub fn record_subscribed(&mut self, element: &'static str, handler: &'static str) {
        self.subscribed.push(ClickBinding { element, handler });
    }

    pub fn record_missing(&mut self, element: &'static str, handler: &'static str) {
        self.missing.push(ClickBinding { element, handler });
    }

    pub fn model(&self) -> &'static str {
        self.model
    }

    pub fn subscribed(&self) -> &[ClickBinding] {
        &self.subscribed
    }

    pub fn missing(&self) -> &[ClickBinding] {
        &self.missing
    }

    /// True when every handler found its element.
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }

    /// Treat missing elements as an error.
    pub fn into_result(self) -> BindableResult<Self> {
        if self.is_complete() {
            Ok(self)
        } else {
            Err(BindableError::MissingElements {
                model: self.model,
                elements: self.missing.iter().map(|b| b.element).collect(),
            })
        }
    }
}
