//! Structured rule violations.
//!
//! Every check in the pipeline reports into a [`DiagnosticSink`] instead of
//! returning early, so one bad member never hides problems in its siblings.
//! The proc-macro front-end folds the sink into a single combined
//! `syn::Error`; the text front-end hands the plain [`Diagnostic`] records to
//! the host.

use proc_macro2::Span;
use serde::Serialize;
use strum::{AsRefStr, Display, EnumIter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr, EnumIter, Serialize)]
pub enum DiagnosticKind {
    ObservableFieldMustNotBePublic,
    DuplicatePropertyName,
    InvalidPropertyName,
    DuplicateElementName,
    DependencyCycle,
    InvalidMemberSignature,
    MalformedMarker,
    UnsupportedDeclaration,
    EmissionFailed,
}

/// One violation, localized to a member of a class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    /// Qualified name of the class the member belongs to.
    pub class: String,
    /// Field or method name, or the class name for class-level problems.
    pub member: String,
    pub message: String,
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}::{}: {}", self.kind, self.class, self.member, self.message)
    }
}

#[derive(Debug, Default)]
pub struct DiagnosticSink {
    entries: Vec<(Diagnostic, Span)>,
}

impl DiagnosticSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn report(
        &mut self,
        kind: DiagnosticKind,
        class: &str,
        member: &str,
        span: Span,
        message: impl Into<String>,
    ) {
        let diagnostic = Diagnostic {
            kind,
            class: class.to_string(),
            member: member.to_string(),
            message: message.into(),
        };
        log::debug!("diagnostic: {diagnostic}");
        self.entries.push((diagnostic, span));
    }

    pub fn append(&mut self, other: DiagnosticSink) {
        self.entries.extend(other.entries);
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn count(&self, kind: DiagnosticKind) -> usize {
        self.entries.iter().filter(|(d, _)| d.kind == kind).count()
    }

    pub fn diagnostics(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter().map(|(d, _)| d)
    }

    /// Drops spans, keeping the thread-portable records.
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.entries.into_iter().map(|(d, _)| d).collect()
    }

    /// Combine everything into one `syn::Error`, or `None` when clean.
    pub fn into_syn_error(self) -> Option<syn::Error> {
        let mut combined: Option<syn::Error> = None;
        for (diagnostic, span) in self.entries {
            let error = syn::Error::new(span, format!("{}: {}", diagnostic.kind, diagnostic.message));
            match combined.as_mut() {
                Some(existing) => existing.combine(error),
                None => combined = Some(error),
            }
        }
        combined
    }
}
