use thiserror::Error;

pub type CodegenResult<T> = Result<T, CodegenError>;

/// Failures that stop a whole compilation unit.
///
/// Rule violations inside a class are never reported here; they are
/// [`Diagnostic`](crate::diagnostics::Diagnostic)s attached to the class output.
#[derive(Error, Debug)]
pub enum CodegenError {
    #[error("Failed to parse compilation unit: {0}")]
    Parse(String),

    #[error("Generation worker for unit {index} panicked")]
    WorkerPanicked { index: usize },
}

impl From<syn::Error> for CodegenError {
    fn from(err: syn::Error) -> Self {
        CodegenError::Parse(err.to_string())
    }
}
