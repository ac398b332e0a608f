use thiserror::Error;

pub type BindableResult<T> = Result<T, BindableError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BindableError {
    #[error("Missing UI elements for {model}: {}", elements.join(", "))]
    MissingElements {
        model: &'static str,
        elements: Vec<&'static str>,
    },

    #[error("Unknown property '{property}' on {model}")]
    UnknownProperty { model: &'static str, property: String },
}
