use thiserror::Error;

use crate::classifier::LineKind;

#[derive(Error, Debug)]
pub enum UfuncGenError {
    /// A signature whose parameter list matches neither arity marker.
    #[error("line {line}: {name} is neither unary nor binary (parameters: {params})")]
    Arity {
        line: usize,
        name: String,
        params: String,
    },

    /// A code or equivalent expression appeared before any signature.
    #[error("line {line}: {kind} expression without a preceding signature")]
    OrphanExpression { line: usize, kind: LineKind },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(String),
}

pub type GenResult<T> = Result<T, UfuncGenError>;

impl UfuncGenError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        UfuncGenError::Config(message.into())
    }

    /// Whether the error was raised by the DSL content rather than the environment.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            UfuncGenError::Arity { .. } | UfuncGenError::OrphanExpression { .. }
        )
    }
}
