use thiserror::Error;

/// Failure taxonomy of the engine. Every fallible operation returns one of
/// these; the presentation bridge forwards the `Display` text as the
/// `message` field of its error payload.
#[derive(Debug, Clone, Error)]
pub enum EngineError {
    /// Raw input rejected before any numeric work (empty text, unbalanced
    /// parentheses, doubled operators).
    #[error("{0}")]
    Validation(String),
    /// Integral-notation extraction failed.
    #[error("{0}")]
    Parse(String),
    /// Expression could not be evaluated: unknown symbol, malformed
    /// arithmetic, or a non-numeric result mid-computation.
    #[error("{0}")]
    Eval(String),
}

impl EngineError {
    pub fn validation(message: impl Into<String>) -> Self {
        EngineError::Validation(message.into())
    }

    pub fn parse(message: impl Into<String>) -> Self {
        EngineError::Parse(message.into())
    }

    pub fn eval(message: impl Into<String>) -> Self {
        EngineError::Eval(message.into())
    }
}
