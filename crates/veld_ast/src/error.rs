//! AST error types.

use thiserror::Error;

use crate::{Span, Token};

/// Errors raised while building AST values or by the layers that feed them.
#[derive(Debug, Error)]
pub enum AstError {
    /// An array type was constructed around something that is not a type.
    #[error("array element type must be a type, found {found}")]
    InvalidArrayElement {
        /// Shape of the offending value.
        found: &'static str,
    },

    /// A diagnostic raised by the parser or analyzer via [`error`].
    #[error("{message}")]
    Diagnostic {
        /// Human-readable message.
        message: String,
        /// Span of the offending token, when one was supplied.
        span: Option<Span>,
    },
}

impl AstError {
    /// Creates a diagnostic without source location.
    pub fn diagnostic(message: impl Into<String>) -> Self {
        Self::Diagnostic {
            message: message.into(),
            span: None,
        }
    }

    /// Source span carried by this error, if any.
    pub fn span(&self) -> Option<Span> {
        match self {
            AstError::Diagnostic { span, .. } => *span,
            AstError::InvalidArrayElement { .. } => None,
        }
    }
}

/// Raises a diagnostic, capturing the token's span when one is supplied.
///
/// This is the failure signal the parser and analyzer use. Turning the span
/// back into line/column text is left to the source-mapping layer.
pub fn error<T>(message: impl Into<String>, token: Option<&Token>) -> Result<T, AstError> {
    Err(AstError::Diagnostic {
        message: message.into(),
        span: token.and_then(|token| token.span),
    })
}
