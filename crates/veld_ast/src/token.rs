//! Leaf tokens.
//!
//! Tokens are the leaves of the node graph: a lexical category plus the raw
//! source fragment. They have no children and no arena identity. Once the
//! analyzer resolves a token (for example an identifier to its symbol
//! record), the resolved payload is attached to the token and traversal
//! treats the token as a transparent placeholder for it.

use std::fmt;

use serde::Serialize;

use crate::{Span, Value};

/// Lexical category of a leaf token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenCategory {
    /// Reserved word.
    Keyword,
    /// Name introduced or referenced by the program.
    Identifier,
    /// Numeric literal.
    Number,
    /// String literal.
    #[serde(rename = "string")]
    StringLit,
    /// Operator or punctuation.
    Operator,
}

impl fmt::Display for TokenCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenCategory::Keyword => "keyword",
            TokenCategory::Identifier => "identifier",
            TokenCategory::Number => "number",
            TokenCategory::StringLit => "string",
            TokenCategory::Operator => "operator",
        };
        f.write_str(name)
    }
}

/// A leaf token: a lexical category and a raw source fragment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Token {
    /// Lexical category.
    pub category: TokenCategory,
    /// Raw source text of the token.
    pub lexeme: String,
    /// Source span, when the token came from real source text.
    pub span: Option<Span>,
    /// Semantic payload attached by the analyzer, if resolved.
    pub resolved: Option<Box<Value>>,
}

impl Token {
    /// Creates a new token without source location.
    pub fn new(category: TokenCategory, lexeme: impl Into<String>) -> Self {
        Self {
            category,
            lexeme: lexeme.into(),
            span: None,
            resolved: None,
        }
    }

    /// Creates a new token with a source span.
    pub fn with_span(category: TokenCategory, lexeme: impl Into<String>, span: Span) -> Self {
        Self {
            category,
            lexeme: lexeme.into(),
            span: Some(span),
            resolved: None,
        }
    }

    /// Attaches the resolved semantic payload to this token.
    ///
    /// Traversal recurses into the payload instead of the token itself once
    /// it is set.
    pub fn resolve(&mut self, value: Value) {
        self.resolved = Some(Box::new(value));
    }

    /// Returns true if a semantic payload has been attached.
    #[inline]
    pub const fn is_resolved(&self) -> bool {
        self.resolved.is_some()
    }
}
