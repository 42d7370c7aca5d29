//! Tokens as handed over by the tokenizer.
//!
//! The declaration model never produces tokens; it only reads their source
//! value verbatim (for names, modifiers, type references) and their span.

use std::fmt;

use super::Span;

/// A lexical unit: the exact source text plus its location.
#[derive(Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    pub value: String,
    pub span: Span,
}

impl Token {
    #[inline]
    pub fn new(value: impl Into<String>, span: Span) -> Self {
        Token {
            value: value.into(),
            span,
        }
    }

    /// Create a token with a dummy span, for synthesized declarations and tests.
    pub fn dummy(value: impl Into<String>) -> Self {
        Token {
            value: value.into(),
            span: Span::DUMMY,
        }
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {}", self.value, self.span)
    }
}

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::Token;
    // String (24 bytes) + Span (8 bytes)
    crate::static_assert_size!(Token, 32);
}
