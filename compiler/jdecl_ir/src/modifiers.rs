//! Declaration modifiers.
//!
//! Modifiers are stored exactly as written, duplicates and unknown words
//! included. Validation belongs to semantic analysis; this layer only offers
//! a [`ModifierFlags`] view over the keywords it recognizes.

use bitflags::bitflags;

use crate::Token;

bitflags! {
    /// Recognized modifier keywords.
    ///
    /// Computed on demand from the verbatim list; unknown words are ignored.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct ModifierFlags: u16 {
        const PUBLIC = 1 << 0;
        const PROTECTED = 1 << 1;
        const PRIVATE = 1 << 2;
        const STATIC = 1 << 3;
        const FINAL = 1 << 4;
        const ABSTRACT = 1 << 5;
        const NATIVE = 1 << 6;
        const SYNCHRONIZED = 1 << 7;
        const TRANSIENT = 1 << 8;
        const VOLATILE = 1 << 9;
        const STRICTFP = 1 << 10;
        const DEFAULT = 1 << 11;
    }
}

impl ModifierFlags {
    /// Map a single modifier keyword to its flag.
    pub fn from_keyword(word: &str) -> Option<Self> {
        let flag = match word {
            "public" => Self::PUBLIC,
            "protected" => Self::PROTECTED,
            "private" => Self::PRIVATE,
            "static" => Self::STATIC,
            "final" => Self::FINAL,
            "abstract" => Self::ABSTRACT,
            "native" => Self::NATIVE,
            "synchronized" => Self::SYNCHRONIZED,
            "transient" => Self::TRANSIENT,
            "volatile" => Self::VOLATILE,
            "strictfp" => Self::STRICTFP,
            "default" => Self::DEFAULT,
            _ => return None,
        };
        Some(flag)
    }
}

/// Ordered, verbatim list of modifier words.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct Modifiers(Vec<String>);

impl Modifiers {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Take the source values of modifier tokens, in order.
    pub fn from_tokens(tokens: &[Token]) -> Self {
        Self(tokens.iter().map(|t| t.value.clone()).collect())
    }

    /// Check whether a modifier word was written.
    pub fn contains(&self, word: &str) -> bool {
        self.0.iter().any(|m| m == word)
    }

    /// Flags for the recognized keywords.
    pub fn flags(&self) -> ModifierFlags {
        self.0
            .iter()
            .filter_map(|m| ModifierFlags::from_keyword(m))
            .fold(ModifierFlags::empty(), |acc, f| acc | f)
    }

    #[inline]
    pub fn is_static(&self) -> bool {
        self.contains("static")
    }

    #[inline]
    pub fn is_abstract(&self) -> bool {
        self.contains("abstract")
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for Modifiers {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}
