//! Unresolved type references and annotations.

use std::sync::OnceLock;

use jdecl_ir::{Span, Token};
use jdecl_types::TypeRef;

/// A type named in source, plus its resolution once lookup completes.
///
/// The token run is fixed at construction. The resolved handle is written at
/// most once, possibly long after parsing (see
/// [`SourceArena::resolve_references`](crate::SourceArena::resolve_references)).
#[derive(Clone, Debug)]
pub struct TypeIdentRef {
    tokens: Vec<Token>,
    resolved: OnceLock<TypeRef>,
}

impl TypeIdentRef {
    /// A reference that still needs resolving.
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            resolved: OnceLock::new(),
        }
    }

    /// A reference the parser could already resolve.
    pub fn resolved_to(tokens: Vec<Token>, ty: TypeRef) -> Self {
        Self {
            tokens,
            resolved: OnceLock::from(ty),
        }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// The resolved type, if resolution has happened.
    #[inline]
    pub fn resolved(&self) -> Option<TypeRef> {
        self.resolved.get().copied()
    }

    /// Record the resolved type. Returns `false` if it was already set.
    pub fn resolve(&self, ty: TypeRef) -> bool {
        self.resolved.set(ty).is_ok()
    }

    /// Source text of the reference, token values concatenated.
    pub fn text(&self) -> String {
        self.tokens.iter().map(Token::as_str).collect()
    }

    /// Span covering every token; `Span::DUMMY` for an empty token run.
    pub fn span(&self) -> Span {
        self.tokens
            .iter()
            .map(|t| t.span)
            .reduce(Span::merge)
            .unwrap_or(Span::DUMMY)
    }

    /// Slash-separated name of the element type used for lookup: type
    /// arguments, array brackets and whitespace are dropped, dots become
    /// slashes. See [`array_dims`](Self::array_dims) for the brackets.
    pub fn lookup_key(&self) -> String {
        let text = self.text();
        let base = text.split(['<', '[']).next().unwrap_or_default();
        base.chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| if c == '.' { '/' } else { c })
            .collect()
    }

    /// Number of array dimensions: `[` brackets outside type arguments.
    pub fn array_dims(&self) -> usize {
        let mut depth = 0usize;
        let mut dims = 0;
        for c in self.tokens.iter().flat_map(|t| t.as_str().chars()) {
            match c {
                '<' => depth += 1,
                '>' => depth = depth.saturating_sub(1),
                '[' if depth == 0 => dims += 1,
                _ => {}
            }
        }
        dims
    }
}

impl PartialEq for TypeIdentRef {
    fn eq(&self, other: &Self) -> bool {
        self.tokens == other.tokens && self.resolved() == other.resolved()
    }
}

impl Eq for TypeIdentRef {}

/// An annotation at a declaration site. Arguments are not modelled.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Annotation {
    type_ident: TypeIdentRef,
}

impl Annotation {
    pub fn new(type_ident: TypeIdentRef) -> Self {
        Self { type_ident }
    }

    pub fn type_ident(&self) -> &TypeIdentRef {
        &self.type_ident
    }

    /// The annotation's own declared type, once resolved.
    pub fn ty(&self) -> Option<TypeRef> {
        self.type_ident.resolved()
    }
}
