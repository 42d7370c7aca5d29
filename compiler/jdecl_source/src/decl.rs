//! Declared types.

use jdecl_ir::{Modifiers, Span, Token};
use jdecl_types::{CanonicalType, DeclKind, TypeHeader};

use crate::{CtorId, FieldId, InitId, MethodId, Scope, TypeIdentRef};

/// Header of a type declaration as recognized by the parser.
#[derive(Clone, Debug)]
pub struct TypeDecl {
    pub docs: String,
    pub modifiers: Vec<Token>,
    /// The `class` / `interface` / `enum` / `@interface` keyword.
    pub kind_token: Token,
    /// Absent for anonymous types.
    pub name: Option<Token>,
}

impl TypeDecl {
    pub fn new(kind_token: Token, name: Option<Token>) -> Self {
        Self {
            docs: String::new(),
            modifiers: Vec::new(),
            kind_token,
            name,
        }
    }

    #[must_use]
    pub fn with_modifiers(mut self, modifiers: Vec<Token>) -> Self {
        self.modifiers = modifiers;
        self
    }

    #[must_use]
    pub fn with_docs(mut self, docs: impl Into<String>) -> Self {
        self.docs = docs.into();
        self
    }
}

/// A class, interface, enum or annotation type declared in source.
///
/// Created by [`SourceArena::declare_type`](crate::SourceArena::declare_type),
/// which assigns the signature exactly once. Members are attached through the
/// arena and stored here as ids, in declaration order.
#[derive(Clone, Debug)]
pub struct DeclaredType {
    pub(crate) header: TypeHeader,
    pub(crate) package: String,
    pub(crate) scope: Scope,
    pub(crate) kind_span: Span,
    pub(crate) name_token: Option<Token>,
    /// Local and anonymous types declared anywhere in this type's code.
    pub(crate) local_type_count: u32,
    pub(crate) extends: Vec<TypeIdentRef>,
    pub(crate) implements: Vec<TypeIdentRef>,
    pub(crate) constructors: Vec<CtorId>,
    pub(crate) methods: Vec<MethodId>,
    pub(crate) fields: Vec<FieldId>,
    pub(crate) initializers: Vec<InitId>,
}

impl DeclaredType {
    pub(crate) fn new(
        signature: String,
        kind: DeclKind,
        package: String,
        scope: Scope,
        decl: TypeDecl,
    ) -> Self {
        Self {
            header: TypeHeader::new(
                signature,
                kind,
                Modifiers::from_tokens(&decl.modifiers),
                decl.docs,
            ),
            package,
            scope,
            kind_span: decl.kind_token.span,
            name_token: decl.name,
            local_type_count: 0,
            extends: Vec::new(),
            implements: Vec::new(),
            constructors: Vec::new(),
            methods: Vec::new(),
            fields: Vec::new(),
            initializers: Vec::new(),
        }
    }

    /// Declared simple name; empty for anonymous types.
    pub fn name(&self) -> &str {
        self.name_token.as_ref().map_or("", Token::as_str)
    }

    pub fn name_token(&self) -> Option<&Token> {
        self.name_token.as_ref()
    }

    /// Package of a top-level type; empty for nested and local types.
    pub fn package(&self) -> &str {
        &self.package
    }

    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    pub fn kind_span(&self) -> Span {
        self.kind_span
    }

    /// Number of local and anonymous types minted inside this type so far.
    pub fn local_type_count(&self) -> u32 {
        self.local_type_count
    }

    pub fn extends(&self) -> &[TypeIdentRef] {
        &self.extends
    }

    pub fn implements(&self) -> &[TypeIdentRef] {
        &self.implements
    }

    pub fn constructors(&self) -> &[CtorId] {
        &self.constructors
    }

    pub fn methods(&self) -> &[MethodId] {
        &self.methods
    }

    pub fn fields(&self) -> &[FieldId] {
        &self.fields
    }

    pub fn initializers(&self) -> &[InitId] {
        &self.initializers
    }
}

impl CanonicalType for DeclaredType {
    fn signature(&self) -> &str {
        self.header.signature()
    }

    fn kind(&self) -> DeclKind {
        self.header.kind()
    }

    fn modifiers(&self) -> &Modifiers {
        self.header.modifiers()
    }

    fn docs(&self) -> &str {
        self.header.docs()
    }
}
