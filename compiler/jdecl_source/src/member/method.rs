use jdecl_ir::{Modifiers, Token};
use jdecl_types::{CanonicalMember, DeclId, MemberHeader, TypeRef};

use super::{Body, Invokable, Parameter};
use crate::{Annotation, TypeIdentRef};

/// Everything a method declaration carries besides its owner.
#[derive(Clone, Debug)]
pub struct MethodDecl {
    pub modifiers: Vec<Token>,
    pub annotations: Vec<Annotation>,
    pub return_type: TypeIdentRef,
    pub name: Option<Token>,
    pub parameters: Vec<Parameter>,
    pub throws: Vec<TypeIdentRef>,
    /// `None` for abstract and interface methods.
    pub body: Option<Body>,
}

/// A method declaration.
#[derive(Clone, Debug)]
pub struct Method {
    pub(crate) owner: DeclId,
    header: MemberHeader,
    annotations: Vec<Annotation>,
    return_ident: TypeIdentRef,
    name_token: Option<Token>,
    parameters: Vec<Parameter>,
    throws: Vec<TypeIdentRef>,
    body: Option<Body>,
}

impl Method {
    pub fn new(owner: DeclId, decl: MethodDecl) -> Self {
        Self {
            owner,
            header: MemberHeader::new(Modifiers::from_tokens(&decl.modifiers)),
            annotations: decl.annotations,
            return_ident: decl.return_type,
            name_token: decl.name,
            parameters: decl.parameters,
            throws: decl.throws,
            body: decl.body,
        }
    }

    /// Attach the documentation comment preceding the declaration.
    #[must_use]
    pub fn with_docs(mut self, docs: impl Into<String>) -> Self {
        self.header.docs = docs.into();
        self
    }

    /// Annotations in the order written at the declaration site.
    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    pub fn return_ident(&self) -> &TypeIdentRef {
        &self.return_ident
    }

    pub fn name_token(&self) -> Option<&Token> {
        self.name_token.as_ref()
    }

    pub fn body(&self) -> Option<&[Token]> {
        self.body.as_deref()
    }
}

impl Invokable for Method {
    fn owner(&self) -> DeclId {
        self.owner
    }

    fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    fn return_type(&self) -> Option<TypeRef> {
        self.return_ident.resolved()
    }

    fn throws(&self) -> &[TypeIdentRef] {
        &self.throws
    }

    fn has_implementation(&self) -> bool {
        self.body.is_some()
    }
}

impl CanonicalMember for Method {
    fn name(&self) -> &str {
        self.name_token.as_ref().map_or("", Token::as_str)
    }

    fn modifiers(&self) -> &Modifiers {
        &self.header.modifiers
    }

    fn docs(&self) -> &str {
        &self.header.docs
    }
}
