use jdecl_ir::{Modifiers, Token};
use jdecl_types::{CanonicalMember, DeclId, MemberHeader, TypeRef};

use super::{Body, Invokable, Parameter};
use crate::TypeIdentRef;

/// A `static { ... }` or instance `{ ... }` initializer block.
#[derive(Clone, Debug)]
pub struct Initializer {
    pub(crate) owner: DeclId,
    header: MemberHeader,
    body: Option<Body>,
}

impl Initializer {
    pub fn new(owner: DeclId, modifiers: &[Token], body: Option<Body>) -> Self {
        Self {
            owner,
            header: MemberHeader::new(Modifiers::from_tokens(modifiers)),
            body,
        }
    }

    /// Attach the documentation comment preceding the declaration.
    #[must_use]
    pub fn with_docs(mut self, docs: impl Into<String>) -> Self {
        self.header.docs = docs.into();
        self
    }

    pub fn is_static(&self) -> bool {
        self.header.modifiers.is_static()
    }

    pub fn body(&self) -> Option<&[Token]> {
        self.body.as_deref()
    }
}

impl Invokable for Initializer {
    fn owner(&self) -> DeclId {
        self.owner
    }

    fn parameters(&self) -> &[Parameter] {
        &[]
    }

    fn return_type(&self) -> Option<TypeRef> {
        Some(TypeRef::VOID)
    }

    fn throws(&self) -> &[TypeIdentRef] {
        &[]
    }

    fn has_implementation(&self) -> bool {
        self.body.is_some()
    }
}

impl CanonicalMember for Initializer {
    /// `<clinit>` for static blocks, `<init>` for instance blocks.
    fn name(&self) -> &str {
        if self.is_static() {
            "<clinit>"
        } else {
            "<init>"
        }
    }

    fn modifiers(&self) -> &Modifiers {
        &self.header.modifiers
    }

    fn docs(&self) -> &str {
        &self.header.docs
    }
}
