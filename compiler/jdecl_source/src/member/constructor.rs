use jdecl_ir::{Modifiers, Token};
use jdecl_types::{CanonicalMember, DeclId, MemberHeader, TypeRef};

use super::{Body, Invokable, Parameter};
use crate::TypeIdentRef;

/// A constructor declaration.
///
/// Constructors have no written return type; for identity purposes they
/// return their owning type.
#[derive(Clone, Debug)]
pub struct Constructor {
    pub(crate) owner: DeclId,
    header: MemberHeader,
    parameters: Vec<Parameter>,
    throws: Vec<TypeIdentRef>,
    body: Option<Body>,
}

impl Constructor {
    /// Name used for constructors in member listings.
    pub const NAME: &'static str = "<init>";

    pub fn new(
        owner: DeclId,
        modifiers: &[Token],
        parameters: Vec<Parameter>,
        throws: Vec<TypeIdentRef>,
        body: Option<Body>,
    ) -> Self {
        Self {
            owner,
            header: MemberHeader::new(Modifiers::from_tokens(modifiers)),
            parameters,
            throws,
            body,
        }
    }

    /// Attach the documentation comment preceding the declaration.
    #[must_use]
    pub fn with_docs(mut self, docs: impl Into<String>) -> Self {
        self.header.docs = docs.into();
        self
    }

    pub fn body(&self) -> Option<&[Token]> {
        self.body.as_deref()
    }
}

impl Invokable for Constructor {
    fn owner(&self) -> DeclId {
        self.owner
    }

    fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    fn return_type(&self) -> Option<TypeRef> {
        Some(TypeRef::Declared(self.owner))
    }

    fn throws(&self) -> &[TypeIdentRef] {
        &self.throws
    }

    fn has_implementation(&self) -> bool {
        self.body.is_some()
    }
}

impl CanonicalMember for Constructor {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn modifiers(&self) -> &Modifiers {
        &self.header.modifiers
    }

    fn docs(&self) -> &str {
        &self.header.docs
    }
}
