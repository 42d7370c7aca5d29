use jdecl_ir::{Modifiers, Token};
use jdecl_types::{CanonicalMember, DeclId, MemberHeader, TypeRef};

use crate::TypeIdentRef;

/// A field declaration.
#[derive(Clone, Debug)]
pub struct Field {
    pub(crate) owner: DeclId,
    header: MemberHeader,
    field_type: TypeIdentRef,
    name_token: Option<Token>,
}

impl Field {
    pub fn new(
        owner: DeclId,
        modifiers: &[Token],
        field_type: TypeIdentRef,
        name_token: Option<Token>,
    ) -> Self {
        Self {
            owner,
            header: MemberHeader::new(Modifiers::from_tokens(modifiers)),
            field_type,
            name_token,
        }
    }

    /// Attach the documentation comment preceding the declaration.
    #[must_use]
    pub fn with_docs(mut self, docs: impl Into<String>) -> Self {
        self.header.docs = docs.into();
        self
    }

    pub fn owner(&self) -> DeclId {
        self.owner
    }

    pub fn type_ident(&self) -> &TypeIdentRef {
        &self.field_type
    }

    pub fn ty(&self) -> Option<TypeRef> {
        self.field_type.resolved()
    }

    pub fn name_token(&self) -> Option<&Token> {
        self.name_token.as_ref()
    }
}

impl CanonicalMember for Field {
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
