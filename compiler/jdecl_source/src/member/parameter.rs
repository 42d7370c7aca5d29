use jdecl_ir::{Modifiers, Token};
use jdecl_types::TypeRef;

use crate::TypeIdentRef;

/// A formal parameter of a method or constructor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Parameter {
    modifiers: Modifiers,
    type_ident: TypeIdentRef,
    varargs: bool,
    /// Absent where parameter names are optional, e.g. in interface stubs.
    name_token: Option<Token>,
}

impl Parameter {
    pub fn new(
        modifiers: &[Token],
        type_ident: TypeIdentRef,
        varargs: bool,
        name_token: Option<Token>,
    ) -> Self {
        Self {
            modifiers: Modifiers::from_tokens(modifiers),
            type_ident,
            varargs,
            name_token,
        }
    }

    pub fn name(&self) -> &str {
        self.name_token.as_ref().map_or("", Token::as_str)
    }

    pub fn name_token(&self) -> Option<&Token> {
        self.name_token.as_ref()
    }

    pub fn modifiers(&self) -> &Modifiers {
        &self.modifiers
    }

    pub fn type_ident(&self) -> &TypeIdentRef {
        &self.type_ident
    }

    pub fn ty(&self) -> Option<TypeRef> {
        self.type_ident.resolved()
    }

    /// Check if this is a trailing variable-length parameter (`T... args`).
    pub fn is_varargs(&self) -> bool {
        self.varargs
    }
}
