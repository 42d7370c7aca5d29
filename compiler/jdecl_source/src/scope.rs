//! Enclosing scopes of declarations.

use jdecl_types::DeclId;

use crate::{CtorId, InitId, MethodId};

/// The immediate lexical container of a type declaration.
///
/// Ids are non-owning back-references into the same
/// [`SourceArena`](crate::SourceArena).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Scope {
    /// Top level of a compilation unit. Empty for the default package.
    Package(String),
    /// Directly inside a type body.
    Type(DeclId),
    /// Inside a method body.
    Method(MethodId),
    /// Inside a constructor or initializer body.
    Code(CodeBlock),
}

/// Executable code that is not a method.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CodeBlock {
    Constructor(CtorId),
    Initializer(InitId),
}

impl Scope {
    pub fn package(name: impl Into<String>) -> Self {
        Self::Package(name.into())
    }

    /// Check if declarations in this scope are local (inside executable code).
    pub fn is_code(&self) -> bool {
        matches!(self, Self::Method(_) | Self::Code(_))
    }
}

impl From<CtorId> for Scope {
    fn from(id: CtorId) -> Self {
        Self::Code(CodeBlock::Constructor(id))
    }
}

impl From<InitId> for Scope {
    fn from(id: InitId) -> Self {
        Self::Code(CodeBlock::Initializer(id))
    }
}

impl From<MethodId> for Scope {
    fn from(id: MethodId) -> Self {
        Self::Method(id)
    }
}

impl From<DeclId> for Scope {
    fn from(id: DeclId) -> Self {
        Self::Type(id)
    }
}
