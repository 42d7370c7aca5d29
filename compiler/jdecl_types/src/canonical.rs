//! The canonical type and member abstraction.
//!
//! Source-backed entities embed a [`TypeHeader`] or [`MemberHeader`] and expose
//! the shared capability set through [`CanonicalType`] / [`CanonicalMember`].

use jdecl_ir::Modifiers;

use crate::DeclKind;

/// Identity, kind, modifiers and documentation of a type.
pub trait CanonicalType {
    /// Program-wide unique identity string.
    fn signature(&self) -> &str;

    fn kind(&self) -> DeclKind;

    fn modifiers(&self) -> &Modifiers;

    fn docs(&self) -> &str;
}

/// Name, modifiers and documentation of a member.
pub trait CanonicalMember {
    /// Declared name; empty when the source omitted it.
    fn name(&self) -> &str;

    fn modifiers(&self) -> &Modifiers;

    fn docs(&self) -> &str;
}

/// Embedded canonical data of a type.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TypeHeader {
    signature: String,
    kind: DeclKind,
    modifiers: Modifiers,
    docs: String,
}

impl TypeHeader {
    pub fn new(signature: String, kind: DeclKind, modifiers: Modifiers, docs: String) -> Self {
        Self {
            signature,
            kind,
            modifiers,
            docs,
        }
    }
}

impl CanonicalType for TypeHeader {
    fn signature(&self) -> &str {
        &self.signature
    }

    fn kind(&self) -> DeclKind {
        self.kind
    }

    fn modifiers(&self) -> &Modifiers {
        &self.modifiers
    }

    fn docs(&self) -> &str {
        &self.docs
    }
}

/// Embedded canonical data of a member. The name is derived by the member.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct MemberHeader {
    pub modifiers: Modifiers,
    pub docs: String,
}

impl MemberHeader {
    pub fn new(modifiers: Modifiers) -> Self {
        Self {
            modifiers,
            docs: String::new(),
        }
    }
}
