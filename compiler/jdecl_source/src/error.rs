//! Errors observable by consumers of the declaration model.

use jdecl_ir::Span;
use jdecl_types::RegistryError;

/// Failure of a query over source-declared types.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SourceError {
    /// A type reference was read before resolution filled it in.
    #[error("type reference `{reference}` at {span} is not resolved")]
    UnresolvedReference { reference: String, span: Span },

    /// The registry does not supply a type the language requires.
    #[error("registry does not provide the well-known {role} type")]
    MissingWellKnown { role: &'static str },

    #[error(transparent)]
    Registry(#[from] RegistryError),
}
