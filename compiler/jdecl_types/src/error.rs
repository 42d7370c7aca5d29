//! Registry errors.

use crate::Idx;

/// Failure of a registry operation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// The index does not name a type in this registry.
    #[error("unknown type index {0:?}")]
    UnknownType(Idx),

    /// Specialization with the wrong number of type arguments.
    #[error("`{signature}` takes {expected} type argument(s), {found} supplied")]
    ArityMismatch {
        signature: String,
        expected: usize,
        found: usize,
    },
}
