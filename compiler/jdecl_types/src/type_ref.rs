//! Resolved type handles.

use crate::Idx;

/// Index of a source-declared type in its arena.
///
/// Minted by the arena that owns the declaration; meaningless elsewhere.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct DeclId(u32);

impl DeclId {
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// A resolved type: either a registry type or a type declared in source.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum TypeRef {
    Canonical(Idx),
    Declared(DeclId),
}

impl TypeRef {
    pub const VOID: Self = Self::Canonical(Idx::VOID);

    pub fn as_canonical(self) -> Option<Idx> {
        match self {
            Self::Canonical(idx) => Some(idx),
            Self::Declared(_) => None,
        }
    }

    pub fn as_declared(self) -> Option<DeclId> {
        match self {
            Self::Declared(id) => Some(id),
            Self::Canonical(_) => None,
        }
    }
}

impl From<Idx> for TypeRef {
    fn from(idx: Idx) -> Self {
        Self::Canonical(idx)
    }
}

impl From<DeclId> for TypeRef {
    fn from(id: DeclId) -> Self {
        Self::Declared(id)
    }
}
