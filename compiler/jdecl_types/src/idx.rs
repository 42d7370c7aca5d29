//! Registry type handle.
//!
//! `Idx` addresses a canonical type inside a [`TypePool`](crate::TypePool).
//!
//! - Primitive types have fixed indices (0-8) for O(1) lookup
//! - Registered and specialized types start at [`Idx::FIRST_DYNAMIC`]
//! - Type equality is O(1) index comparison

use std::fmt;

/// A 32-bit index into the type registry.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct Idx(u32);

impl Idx {
    // === Primitive Types (indices 0-8) ===

    /// The `void` type. Return type of initializers.
    pub const VOID: Self = Self(0);
    pub const BOOLEAN: Self = Self(1);
    pub const BYTE: Self = Self(2);
    pub const CHAR: Self = Self(3);
    pub const SHORT: Self = Self(4);
    pub const INT: Self = Self(5);
    pub const LONG: Self = Self(6);
    pub const FLOAT: Self = Self(7);
    pub const DOUBLE: Self = Self(8);

    /// Number of pre-assigned primitive types.
    pub const PRIMITIVE_COUNT: u32 = 9;

    // Indices 9-15 are reserved.

    /// First index for registered types.
    pub const FIRST_DYNAMIC: u32 = 16;

    const PRIMITIVE_NAMES: [&'static str; 9] = [
        "void", "boolean", "byte", "char", "short", "int", "long", "float", "double",
    ];

    /// Create an index from a raw u32 value.
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Get the raw u32 value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Check if this is a primitive type.
    #[inline]
    pub const fn is_primitive(self) -> bool {
        self.0 < Self::PRIMITIVE_COUNT
    }

    /// Source keyword of a primitive type, `None` for registered types.
    pub fn primitive_name(self) -> Option<&'static str> {
        Self::PRIMITIVE_NAMES.get(self.0 as usize).copied()
    }

    /// Look up a primitive type by its source keyword.
    pub fn from_primitive_name(name: &str) -> Option<Self> {
        Self::PRIMITIVE_NAMES
            .iter()
            .position(|&n| n == name)
            .and_then(|i| u32::try_from(i).ok())
            .map(Self)
    }
}

impl fmt::Debug for Idx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.primitive_name() {
            Some(name) => write!(f, "Idx({name})"),
            None => write!(f, "Idx({})", self.0),
        }
    }
}
