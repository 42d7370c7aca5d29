//! Arena indices for members.
//!
//! Types are addressed by [`DeclId`](jdecl_types::DeclId); each member kind
//! has its own index space so a method id can never name a field.

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
        #[repr(transparent)]
        pub struct $name(u32);

        impl $name {
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
    };
}

define_id!(
    /// Index of a [`Field`](crate::Field) in a [`SourceArena`](crate::SourceArena).
    FieldId
);
define_id!(
    /// Index of a [`Method`](crate::Method) in a [`SourceArena`](crate::SourceArena).
    MethodId
);
define_id!(
    /// Index of a [`Constructor`](crate::Constructor) in a [`SourceArena`](crate::SourceArena).
    CtorId
);
define_id!(
    /// Index of an [`Initializer`](crate::Initializer) in a [`SourceArena`](crate::SourceArena).
    InitId
);
