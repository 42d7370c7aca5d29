//! Canonical types and the type registry.
//!
//! Source-declared types live in an arena owned by `jdecl_source`; everything
//! else (library types, primitives, specializations of generic types) lives in
//! a registry addressed by [`Idx`]. A resolved reference to either is a
//! [`TypeRef`].
//!
//! # Architecture
//!
//! ```text
//! TypeRegistry (trait)            CanonicalType / CanonicalMember (traits)
//!     └── TypePool (in-memory)        └── TypeHeader / MemberHeader (embedded data)
//! ```
//!
//! # Design Decisions
//!
//! - Primitives have fixed indices, so `void` needs no registry lookup
//! - Registries take `&self` everywhere; specialization interns behind a lock
//! - Well-known signatures come from [`WellKnown`], not string literals scattered
//!   through callers

mod canonical;
mod error;
mod idx;
mod kind;
mod pool;
mod registry;
mod type_ref;
mod well_known;

pub use canonical::{CanonicalMember, CanonicalType, MemberHeader, TypeHeader};
pub use error::RegistryError;
pub use idx::Idx;
pub use kind::DeclKind;
pub use pool::TypePool;
pub use registry::TypeRegistry;
pub use type_ref::{DeclId, TypeRef};
pub use well_known::WellKnown;

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::{DeclId, Idx, TypeRef};
    jdecl_ir::static_assert_size!(Idx, 4);
    jdecl_ir::static_assert_size!(DeclId, 4);
    // Two u32 payload variants: discriminant + 4 bytes
    jdecl_ir::static_assert_size!(TypeRef, 8);
}
