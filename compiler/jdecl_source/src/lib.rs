//! Source-declared types for a class-based language.
//!
//! This crate models classes, interfaces, enums and annotation types as the
//! parser discovers them, before full semantic analysis:
//! - [`SourceArena`] owns every [`DeclaredType`] and member of one pass
//! - [`signature`] names types: `com/app/Foo`, `com/app/Foo$Bar`, `com/app/Foo$1`
//! - [`SourceArena::supers`] derives direct supertypes, adding the implicit
//!   root object and enum base types
//! - [`SourceArena::resolve_references`] fills in [`TypeIdentRef`]s against
//!   the arena and a [`TypeRegistry`](jdecl_types::TypeRegistry)
//!
//! # Construction Order
//!
//! Construction is sequential. A type is declared (and named) before any of
//! its members are attached; a local type is declared after the method,
//! constructor or initializer that contains it. Local-type ordinals are
//! counted per owning type, so two passes over the same source produce the
//! same signatures only if declarations arrive in the same order.

mod arena;
mod decl;
mod error;
mod ids;
pub mod member;
mod resolve;
mod scope;
pub mod signature;
mod supers;
mod type_ident;

pub use arena::SourceArena;
pub use decl::{DeclaredType, TypeDecl};
pub use error::SourceError;
pub use ids::{CtorId, FieldId, InitId, MethodId};
pub use member::{
    Body, Constructor, Field, Initializer, Invokable, Method, MethodDecl, Parameter,
};
pub use resolve::ResolveStats;
pub use scope::{CodeBlock, Scope};
pub use type_ident::{Annotation, TypeIdentRef};
