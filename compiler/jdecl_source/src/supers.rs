//! Direct supertypes of declared types.
//!
//! Derivation, in order:
//! 1. Resolved `extends` references, then resolved `implements` references.
//! 2. Enums: the explicit `extends` list is ignored and the enum base type,
//!    specialized with the enum itself, comes first.
//! 3. Otherwise, if no explicit supertype is a class, the root object type
//!    comes first.
//!
//! Nothing is cached. Results depend only on the arena and the registry, so
//! repeated calls return the same list once every reference is resolved.

use jdecl_types::{CanonicalType, DeclId, TypeRef, TypeRegistry};
use tracing::trace;

use crate::{SourceArena, SourceError, TypeIdentRef};

impl SourceArena {
    /// Ordered direct supertypes of `id`.
    ///
    /// Fails if a reference that takes part in the result has not been
    /// resolved yet, or if the registry lacks a well-known type.
    #[tracing::instrument(level = "trace", skip(self, registry))]
    pub fn supers<R: TypeRegistry + ?Sized>(
        &self,
        id: DeclId,
        registry: &R,
    ) -> Result<Vec<TypeRef>, SourceError> {
        let decl = self.decl(id);

        if decl.kind().is_enum() {
            let base = registry
                .enum_base()
                .ok_or(SourceError::MissingWellKnown { role: "enum base" })?;
            let specialized = registry.specialize(base, &[TypeRef::Declared(id)])?;
            let mut supers = Vec::with_capacity(decl.implements().len() + 1);
            supers.push(TypeRef::Canonical(specialized));
            for reference in decl.implements() {
                supers.push(resolved(reference)?);
            }
            return Ok(supers);
        }

        let explicit = decl
            .extends()
            .iter()
            .chain(decl.implements())
            .map(resolved)
            .collect::<Result<Vec<_>, _>>()?;

        let has_class_parent = explicit
            .iter()
            .any(|&ty| self.kind_of(ty, registry).is_some_and(|k| k.is_class()));
        if has_class_parent {
            return Ok(explicit);
        }

        let root = registry
            .root_object()
            .ok_or(SourceError::MissingWellKnown { role: "root object" })?;
        trace!(signature = decl.signature(), "implicit root object supertype");
        let mut supers = Vec::with_capacity(explicit.len() + 1);
        supers.push(TypeRef::Canonical(root));
        supers.extend(explicit);
        Ok(supers)
    }
}

fn resolved(reference: &TypeIdentRef) -> Result<TypeRef, SourceError> {
    reference
        .resolved()
        .ok_or_else(|| SourceError::UnresolvedReference {
            reference: reference.text(),
            span: reference.span(),
        })
}
