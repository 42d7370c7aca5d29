//! Filling in type references after parsing.
//!
//! The parser records type references as token runs. Once every compilation
//! unit of a pass has been declared, [`SourceArena::resolve_references`] looks
//! each pending reference up, source types first, then the registry.
//!
//! Candidates for a reference `Name` seen inside type `T`, first hit wins:
//! 1. primitive keywords
//! 2. member types of `T` and of each enclosing type (`T$Name`, `Outer$Name`)
//! 3. the package of the enclosing top-level type (`pkg/Name`)
//! 4. the name as written (`java/util/List` for `java.util.List`)
//! 5. the registry's implicitly imported package (`java/lang/Name`)
//!
//! A qualified name that misses every candidate is retried as a member type
//! of its leading segments: `Outer/Inner` resolves `Outer` as above and then
//! looks up `<signature of Outer>$Inner`, so both `Outer.Inner` and
//! `java.util.Map.Entry` find their member types.
//!
//! Array brackets are resolved last: the element type is found first, then
//! wrapped once per dimension through [`TypeRegistry::array_of`].

use jdecl_types::{CanonicalType, DeclId, Idx, TypeRef, TypeRegistry};
use tracing::debug;

use crate::member::{Invokable, Parameter};
use crate::{signature, Annotation, Scope, SourceArena, TypeIdentRef};

/// Counts from one resolution pass.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ResolveStats {
    /// References resolved by this pass.
    pub resolved: usize,
    /// References that were already resolved and left untouched.
    pub already_resolved: usize,
    /// References no candidate matched.
    pub unresolved: usize,
}

impl SourceArena {
    /// Resolve every pending type reference in the arena.
    ///
    /// Already-resolved references are never overwritten, so running the
    /// pass again after the registry learns more types only fills gaps.
    #[tracing::instrument(level = "debug", skip_all, fields(types = self.len()))]
    pub fn resolve_references<R: TypeRegistry + ?Sized>(&self, registry: &R) -> ResolveStats {
        let mut stats = ResolveStats::default();
        for (id, decl) in self.types() {
            let mut resolve = |reference: &TypeIdentRef| {
                self.resolve_one(id, reference, registry, &mut stats);
            };

            decl.extends().iter().for_each(&mut resolve);
            decl.implements().iter().for_each(&mut resolve);
            for &field in decl.fields() {
                resolve(self.field(field).type_ident());
            }
            for &ctor in decl.constructors() {
                let ctor = self.constructor(ctor);
                ctor.parameters()
                    .iter()
                    .map(Parameter::type_ident)
                    .for_each(&mut resolve);
                ctor.throws().iter().for_each(&mut resolve);
            }
            for &method in decl.methods() {
                let method = self.method(method);
                resolve(method.return_ident());
                method
                    .parameters()
                    .iter()
                    .map(Parameter::type_ident)
                    .for_each(&mut resolve);
                method.throws().iter().for_each(&mut resolve);
                method
                    .annotations()
                    .iter()
                    .map(Annotation::type_ident)
                    .for_each(&mut resolve);
            }
        }
        debug!(
            resolved = stats.resolved,
            already = stats.already_resolved,
            unresolved = stats.unresolved,
            "reference resolution complete"
        );
        stats
    }

    fn resolve_one<R: TypeRegistry + ?Sized>(
        &self,
        context: DeclId,
        reference: &TypeIdentRef,
        registry: &R,
        stats: &mut ResolveStats,
    ) {
        if reference.resolved().is_some() {
            stats.already_resolved += 1;
            return;
        }
        let element = self.find_type(context, &reference.lookup_key(), registry);
        let found = (0..reference.array_dims()).fold(element, |ty, _| {
            ty.and_then(|ty| registry.array_of(ty)).map(TypeRef::Canonical)
        });
        match found {
            Some(ty) => {
                reference.resolve(ty);
                stats.resolved += 1;
            }
            None => {
                debug!(reference = %reference.text(), span = %reference.span(), "unresolved type reference");
                stats.unresolved += 1;
            }
        }
    }

    /// Resolve a slash-separated name as seen from inside `context`.
    pub fn find_type<R: TypeRegistry + ?Sized>(
        &self,
        context: DeclId,
        key: &str,
        registry: &R,
    ) -> Option<TypeRef> {
        if key.is_empty() {
            return None;
        }
        self.find_direct(context, key, registry)
            .or_else(|| self.find_member_path(context, key, registry))
    }

    /// `Head/Member/...`: resolve the shortest resolvable head, then walk the
    /// remaining segments as member types.
    fn find_member_path<R: TypeRegistry + ?Sized>(
        &self,
        context: DeclId,
        key: &str,
        registry: &R,
    ) -> Option<TypeRef> {
        key.match_indices('/').find_map(|(at, _)| {
            let (head, rest) = (&key[..at], &key[at + 1..]);
            let outer = self.find_direct(context, head, registry)?;
            let outer = self.type_signature(outer, registry)?;
            let member = rest
                .split('/')
                .fold(outer, |sig, name| signature::nested(&sig, name));
            self.find_signature(&member, registry)
        })
    }

    fn find_direct<R: TypeRegistry + ?Sized>(
        &self,
        context: DeclId,
        key: &str,
        registry: &R,
    ) -> Option<TypeRef> {
        if let Some(idx) = Idx::from_primitive_name(key) {
            return Some(TypeRef::Canonical(idx));
        }

        let mut current = context;
        let package = loop {
            let decl = self.decl(current);
            if let Some(id) = self.lookup(&signature::nested(decl.signature(), key)) {
                return Some(TypeRef::Declared(id));
            }
            match decl.scope() {
                Scope::Package(package) => break package.as_str(),
                scope => match self.owner_type(scope) {
                    Some(outer) => current = outer,
                    None => break "",
                },
            }
        };

        let mut candidates = vec![signature::top_level(package, key), key.to_owned()];
        if let Some(implicit) = registry.implicit_package() {
            candidates.push(signature::top_level(implicit, key));
        }
        candidates.iter().find_map(|sig| self.find_signature(sig, registry))
    }

    /// Look a full signature up, source types first.
    pub fn find_signature<R: TypeRegistry + ?Sized>(
        &self,
        signature: &str,
        registry: &R,
    ) -> Option<TypeRef> {
        self.lookup(signature)
            .map(TypeRef::Declared)
            .or_else(|| registry.lookup(signature).map(TypeRef::Canonical))
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Test code uses unwrap for brevity")]
mod tests;
