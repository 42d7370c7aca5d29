//! Arena owning every declaration of one analysis pass.
//!
//! # Index Spaces
//!
//! - `types`: indexed by [`DeclId`]
//! - `fields` / `methods` / `constructors` / `initializers`: indexed by their
//!   own id types
//! - `by_signature`: signature -> [`DeclId`]
//!
//! Scopes and owners are ids into the same arena. The arena alone decides
//! lifetimes: a re-analysis builds a new arena instead of editing this one.
//!
//! Ids are only meaningful for the arena that minted them. Accessors index
//! directly and panic on ids from another arena.

use std::collections::hash_map::Entry;

use jdecl_ir::{next_index, Token};
use jdecl_types::{CanonicalType, DeclId, DeclKind, TypeRef, TypeRegistry};
use rustc_hash::FxHashMap;
use tracing::{debug, warn};

use crate::member::{Constructor, Field, Initializer, Method};
use crate::{signature, CodeBlock, CtorId, DeclaredType, FieldId, InitId, MethodId, Scope};
use crate::{TypeDecl, TypeIdentRef};

/// Storage for declared types and their members.
#[derive(Clone, Debug, Default)]
pub struct SourceArena {
    types: Vec<DeclaredType>,
    fields: Vec<Field>,
    methods: Vec<Method>,
    constructors: Vec<Constructor>,
    initializers: Vec<Initializer>,
    by_signature: FxHashMap<String, DeclId>,
}

impl SourceArena {
    /// Create an empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    // === Declaration ===

    /// Declare a type in `scope` and assign its signature.
    ///
    /// This is the only place signatures are minted. Declaring a type inside
    /// code advances the owning type's local-type counter, so each local or
    /// anonymous declaration must be passed here exactly once, in source order.
    #[tracing::instrument(level = "debug", skip_all, fields(scope = ?scope))]
    pub fn declare_type(&mut self, scope: Scope, decl: TypeDecl) -> DeclId {
        let kind = DeclKind::from_keyword(decl.kind_token.as_str()).unwrap_or_else(|| {
            warn!(keyword = decl.kind_token.as_str(), "unknown declaration keyword");
            DeclKind::Class
        });
        let name = decl.name.as_ref().map_or("", Token::as_str);
        let (signature, package) = self.mint_signature(&scope, name);
        debug!(%signature, %kind, "declared type");

        let id = DeclId::from_raw(next_index(self.types.len()));
        match self.by_signature.entry(signature.clone()) {
            Entry::Vacant(slot) => {
                slot.insert(id);
            }
            Entry::Occupied(slot) => {
                warn!(signature = %slot.key(), "duplicate type signature, lookup keeps the first");
            }
        }
        self.types
            .push(DeclaredType::new(signature, kind, package, scope, decl));
        id
    }

    /// Signature and package name for a new declaration in `scope`.
    fn mint_signature(&mut self, scope: &Scope, name: &str) -> (String, String) {
        match scope {
            Scope::Package(package) => (signature::top_level(package, name), package.clone()),
            Scope::Type(outer) => (
                signature::nested(self.types[outer.index()].signature(), name),
                String::new(),
            ),
            Scope::Method(m) => (self.mint_local(self.method(*m).owner, name), String::new()),
            Scope::Code(block) => (self.mint_local(self.block_owner(*block), name), String::new()),
        }
    }

    /// Advance `owner`'s local-type counter and name the new local type.
    fn mint_local(&mut self, owner: DeclId, name: &str) -> String {
        let owner = &mut self.types[owner.index()];
        owner.local_type_count += 1;
        signature::local(owner.signature(), owner.local_type_count, name)
    }

    pub fn add_extends(&mut self, id: DeclId, reference: TypeIdentRef) {
        self.types[id.index()].extends.push(reference);
    }

    pub fn add_implements(&mut self, id: DeclId, reference: TypeIdentRef) {
        self.types[id.index()].implements.push(reference);
    }

    /// Attach a field to its owner.
    pub fn add_field(&mut self, field: Field) -> FieldId {
        let id = FieldId::from_raw(next_index(self.fields.len()));
        self.types[field.owner.index()].fields.push(id);
        self.fields.push(field);
        id
    }

    /// Attach a method to its owner.
    pub fn add_method(&mut self, method: Method) -> MethodId {
        let id = MethodId::from_raw(next_index(self.methods.len()));
        self.types[method.owner.index()].methods.push(id);
        self.methods.push(method);
        id
    }

    /// Attach a constructor to its owner.
    pub fn add_constructor(&mut self, ctor: Constructor) -> CtorId {
        let id = CtorId::from_raw(next_index(self.constructors.len()));
        self.types[ctor.owner.index()].constructors.push(id);
        self.constructors.push(ctor);
        id
    }

    /// Attach an initializer block to its owner.
    pub fn add_initializer(&mut self, init: Initializer) -> InitId {
        let id = InitId::from_raw(next_index(self.initializers.len()));
        self.types[init.owner.index()].initializers.push(id);
        self.initializers.push(init);
        id
    }

    // === Lookup ===

    #[inline]
    pub fn decl(&self, id: DeclId) -> &DeclaredType {
        &self.types[id.index()]
    }

    #[inline]
    pub fn get(&self, id: DeclId) -> Option<&DeclaredType> {
        self.types.get(id.index())
    }

    #[inline]
    pub fn field(&self, id: FieldId) -> &Field {
        &self.fields[id.index()]
    }

    #[inline]
    pub fn method(&self, id: MethodId) -> &Method {
        &self.methods[id.index()]
    }

    #[inline]
    pub fn constructor(&self, id: CtorId) -> &Constructor {
        &self.constructors[id.index()]
    }

    #[inline]
    pub fn initializer(&self, id: InitId) -> &Initializer {
        &self.initializers[id.index()]
    }

    /// Find a declared type by signature.
    pub fn lookup(&self, signature: &str) -> Option<DeclId> {
        self.by_signature.get(signature).copied()
    }

    /// The declared type a scope belongs to; `None` for a package.
    pub fn owner_type(&self, scope: &Scope) -> Option<DeclId> {
        match scope {
            Scope::Package(_) => None,
            Scope::Type(id) => Some(*id),
            Scope::Method(m) => Some(self.method(*m).owner),
            Scope::Code(block) => Some(self.block_owner(*block)),
        }
    }

    fn block_owner(&self, block: CodeBlock) -> DeclId {
        match block {
            CodeBlock::Constructor(c) => self.constructor(c).owner,
            CodeBlock::Initializer(i) => self.initializer(i).owner,
        }
    }

    /// Declaration kind of a resolved type, from the arena or the registry.
    pub fn kind_of<R: TypeRegistry + ?Sized>(&self, ty: TypeRef, registry: &R) -> Option<DeclKind> {
        match ty {
            TypeRef::Declared(id) => self.get(id).map(CanonicalType::kind),
            TypeRef::Canonical(idx) => registry.kind_of(idx),
        }
    }

    /// Signature of a source or registry type.
    ///
    /// Unlike the registry's own rendering, declared types inside
    /// specializations and arrays print as their arena signatures
    /// (`java/lang/Enum<com/app/Color>`, `com/app/Foo[]`).
    pub fn type_signature<R: TypeRegistry + ?Sized>(
        &self,
        ty: TypeRef,
        registry: &R,
    ) -> Option<String> {
        let idx = match ty {
            TypeRef::Declared(id) => return self.get(id).map(|d| d.signature().to_owned()),
            TypeRef::Canonical(idx) => idx,
        };
        if let Some(element) = registry.element_of(idx) {
            return self
                .type_signature(element, registry)
                .map(|sig| sig + "[]");
        }
        if let Some((generic, args)) = registry.specialization_of(idx) {
            let base = registry.signature_of(generic)?;
            let args = args
                .iter()
                .map(|&arg| self.type_signature(arg, registry))
                .collect::<Option<Vec<_>>>()?;
            return Some(format!("{base}<{}>", args.join(",")));
        }
        registry.signature_of(idx)
    }

    // === Iteration ===

    /// All declared types in declaration order.
    pub fn types(&self) -> impl Iterator<Item = (DeclId, &DeclaredType)> {
        self.types
            .iter()
            .enumerate()
            .map(|(i, decl)| (DeclId::from_raw(next_index(i)), decl))
    }

    /// Number of declared types.
    #[inline]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}
