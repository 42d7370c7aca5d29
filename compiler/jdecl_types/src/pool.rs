//! In-memory type registry.
//!
//! `TypePool` interns registry types by signature, specializations of generic
//! types by `(generic, args)` and array types by element type, so the same
//! composite type always has the same [`Idx`].
//!
//! Signatures of composites mention `TypeRef::Declared` arguments as
//! `decl#N`: declaration ids belong to a source arena, which the pool never
//! sees. Render those through the arena when a readable name is needed.
//!
//! # Thread Safety
//! Storage sits behind a `parking_lot::RwLock`: lookups take the read lock,
//! registration and first-time specialization take the write lock.

use jdecl_ir::next_index;
use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use tracing::trace;

use crate::{DeclKind, Idx, RegistryError, TypeRef, TypeRegistry, WellKnown};

/// One registry type.
#[derive(Clone, Debug)]
struct PoolEntry {
    signature: String,
    kind: DeclKind,
    /// Number of type parameters.
    arity: usize,
    /// Set for specializations: the generic type and its arguments.
    specialized: Option<(Idx, Vec<TypeRef>)>,
    /// Set for array types: the element type.
    element: Option<TypeRef>,
}

#[derive(Default)]
struct PoolInner {
    entries: Vec<PoolEntry>,
    by_signature: FxHashMap<String, Idx>,
    specializations: FxHashMap<(Idx, Vec<TypeRef>), Idx>,
    arrays: FxHashMap<TypeRef, Idx>,
}

impl PoolInner {
    fn entry(&self, idx: Idx) -> Option<&PoolEntry> {
        let offset = idx.raw().checked_sub(Idx::FIRST_DYNAMIC)?;
        self.entries.get(offset as usize)
    }

    fn push(&mut self, entry: PoolEntry) -> Idx {
        let idx = Idx::from_raw(next_index(
            Idx::FIRST_DYNAMIC as usize + self.entries.len(),
        ));
        self.entries.push(entry);
        idx
    }

    fn register(&mut self, signature: &str, kind: DeclKind, arity: usize) -> Idx {
        if let Some(&idx) = self.by_signature.get(signature) {
            return idx;
        }
        let idx = self.push(PoolEntry {
            signature: signature.to_owned(),
            kind,
            arity,
            specialized: None,
            element: None,
        });
        self.by_signature.insert(signature.to_owned(), idx);
        trace!(signature, ?idx, "registered type");
        idx
    }

    fn label(&self, ty: TypeRef) -> String {
        match ty {
            TypeRef::Canonical(idx) => match idx.primitive_name() {
                Some(name) => name.to_owned(),
                None => self
                    .entry(idx)
                    .map_or_else(|| format!("{idx:?}"), |e| e.signature.clone()),
            },
            TypeRef::Declared(id) => format!("decl#{}", id.raw()),
        }
    }
}

/// Registry of library types, seeded with the [`WellKnown`] types.
pub struct TypePool {
    inner: RwLock<PoolInner>,
    well_known: WellKnown,
    root_object: Idx,
    enum_base: Idx,
}

impl TypePool {
    /// Create a pool with the default well-known signatures.
    pub fn new() -> Self {
        Self::with_well_known(WellKnown::default())
    }

    /// Create a pool seeded with the given well-known signatures.
    pub fn with_well_known(well_known: WellKnown) -> Self {
        let mut inner = PoolInner::default();
        let root_object = inner.register(&well_known.root_object, DeclKind::Class, 0);
        let enum_base = inner.register(&well_known.enum_base, DeclKind::Class, 1);
        Self {
            inner: RwLock::new(inner),
            well_known,
            root_object,
            enum_base,
        }
    }

    /// Register a type. Registering an existing signature returns its index.
    pub fn register(&self, signature: &str, kind: DeclKind, arity: usize) -> Idx {
        self.inner.write().register(signature, kind, arity)
    }

    pub fn well_known(&self) -> &WellKnown {
        &self.well_known
    }

    /// Number of registered types and specializations (primitives excluded).
    pub fn len(&self) -> usize {
        self.inner.read().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().entries.is_empty()
    }
}

impl Default for TypePool {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeRegistry for TypePool {
    fn lookup(&self, signature: &str) -> Option<Idx> {
        Idx::from_primitive_name(signature)
            .or_else(|| self.inner.read().by_signature.get(signature).copied())
    }

    fn kind_of(&self, idx: Idx) -> Option<DeclKind> {
        self.inner.read().entry(idx).map(|e| e.kind)
    }

    fn root_object(&self) -> Option<Idx> {
        Some(self.root_object)
    }

    fn enum_base(&self) -> Option<Idx> {
        Some(self.enum_base)
    }

    fn specialize(&self, generic: Idx, args: &[TypeRef]) -> Result<Idx, RegistryError> {
        let key = (generic, args.to_vec());
        if let Some(&idx) = self.inner.read().specializations.get(&key) {
            return Ok(idx);
        }

        let mut inner = self.inner.write();
        // Another writer may have interned it between the two locks.
        if let Some(&idx) = inner.specializations.get(&key) {
            return Ok(idx);
        }
        let base = inner
            .entry(generic)
            .ok_or(RegistryError::UnknownType(generic))?;
        if base.arity != args.len() {
            return Err(RegistryError::ArityMismatch {
                signature: base.signature.clone(),
                expected: base.arity,
                found: args.len(),
            });
        }
        let kind = base.kind;
        let rendered: Vec<String> = args.iter().map(|&a| inner.label(a)).collect();
        let signature = format!("{}<{}>", base.signature, rendered.join(","));
        let idx = inner.push(PoolEntry {
            signature,
            kind,
            arity: 0,
            specialized: Some(key.clone()),
            element: None,
        });
        inner.specializations.insert(key, idx);
        trace!(?generic, ?idx, "interned specialization");
        Ok(idx)
    }

    fn signature_of(&self, idx: Idx) -> Option<String> {
        if let Some(name) = idx.primitive_name() {
            return Some(name.to_owned());
        }
        self.inner.read().entry(idx).map(|e| e.signature.clone())
    }

    fn specialization_of(&self, idx: Idx) -> Option<(Idx, Vec<TypeRef>)> {
        self.inner.read().entry(idx)?.specialized.clone()
    }

    fn array_of(&self, element: TypeRef) -> Option<Idx> {
        if element == TypeRef::VOID {
            return None;
        }
        if let Some(&idx) = self.inner.read().arrays.get(&element) {
            return Some(idx);
        }

        let mut inner = self.inner.write();
        if let Some(&idx) = inner.arrays.get(&element) {
            return Some(idx);
        }
        let signature = format!("{}[]", inner.label(element));
        let idx = inner.push(PoolEntry {
            signature,
            kind: DeclKind::Class,
            arity: 0,
            specialized: None,
            element: Some(element),
        });
        inner.arrays.insert(element, idx);
        trace!(?element, ?idx, "interned array type");
        Some(idx)
    }

    fn element_of(&self, idx: Idx) -> Option<TypeRef> {
        self.inner.read().entry(idx)?.element
    }

    fn implicit_package(&self) -> Option<&str> {
        Some(self.well_known.implicit_package.as_str())
    }
}
