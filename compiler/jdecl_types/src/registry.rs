//! The registry collaborator.

use crate::{DeclKind, Idx, RegistryError, TypeRef};

/// Resolves signatures to canonical types and supplies the well-known types.
///
/// All methods take `&self`: a registry may be shared while several
/// translation units are analyzed, and supertype queries must be callable
/// through shared references.
pub trait TypeRegistry {
    /// Find a type by slash-separated signature (e.g. `java/util/List`).
    fn lookup(&self, signature: &str) -> Option<Idx>;

    /// Declaration kind of a registry type; `None` for primitives and unknown indices.
    fn kind_of(&self, idx: Idx) -> Option<DeclKind>;

    /// The implicit base class of every class without an explicit parent.
    fn root_object(&self) -> Option<Idx>;

    /// The generic base class of every enum.
    fn enum_base(&self) -> Option<Idx>;

    /// Specialize a generic type with concrete type arguments.
    ///
    /// Repeated calls with the same arguments return the same index.
    fn specialize(&self, generic: Idx, args: &[TypeRef]) -> Result<Idx, RegistryError>;

    /// Signature of a registry type, as accepted by [`lookup`](Self::lookup).
    ///
    /// Composite types (specializations, arrays) render their arguments.
    fn signature_of(&self, _idx: Idx) -> Option<String> {
        None
    }

    /// Generic type and arguments of a specialization.
    fn specialization_of(&self, _idx: Idx) -> Option<(Idx, Vec<TypeRef>)> {
        None
    }

    /// Array type with the given element type. `None` if the registry has no
    /// array types or the element cannot be an array element (`void`).
    ///
    /// Repeated calls with the same element return the same index.
    fn array_of(&self, _element: TypeRef) -> Option<Idx> {
        None
    }

    /// Element type of an array type.
    fn element_of(&self, _idx: Idx) -> Option<TypeRef> {
        None
    }

    /// The implicitly imported package, searched for unqualified names.
    fn implicit_package(&self) -> Option<&str> {
        None
    }
}
