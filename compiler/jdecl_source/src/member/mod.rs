//! Members of declared types.
//!
//! Every member is owned by exactly one [`DeclaredType`](crate::DeclaredType)
//! (parameters by exactly one method or constructor). Bodies are kept as the
//! raw token run; an absent body means no implementation was written, as for
//! abstract and interface methods.

mod constructor;
mod field;
mod initializer;
mod method;
mod parameter;

pub use constructor::Constructor;
pub use field::Field;
pub use initializer::Initializer;
pub use method::{Method, MethodDecl};
pub use parameter::Parameter;

use jdecl_ir::Token;
use jdecl_types::{DeclId, TypeRef};

use crate::TypeIdentRef;

/// Token run of a member body.
pub type Body = Vec<Token>;

/// Shared surface of constructors, methods and initializers.
pub trait Invokable {
    /// The declared type that owns this member.
    fn owner(&self) -> DeclId;

    /// Parameters in declaration order.
    fn parameters(&self) -> &[Parameter];

    fn parameter_count(&self) -> usize {
        self.parameters().len()
    }

    /// Resolved return type; `None` while a method's return type is unresolved.
    fn return_type(&self) -> Option<TypeRef>;

    /// Declared `throws` list.
    fn throws(&self) -> &[TypeIdentRef];

    /// Check if a body was supplied (even an empty one).
    fn has_implementation(&self) -> bool;
}
