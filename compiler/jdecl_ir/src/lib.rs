//! jdecl IR - leaf data shared by the declaration model.
//!
//! This crate contains the plain data the tokenizer hands to the
//! declaration model:
//! - Spans for source locations
//! - Checked `usize` -> `u32` index conversion for arenas and pools
//! - Tokens carrying a verbatim source value
//! - Modifier lists, stored verbatim, with a flag view for queries
//!
//! Nothing here knows about types or scopes. Every type is `Clone + Eq + Hash`
//! so it can be used as a map key or compared cheaply in tests.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod index;
mod modifiers;
mod span;
mod token;

pub use index::next_index;
pub use modifiers::{ModifierFlags, Modifiers};
pub use span::Span;
pub use token::Token;
