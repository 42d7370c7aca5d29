//! Conversion of storage lengths to `u32` indices.

/// Index of the next element pushed onto storage that currently holds `len` elements.
///
/// # Panics
/// Panics if `len` exceeds `u32::MAX`. Every id in the declaration model is
/// a `u32`, so a pass with more nodes of one kind cannot be represented.
#[inline]
pub fn next_index(len: usize) -> u32 {
    u32::try_from(len).unwrap_or_else(|_| panic!("index overflow: {len} elements exceed u32::MAX"))
}
