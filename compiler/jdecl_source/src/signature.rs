//! Signature strings for declared types.
//!
//! A signature is the program-wide identity of a declared type:
//!
//! | Declared in             | Signature                          |
//! |-------------------------|------------------------------------|
//! | package `com.app`       | `com/app/Foo`                      |
//! | the default package     | `Foo`                              |
//! | type body of `com/app/Foo` | `com/app/Foo$Bar`               |
//! | code inside `com/app/Foo`  | `com/app/Foo$1` + name (if any) |
//!
//! The functions here are pure. The ordinal for local and anonymous types
//! comes from the owning type's counter, which only
//! [`SourceArena::declare_type`](crate::SourceArena::declare_type) advances,
//! once per declaration.

/// Signature of a top-level type.
///
/// Dots in the package name become slashes. An empty package yields the bare name.
pub fn top_level(package: &str, name: &str) -> String {
    if package.is_empty() {
        return name.to_owned();
    }
    let mut sig = package.replace('.', "/");
    sig.push('/');
    sig.push_str(name);
    sig
}

/// Signature of a member type declared directly in the body of `outer`.
pub fn nested(outer: &str, name: &str) -> String {
    format!("{outer}${name}")
}

/// Signature of a local or anonymous type declared in code owned by `owner`.
///
/// `ordinal` is the owner's local-type count after this declaration (1-based).
pub fn local(owner: &str, ordinal: u32, name: &str) -> String {
    format!("{owner}${ordinal}{name}")
}
