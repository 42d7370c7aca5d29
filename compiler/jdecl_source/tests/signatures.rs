//! Property tests for signature assignment.
//!
//! Generates random declaration trees and checks that signatures are unique,
//! reproducible, and that local-type ordinals grow in declaration order.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use std::collections::HashSet;

use jdecl_ir::Token;
use jdecl_source::{
    Constructor, Initializer, Method, MethodDecl, Scope, SourceArena, TypeDecl,
    TypeIdentRef,
};
use jdecl_types::{CanonicalType, DeclId};
use proptest::prelude::*;

/// One step of a synthetic parse.
#[derive(Clone, Debug)]
enum Step {
    /// Top-level type in one of a few packages.
    TopLevel { package: usize, name: String },
    /// Member type inside an existing type.
    Nested { outer: usize, name: String },
    /// Local or anonymous type inside a fresh method of an existing type.
    InMethod { owner: usize, name: Option<String> },
    /// Local or anonymous type inside a fresh constructor.
    InConstructor { owner: usize, name: Option<String> },
    /// Local or anonymous type inside a fresh initializer.
    InInitializer { owner: usize, name: Option<String> },
}

const PACKAGES: [&str; 3] = ["", "com.app", "org.example.util"];

fn type_name() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Z][a-zA-Z]{0,6}").expect("valid regex")
}

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        (0..PACKAGES.len(), type_name())
            .prop_map(|(package, name)| Step::TopLevel { package, name }),
        (any::<usize>(), type_name()).prop_map(|(outer, name)| Step::Nested { outer, name }),
        (any::<usize>(), prop::option::of(type_name()))
            .prop_map(|(owner, name)| Step::InMethod { owner, name }),
        (any::<usize>(), prop::option::of(type_name()))
            .prop_map(|(owner, name)| Step::InConstructor { owner, name }),
        (any::<usize>(), prop::option::of(type_name()))
            .prop_map(|(owner, name)| Step::InInitializer { owner, name }),
    ]
}

fn decl(name: Option<&str>) -> TypeDecl {
    TypeDecl::new(Token::dummy("class"), name.map(Token::dummy))
}

fn empty_method(owner: DeclId) -> Method {
    Method::new(
        owner,
        MethodDecl {
            modifiers: vec![],
            annotations: vec![],
            return_type: TypeIdentRef::new(vec![Token::dummy("void")]),
            name: Some(Token::dummy("m")),
            parameters: vec![],
            throws: vec![],
            body: Some(vec![]),
        },
    )
}

/// Replay steps into a fresh arena. Steps that need an existing type are
/// skipped until one exists. Top-level names are made unique per package,
/// as a compiling program's would be.
fn build(steps: &[Step]) -> (SourceArena, Vec<DeclId>) {
    let mut arena = SourceArena::new();
    let mut ids: Vec<DeclId> = Vec::new();
    let mut top_level_seen = HashSet::new();
    let mut nested_seen = HashSet::new();

    for step in steps {
        let id = match step {
            Step::TopLevel { package, name } => {
                if !top_level_seen.insert((*package, name.clone())) {
                    continue;
                }
                arena.declare_type(Scope::package(PACKAGES[*package]), decl(Some(name.as_str())))
            }
            Step::Nested { outer, name } if !ids.is_empty() => {
                let outer = ids[outer % ids.len()];
                if !nested_seen.insert((outer, name.clone())) {
                    continue;
                }
                arena.declare_type(Scope::Type(outer), decl(Some(name.as_str())))
            }
            Step::InMethod { owner, name } if !ids.is_empty() => {
                let owner = ids[owner % ids.len()];
                let m = arena.add_method(empty_method(owner));
                arena.declare_type(Scope::Method(m), decl(name.as_deref()))
            }
            Step::InConstructor { owner, name } if !ids.is_empty() => {
                let owner = ids[owner % ids.len()];
                let c = arena.add_constructor(Constructor::new(owner, &[], vec![], vec![], None));
                arena.declare_type(Scope::from(c), decl(name.as_deref()))
            }
            Step::InInitializer { owner, name } if !ids.is_empty() => {
                let owner = ids[owner % ids.len()];
                let i = arena.add_initializer(Initializer::new(owner, &[], Some(vec![])));
                arena.declare_type(Scope::from(i), decl(name.as_deref()))
            }
            _ => continue,
        };
        ids.push(id);
    }
    (arena, ids)
}

fn signatures(arena: &SourceArena) -> Vec<String> {
    arena
        .types()
        .map(|(_, t)| t.signature().to_owned())
        .collect()
}

/// Ordinal of a local type's signature relative to its owner's signature.
fn ordinal(owner_sig: &str, local_sig: &str) -> u32 {
    let rest = &local_sig[owner_sig.len() + 1..];
    let digits: String = rest.chars().take_while(char::is_ascii_digit).collect();
    digits.parse().expect("local signature carries an ordinal")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn signatures_are_unique(steps in prop::collection::vec(step(), 0..40)) {
        let (arena, _) = build(&steps);
        let sigs = signatures(&arena);
        let unique: HashSet<_> = sigs.iter().collect();
        prop_assert_eq!(unique.len(), sigs.len(), "duplicate in {:?}", sigs);
        for (id, decl) in arena.types() {
            prop_assert_eq!(arena.lookup(decl.signature()), Some(id));
        }
    }

    #[test]
    fn signatures_are_deterministic(steps in prop::collection::vec(step(), 0..40)) {
        let (first, _) = build(&steps);
        let (second, _) = build(&steps);
        prop_assert_eq!(signatures(&first), signatures(&second));
    }

    #[test]
    fn local_ordinals_increase_per_owner(steps in prop::collection::vec(step(), 0..40)) {
        let (arena, _) = build(&steps);
        let mut last: Vec<(DeclId, u32)> = Vec::new();
        for (_, decl) in arena.types() {
            let Some(owner) = arena.owner_type(decl.scope()) else { continue };
            if !decl.scope().is_code() {
                continue;
            }
            let n = ordinal(arena.decl(owner).signature(), decl.signature());
            let previous = last.iter().find(|(o, _)| *o == owner).map_or(0, |&(_, n)| n);
            prop_assert_eq!(n, previous + 1);
            last.retain(|(o, _)| *o != owner);
            last.push((owner, n));
        }
    }
}
