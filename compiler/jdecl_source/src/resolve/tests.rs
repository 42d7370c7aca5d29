use super::*;
use crate::member::{Constructor, Field, Method, MethodDecl};
use crate::TypeDecl;
use jdecl_ir::Token;
use jdecl_types::{DeclKind, TypePool};
use pretty_assertions::assert_eq;

fn tok(s: &str) -> Token {
    Token::dummy(s)
}

/// Reference written as a dotted name, one token per part and separator.
fn dotted(name: &str) -> TypeIdentRef {
    let mut tokens = Vec::new();
    for (i, part) in name.split('.').enumerate() {
        if i > 0 {
            tokens.push(tok("."));
        }
        tokens.push(tok(part));
    }
    TypeIdentRef::new(tokens)
}

fn class(name: &str) -> TypeDecl {
    TypeDecl::new(tok("class"), Some(tok(name)))
}

struct Fixture {
    pool: TypePool,
    arena: SourceArena,
    foo: DeclId,
    base: DeclId,
    inner: DeclId,
    run: crate::MethodId,
}

/// ```text
/// package com.app;
/// class Base {}
/// class Foo extends Base implements Runnable {
///     class Inner {}
///     Inner inner;
///     java.util.List<String> items;
///     Foo(int count) throws java.io.IOException {}
///     @Override void run() throws Bogus {}
/// }
/// ```
fn fixture() -> Fixture {
    let pool = TypePool::new();
    pool.register("java/lang/String", DeclKind::Class, 0);
    pool.register("java/lang/Runnable", DeclKind::Interface, 0);
    pool.register("java/lang/Override", DeclKind::Annotation, 0);
    pool.register("java/util/List", DeclKind::Interface, 1);
    pool.register("java/io/IOException", DeclKind::Class, 0);

    let mut arena = SourceArena::new();
    let base = arena.declare_type(Scope::package("com.app"), class("Base"));
    let foo = arena.declare_type(Scope::package("com.app"), class("Foo"));
    arena.add_extends(foo, dotted("Base"));
    arena.add_implements(foo, dotted("Runnable"));
    let inner = arena.declare_type(Scope::Type(foo), class("Inner"));

    arena.add_field(Field::new(foo, &[], dotted("Inner"), Some(tok("inner"))));
    let items = TypeIdentRef::new(
        ["java", ".", "util", ".", "List", "<", "String", ">"]
            .map(tok)
            .to_vec(),
    );
    arena.add_field(Field::new(foo, &[], items, Some(tok("items"))));
    arena.add_constructor(Constructor::new(
        foo,
        &[],
        vec![Parameter::new(&[], dotted("int"), false, Some(tok("count")))],
        vec![dotted("java.io.IOException")],
        Some(vec![]),
    ));
    let run = arena.add_method(Method::new(
        foo,
        MethodDecl {
            modifiers: vec![tok("public")],
            annotations: vec![Annotation::new(dotted("Override"))],
            return_type: dotted("void"),
            name: Some(tok("run")),
            parameters: vec![],
            throws: vec![dotted("Bogus")],
            body: Some(vec![]),
        },
    ));

    Fixture {
        pool,
        arena,
        foo,
        base,
        inner,
        run,
    }
}

#[test]
fn resolves_source_registry_and_primitive_names() {
    let Fixture {
        pool,
        arena,
        foo,
        base,
        inner,
        run,
    } = fixture();

    let stats = arena.resolve_references(&pool);
    assert_eq!(
        stats,
        ResolveStats {
            resolved: 8,
            already_resolved: 0,
            unresolved: 1,
        }
    );

    let decl = arena.decl(foo);
    assert_eq!(decl.extends()[0].resolved(), Some(TypeRef::Declared(base)));
    assert_eq!(
        decl.implements()[0].resolved(),
        pool.lookup("java/lang/Runnable").map(TypeRef::Canonical)
    );

    let fields: Vec<_> = decl.fields().iter().map(|&f| arena.field(f).ty()).collect();
    assert_eq!(
        fields,
        vec![
            Some(TypeRef::Declared(inner)),
            pool.lookup("java/util/List").map(TypeRef::Canonical),
        ]
    );

    let ctor = arena.constructor(decl.constructors()[0]);
    assert_eq!(ctor.parameters()[0].ty(), Some(TypeRef::Canonical(Idx::INT)));
    assert_eq!(
        ctor.throws()[0].resolved(),
        pool.lookup("java/io/IOException").map(TypeRef::Canonical)
    );

    let run = arena.method(run);
    assert_eq!(run.return_type(), Some(TypeRef::VOID));
    assert_eq!(
        run.annotations()[0].ty(),
        pool.lookup("java/lang/Override").map(TypeRef::Canonical)
    );
    assert_eq!(run.throws()[0].resolved(), None);
}

#[test]
fn second_pass_only_fills_gaps() {
    let fx = fixture();
    fx.arena.resolve_references(&fx.pool);

    let bogus = fx.pool.register("com/app/Bogus", DeclKind::Class, 0);
    let stats = fx.arena.resolve_references(&fx.pool);
    assert_eq!(
        stats,
        ResolveStats {
            resolved: 1,
            already_resolved: 8,
            unresolved: 0,
        }
    );
    assert_eq!(
        fx.arena.method(fx.run).throws()[0].resolved(),
        Some(TypeRef::Canonical(bogus))
    );
}

#[test]
fn supers_after_resolution() {
    let fx = fixture();
    fx.arena.resolve_references(&fx.pool);
    let runnable = fx.pool.lookup("java/lang/Runnable").unwrap();
    assert_eq!(
        fx.arena.supers(fx.foo, &fx.pool).unwrap(),
        vec![TypeRef::Declared(fx.base), TypeRef::Canonical(runnable)]
    );
}

#[test]
fn local_types_see_members_of_enclosing_types() {
    let Fixture {
        pool,
        mut arena,
        foo,
        inner,
        run,
        ..
    } = fixture();
    let local = arena.declare_type(Scope::Method(run), class("Local"));
    assert_eq!(arena.decl(local).signature(), "com/app/Foo$1Local");

    assert_eq!(
        arena.find_type(local, "Inner", &pool),
        Some(TypeRef::Declared(inner))
    );
    assert_eq!(
        arena.find_type(local, "Foo", &pool),
        Some(TypeRef::Declared(foo))
    );
    assert_eq!(
        arena.find_type(local, "String", &pool),
        pool.lookup("java/lang/String").map(TypeRef::Canonical)
    );
    assert_eq!(arena.find_type(local, "", &pool), None);
}

#[test]
fn source_types_shadow_registry_types() {
    let pool = TypePool::new();
    pool.register("com/app/Foo", DeclKind::Interface, 0);
    let mut arena = SourceArena::new();
    let foo = arena.declare_type(Scope::package("com.app"), class("Foo"));
    assert_eq!(
        arena.find_signature("com/app/Foo", &pool),
        Some(TypeRef::Declared(foo))
    );
}

#[test]
fn array_references_resolve_to_array_types() {
    let pool = TypePool::new();
    let string = pool.register("java/lang/String", DeclKind::Class, 0);
    let mut arena = SourceArena::new();
    let foo = arena.declare_type(Scope::package("com.app"), class("Foo"));
    let names = arena.add_field(Field::new(
        foo,
        &[],
        TypeIdentRef::new(["String", "[", "]"].map(tok).to_vec()),
        Some(tok("names")),
    ));
    let grid = arena.add_field(Field::new(
        foo,
        &[],
        TypeIdentRef::new(["Foo", "[", "]", "[", "]"].map(tok).to_vec()),
        Some(tok("grid")),
    ));

    let stats = arena.resolve_references(&pool);
    assert_eq!(stats.resolved, 2);

    let names = arena.field(names).ty().unwrap();
    assert_ne!(names, TypeRef::Canonical(string));
    let names_idx = names.as_canonical().unwrap();
    assert_eq!(pool.element_of(names_idx), Some(TypeRef::Canonical(string)));
    assert_eq!(
        arena.type_signature(names, &pool).as_deref(),
        Some("java/lang/String[]")
    );

    let grid = arena.field(grid).ty().unwrap();
    assert_eq!(
        arena.type_signature(grid, &pool).as_deref(),
        Some("com/app/Foo[][]")
    );
}

#[test]
fn arrays_stay_unresolved_without_registry_support() {
    struct NoArrays(TypePool);
    impl TypeRegistry for NoArrays {
        fn lookup(&self, signature: &str) -> Option<Idx> {
            self.0.lookup(signature)
        }
        fn kind_of(&self, idx: Idx) -> Option<DeclKind> {
            self.0.kind_of(idx)
        }
        fn root_object(&self) -> Option<Idx> {
            self.0.root_object()
        }
        fn enum_base(&self) -> Option<Idx> {
            self.0.enum_base()
        }
        fn specialize(
            &self,
            generic: Idx,
            args: &[TypeRef],
        ) -> Result<Idx, jdecl_types::RegistryError> {
            self.0.specialize(generic, args)
        }
    }

    let registry = NoArrays(TypePool::new());
    let mut arena = SourceArena::new();
    let foo = arena.declare_type(Scope::package("com.app"), class("Foo"));
    let ints = arena.add_field(Field::new(
        foo,
        &[],
        TypeIdentRef::new(["int", "[", "]"].map(tok).to_vec()),
        Some(tok("ints")),
    ));

    let stats = arena.resolve_references(&registry);
    assert_eq!(stats.unresolved, 1);
    assert_eq!(arena.field(ints).ty(), None);
}

#[test]
fn qualified_member_types_resolve_through_their_outer_type() {
    let Fixture {
        pool,
        mut arena,
        foo,
        inner,
        ..
    } = fixture();
    let entry = pool.register("java/util/Map$Entry", DeclKind::Interface, 2);
    pool.register("java/util/Map", DeclKind::Interface, 2);
    let other = arena.declare_type(Scope::package("com.app"), class("Other"));

    assert_eq!(
        arena.find_type(foo, "Foo/Inner", &pool),
        Some(TypeRef::Declared(inner))
    );
    assert_eq!(
        arena.find_type(other, "Foo/Inner", &pool),
        Some(TypeRef::Declared(inner))
    );
    assert_eq!(
        arena.find_type(other, "com/app/Foo/Inner", &pool),
        Some(TypeRef::Declared(inner))
    );
    assert_eq!(
        arena.find_type(other, "java/util/Map/Entry", &pool),
        Some(TypeRef::Canonical(entry))
    );
    assert_eq!(arena.find_type(other, "Foo/Missing", &pool), None);

    let field = arena.add_field(Field::new(
        other,
        &[],
        dotted("Foo.Inner"),
        Some(tok("inner")),
    ));
    arena.resolve_references(&pool);
    assert_eq!(arena.field(field).ty(), Some(TypeRef::Declared(inner)));
}
