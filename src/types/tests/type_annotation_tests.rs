use crate::types::TypeAnnotation;

#[test]
fn structural_wrapper_equality() {
    let a = TypeAnnotation::list(TypeAnnotation::named("Int"));
    let b = TypeAnnotation::list(TypeAnnotation::named("Int"));
    assert_eq!(a, b);

    let c = TypeAnnotation::nullable(TypeAnnotation::named("Int"));
    assert_ne!(a, c);
    assert_ne!(b, TypeAnnotation::list(TypeAnnotation::named("Float")));
}

#[test]
fn innermost_named_strips_all_wrappers() {
    let annotation = TypeAnnotation::nullable(TypeAnnotation::list(
        TypeAnnotation::nullable(TypeAnnotation::named("Hobby")),
    ));
    assert_eq!(annotation.innermost_named(), "Hobby");
    assert_eq!(TypeAnnotation::named("Int").innermost_named(), "Int");
}

#[test]
fn nullability_is_outermost_only() {
    assert!(
        TypeAnnotation::nullable(TypeAnnotation::named("Int")).is_nullable(),
    );
    assert!(!TypeAnnotation::named("Int").is_nullable());
    assert!(
        !TypeAnnotation::list(
            TypeAnnotation::nullable(TypeAnnotation::named("Int")),
        ).is_nullable(),
    );
}

#[test]
fn renders_graphql_notation() {
    assert_eq!(
        TypeAnnotation::named("Int").to_graphql_string(),
        "Int!",
    );
    assert_eq!(
        TypeAnnotation::nullable(TypeAnnotation::named("Int"))
            .to_graphql_string(),
        "Int",
    );
    assert_eq!(
        TypeAnnotation::nullable(TypeAnnotation::list(
            TypeAnnotation::nullable(TypeAnnotation::named("Hobby")),
        )).to_graphql_string(),
        "[Hobby]",
    );
    assert_eq!(
        TypeAnnotation::list(TypeAnnotation::named("Int"))
            .to_graphql_string(),
        "[Int!]!",
    );
}
