use crate::types::FieldDefinition;
use crate::types::InputValueDefinition;
use crate::types::TypeAnnotation;

#[test]
fn builder_carries_metadata() {
    let field = FieldDefinition::builder("age", TypeAnnotation::named("Int"))
        .description("age in dog years")
        .argument(
            InputValueDefinition::new(
                "on_date",
                TypeAnnotation::nullable(TypeAnnotation::named("MyDateTime")),
            ).described("as of this date"),
        )
        .build();

    assert_eq!(field.name(), "age");
    assert_eq!(field.description(), Some("age in dog years"));
    assert!(!field.deprecation_state().is_deprecated());

    let argument = field.arguments().get("on_date").expect("declared");
    assert_eq!(argument.description(), Some("as of this date"));
    assert!(!argument.is_required());
}

#[test]
fn arguments_keep_declaration_order() {
    let field = FieldDefinition::builder("thing", TypeAnnotation::named("Int"))
        .argument(InputValueDefinition::new(
            "b",
            TypeAnnotation::named("Int"),
        ))
        .argument(InputValueDefinition::new(
            "a",
            TypeAnnotation::named("Int"),
        ))
        .build();
    let names: Vec<&String> = field.arguments().keys().collect();
    assert_eq!(names, vec!["b", "a"]);
}

#[test]
fn deprecation_state_carries_the_reason() {
    let field = FieldDefinition::builder("old", TypeAnnotation::named("Int"))
        .deprecated(Some("use `new` instead"))
        .build();
    let state = field.deprecation_state();
    assert!(state.is_deprecated());
    assert_eq!(state.reason(), Some("use `new` instead"));

    let unexplained =
        FieldDefinition::builder("older", TypeAnnotation::named("Int"))
            .deprecated(None)
            .build();
    assert!(unexplained.deprecation_state().is_deprecated());
    assert_eq!(unexplained.deprecation_state().reason(), None);
}
