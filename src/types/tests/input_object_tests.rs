use crate::schema::Schema;
use crate::selection::ValidationError;
use crate::types::FieldDefinition;
use crate::types::InputObjectType;
use crate::types::InputValueDefinition;
use crate::types::ObjectType;
use crate::types::TypeAnnotation;
use crate::value::Value;

fn point_input() -> InputObjectType {
    InputObjectType::builder("PointInput")
        .field(InputValueDefinition::new("x", TypeAnnotation::named("Int")))
        .field(InputValueDefinition::new("y", TypeAnnotation::named("Int")))
        .field(InputValueDefinition::new(
            "label",
            TypeAnnotation::nullable(TypeAnnotation::named("String")),
        ))
        .build()
}

fn schema_with_point() -> Schema {
    Schema::builder()
        .input_object_type(point_input())
        .object_type(
            ObjectType::builder("Query")
                .field(
                    FieldDefinition::builder(
                        "at",
                        TypeAnnotation::named("Boolean"),
                    )
                    .argument(InputValueDefinition::new(
                        "point",
                        TypeAnnotation::named("PointInput"),
                    ))
                    .build(),
                )
                .build(),
        )
        .build()
        .expect("schema binds")
}

#[test]
fn instantiate_accepts_declared_fields() {
    let value = point_input()
        .instantiate([("x", Value::Int(1)), ("y", Value::Int(2))])
        .expect("valid construction");
    assert_eq!(
        value,
        Value::object([("x", Value::Int(1)), ("y", Value::Int(2))]),
    );
}

#[test]
fn instantiate_rejects_undeclared_field() {
    let result = point_input().instantiate([
        ("x", Value::Int(1)),
        ("y", Value::Int(2)),
        ("z", Value::Int(3)),
    ]);
    assert_eq!(
        result,
        Err(ValidationError::NoSuchArgument { name: "z".to_string() }),
    );
}

#[test]
fn instantiate_rejects_missing_required_field() {
    let result = point_input().instantiate([("x", Value::Int(1))]);
    assert_eq!(
        result,
        Err(ValidationError::MissingArgument { name: "y".to_string() }),
    );
}

#[test]
fn nullable_fields_may_be_omitted() {
    assert!(
        point_input()
            .instantiate([("x", Value::Int(1)), ("y", Value::Int(2))])
            .is_ok(),
    );
}

#[test]
fn wire_emission_follows_supply_order() {
    // Emission order is the order fields were supplied at construction,
    // not declaration order.
    let value = point_input()
        .instantiate([
            ("y", Value::Int(2)),
            ("x", Value::Int(1)),
            ("label", Value::from("origin-ish")),
        ])
        .expect("valid construction");
    assert_eq!(
        value.to_wire_string(),
        "{y: 2 x: 1 label: \"origin-ish\"}",
    );
}

#[test]
fn predicate_checks_fields_recursively() {
    let schema = schema_with_point();
    let annotation = TypeAnnotation::named("PointInput");

    let valid = Value::object([("x", Value::Int(1)), ("y", Value::Int(2))]);
    assert!(annotation.satisfies(&schema, &valid));

    let wrong_field_type =
        Value::object([("x", Value::from("one")), ("y", Value::Int(2))]);
    assert!(!annotation.satisfies(&schema, &wrong_field_type));

    let missing_required = Value::object([("x", Value::Int(1))]);
    assert!(!annotation.satisfies(&schema, &missing_required));

    let undeclared =
        Value::object([("x", Value::Int(1)), ("y", Value::Int(2)),
            ("z", Value::Int(3))]);
    assert!(!annotation.satisfies(&schema, &undeclared));
}
