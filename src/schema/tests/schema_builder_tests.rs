use crate::schema::Schema;
use crate::schema::SchemaBuildError;
use crate::test_fixtures::example_schema;
use crate::types::EnumType;
use crate::types::FieldDefinition;
use crate::types::GraphQLType;
use crate::types::InputObjectType;
use crate::types::InputValueDefinition;
use crate::types::ObjectType;
use crate::types::TypeAnnotation;
use crate::types::UnionType;

fn query_with_field(field: FieldDefinition) -> ObjectType {
    ObjectType::builder("Query").field(field).build()
}

#[test]
fn binds_example_schema_with_builtins() {
    let schema = example_schema();
    assert!(schema.get_type("Int").is_some());
    assert!(schema.get_type("Boolean").is_some());
    assert_eq!(schema.query_type().name(), "Query");
    assert!(schema.mutation_type().is_none());
    assert!(schema.get_type("Dog").is_some_and(GraphQLType::is_field_bearing));
    assert!(schema.get_type("nope").is_none());
}

#[test]
fn bound_schema_round_trips_through_serde() {
    let schema = example_schema();
    let serialized =
        serde_json::to_string(&schema).expect("schema serializes");
    let restored: Schema =
        serde_json::from_str(&serialized).expect("schema deserializes");
    assert_eq!(restored, schema);
}

#[test]
fn deserialization_rejects_dangling_type_references() {
    let mut serialized =
        serde_json::to_value(example_schema()).expect("schema serializes");
    // Drop a type that other registered fields still reference by name.
    serialized["types"]
        .as_object_mut()
        .expect("types is a mapping")
        .remove("Hobby")
        .expect("Hobby is registered");

    // Bind validation runs on deserialization too, so the dangling
    // reference surfaces here instead of producing a schema that cannot
    // honor type lookups during validation or loading.
    let result = serde_json::from_value::<Schema>(serialized);
    assert!(result.is_err());
}

#[test]
fn rejects_duplicate_type_name() {
    let result = Schema::builder()
        .enum_type(EnumType::builder("Command").variant("SIT").build())
        .enum_type(EnumType::builder("Command").variant("DOWN").build())
        .object_type(query_with_field(
            FieldDefinition::builder("ok", TypeAnnotation::named("Boolean"))
                .build(),
        ))
        .build();
    assert_eq!(
        result,
        Err(SchemaBuildError::DuplicateTypeName {
            type_name: "Command".to_string(),
        }),
    );
}

#[test]
fn rejects_missing_query_root() {
    let result = Schema::builder().build();
    assert_eq!(
        result,
        Err(SchemaBuildError::UndefinedTypeName {
            referenced_by: "schema.query".to_string(),
            undefined_type_name: "Query".to_string(),
        }),
    );
}

#[test]
fn rejects_non_object_query_root() {
    let result = Schema::builder()
        .enum_type(EnumType::builder("Query").variant("A").build())
        .build();
    assert_eq!(
        result,
        Err(SchemaBuildError::InvalidRootOperationType {
            operation: "query".to_string(),
            type_name: "Query".to_string(),
        }),
    );
}

#[test]
fn rejects_undefined_field_type() {
    let result = Schema::builder()
        .object_type(query_with_field(
            FieldDefinition::builder("pet", TypeAnnotation::named("Dog"))
                .build(),
        ))
        .build();
    assert_eq!(
        result,
        Err(SchemaBuildError::UndefinedTypeName {
            referenced_by: "Query.pet".to_string(),
            undefined_type_name: "Dog".to_string(),
        }),
    );
}

#[test]
fn rejects_non_input_argument_type() {
    let result = Schema::builder()
        .object_type(
            ObjectType::builder("Pet")
                .field(
                    FieldDefinition::builder(
                        "name",
                        TypeAnnotation::named("String"),
                    ).build(),
                )
                .build(),
        )
        .object_type(query_with_field(
            FieldDefinition::builder("ok", TypeAnnotation::named("Boolean"))
                .argument(InputValueDefinition::new(
                    "who",
                    TypeAnnotation::named("Pet"),
                ))
                .build(),
        ))
        .build();
    assert_eq!(
        result,
        Err(SchemaBuildError::InvalidParameterType {
            field_name: "ok".to_string(),
            invalid_type_name: "Pet".to_string(),
            parameter_name: "who".to_string(),
            type_name: "Query".to_string(),
        }),
    );
}

#[test]
fn rejects_non_object_union_member() {
    let result = Schema::builder()
        .enum_type(EnumType::builder("Command").variant("SIT").build())
        .union_type(
            UnionType::builder("Anything").member("Command").build(),
        )
        .object_type(query_with_field(
            FieldDefinition::builder("ok", TypeAnnotation::named("Boolean"))
                .build(),
        ))
        .build();
    assert_eq!(
        result,
        Err(SchemaBuildError::InvalidUnionMemberTypeKind {
            member_type_name: "Command".to_string(),
            union_type_name: "Anything".to_string(),
        }),
    );
}

#[test]
fn rejects_output_typed_input_object_field() {
    let result = Schema::builder()
        .object_type(
            ObjectType::builder("Pet")
                .field(
                    FieldDefinition::builder(
                        "name",
                        TypeAnnotation::named("String"),
                    ).build(),
                )
                .build(),
        )
        .input_object_type(
            InputObjectType::builder("PetFilter")
                .field(InputValueDefinition::new(
                    "pet",
                    TypeAnnotation::named("Pet"),
                ))
                .build(),
        )
        .object_type(query_with_field(
            FieldDefinition::builder("ok", TypeAnnotation::named("Boolean"))
                .build(),
        ))
        .build();
    assert_eq!(
        result,
        Err(SchemaBuildError::InvalidInputFieldType {
            field_name: "pet".to_string(),
            input_object_name: "PetFilter".to_string(),
            invalid_type_name: "Pet".to_string(),
        }),
    );
}
