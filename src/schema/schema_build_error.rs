use thiserror::Error;

/// Errors detected during the one-time bind validation performed by
/// [`SchemaBuilder::build()`](crate::schema::SchemaBuilder::build).
#[derive(Clone, Debug, Error, PartialEq)]
pub enum SchemaBuildError {
    #[error("A type named `{type_name}` is registered more than once")]
    DuplicateTypeName {
        type_name: String,
    },

    #[error(
        "Input object fields must be declared with an input type: the \
        `{input_object_name}.{field_name}` field is declared with the \
        non-input type `{invalid_type_name}`"
    )]
    InvalidInputFieldType {
        field_name: String,
        input_object_name: String,
        invalid_type_name: String,
    },

    #[error(
        "Field arguments must be declared with an input type: the \
        `{parameter_name}` argument of `{type_name}.{field_name}` is \
        declared with the non-input type `{invalid_type_name}`"
    )]
    InvalidParameterType {
        field_name: String,
        invalid_type_name: String,
        parameter_name: String,
        type_name: String,
    },

    #[error(
        "The `{operation}` root operation type `{type_name}` must be an \
        object type"
    )]
    InvalidRootOperationType {
        operation: String,
        type_name: String,
    },

    #[error(
        "Invalid union member type: the `{union_type_name}` type declares \
        `{member_type_name}` as a member, but union members can only be \
        object types"
    )]
    InvalidUnionMemberTypeKind {
        member_type_name: String,
        union_type_name: String,
    },

    #[error(
        "There is no type registered with the name `{undefined_type_name}` \
        (referenced by `{referenced_by}`)"
    )]
    UndefinedTypeName {
        referenced_by: String,
        undefined_type_name: String,
    },
}
