use crate::schema::Schema;
use crate::types::EnumType;
use crate::types::FieldDefinition;
use crate::types::InputObjectType;
use crate::types::InterfaceType;
use crate::types::ObjectType;
use crate::types::ScalarType;
use crate::types::UnionType;
use crate::value::Value;
use indexmap::IndexMap;

/// Represents a defined GraphQL type.
///
/// Built-in scalars are their own variants; everything else carries the
/// definition struct for its kind. Instances of this enum live in the
/// [`Schema`] registry keyed by name and are treated as read-only once the
/// schema is built.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum GraphQLType {
    Bool,
    Enum(EnumType),
    Float,
    Id,
    InputObject(InputObjectType),
    Int,
    Interface(InterfaceType),
    Object(ObjectType),
    Scalar(ScalarType),
    String,
    Union(UnionType),
}
impl GraphQLType {
    pub fn name(&self) -> &str {
        match self {
            GraphQLType::Bool => "Boolean",
            GraphQLType::Enum(t) => t.name(),
            GraphQLType::Float => "Float",
            GraphQLType::Id => "ID",
            GraphQLType::InputObject(t) => t.name(),
            GraphQLType::Int => "Int",
            GraphQLType::Interface(t) => t.name(),
            GraphQLType::Object(t) => t.name(),
            GraphQLType::Scalar(t) => t.name(),
            GraphQLType::String => "String",
            GraphQLType::Union(t) => t.name(),
        }
    }

    /// The field registry for this type, if it is a field-bearing type
    /// (object or interface).
    pub fn fields(&self) -> Option<&IndexMap<String, FieldDefinition>> {
        match self {
            GraphQLType::Interface(t) => Some(t.fields()),
            GraphQLType::Object(t) => Some(t.fields()),
            _ => None,
        }
    }

    pub fn is_field_bearing(&self) -> bool {
        self.fields().is_some()
    }

    /// Indicates if values of this type may appear in input position (as a
    /// field argument or input object field).
    pub fn is_input_type(&self) -> bool {
        matches!(
            self,
            GraphQLType::Bool
                | GraphQLType::Enum(_)
                | GraphQLType::Float
                | GraphQLType::Id
                | GraphQLType::InputObject(_)
                | GraphQLType::Int
                | GraphQLType::Scalar(_)
                | GraphQLType::String,
        )
    }

    /// The instance predicate for this leaf type. Type-membership only;
    /// range and canonicalization rules belong to
    /// [`coerce()`](crate::coerce::coerce).
    pub fn satisfies(&self, schema: &Schema, value: &Value) -> bool {
        match self {
            GraphQLType::Bool =>
                matches!(value, Value::Bool(_)),

            GraphQLType::Enum(enum_type) =>
                matches!(value, Value::Enum(name) if enum_type.contains(name)),

            GraphQLType::Float =>
                matches!(value, Value::Float(_)),

            GraphQLType::Id | GraphQLType::String =>
                matches!(value, Value::String(_)),

            GraphQLType::InputObject(input_object_type) =>
                input_object_type.satisfies(schema, value),

            GraphQLType::Int =>
                matches!(value, Value::Int(_)),

            // Field-bearing types only face this predicate through union
            // classification: a mapping whose keys all belong to the
            // type's field registry.
            GraphQLType::Interface(_) | GraphQLType::Object(_) =>
                match value {
                    Value::Object(entries) => {
                        let fields = self.fields()
                            .expect("object and interface types bear fields");
                        entries.keys().all(|key| fields.contains_key(key))
                    },
                    _ => false,
                },

            GraphQLType::Scalar(_) =>
                matches!(
                    value,
                    Value::Bool(_)
                        | Value::Float(_)
                        | Value::Int(_)
                        | Value::String(_),
                ),

            GraphQLType::Union(union_type) =>
                union_type.satisfies(schema, value),
        }
    }
}
impl std::convert::From<EnumType> for GraphQLType {
    fn from(value: EnumType) -> Self {
        Self::Enum(value)
    }
}
impl std::convert::From<InputObjectType> for GraphQLType {
    fn from(value: InputObjectType) -> Self {
        Self::InputObject(value)
    }
}
impl std::convert::From<InterfaceType> for GraphQLType {
    fn from(value: InterfaceType) -> Self {
        Self::Interface(value)
    }
}
impl std::convert::From<ObjectType> for GraphQLType {
    fn from(value: ObjectType) -> Self {
        Self::Object(value)
    }
}
impl std::convert::From<ScalarType> for GraphQLType {
    fn from(value: ScalarType) -> Self {
        Self::Scalar(value)
    }
}
impl std::convert::From<UnionType> for GraphQLType {
    fn from(value: UnionType) -> Self {
        Self::Union(value)
    }
}
