mod deprecation_state;
mod enum_type;
mod enum_type_builder;
mod field;
mod graphql_type;
mod input_object_type;
mod input_object_type_builder;
mod input_value;
mod interface_type;
mod interface_type_builder;
mod object_type;
mod object_type_builder;
mod scalar_type;
mod type_annotation;
mod union_type;
mod union_type_builder;

pub use deprecation_state::DeprecationState;
pub use enum_type::EnumType;
pub use enum_type_builder::EnumTypeBuilder;
pub use field::FieldDefinition;
pub use field::FieldDefinitionBuilder;
pub use graphql_type::GraphQLType;
pub use input_object_type::InputObjectType;
pub use input_object_type_builder::InputObjectTypeBuilder;
pub use input_value::InputValueDefinition;
pub use interface_type::InterfaceType;
pub use interface_type_builder::InterfaceTypeBuilder;
pub use object_type::ObjectType;
pub use object_type_builder::ObjectTypeBuilder;
pub use scalar_type::ScalarType;
pub use type_annotation::TypeAnnotation;
pub use union_type::UnionType;
pub use union_type_builder::UnionTypeBuilder;

#[cfg(test)]
mod tests;
