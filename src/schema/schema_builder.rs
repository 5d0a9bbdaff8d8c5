use crate::schema::Schema;
use crate::schema::SchemaBuildError;
use crate::types::EnumType;
use crate::types::FieldDefinition;
use crate::types::GraphQLType;
use crate::types::InputObjectType;
use crate::types::InterfaceType;
use crate::types::ObjectType;
use crate::types::ScalarType;
use crate::types::UnionType;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Accumulates type registrations and produces an immutable [`Schema`],
/// running the one-time bind validation in [`SchemaBuilder::build()`].
///
/// The built-in scalars (`Int`, `Float`, `String`, `Boolean`, `ID`) are
/// pre-registered. The Query root type name defaults to `"Query"`.
#[derive(Debug)]
pub struct SchemaBuilder {
    errors: Vec<SchemaBuildError>,
    mutation_type: Option<String>,
    query_type: String,
    subscription_type: Option<String>,
    types: std::collections::HashMap<String, GraphQLType>,
}
impl SchemaBuilder {
    pub fn new() -> Self {
        let mut types = std::collections::HashMap::new();
        for builtin in [
            GraphQLType::Bool,
            GraphQLType::Float,
            GraphQLType::Id,
            GraphQLType::Int,
            GraphQLType::String,
        ] {
            types.insert(builtin.name().to_string(), builtin);
        }
        Self {
            errors: vec![],
            mutation_type: None,
            query_type: "Query".to_string(),
            subscription_type: None,
            types,
        }
    }

    /// Bind pre-assembled schema parts, running the same validation as
    /// [`SchemaBuilder::build()`].
    pub(crate) fn bind(
        mutation_type: Option<String>,
        query_type: String,
        subscription_type: Option<String>,
        types: std::collections::HashMap<String, GraphQLType>,
    ) -> Result<Schema> {
        Self {
            errors: vec![],
            mutation_type,
            query_type,
            subscription_type,
            types,
        }.build()
    }

    pub fn enum_type(self, enum_type: EnumType) -> Self {
        self.add_type(enum_type.into())
    }

    pub fn input_object_type(self, input_object_type: InputObjectType) -> Self {
        self.add_type(input_object_type.into())
    }

    pub fn interface_type(self, interface_type: InterfaceType) -> Self {
        self.add_type(interface_type.into())
    }

    pub fn object_type(self, object_type: ObjectType) -> Self {
        self.add_type(object_type.into())
    }

    pub fn scalar_type(self, scalar_type: ScalarType) -> Self {
        self.add_type(scalar_type.into())
    }

    pub fn union_type(self, union_type: UnionType) -> Self {
        self.add_type(union_type.into())
    }

    pub fn mutation_type_name(mut self, name: impl Into<String>) -> Self {
        self.mutation_type = Some(name.into());
        self
    }

    pub fn query_type_name(mut self, name: impl Into<String>) -> Self {
        self.query_type = name.into();
        self
    }

    pub fn subscription_type_name(mut self, name: impl Into<String>) -> Self {
        self.subscription_type = Some(name.into());
        self
    }

    /// Validate everything registered so far and produce the immutable
    /// [`Schema`].
    pub fn build(mut self) -> Result<Schema> {
        log::debug!(
            "binding schema with {num_types} registered types",
            num_types = self.types.len(),
        );

        if !self.errors.is_empty() {
            return Err(self.errors.swap_remove(0));
        }

        self.check_root_type(&self.query_type.clone(), "query")?;
        if let Some(name) = self.mutation_type.clone() {
            self.check_root_type(&name, "mutation")?;
        }
        if let Some(name) = self.subscription_type.clone() {
            self.check_root_type(&name, "subscription")?;
        }

        for graphql_type in self.types.values() {
            match graphql_type {
                GraphQLType::InputObject(input_object_type) =>
                    self.check_input_object(input_object_type)?,

                GraphQLType::Interface(interface_type) =>
                    self.check_fields(
                        interface_type.name(),
                        interface_type.fields().values(),
                    )?,

                GraphQLType::Object(object_type) =>
                    self.check_object(object_type)?,

                GraphQLType::Union(union_type) =>
                    self.check_union(union_type)?,

                _ => (),
            }
        }

        Ok(Schema {
            mutation_type: self.mutation_type,
            query_type: self.query_type,
            subscription_type: self.subscription_type,
            types: self.types,
        })
    }

    fn add_type(mut self, graphql_type: GraphQLType) -> Self {
        let type_name = graphql_type.name().to_string();
        if self.types.insert(type_name.clone(), graphql_type).is_some() {
            self.errors.push(SchemaBuildError::DuplicateTypeName {
                type_name,
            });
        }
        self
    }

    fn check_root_type(&self, type_name: &str, operation: &str) -> Result<()> {
        match self.types.get(type_name) {
            Some(GraphQLType::Object(_)) =>
                Ok(()),

            Some(_) =>
                Err(SchemaBuildError::InvalidRootOperationType {
                    operation: operation.to_string(),
                    type_name: type_name.to_string(),
                }),

            None =>
                Err(SchemaBuildError::UndefinedTypeName {
                    referenced_by: format!("schema.{operation}"),
                    undefined_type_name: type_name.to_string(),
                }),
        }
    }

    fn check_object(&self, object_type: &ObjectType) -> Result<()> {
        for interface_name in object_type.interfaces() {
            self.deref_type(interface_name, object_type.name())?;
        }
        self.check_fields(object_type.name(), object_type.fields().values())
    }

    fn check_fields<'a>(
        &self,
        type_name: &str,
        fields: impl Iterator<Item = &'a FieldDefinition>,
    ) -> Result<()> {
        for field in fields {
            let referenced_by = format!("{type_name}.{}", field.name());
            self.deref_type(
                field.type_annotation().innermost_named(),
                referenced_by.as_str(),
            )?;

            for argument in field.arguments().values() {
                let argument_type_name =
                    argument.type_annotation().innermost_named();
                let argument_type = self.deref_type(
                    argument_type_name,
                    referenced_by.as_str(),
                )?;
                if !argument_type.is_input_type() {
                    return Err(SchemaBuildError::InvalidParameterType {
                        field_name: field.name().to_string(),
                        invalid_type_name: argument_type_name.to_string(),
                        parameter_name: argument.name().to_string(),
                        type_name: type_name.to_string(),
                    });
                }
            }
        }
        Ok(())
    }

    fn check_input_object(
        &self,
        input_object_type: &InputObjectType,
    ) -> Result<()> {
        for field in input_object_type.fields().values() {
            let field_type_name = field.type_annotation().innermost_named();
            let referenced_by = format!(
                "{}.{}", input_object_type.name(), field.name(),
            );
            let field_type = self.deref_type(
                field_type_name,
                referenced_by.as_str(),
            )?;
            if !field_type.is_input_type() {
                return Err(SchemaBuildError::InvalidInputFieldType {
                    field_name: field.name().to_string(),
                    input_object_name: input_object_type.name().to_string(),
                    invalid_type_name: field_type_name.to_string(),
                });
            }
        }
        Ok(())
    }

    fn check_union(&self, union_type: &UnionType) -> Result<()> {
        for member_name in union_type.members() {
            let member = self.deref_type(member_name, union_type.name())?;
            if !matches!(member, GraphQLType::Object(_)) {
                return Err(SchemaBuildError::InvalidUnionMemberTypeKind {
                    member_type_name: member_name.to_string(),
                    union_type_name: union_type.name().to_string(),
                });
            }
        }
        Ok(())
    }

    fn deref_type(
        &self,
        type_name: &str,
        referenced_by: &str,
    ) -> Result<&GraphQLType> {
        self.types.get(type_name).ok_or_else(|| {
            SchemaBuildError::UndefinedTypeName {
                referenced_by: referenced_by.to_string(),
                undefined_type_name: type_name.to_string(),
            }
        })
    }
}
impl Default for SchemaBuilder {
    fn default() -> Self {
        Self::new()
    }
}
