use crate::schema::SchemaBuilder;
use crate::types::GraphQLType;
use std::collections::HashMap;

/// Represents a fully bound and immutable type registry.
///
/// A [`Schema`] is built once per bound schema and treated as read-only for
/// the remainder of the process; it can be shared freely across concurrent
/// validation and loading calls.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Schema {
    pub(crate) mutation_type: Option<String>,
    pub(crate) query_type: String,
    pub(crate) subscription_type: Option<String>,
    pub(crate) types: HashMap<String, GraphQLType>,
}
impl Schema {
    /// Helper function that just delegates to [`SchemaBuilder::new()`].
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::new()
    }

    /// Returns a [`HashMap<String, GraphQLType>`] containing all types
    /// registered in this [`Schema`].
    ///
    /// This map includes both types registered while building this
    /// [`Schema`] as well as the implicitly-registered built-in scalars
    /// like [`GraphQLType::Int`].
    pub fn all_types(&self) -> &HashMap<String, GraphQLType> {
        &self.types
    }

    /// Look up a type by exact, case-sensitive name.
    pub fn get_type(&self, name: &str) -> Option<&GraphQLType> {
        self.types.get(name)
    }

    /// Returns this [`Schema`]'s Mutation root operation type (if one was
    /// registered).
    pub fn mutation_type(&self) -> Option<&GraphQLType> {
        self.mutation_type.as_ref().map(|name| {
            self.types.get(name)
                .expect("type is present in schema")
        })
    }

    /// Returns this [`Schema`]'s Query root operation type.
    pub fn query_type(&self) -> &GraphQLType {
        self.types.get(&self.query_type)
            .expect("type is present in schema")
    }

    /// Returns this [`Schema`]'s Subscription root operation type (if one
    /// was registered).
    pub fn subscription_type(&self) -> Option<&GraphQLType> {
        self.subscription_type.as_ref().map(|name| {
            self.types.get(name)
                .expect("type is present in schema")
        })
    }
}

// Deserialization re-runs the one-time bind validation, so the
// type-reference invariants hold for every live [`Schema`] value, not only
// builder-built ones.
impl<'de> serde::Deserialize<'de> for Schema {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let unbound = UnboundSchema::deserialize(deserializer)?;
        SchemaBuilder::bind(
            unbound.mutation_type,
            unbound.query_type,
            unbound.subscription_type,
            unbound.types,
        ).map_err(serde::de::Error::custom)
    }
}

#[derive(serde::Deserialize)]
struct UnboundSchema {
    #[serde(default)]
    mutation_type: Option<String>,
    query_type: String,
    #[serde(default)]
    subscription_type: Option<String>,
    types: HashMap<String, GraphQLType>,
}
