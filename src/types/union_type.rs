use crate::schema::Schema;
use crate::value::Value;

/// Represents a union type defined within some
/// [`Schema`](crate::schema::Schema).
///
/// Unions classify: a value belongs to the union iff exactly one member
/// type's instance predicate holds for it. Well-formed schemas declare
/// mutually exclusive members, so "exactly one" and "at least one" coincide
/// in practice. No coercion or wire codec is defined for unions; they only
/// appear in response position.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct UnionType {
    pub(super) description: Option<String>,
    pub(super) members: Vec<String>,
    pub(super) name: String,
}
impl UnionType {
    /// Helper function that just delegates to
    /// [`UnionTypeBuilder::new()`](crate::types::UnionTypeBuilder::new).
    pub fn builder(name: impl Into<String>) -> crate::types::UnionTypeBuilder {
        crate::types::UnionTypeBuilder::new(name)
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Names of this union's member types, in declaration order.
    pub fn members(&self) -> &[String] {
        &self.members
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub(crate) fn satisfies(&self, schema: &Schema, value: &Value) -> bool {
        let matching = self.members.iter()
            .filter(|member_name| {
                schema.get_type(member_name)
                    .is_some_and(|member| member.satisfies(schema, value))
            })
            .count();
        matching == 1
    }
}
