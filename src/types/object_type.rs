use crate::types::FieldDefinition;
use indexmap::IndexMap;

/// Represents an object type defined within some
/// [`Schema`](crate::schema::Schema).
///
/// The field registry is built once at schema-bind time and contains every
/// field selectable on the type, including fields declared to satisfy the
/// interfaces the type implements.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ObjectType {
    pub(super) description: Option<String>,
    pub(super) fields: IndexMap<String, FieldDefinition>,
    pub(super) interfaces: Vec<String>,
    pub(super) name: String,
}
impl ObjectType {
    /// Helper function that just delegates to
    /// [`ObjectTypeBuilder::new()`](crate::types::ObjectTypeBuilder::new).
    pub fn builder(name: impl Into<String>) -> crate::types::ObjectTypeBuilder {
        crate::types::ObjectTypeBuilder::new(name)
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Look up a field definition by exact, case-sensitive name.
    pub fn field(&self, name: &str) -> Option<&FieldDefinition> {
        self.fields.get(name)
    }

    pub fn fields(&self) -> &IndexMap<String, FieldDefinition> {
        &self.fields
    }

    /// Names of the interface types this object declares that it implements.
    pub fn interfaces(&self) -> &[String] {
        &self.interfaces
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
