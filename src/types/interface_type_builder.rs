use crate::types::FieldDefinition;
use crate::types::InterfaceType;
use indexmap::IndexMap;

/// Builds an [`InterfaceType`] one field at a time.
#[derive(Debug)]
pub struct InterfaceTypeBuilder {
    description: Option<String>,
    fields: IndexMap<String, FieldDefinition>,
    name: String,
}
impl InterfaceTypeBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            description: None,
            fields: IndexMap::new(),
            name: name.into(),
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn field(mut self, field: FieldDefinition) -> Self {
        self.fields.insert(field.name().to_string(), field);
        self
    }

    pub fn build(self) -> InterfaceType {
        InterfaceType {
            description: self.description,
            fields: self.fields,
            name: self.name,
        }
    }
}
