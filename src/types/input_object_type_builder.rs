use crate::types::InputObjectType;
use crate::types::InputValueDefinition;
use indexmap::IndexMap;

/// Builds an [`InputObjectType`] one field at a time.
#[derive(Debug)]
pub struct InputObjectTypeBuilder {
    description: Option<String>,
    fields: IndexMap<String, InputValueDefinition>,
    name: String,
}
impl InputObjectTypeBuilder {
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

    pub fn field(mut self, field: InputValueDefinition) -> Self {
        self.fields.insert(field.name().to_string(), field);
        self
    }

    pub fn build(self) -> InputObjectType {
        InputObjectType {
            description: self.description,
            fields: self.fields,
            name: self.name,
        }
    }
}
