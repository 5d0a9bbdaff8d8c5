use crate::types::FieldDefinition;
use crate::types::ObjectType;
use indexmap::IndexMap;

/// Builds an [`ObjectType`] one field at a time.
#[derive(Debug)]
pub struct ObjectTypeBuilder {
    description: Option<String>,
    fields: IndexMap<String, FieldDefinition>,
    interfaces: Vec<String>,
    name: String,
}
impl ObjectTypeBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            description: None,
            fields: IndexMap::new(),
            interfaces: vec![],
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

    pub fn interface(mut self, interface_name: impl Into<String>) -> Self {
        self.interfaces.push(interface_name.into());
        self
    }

    pub fn build(self) -> ObjectType {
        ObjectType {
            description: self.description,
            fields: self.fields,
            interfaces: self.interfaces,
            name: self.name,
        }
    }
}
