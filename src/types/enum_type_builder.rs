use crate::types::EnumType;
use indexmap::IndexSet;

/// Builds an [`EnumType`] one variant at a time.
#[derive(Debug)]
pub struct EnumTypeBuilder {
    description: Option<String>,
    name: String,
    variants: IndexSet<String>,
}
impl EnumTypeBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            description: None,
            name: name.into(),
            variants: IndexSet::new(),
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn variant(mut self, name: impl Into<String>) -> Self {
        self.variants.insert(name.into());
        self
    }

    pub fn build(self) -> EnumType {
        EnumType {
            description: self.description,
            name: self.name,
            variants: self.variants,
        }
    }
}
