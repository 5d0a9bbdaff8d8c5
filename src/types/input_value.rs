use crate::types::TypeAnnotation;

/// Represents a declared input value: an argument on a
/// [`FieldDefinition`](crate::types::FieldDefinition) or a field of an
/// [`InputObjectType`](crate::types::InputObjectType).
///
/// Input values whose declared type is not
/// [`Nullable`](TypeAnnotation::Nullable) are required.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct InputValueDefinition {
    pub(super) description: Option<String>,
    pub(super) name: String,
    pub(super) type_annotation: TypeAnnotation,
}
impl InputValueDefinition {
    pub fn new(
        name: impl Into<String>,
        type_annotation: TypeAnnotation,
    ) -> Self {
        Self {
            description: None,
            name: name.into(),
            type_annotation,
        }
    }

    pub fn described(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn is_required(&self) -> bool {
        !self.type_annotation.is_nullable()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }
}
