use crate::types::DeprecationState;
use crate::types::InputValueDefinition;
use crate::types::TypeAnnotation;
use indexmap::IndexMap;

/// Represents a field defined on an
/// [`ObjectType`](crate::types::ObjectType) or
/// [`InterfaceType`](crate::types::InterfaceType).
///
/// Field definitions are created once when a schema is bound and never
/// mutated afterward.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct FieldDefinition {
    pub(super) arguments: IndexMap<String, InputValueDefinition>,
    pub(super) deprecation_reason: Option<String>,
    pub(super) description: Option<String>,
    pub(super) is_deprecated: bool,
    pub(super) name: String,
    pub(super) type_annotation: TypeAnnotation,
}
impl FieldDefinition {
    /// Helper function that just delegates to
    /// [`FieldDefinitionBuilder::new()`].
    pub fn builder(
        name: impl Into<String>,
        type_annotation: TypeAnnotation,
    ) -> FieldDefinitionBuilder {
        FieldDefinitionBuilder::new(name, type_annotation)
    }

    /// The declared arguments of this field, keyed by name in declaration
    /// order.
    pub fn arguments(&self) -> &IndexMap<String, InputValueDefinition> {
        &self.arguments
    }

    pub fn deprecation_state(&self) -> DeprecationState<'_> {
        if self.is_deprecated {
            DeprecationState::Deprecated(self.deprecation_reason.as_deref())
        } else {
            DeprecationState::NotDeprecated
        }
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The declared result type of this field, possibly wrapped in
    /// [`Nullable`](TypeAnnotation::Nullable) or
    /// [`List`](TypeAnnotation::List) annotations.
    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }
}

/// Builds a [`FieldDefinition`].
#[derive(Debug)]
pub struct FieldDefinitionBuilder {
    arguments: IndexMap<String, InputValueDefinition>,
    deprecation_reason: Option<String>,
    description: Option<String>,
    is_deprecated: bool,
    name: String,
    type_annotation: TypeAnnotation,
}
impl FieldDefinitionBuilder {
    pub fn new(
        name: impl Into<String>,
        type_annotation: TypeAnnotation,
    ) -> Self {
        Self {
            arguments: IndexMap::new(),
            deprecation_reason: None,
            description: None,
            is_deprecated: false,
            name: name.into(),
            type_annotation,
        }
    }

    pub fn argument(mut self, argument: InputValueDefinition) -> Self {
        self.arguments.insert(argument.name().to_string(), argument);
        self
    }

    pub fn deprecated(mut self, reason: Option<&str>) -> Self {
        self.deprecation_reason = reason.map(str::to_string);
        self.is_deprecated = true;
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn build(self) -> FieldDefinition {
        FieldDefinition {
            arguments: self.arguments,
            deprecation_reason: self.deprecation_reason,
            description: self.description,
            is_deprecated: self.is_deprecated,
            name: self.name,
            type_annotation: self.type_annotation,
        }
    }
}
