/// Represents a custom scalar type declared within some
/// [`Schema`](crate::schema::Schema).
///
/// Custom scalars carry no structure of their own: coercion dispatches on
/// the runtime category of the supplied value (boolean, integer, float, or
/// text) to the matching built-in scalar's rule, and any value outside those
/// categories is rejected.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ScalarType {
    pub(super) description: Option<String>,
    pub(super) name: String,
}
impl ScalarType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            description: None,
            name: name.into(),
        }
    }

    pub fn with_description(
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            description: Some(description.into()),
            name: name.into(),
        }
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
