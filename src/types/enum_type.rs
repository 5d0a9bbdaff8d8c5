use indexmap::IndexSet;

/// Represents an enum type defined within some
/// [`Schema`](crate::schema::Schema): a closed, named set of string-tagged
/// members.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct EnumType {
    pub(super) description: Option<String>,
    pub(super) name: String,
    pub(super) variants: IndexSet<String>,
}
impl EnumType {
    /// Helper function that just delegates to
    /// [`EnumTypeBuilder::new()`](crate::types::EnumTypeBuilder::new).
    pub fn builder(name: impl Into<String>) -> crate::types::EnumTypeBuilder {
        crate::types::EnumTypeBuilder::new(name)
    }

    pub fn contains(&self, variant_name: &str) -> bool {
        self.variants.contains(variant_name)
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The member names of this enum, in declaration order.
    pub fn variants(&self) -> &IndexSet<String> {
        &self.variants
    }
}
