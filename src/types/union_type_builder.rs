use crate::types::UnionType;

/// Builds a [`UnionType`] one member at a time.
#[derive(Debug)]
pub struct UnionTypeBuilder {
    description: Option<String>,
    members: Vec<String>,
    name: String,
}
impl UnionTypeBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            description: None,
            members: vec![],
            name: name.into(),
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn member(mut self, member_type_name: impl Into<String>) -> Self {
        self.members.push(member_type_name.into());
        self
    }

    pub fn build(self) -> UnionType {
        UnionType {
            description: self.description,
            members: self.members,
            name: self.name,
        }
    }
}
