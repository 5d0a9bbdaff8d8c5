/// The deprecation state of a
/// [`FieldDefinition`](crate::types::FieldDefinition).
#[derive(Clone, Debug, PartialEq)]
pub enum DeprecationState<'a> {
    Deprecated(Option<&'a str>),
    NotDeprecated,
}
impl<'a> DeprecationState<'a> {
    pub fn is_deprecated(&self) -> bool {
        matches!(self, Self::Deprecated(_))
    }

    pub fn reason(&self) -> Option<&'a str> {
        match self {
            Self::Deprecated(reason) => *reason,
            Self::NotDeprecated => None,
        }
    }
}
