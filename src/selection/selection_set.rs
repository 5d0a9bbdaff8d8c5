use crate::selection::Field;

/// An ordered, immutable tree of [`Field`] nodes describing which fields a
/// caller wants returned.
///
/// Order is significant: it controls wire-serialization order and
/// round-trips through validation unchanged. Composition is persistent —
/// [`SelectionSet::field()`] returns a new value and leaves the receiver
/// intact.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SelectionSet {
    pub(super) fields: Vec<Field>,
}
impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a new [`SelectionSet`] with `field` appended.
    pub fn field(&self, field: Field) -> Self {
        let mut fields = self.fields.clone();
        fields.push(field);
        Self { fields }
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub(crate) fn write_graphql(&self, out: &mut String, depth: usize) {
        for field in &self.fields {
            field.write_graphql(out, depth);
            out.push('\n');
        }
    }
}
impl std::convert::From<Vec<Field>> for SelectionSet {
    fn from(fields: Vec<Field>) -> Self {
        Self { fields }
    }
}
impl std::iter::FromIterator<Field> for SelectionSet {
    fn from_iter<I: IntoIterator<Item = Field>>(iter: I) -> Self {
        Self { fields: iter.into_iter().collect() }
    }
}
