use crate::schema::Schema;
use crate::value::Value;

/// Represents the annotated type for a
/// [`FieldDefinition`](crate::types::FieldDefinition) or
/// [`InputValueDefinition`](crate::types::InputValueDefinition).
///
/// Wrapper composition is structural data: a `[Hobby]` field whose list and
/// elements may both be absent is
/// `Nullable(List(Nullable(Named("Hobby"))))`. Types are non-null unless
/// explicitly wrapped in [`TypeAnnotation::Nullable`]. Two annotations
/// composing the same wrappers around the same named type compare equal;
/// named types are identified against the [`Schema`] registry, which holds
/// at most one definition per name.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum TypeAnnotation {
    List(Box<TypeAnnotation>),
    Named(String),
    Nullable(Box<TypeAnnotation>),
}
impl TypeAnnotation {
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    pub fn list(inner: TypeAnnotation) -> Self {
        Self::List(Box::new(inner))
    }

    pub fn nullable(inner: TypeAnnotation) -> Self {
        Self::Nullable(Box::new(inner))
    }

    /// Indicates if this annotation permits a null value at its outermost
    /// level. Arguments with nullable types may be omitted from a selection.
    pub fn is_nullable(&self) -> bool {
        matches!(self, Self::Nullable(_))
    }

    /// Recursively strip [`Nullable`](Self::Nullable) and
    /// [`List`](Self::List) wrappers and return the underlying type name.
    pub fn innermost_named(&self) -> &str {
        match self {
            Self::List(inner) => inner.innermost_named(),
            Self::Named(name) => name.as_str(),
            Self::Nullable(inner) => inner.innermost_named(),
        }
    }

    /// The instance predicate: whether `value` is a member of the type this
    /// annotation describes.
    ///
    /// This is a type-membership check, not coercion: an integer value does
    /// not satisfy a `Float` annotation even though
    /// [`coerce()`](crate::coerce::coerce) would accept it.
    pub fn satisfies(&self, schema: &Schema, value: &Value) -> bool {
        match self {
            Self::List(inner) =>
                match value {
                    Value::List(items) =>
                        items.iter().all(|item| inner.satisfies(schema, item)),
                    _ => false,
                },

            Self::Named(name) =>
                schema.get_type(name)
                    .is_some_and(|leaf| leaf.satisfies(schema, value)),

            Self::Nullable(inner) =>
                value.is_null() || inner.satisfies(schema, value),
        }
    }

    pub fn to_graphql_string(&self) -> String {
        self.to_graphql_string_impl(/* nullable = */ false)
    }

    fn to_graphql_string_impl(&self, nullable: bool) -> String {
        let bang = if nullable { "" } else { "!" };
        match self {
            Self::List(inner) =>
                format!("[{}]{bang}", inner.to_graphql_string_impl(false)),
            Self::Named(name) =>
                format!("{name}{bang}"),
            Self::Nullable(inner) =>
                inner.to_graphql_string_impl(true),
        }
    }
}
impl std::fmt::Display for TypeAnnotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_graphql_string())
    }
}
