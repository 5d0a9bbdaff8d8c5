use crate::schema::Schema;
use crate::selection::SelectionError;
use crate::selection::SelectionSet;
use crate::selection::validate;

/// The kind of a GraphQL operation, determining the keyword the serialized
/// wire query opens with.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum OperationKind {
    Mutation,
    Query,
    Subscription,
}
impl OperationKind {
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Mutation => "mutation",
            Self::Query => "query",
            Self::Subscription => "subscription",
        }
    }
}

/// A root operation ready for wire serialization: an [`OperationKind`]
/// paired with the selection set to send.
#[derive(Clone, Debug, PartialEq)]
pub struct Operation {
    kind: OperationKind,
    selection_set: SelectionSet,
}
impl Operation {
    pub fn new(kind: OperationKind, selection_set: SelectionSet) -> Self {
        Self { kind, selection_set }
    }

    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    pub fn selection_set(&self) -> &SelectionSet {
        &self.selection_set
    }

    /// Render this operation as wire query text.
    ///
    /// Fields are emitted in selection order, newline-separated, indented
    /// two spaces per nesting depth.
    pub fn to_graphql_string(&self) -> String {
        if self.selection_set.is_empty() {
            return format!("{} {{}}", self.kind.keyword());
        }
        let mut out = format!("{} {{\n", self.kind.keyword());
        self.selection_set.write_graphql(&mut out, 1);
        out.push('}');
        out
    }
}
impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_graphql_string())
    }
}

/// Validate `selection_set` against `schema`'s Query root type and wrap it
/// in a query [`Operation`].
pub fn query(
    schema: &Schema,
    selection_set: SelectionSet,
) -> Result<Operation, SelectionError> {
    validate(schema, schema.query_type(), &selection_set)?;
    Ok(Operation::new(OperationKind::Query, selection_set))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::Field;
    use crate::value::Value;

    #[test]
    fn renders_nested_query_with_arguments() {
        let operation = Operation::new(
            OperationKind::Query,
            SelectionSet::new()
                .field(Field::new("foo"))
                .field(
                    Field::new("qux")
                        .with_argument("buz", 99)
                        .with_selection(
                            SelectionSet::new().field(Field::new("nested")),
                        ),
                ),
        );
        assert_eq!(
            operation.to_graphql_string(),
            "query {\n  foo\n  qux(buz: 99) {\n    nested\n  }\n}",
        );
    }

    #[test]
    fn renders_aliases_and_literals() {
        let operation = Operation::new(
            OperationKind::Query,
            SelectionSet::new().field(
                Field::new("search")
                    .with_alias("first_result")
                    .with_argument("text", "a \"quoted\" term")
                    .with_argument("mode", Value::enum_member("FUZZY"))
                    .with_argument("limits", vec![1, 2]),
            ),
        );
        assert_eq!(
            operation.to_graphql_string(),
            "query {\n  first_result: search\
             (text: \"a \\\"quoted\\\" term\", mode: FUZZY, \
             limits: [1, 2])\n}",
        );
    }

    #[test]
    fn renders_empty_selection() {
        let operation =
            Operation::new(OperationKind::Mutation, SelectionSet::new());
        assert_eq!(operation.to_graphql_string(), "mutation {}");
    }
}
