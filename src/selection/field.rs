use crate::selection::SelectionSet;
use crate::value::Value;
use indexmap::IndexMap;

/// A single field node within a [`SelectionSet`].
///
/// Fields are immutable: every `with_*` composer returns a new [`Field`]
/// value and leaves the receiver untouched, so previously returned
/// selections can be reused and extended independently.
#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    pub(super) alias: Option<String>,
    pub(super) arguments: IndexMap<String, Value>,
    pub(super) name: String,
    pub(super) selection_set: Option<SelectionSet>,
}
impl Field {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            alias: None,
            arguments: IndexMap::new(),
            name: name.into(),
            selection_set: None,
        }
    }

    /// Return a copy of this field with the given response-key alias.
    pub fn with_alias(&self, alias: impl Into<String>) -> Self {
        let mut field = self.clone();
        field.alias = Some(alias.into());
        field
    }

    /// Return a copy of this field with an argument appended. Argument
    /// order is preserved and controls wire emission order.
    pub fn with_argument(
        &self,
        name: impl Into<String>,
        value: impl Into<Value>,
    ) -> Self {
        let mut field = self.clone();
        field.arguments.insert(name.into(), value.into());
        field
    }

    /// Return a copy of this field carrying the given nested selection.
    pub fn with_selection(&self, selection_set: SelectionSet) -> Self {
        let mut field = self.clone();
        field.selection_set = Some(selection_set);
        field
    }

    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    pub fn arguments(&self) -> &IndexMap<String, Value> {
        &self.arguments
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// If an alias was specified for this field, return the alias.
    /// Otherwise return the name of the field. This is the key under which
    /// the response payload carries this field's value.
    pub fn selected_name(&self) -> &str {
        self.alias().unwrap_or_else(|| self.name())
    }

    pub fn selection_set(&self) -> Option<&SelectionSet> {
        self.selection_set.as_ref()
    }

    pub(crate) fn write_graphql(&self, out: &mut String, depth: usize) {
        let indent = "  ".repeat(depth);
        out.push_str(&indent);
        if let Some(alias) = self.alias() {
            out.push_str(alias);
            out.push_str(": ");
        }
        out.push_str(self.name());
        if !self.arguments.is_empty() {
            let rendered_args = self.arguments.iter()
                .map(|(name, value)| {
                    format!("{name}: {}", value.to_wire_string())
                })
                .collect::<Vec<_>>()
                .join(", ");
            out.push('(');
            out.push_str(&rendered_args);
            out.push(')');
        }
        if let Some(selection_set) = self.selection_set() {
            out.push_str(" {\n");
            selection_set.write_graphql(out, depth + 1);
            out.push_str(&indent);
            out.push('}');
        }
    }
}
