use crate::schema::Schema;
use crate::selection::ValidationError;
use crate::types::InputValueDefinition;
use crate::value::Value;
use indexmap::IndexMap;

/// Represents an input object type defined within some
/// [`Schema`](crate::schema::Schema): a named record of argument-typed
/// fields, immutable once constructed.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct InputObjectType {
    pub(super) description: Option<String>,
    pub(super) fields: IndexMap<String, InputValueDefinition>,
    pub(super) name: String,
}
impl InputObjectType {
    /// Helper function that just delegates to
    /// [`InputObjectTypeBuilder::new()`](crate::types::InputObjectTypeBuilder::new).
    pub fn builder(
        name: impl Into<String>,
    ) -> crate::types::InputObjectTypeBuilder {
        crate::types::InputObjectTypeBuilder::new(name)
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn fields(&self) -> &IndexMap<String, InputValueDefinition> {
        &self.fields
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Construct a [`Value::Object`] of this input object type, validating
    /// the supplied field names at construction time.
    ///
    /// Supplying an undeclared field name fails with
    /// [`ValidationError::NoSuchArgument`]; omitting a field whose declared
    /// type is not nullable fails with
    /// [`ValidationError::MissingArgument`]. The resulting value remembers
    /// the order fields were supplied in, and that order is what wire
    /// emission follows.
    pub fn instantiate(
        &self,
        fields: impl IntoIterator<Item = (impl Into<String>, Value)>,
    ) -> Result<Value, ValidationError> {
        let supplied: IndexMap<String, Value> = fields.into_iter()
            .map(|(name, value)| (name.into(), value))
            .collect();

        for name in supplied.keys() {
            if !self.fields.contains_key(name) {
                return Err(ValidationError::NoSuchArgument {
                    name: name.clone(),
                });
            }
        }
        for (name, def) in self.fields.iter() {
            if def.is_required() && !supplied.contains_key(name) {
                return Err(ValidationError::MissingArgument {
                    name: name.clone(),
                });
            }
        }

        Ok(Value::Object(supplied))
    }

    /// The instance predicate for input object values: a mapping whose keys
    /// are all declared, whose required fields are all present, and whose
    /// values each satisfy their declared type.
    pub(crate) fn satisfies(&self, schema: &Schema, value: &Value) -> bool {
        let Value::Object(entries) = value else {
            return false;
        };
        let names_declared = entries.keys()
            .all(|name| self.fields.contains_key(name));
        let required_present = self.fields.iter()
            .all(|(name, def)| {
                !def.is_required() || entries.contains_key(name)
            });
        names_declared && required_present && entries.iter().all(
            |(name, field_value)| {
                self.fields.get(name).is_some_and(|def| {
                    def.type_annotation().satisfies(schema, field_value)
                })
            },
        )
    }
}
