use crate::coerce;
use crate::coerce::CouldNotCoerce;
use crate::response::ResultObject;
use crate::response::ResultValue;
use crate::schema::Schema;
use crate::selection::Field;
use crate::selection::SelectionSet;
use crate::types::GraphQLType;
use crate::types::TypeAnnotation;
use indexmap::IndexMap;
use thiserror::Error;

type Result<T> = std::result::Result<T, LoadError>;

/// A response payload could not be loaded against a validated selection.
///
/// These are hard failures: there is no partial or best-effort result.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum LoadError {
    #[error("could not decode value for \"{key}\": {source}")]
    Decode {
        key: String,
        #[source]
        source: CouldNotCoerce,
    },

    #[error("response value for \"{key}\" is not a list")]
    ExpectedList {
        key: String,
    },

    #[error("response value for \"{key}\" is not an object")]
    ExpectedObject {
        key: String,
    },

    #[error("response has no value for key \"{key}\"")]
    MissingKey {
        key: String,
    },

    #[error("values of type `{type_name}` cannot be loaded from a response")]
    UnsupportedResultType {
        type_name: String,
    },
}

/// Load a response payload for a selection set.
///
/// Precondition: `selection_set` has already passed
/// [`validate()`](crate::validate) against `graphql_type`. Each selected
/// field's value is looked up under its alias-or-name key — a missing key
/// is a hard [`LoadError::MissingKey`] — and decoded by the field's
/// declared result type into a read-only [`ResultObject`].
pub fn load(
    schema: &Schema,
    graphql_type: &GraphQLType,
    selection_set: &SelectionSet,
    data: &serde_json::Map<String, serde_json::Value>,
) -> Result<ResultObject> {
    let Some(fields) = graphql_type.fields() else {
        return Err(LoadError::UnsupportedResultType {
            type_name: graphql_type.name().to_string(),
        });
    };

    let mut values = IndexMap::new();
    for field in selection_set.iter() {
        let key = field.selected_name();
        let payload = data.get(key).ok_or_else(|| LoadError::MissingKey {
            key: key.to_string(),
        })?;
        let field_def = fields.get(field.name())
            .expect("selection was validated against this type");
        let value = load_field_value(
            schema,
            field_def.type_annotation(),
            field,
            payload,
        )?;
        values.insert(key.to_string(), value);
    }

    Ok(ResultObject {
        type_name: graphql_type.name().to_string(),
        values,
    })
}

fn load_field_value(
    schema: &Schema,
    annotation: &TypeAnnotation,
    field: &Field,
    payload: &serde_json::Value,
) -> Result<ResultValue> {
    match annotation {
        TypeAnnotation::List(inner) => {
            let items = payload.as_array().ok_or_else(|| {
                LoadError::ExpectedList {
                    key: field.selected_name().to_string(),
                }
            })?;
            let loaded = items.iter()
                .map(|item| load_field_value(schema, inner, field, item))
                .collect::<Result<Vec<_>>>()?;
            Ok(ResultValue::List(loaded))
        },

        TypeAnnotation::Named(name) => {
            let leaf_type = schema.get_type(name)
                .expect("type is present in schema");
            if leaf_type.is_field_bearing() {
                let object = payload.as_object().ok_or_else(|| {
                    LoadError::ExpectedObject {
                        key: field.selected_name().to_string(),
                    }
                })?;
                let loaded = match field.selection_set() {
                    Some(sub_selection) =>
                        load(schema, leaf_type, sub_selection, object)?,
                    // A field-bearing field selected without a nested
                    // selection yields an empty result.
                    None => ResultObject {
                        type_name: leaf_type.name().to_string(),
                        values: IndexMap::new(),
                    },
                };
                Ok(ResultValue::Object(loaded))
            } else {
                coerce::decode_leaf(leaf_type, payload).map_err(|source| {
                    LoadError::Decode {
                        key: field.selected_name().to_string(),
                        source,
                    }
                })
            }
        },

        TypeAnnotation::Nullable(inner) =>
            if payload.is_null() {
                Ok(ResultValue::Null)
            } else {
                load_field_value(schema, inner, field, payload)
            },
    }
}
