use indexmap::IndexMap;
use thiserror::Error;

/// A decoded response value.
///
/// Mirrors [`Value`](crate::Value), except that nested field-bearing
/// results are [`ResultObject`]s with their own selected-field access
/// contract.
#[derive(Clone, Debug, PartialEq)]
pub enum ResultValue {
    Bool(bool),
    Enum(String),
    Float(f64),
    Int(i64),
    List(Vec<ResultValue>),
    Null,
    Object(ResultObject),
    String(String),
}
impl ResultValue {
    pub fn as_bool(&self) -> Option<bool> {
        if let Self::Bool(bool) = self {
            Some(*bool)
        } else {
            None
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        if let Self::Float(float) = self {
            Some(*float)
        } else {
            None
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        if let Self::Int(int) = self {
            Some(*int)
        } else {
            None
        }
    }

    pub fn as_list(&self) -> Option<&[ResultValue]> {
        if let Self::List(items) = self {
            Some(items.as_slice())
        } else {
            None
        }
    }

    pub fn as_object(&self) -> Option<&ResultObject> {
        if let Self::Object(object) = self {
            Some(object)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        if let Self::String(str) = self {
            Some(str.as_str())
        } else {
            None
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

/// A read-only, name-keyed result for one field-bearing type, scoped to a
/// single response.
///
/// Exactly the selected fields are present, keyed by alias-or-name in
/// selection order. Accessing a field that was never selected fails with
/// [`NoValueForField`] — distinct from
/// [`NoSuchField`](crate::ValidationError::NoSuchField), since the field
/// may be perfectly schema-valid but simply wasn't requested.
#[derive(Clone, Debug, PartialEq)]
pub struct ResultObject {
    pub(super) type_name: String,
    pub(super) values: IndexMap<String, ResultValue>,
}
impl ResultObject {
    pub fn get(&self, field_name: &str) -> Result<&ResultValue, NoValueForField> {
        self.values.get(field_name).ok_or_else(|| NoValueForField {
            field_name: field_name.to_string(),
            type_name: self.type_name.clone(),
        })
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &ResultValue)> {
        self.values.iter()
    }

    /// The selected keys present on this result, in selection order.
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.values.keys()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// The name of the field-bearing type this result was loaded for.
    pub fn type_name(&self) -> &str {
        self.type_name.as_str()
    }
}

/// No value is present for a field on a live [`ResultObject`] because the
/// field was not part of the selection the response was loaded against.
#[derive(Clone, Debug, Error, PartialEq)]
#[error(
    "no value for field \"{field_name}\" on `{type_name}`: the field was \
    not selected"
)]
pub struct NoValueForField {
    pub field_name: String,
    pub type_name: String,
}
