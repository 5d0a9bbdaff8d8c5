//! Per-type value conversion: program values to canonical program values
//! ([`coerce()`]), program values to wire literals ([`encode()`]), and JSON
//! response payloads to result values ([`decode()`]).
//!
//! Each entry point structurally unwraps
//! [`Nullable`](TypeAnnotation::Nullable) and [`List`](TypeAnnotation::List)
//! annotations and routes the underlying value to the matching leaf rule.

use crate::response::ResultValue;
use crate::schema::Schema;
use crate::selection::ValidationError;
use crate::types::EnumType;
use crate::types::GraphQLType;
use crate::types::InputObjectType;
use crate::types::TypeAnnotation;
use crate::value::Value;
use thiserror::Error;

type Result<T> = std::result::Result<T, CouldNotCoerce>;

/// A value could not be converted to a scalar, enum, or list target
/// representation.
#[derive(Clone, Debug, Error, PartialEq)]
#[error("{reason}")]
pub struct CouldNotCoerce {
    pub reason: String,
}
impl CouldNotCoerce {
    fn new(reason: impl Into<String>) -> Self {
        Self { reason: reason.into() }
    }
}
impl std::convert::From<CouldNotCoerce> for ValidationError {
    fn from(error: CouldNotCoerce) -> Self {
        Self::CouldNotCoerce { reason: error.reason }
    }
}

/// Exclusive lower bound for the `Int` scalar. The bounds are an open
/// interval: values exactly at `MIN_INT` or `MAX_INT` are rejected.
pub const MIN_INT: i64 = -(1 << 31);
/// Exclusive upper bound for the `Int` scalar.
pub const MAX_INT: i64 = (1 << 31) - 1;

/// Convert a program value into the canonical representation required by
/// the declared type, failing with [`CouldNotCoerce`] if impossible.
pub fn coerce(
    schema: &Schema,
    annotation: &TypeAnnotation,
    value: &Value,
) -> Result<Value> {
    match annotation {
        TypeAnnotation::List(inner) =>
            match value {
                Value::List(items) => {
                    // Elements coerce independently; the first element
                    // failure aborts the whole list with that element's
                    // reason.
                    let coerced = items.iter()
                        .map(|item| coerce(schema, inner, item))
                        .collect::<Result<Vec<_>>>()?;
                    Ok(Value::List(coerced))
                },
                _ => Err(CouldNotCoerce::new("invalid type, must be a list")),
            },

        TypeAnnotation::Named(name) =>
            coerce_leaf(schema, deref_leaf(schema, name)?, value),

        TypeAnnotation::Nullable(inner) =>
            if value.is_null() {
                Ok(Value::Null)
            } else {
                coerce(schema, inner, value)
            },
    }
}

/// Convert a program value into a wire literal for the declared type:
/// coercion to the canonical representation first, then rendering.
pub fn encode(
    schema: &Schema,
    annotation: &TypeAnnotation,
    value: &Value,
) -> Result<String> {
    Ok(coerce(schema, annotation, value)?.to_wire_string())
}

/// Convert a JSON response payload into a [`ResultValue`] for the declared
/// type.
///
/// This entry point handles scalar, enum, and wrapper annotations only;
/// field-bearing results are assembled by
/// [`load()`](crate::response::load), which owns the selection context.
pub fn decode(
    schema: &Schema,
    annotation: &TypeAnnotation,
    payload: &serde_json::Value,
) -> Result<ResultValue> {
    match annotation {
        TypeAnnotation::List(inner) =>
            match payload {
                serde_json::Value::Array(items) => {
                    let decoded = items.iter()
                        .map(|item| decode(schema, inner, item))
                        .collect::<Result<Vec<_>>>()?;
                    Ok(ResultValue::List(decoded))
                },
                _ => Err(CouldNotCoerce::new(
                    "invalid response value, expected a list",
                )),
            },

        TypeAnnotation::Named(name) =>
            decode_leaf(deref_leaf(schema, name)?, payload),

        TypeAnnotation::Nullable(inner) =>
            if payload.is_null() {
                Ok(ResultValue::Null)
            } else {
                decode(schema, inner, payload)
            },
    }
}

/// Decode a JSON payload by a leaf type's rule.
///
/// Response integers are held to the same open-interval `Int` bounds as
/// [`coerce()`]: an out-of-range value in a response payload is rejected
/// rather than passed through.
pub(crate) fn decode_leaf(
    leaf: &GraphQLType,
    payload: &serde_json::Value,
) -> Result<ResultValue> {
    match leaf {
        GraphQLType::Bool =>
            payload.as_bool()
                .map(ResultValue::Bool)
                .ok_or_else(|| CouldNotCoerce::new(
                    "invalid response value, expected a boolean",
                )),

        GraphQLType::Enum(enum_type) =>
            match payload.as_str() {
                Some(name) if enum_type.contains(name) =>
                    Ok(ResultValue::Enum(name.to_string())),
                Some(name) =>
                    Err(CouldNotCoerce::new(format!(
                        "\"{name}\" is not a valid {}", enum_type.name(),
                    ))),
                None =>
                    Err(CouldNotCoerce::new(
                        "invalid response value, expected an enum member name",
                    )),
            },

        GraphQLType::Float =>
            payload.as_f64()
                .map(ResultValue::Float)
                .ok_or_else(|| CouldNotCoerce::new(
                    "invalid response value, expected a number",
                )),

        GraphQLType::Id | GraphQLType::String =>
            payload.as_str()
                .map(|str| ResultValue::String(str.to_string()))
                .ok_or_else(|| CouldNotCoerce::new(
                    "invalid response value, expected a string",
                )),

        GraphQLType::Int =>
            match payload.as_i64() {
                Some(int) => coerce_int(int).map(ResultValue::Int),
                None => Err(CouldNotCoerce::new(
                    "invalid response value, expected an integer",
                )),
            },

        GraphQLType::Scalar(_) =>
            decode_any_scalar(payload),

        GraphQLType::InputObject(_) =>
            Err(CouldNotCoerce::new(
                "input objects do not appear in responses",
            )),

        GraphQLType::Interface(_) | GraphQLType::Object(_) =>
            Err(CouldNotCoerce::new(
                "field-bearing types are loaded through their selection",
            )),

        GraphQLType::Union(union_type) =>
            Err(CouldNotCoerce::new(format!(
                "no decoding defined for union type `{}`",
                union_type.name(),
            ))),
    }
}

fn coerce_leaf(
    schema: &Schema,
    leaf: &GraphQLType,
    value: &Value,
) -> Result<Value> {
    match leaf {
        GraphQLType::Bool =>
            match value {
                Value::Bool(bool) => Ok(Value::Bool(*bool)),
                _ => Err(CouldNotCoerce::new("a boolean type is required")),
            },

        GraphQLType::Enum(enum_type) =>
            coerce_enum(enum_type, value),

        GraphQLType::Float =>
            match value {
                Value::Float(float) if float.is_finite() =>
                    Ok(Value::Float(*float)),
                Value::Float(_) =>
                    Err(CouldNotCoerce::new(
                        "float value cannot be infinite or NaN",
                    )),
                Value::Int(int) =>
                    Ok(Value::Float(*int as f64)),
                _ =>
                    Err(CouldNotCoerce::new(
                        "invalid type, must be a float or integer",
                    )),
            },

        GraphQLType::Id | GraphQLType::String =>
            match value {
                Value::String(str) => Ok(Value::String(str.clone())),
                _ => Err(CouldNotCoerce::new("a string type is required")),
            },

        GraphQLType::Int =>
            match value {
                Value::Int(int) => coerce_int(*int).map(Value::Int),
                _ => Err(CouldNotCoerce::new("invalid type, must be an integer")),
            },

        GraphQLType::InputObject(input_object_type) =>
            coerce_input_object(schema, input_object_type, value),

        // Custom scalars dispatch on the runtime category of the input to
        // the matching built-in rule.
        GraphQLType::Scalar(_) =>
            match value {
                Value::Bool(_) => coerce_leaf(schema, &GraphQLType::Bool, value),
                Value::Float(_) => coerce_leaf(schema, &GraphQLType::Float, value),
                Value::Int(_) => coerce_leaf(schema, &GraphQLType::Int, value),
                Value::String(_) => coerce_leaf(schema, &GraphQLType::String, value),
                _ => Err(CouldNotCoerce::new("invalid type, must be a scalar")),
            },

        GraphQLType::Interface(_)
            | GraphQLType::Object(_)
            | GraphQLType::Union(_) =>
            Err(CouldNotCoerce::new(format!(
                "no coercion defined for `{}`", leaf.name(),
            ))),
    }
}

fn coerce_int(int: i64) -> Result<i64> {
    if MIN_INT < int && int < MAX_INT {
        Ok(int)
    } else {
        Err(CouldNotCoerce::new(format!(
            "{int} is not representable by a 32-bit integer",
        )))
    }
}

fn coerce_enum(enum_type: &EnumType, value: &Value) -> Result<Value> {
    let name = match value {
        Value::Enum(name) => name,
        Value::String(name) => name,
        _ => return Err(CouldNotCoerce::new(
            "invalid type, must be an enum member",
        )),
    };
    if enum_type.contains(name) {
        Ok(Value::Enum(name.clone()))
    } else {
        Err(CouldNotCoerce::new(format!(
            "\"{name}\" is not a valid {}", enum_type.name(),
        )))
    }
}

fn coerce_input_object(
    schema: &Schema,
    input_object_type: &InputObjectType,
    value: &Value,
) -> Result<Value> {
    let Value::Object(entries) = value else {
        return Err(CouldNotCoerce::new(
            "invalid type, must be an input object",
        ));
    };
    let mut coerced = indexmap::IndexMap::new();
    for (name, field_value) in entries.iter() {
        let Some(field_def) = input_object_type.fields().get(name) else {
            return Err(CouldNotCoerce::new(format!(
                "no such field \"{name}\" on `{}`", input_object_type.name(),
            )));
        };
        coerced.insert(
            name.clone(),
            coerce(schema, field_def.type_annotation(), field_value)?,
        );
    }
    for (name, field_def) in input_object_type.fields().iter() {
        if field_def.is_required() && !entries.contains_key(name) {
            return Err(CouldNotCoerce::new(format!(
                "missing required field \"{name}\" on `{}`",
                input_object_type.name(),
            )));
        }
    }
    Ok(Value::Object(coerced))
}

fn decode_any_scalar(payload: &serde_json::Value) -> Result<ResultValue> {
    match payload {
        serde_json::Value::Bool(bool) =>
            Ok(ResultValue::Bool(*bool)),
        serde_json::Value::Number(number) =>
            if let Some(int) = number.as_i64() {
                Ok(ResultValue::Int(int))
            } else if let Some(float) = number.as_f64() {
                Ok(ResultValue::Float(float))
            } else {
                Err(CouldNotCoerce::new("unrepresentable number"))
            },
        serde_json::Value::String(str) =>
            Ok(ResultValue::String(str.clone())),
        _ =>
            Err(CouldNotCoerce::new("invalid type, must be a scalar")),
    }
}

fn deref_leaf<'schema>(
    schema: &'schema Schema,
    name: &str,
) -> Result<&'schema GraphQLType> {
    schema.get_type(name).ok_or_else(|| {
        CouldNotCoerce::new(format!("unknown type `{name}`"))
    })
}
