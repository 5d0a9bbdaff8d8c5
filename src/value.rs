use indexmap::IndexMap;

/// A program-level GraphQL input value.
///
/// These are the values supplied as field arguments when composing a
/// [`SelectionSet`](crate::SelectionSet). They are held uncoerced on the
/// selection until [`validate()`](crate::validate) checks them against the
/// declared argument types, and they render themselves as wire literals when
/// an [`Operation`](crate::Operation) is serialized.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Bool(bool),
    Enum(String),
    Float(f64),
    Int(i64),
    List(Vec<Value>),
    Null,
    Object(IndexMap<String, Value>),
    String(String),
}
impl Value {
    /// Construct a [`Value::Enum`] from a bare member name.
    pub fn enum_member(name: impl Into<String>) -> Self {
        Self::Enum(name.into())
    }

    /// Construct a [`Value::Object`] from name/value pairs. Entry order is
    /// preserved and determines wire emission order.
    pub fn object(
        fields: impl IntoIterator<Item = (impl Into<String>, Value)>,
    ) -> Self {
        Self::Object(
            fields.into_iter()
                .map(|(name, value)| (name.into(), value))
                .collect(),
        )
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

    /// Render this value as a GraphQL wire literal.
    ///
    /// Strings are double-quoted with quote, backslash, and control
    /// characters escaped; enum members are emitted as bare names; object
    /// entries are emitted whitespace-separated in the order they were
    /// supplied at construction.
    pub fn to_wire_string(&self) -> String {
        match self {
            Self::Bool(value) =>
                if *value { "true".to_string() } else { "false".to_string() },

            Self::Enum(name) =>
                name.clone(),

            Self::Float(value) =>
                format_float(*value),

            Self::Int(value) =>
                value.to_string(),

            Self::List(items) =>
                format!("[{}]", items.iter()
                    .map(Value::to_wire_string)
                    .collect::<Vec<_>>()
                    .join(", ")),

            Self::Null =>
                "null".to_string(),

            Self::Object(entries) =>
                format!("{{{}}}", entries.iter()
                    .map(|(name, value)| format!(
                        "{}: {}", name, value.to_wire_string(),
                    ))
                    .collect::<Vec<_>>()
                    .join(" ")),

            Self::String(value) =>
                format!("\"{}\"", escape_string(value)),
        }
    }
}

impl std::convert::From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}
impl std::convert::From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}
impl std::convert::From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Int(value.into())
    }
}
impl std::convert::From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}
impl std::convert::From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}
impl std::convert::From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}
impl<T: Into<Value>> std::convert::From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}

/// Escape a string for emission inside a double-quoted wire literal.
pub(crate) fn escape_string(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for chr in value.chars() {
        match chr {
            '"' => escaped.push_str("\\\""),
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            chr if (chr as u32) < 0x20 => {
                escaped.push_str(&format!("\\u{:04x}", chr as u32));
            },
            chr => escaped.push(chr),
        }
    }
    escaped
}

// Float literals must remain recognizable as floats on the wire, so
// integral values are rendered with a trailing ".0".
fn format_float(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}
