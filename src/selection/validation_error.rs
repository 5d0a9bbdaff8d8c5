use crate::value::Value;
use thiserror::Error;

/// A typed validation outcome for one field of a selection.
///
/// Validation failures are always reported as structured values to the
/// caller, never silently defaulted.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ValidationError {
    /// A value could not be converted to its target representation.
    #[error("could not coerce value: {reason}")]
    CouldNotCoerce {
        reason: String,
    },

    /// A supplied argument value fails the declared type's instance
    /// predicate.
    #[error("invalid value {value:?} for argument \"{name}\"")]
    InvalidArgumentType {
        name: String,
        value: Value,
    },

    /// A required (non-nullable) argument was omitted.
    #[error("argument \"{name}\" missing (required)")]
    MissingArgument {
        name: String,
    },

    /// The selection supplies an argument name absent from the field's
    /// declaration.
    #[error("argument \"{name}\" does not exist")]
    NoSuchArgument {
        name: String,
    },

    /// The selection references a field absent from the type's registry.
    #[error("field does not exist")]
    NoSuchField,

    /// A nested selection failed; see the wrapped [`SelectionError`] for
    /// the path.
    #[error(transparent)]
    Selection(Box<SelectionError>),

    /// A nested selection is attached to a field whose (unwrapped) result
    /// type has no fields.
    #[error("selections not supported on this type")]
    SelectionsNotSupported,
}

/// Wraps a [`ValidationError`] with the type and field name at which it
/// occurred. Nested selection failures wrap recursively, so the path from
/// the validation root down to the offending field can be reconstructed by
/// un-nesting.
#[derive(Clone, Debug, Error, PartialEq)]
#[error("selection error on `{type_name}.{field_name}`: {error}")]
pub struct SelectionError {
    pub error: ValidationError,
    pub field_name: String,
    pub type_name: String,
}
impl SelectionError {
    pub fn new(
        type_name: impl Into<String>,
        field_name: impl Into<String>,
        error: ValidationError,
    ) -> Self {
        Self {
            error,
            field_name: field_name.into(),
            type_name: type_name.into(),
        }
    }

    /// The innermost non-[`Selection`](ValidationError::Selection) error.
    pub fn cause(&self) -> &ValidationError {
        match &self.error {
            ValidationError::Selection(inner) => inner.cause(),
            other => other,
        }
    }

    /// The field names from the validation root down to the field at which
    /// the innermost error occurred.
    pub fn path(&self) -> Vec<&str> {
        let mut path = vec![self.field_name.as_str()];
        let mut error = &self.error;
        while let ValidationError::Selection(inner) = error {
            path.push(inner.field_name.as_str());
            error = &inner.error;
        }
        path
    }
}
impl std::convert::From<SelectionError> for ValidationError {
    fn from(error: SelectionError) -> Self {
        Self::Selection(Box::new(error))
    }
}
