//! Typed GraphQL selection building, validation, and response loading.
//!
//! `quell` works against a bound, immutable [`Schema`] registry: clients
//! compose an ordered [`SelectionSet`] of [`Field`]s programmatically,
//! [`validate()`] checks the selection against the registry (field
//! existence, argument names and types, nested-selection legality) with
//! path-annotated errors, [`Operation`] serializes a validated selection as
//! wire query text, and [`response::load()`] decodes a JSON response
//! payload back into a typed, read-only result tree.
//!
//! ```
//! use quell::types::{FieldDefinition, ObjectType, TypeAnnotation};
//! use quell::{Field, Schema, SelectionSet, validate};
//!
//! let schema = Schema::builder()
//!     .object_type(
//!         ObjectType::builder("Query")
//!             .field(
//!                 FieldDefinition::builder(
//!                     "greeting",
//!                     TypeAnnotation::named("String"),
//!                 ).build(),
//!             )
//!             .build(),
//!     )
//!     .build()
//!     .unwrap();
//!
//! let selection = SelectionSet::new().field(Field::new("greeting"));
//! assert!(validate(&schema, schema.query_type(), &selection).is_ok());
//! ```

pub mod coerce;
mod operation;
pub mod response;
mod schema;
mod selection;
pub mod types;
mod value;

pub use coerce::CouldNotCoerce;
pub use operation::Operation;
pub use operation::OperationKind;
pub use operation::query;
pub use response::ErrorResponse;
pub use response::LoadError;
pub use response::NoValueForField;
pub use response::Response;
pub use response::ResultObject;
pub use response::ResultValue;
pub use schema::Schema;
pub use schema::SchemaBuildError;
pub use schema::SchemaBuilder;
pub use selection::Field;
pub use selection::SelectionError;
pub use selection::SelectionSet;
pub use selection::ValidationError;
pub use selection::validate;
pub use value::Value;

#[cfg(test)]
pub(crate) mod test_fixtures;
