mod field;
mod selection_set;
mod validate;
mod validation_error;

pub use field::Field;
pub use selection_set::SelectionSet;
pub use validate::validate;
pub use validation_error::SelectionError;
pub use validation_error::ValidationError;

#[cfg(test)]
mod tests;
