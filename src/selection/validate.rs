use crate::schema::Schema;
use crate::selection::Field;
use crate::selection::SelectionError;
use crate::selection::SelectionSet;
use crate::selection::ValidationError;
use crate::types::GraphQLType;
use crate::types::InputValueDefinition;
use crate::value::Value;
use indexmap::IndexMap;

type Result<'a> = std::result::Result<&'a SelectionSet, SelectionError>;

/// Validate a selection set against a field-bearing type.
///
/// Fields are checked in order. The first failing field aborts validation
/// and is reported as a [`SelectionError`] wrapping the inner failure with
/// the type and field name at which it occurred; sibling fields after the
/// failure are not examined. (Within a single field the argument
/// name-existence checks do materialize the full extra/missing sets before
/// reporting one member — that asymmetry is part of the contract.)
///
/// On success the input selection is returned unchanged: validation never
/// transforms the tree.
pub fn validate<'a>(
    schema: &Schema,
    graphql_type: &GraphQLType,
    selection_set: &'a SelectionSet,
) -> Result<'a> {
    log::trace!(
        "validating {num_fields} field(s) against `{type_name}`",
        num_fields = selection_set.len(),
        type_name = graphql_type.name(),
    );
    for field in selection_set.iter() {
        validate_field(schema, graphql_type, field).map_err(|error| {
            SelectionError::new(graphql_type.name(), field.name(), error)
        })?;
    }
    Ok(selection_set)
}

fn validate_field(
    schema: &Schema,
    parent_type: &GraphQLType,
    field: &Field,
) -> std::result::Result<(), ValidationError> {
    let field_def = parent_type.fields()
        .and_then(|fields| fields.get(field.name()))
        .ok_or(ValidationError::NoSuchField)?;

    check_arguments(schema, field_def.arguments(), field.arguments())?;

    if let Some(sub_selection) = field.selection_set() {
        let leaf_name = field_def.type_annotation().innermost_named();
        let leaf_type = schema.get_type(leaf_name)
            .expect("type is present in schema");
        if !leaf_type.is_field_bearing() {
            return Err(ValidationError::SelectionsNotSupported);
        }
        validate(schema, leaf_type, sub_selection)?;
    }

    Ok(())
}

fn check_arguments(
    schema: &Schema,
    declared: &IndexMap<String, InputValueDefinition>,
    supplied: &IndexMap<String, Value>,
) -> std::result::Result<(), ValidationError> {
    // The full set of undeclared names is materialized before one is
    // reported; which member gets reported is implementation-defined.
    let mut extra_names: Vec<&String> = supplied.keys()
        .filter(|name| !declared.contains_key(*name))
        .collect();
    if let Some(name) = extra_names.pop() {
        return Err(ValidationError::NoSuchArgument { name: name.clone() });
    }

    let mut missing_names: Vec<&String> = declared.iter()
        .filter(|(name, def)| {
            def.is_required() && !supplied.contains_key(*name)
        })
        .map(|(name, _def)| name)
        .collect();
    if let Some(name) = missing_names.pop() {
        return Err(ValidationError::MissingArgument { name: name.clone() });
    }

    for (name, def) in declared.iter() {
        // Arguments of nullable type may be omitted.
        let Some(value) = supplied.get(name) else {
            continue;
        };
        if !def.type_annotation().satisfies(schema, value) {
            return Err(ValidationError::InvalidArgumentType {
                name: name.clone(),
                value: value.clone(),
            });
        }
    }

    Ok(())
}
