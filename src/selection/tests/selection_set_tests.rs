use crate::selection::Field;
use crate::selection::SelectionSet;
use crate::value::Value;

#[test]
fn composition_is_persistent() {
    let base = SelectionSet::new().field(Field::new("name"));
    let extended = base.field(Field::new("bark_volume"));

    // The receiver is untouched; the two values can evolve independently.
    assert_eq!(base.len(), 1);
    assert_eq!(extended.len(), 2);

    let other = base.field(Field::new("is_housetrained"));
    assert_eq!(base.len(), 1);
    assert_eq!(
        other.fields().last().map(Field::name),
        Some("is_housetrained"),
    );
}

#[test]
fn field_composers_return_copies() {
    let plain = Field::new("age");
    let with_argument = plain.with_argument("on_date", "2026-01-01");
    let aliased = with_argument.with_alias("age_then");

    assert!(plain.arguments().is_empty());
    assert!(plain.alias().is_none());
    assert_eq!(
        with_argument.arguments().get("on_date"),
        Some(&Value::from("2026-01-01")),
    );
    assert!(with_argument.alias().is_none());
    assert_eq!(aliased.alias(), Some("age_then"));
}

#[test]
fn selected_name_prefers_the_alias() {
    let field = Field::new("name");
    assert_eq!(field.selected_name(), "name");
    assert_eq!(field.with_alias("nickname").selected_name(), "nickname");
}

#[test]
fn field_order_is_preserved() {
    let selection: SelectionSet = vec![
        Field::new("b"),
        Field::new("a"),
        Field::new("c"),
    ].into();
    let names: Vec<&str> = selection.iter().map(Field::name).collect();
    assert_eq!(names, vec!["b", "a", "c"]);
}

#[test]
fn argument_order_follows_supply_order() {
    let field = Field::new("thing")
        .with_argument("second", 2)
        .with_argument("first", 1);
    let names: Vec<&String> = field.arguments().keys().collect();
    assert_eq!(names, vec!["second", "first"]);
}
