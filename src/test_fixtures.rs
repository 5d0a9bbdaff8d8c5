//! Shared example schema used across test modules: a small menagerie with
//! an interface, a union, an enum, a custom scalar, and argument-taking
//! fields.

use crate::schema::Schema;
use crate::types::EnumType;
use crate::types::FieldDefinition;
use crate::types::InputValueDefinition;
use crate::types::InterfaceType;
use crate::types::ObjectType;
use crate::types::ScalarType;
use crate::types::TypeAnnotation;
use crate::types::UnionType;

fn named(name: &str) -> TypeAnnotation {
    TypeAnnotation::named(name)
}

fn nullable(inner: TypeAnnotation) -> TypeAnnotation {
    TypeAnnotation::nullable(inner)
}

pub(crate) fn example_schema() -> Schema {
    Schema::builder()
        .enum_type(
            EnumType::builder("Command")
                .variant("SIT")
                .variant("DOWN")
                .build(),
        )
        .scalar_type(ScalarType::with_description(
            "MyDateTime",
            "a datetime string",
        ))
        .interface_type(
            InterfaceType::builder("Sentient")
                .field(
                    FieldDefinition::builder("name", named("String")).build(),
                )
                .build(),
        )
        .object_type(
            ObjectType::builder("Hobby")
                .field(
                    FieldDefinition::builder("name", named("String")).build(),
                )
                .field(
                    FieldDefinition::builder("cool_factor", named("Int"))
                        .build(),
                )
                .build(),
        )
        .object_type(
            ObjectType::builder("Human")
                .interface("Sentient")
                .field(
                    FieldDefinition::builder("name", named("String")).build(),
                )
                .field(
                    FieldDefinition::builder(
                        "hobbies",
                        nullable(TypeAnnotation::list(nullable(named("Hobby")))),
                    ).build(),
                )
                .field(
                    FieldDefinition::builder(
                        "best_friend",
                        nullable(named("Person")),
                    ).build(),
                )
                .build(),
        )
        .object_type(
            ObjectType::builder("Alien")
                .interface("Sentient")
                .field(
                    FieldDefinition::builder("name", named("String")).build(),
                )
                .field(
                    FieldDefinition::builder(
                        "home_planet",
                        nullable(named("String")),
                    ).build(),
                )
                .build(),
        )
        .object_type(
            ObjectType::builder("Dog")
                .description("An example type")
                .interface("Sentient")
                .field(
                    FieldDefinition::builder("name", named("String")).build(),
                )
                .field(
                    FieldDefinition::builder(
                        "is_housetrained",
                        named("Boolean"),
                    )
                    .argument(InputValueDefinition::new(
                        "at_other_homes",
                        nullable(named("Boolean")),
                    ))
                    .build(),
                )
                .field(
                    FieldDefinition::builder("bark_volume", named("Int"))
                        .build(),
                )
                .field(
                    FieldDefinition::builder("knows_command", named("Boolean"))
                        .argument(
                            InputValueDefinition::new(
                                "command",
                                named("Command"),
                            ).described("the command"),
                        )
                        .build(),
                )
                .field(
                    FieldDefinition::builder("owner", nullable(named("Human")))
                        .build(),
                )
                .field(
                    FieldDefinition::builder(
                        "best_friend",
                        nullable(named("Sentient")),
                    ).build(),
                )
                .field(
                    FieldDefinition::builder("age", named("Int"))
                        .argument(InputValueDefinition::new(
                            "on_date",
                            nullable(named("MyDateTime")),
                        ))
                        .build(),
                )
                .build(),
        )
        .union_type(
            UnionType::builder("Person")
                .member("Human")
                .member("Alien")
                .build(),
        )
        .object_type(
            ObjectType::builder("Query")
                .field(
                    FieldDefinition::builder("dog", named("Dog")).build(),
                )
                .build(),
        )
        .build()
        .expect("example schema binds")
}
