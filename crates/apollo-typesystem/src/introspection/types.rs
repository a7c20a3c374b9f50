//! The introspection meta-schema: type definitions whose shape is frozen by
//! the GraphQL specification and added to every schema's type map.

use crate::ast::Type;
use crate::ast::Value;
use crate::collections::IndexMap;
use crate::name;
use crate::schema::built_in::built_in_location;
use crate::schema::DefaultValue;
use crate::schema::EnumType;
use crate::schema::EnumValueDefinition;
use crate::schema::ExtendedType;
use crate::schema::FieldDefinition;
use crate::schema::InputValueDefinition;
use crate::schema::Name;
use crate::schema::ObjectType;
use crate::Node;
use std::sync::LazyLock;

fn field(name: Name, ty: Type) -> (Name, Node<FieldDefinition>) {
    (
        name.clone(),
        Node::new_parsed(FieldDefinition::new(name, ty), built_in_location()),
    )
}

/// A field taking `includeDeprecated: Boolean = false`
fn deprecatable_field(name: Name, ty: Type) -> (Name, Node<FieldDefinition>) {
    let mut def = FieldDefinition::new(name.clone(), ty);
    let mut include_deprecated = InputValueDefinition::new(
        name!("includeDeprecated"),
        Type::new_named(name!("Boolean")),
    );
    include_deprecated.default_value =
        Some(DefaultValue::Literal(Node::new(Value::Boolean(false))));
    def.arguments
        .push(Node::new_parsed(include_deprecated, built_in_location()));
    (name, Node::new_parsed(def, built_in_location()))
}

fn object(
    name: Name,
    description: &str,
    fields: impl IntoIterator<Item = (Name, Node<FieldDefinition>)>,
) -> (Name, ExtendedType) {
    let mut def = ObjectType::new(name.clone());
    def.description = Some(description.to_owned());
    def.fields = fields.into_iter().collect();
    (
        name,
        ExtendedType::Object(Node::new_parsed(def, built_in_location())),
    )
}

fn enum_(
    name: Name,
    description: &str,
    values: impl IntoIterator<Item = Name>,
) -> (Name, ExtendedType) {
    let mut def = EnumType::new(name.clone());
    def.description = Some(description.to_owned());
    def.values = values
        .into_iter()
        .map(|value| {
            (
                value.clone(),
                Node::new_parsed(EnumValueDefinition::new(value), built_in_location()),
            )
        })
        .collect();
    (
        name,
        ExtendedType::Enum(Node::new_parsed(def, built_in_location())),
    )
}

fn named(name: Name) -> Type {
    Type::new_named(name)
}

pub(crate) fn introspection_types() -> &'static IndexMap<Name, ExtendedType> {
    static TYPES: LazyLock<IndexMap<Name, ExtendedType>> = LazyLock::new(|| {
        IndexMap::from_iter([
            object(
                name!("__Schema"),
                "A GraphQL Schema defines the capabilities of a GraphQL server. It exposes \
                 all available types and directives on the server, as well as the entry \
                 points for query, mutation, and subscription operations.",
                [
                    field(name!("description"), named(name!("String"))),
                    field(
                        name!("types"),
                        named(name!("__Type")).non_null().list().non_null(),
                    ),
                    field(name!("queryType"), named(name!("__Type")).non_null()),
                    field(name!("mutationType"), named(name!("__Type"))),
                    field(name!("subscriptionType"), named(name!("__Type"))),
                    field(
                        name!("directives"),
                        named(name!("__Directive")).non_null().list().non_null(),
                    ),
                ],
            ),
            object(
                name!("__Type"),
                "The fundamental unit of any GraphQL Schema is the type. There are many \
                 kinds of types in GraphQL as represented by the `__TypeKind` enum.\n\n\
                 Depending on the kind of a type, certain fields describe information about \
                 that type. Scalar types provide no information beyond a name, description \
                 and optional `specifiedByURL`, while Enum types provide their values. \
                 Object and Interface types provide the fields they describe. Abstract \
                 types, Union and Interface, provide the Object types possible at runtime. \
                 List and NonNull types compose other types.",
                [
                    field(name!("kind"), named(name!("__TypeKind")).non_null()),
                    field(name!("name"), named(name!("String"))),
                    field(name!("description"), named(name!("String"))),
                    field(name!("specifiedByURL"), named(name!("String"))),
                    deprecatable_field(
                        name!("fields"),
                        named(name!("__Field")).non_null().list(),
                    ),
                    field(name!("interfaces"), named(name!("__Type")).non_null().list()),
                    field(
                        name!("possibleTypes"),
                        named(name!("__Type")).non_null().list(),
                    ),
                    deprecatable_field(
                        name!("enumValues"),
                        named(name!("__EnumValue")).non_null().list(),
                    ),
                    deprecatable_field(
                        name!("inputFields"),
                        named(name!("__InputValue")).non_null().list(),
                    ),
                    field(name!("ofType"), named(name!("__Type"))),
                ],
            ),
            object(
                name!("__Field"),
                "Object and Interface types are described by a list of Fields, each of \
                 which has a name, potentially a list of arguments, and a return type.",
                [
                    field(name!("name"), named(name!("String")).non_null()),
                    field(name!("description"), named(name!("String"))),
                    deprecatable_field(
                        name!("args"),
                        named(name!("__InputValue")).non_null().list().non_null(),
                    ),
                    field(name!("type"), named(name!("__Type")).non_null()),
                    field(name!("isDeprecated"), named(name!("Boolean")).non_null()),
                    field(name!("deprecationReason"), named(name!("String"))),
                ],
            ),
            object(
                name!("__InputValue"),
                "Arguments provided to Fields or Directives and the input fields of an \
                 InputObject are represented as Input Values which describe their type and \
                 optionally a default value.",
                [
                    field(name!("name"), named(name!("String")).non_null()),
                    field(name!("description"), named(name!("String"))),
                    field(name!("type"), named(name!("__Type")).non_null()),
                    field(name!("defaultValue"), named(name!("String"))),
                    field(name!("isDeprecated"), named(name!("Boolean")).non_null()),
                    field(name!("deprecationReason"), named(name!("String"))),
                ],
            ),
            object(
                name!("__EnumValue"),
                "One possible value for a given Enum. Enum values are unique values, not a \
                 placeholder for a string or numeric value. However an Enum value is \
                 returned in a JSON response as a string.",
                [
                    field(name!("name"), named(name!("String")).non_null()),
                    field(name!("description"), named(name!("String"))),
                    field(name!("isDeprecated"), named(name!("Boolean")).non_null()),
                    field(name!("deprecationReason"), named(name!("String"))),
                ],
            ),
            object(
                name!("__Directive"),
                "A Directive provides a way to describe alternate runtime execution and \
                 type validation behavior in a GraphQL document.\n\nIn some cases, you need \
                 to provide options to alter GraphQL's execution behavior in ways field \
                 arguments will not suffice, such as conditionally including or skipping a \
                 field. Directives provide this by describing additional information to the \
                 executor.",
                [
                    field(name!("name"), named(name!("String")).non_null()),
                    field(name!("description"), named(name!("String"))),
                    field(name!("isRepeatable"), named(name!("Boolean")).non_null()),
                    field(
                        name!("locations"),
                        named(name!("__DirectiveLocation"))
                            .non_null()
                            .list()
                            .non_null(),
                    ),
                    deprecatable_field(
                        name!("args"),
                        named(name!("__InputValue")).non_null().list().non_null(),
                    ),
                ],
            ),
            enum_(
                name!("__TypeKind"),
                "An enum describing what kind of type a given `__Type` is.",
                [
                    name!("SCALAR"),
                    name!("OBJECT"),
                    name!("INTERFACE"),
                    name!("UNION"),
                    name!("ENUM"),
                    name!("INPUT_OBJECT"),
                    name!("LIST"),
                    name!("NON_NULL"),
                ],
            ),
            enum_(
                name!("__DirectiveLocation"),
                "A Directive can be adjacent to many parts of the GraphQL language, a \
                 __DirectiveLocation describes one such possible adjacencies.",
                crate::ast::DirectiveLocation::ALL
                    .iter()
                    .map(|location| Name::new_static_unchecked(location.name())),
            ),
        ])
    });
    &TYPES
}
