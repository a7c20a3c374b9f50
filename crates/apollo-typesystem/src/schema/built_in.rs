//! Definitions provided by the GraphQL specification itself:
//! the five built-in scalars and the four built-in directives.
//!
//! Built-in scalars are added to a schema's type map when referenced.
//! Built-in directives are seeded into every schema, and an explicit
//! user definition with the same name replaces the implicit one.

use crate::ast::DirectiveLocation;
use crate::ast::Type;
use crate::ast::Value;
use crate::collections::IndexMap;
use crate::name;
use crate::node::FileId;
use crate::node::SourceSpan;
use crate::schema::DefaultValue;
use crate::schema::DirectiveDefinition;
use crate::schema::ExtendedType;
use crate::schema::InputValueDefinition;
use crate::schema::Name;
use crate::schema::ScalarType;
use crate::Node;
use std::sync::LazyLock;

/// The source location of everything built into the type system itself
pub(crate) fn built_in_location() -> SourceSpan {
    SourceSpan::new(FileId::BUILT_IN, 0, 0)
}

pub(crate) fn is_built_in_scalar_name(name: &str) -> bool {
    matches!(name, "Int" | "Float" | "String" | "Boolean" | "ID")
}

pub(crate) fn is_built_in_directive_name(name: &str) -> bool {
    matches!(name, "skip" | "include" | "deprecated" | "specifiedBy")
}

fn scalar(name: Name, description: &str) -> (Name, ExtendedType) {
    let mut def = ScalarType::new(name.clone());
    def.description = Some(description.to_owned());
    (
        name,
        ExtendedType::Scalar(Node::new_parsed(def, built_in_location())),
    )
}

pub(crate) fn scalars() -> &'static IndexMap<Name, ExtendedType> {
    static SCALARS: LazyLock<IndexMap<Name, ExtendedType>> = LazyLock::new(|| {
        IndexMap::from_iter([
            scalar(
                name!("Int"),
                "The `Int` scalar type represents non-fractional signed whole numeric values. \
                 Int can represent values between -(2^31) and 2^31 - 1.",
            ),
            scalar(
                name!("Float"),
                "The `Float` scalar type represents signed double-precision fractional values \
                 as specified by [IEEE 754](https://en.wikipedia.org/wiki/IEEE_floating_point).",
            ),
            scalar(
                name!("String"),
                "The `String` scalar type represents textual data, represented as UTF-8 \
                 character sequences. The String type is most often used by GraphQL to \
                 represent free-form human-readable text.",
            ),
            scalar(
                name!("Boolean"),
                "The `Boolean` scalar type represents `true` or `false`.",
            ),
            scalar(
                name!("ID"),
                "The `ID` scalar type represents a unique identifier, often used to refetch \
                 an object or as key for a cache. The ID type appears in a JSON response as a \
                 String; however, it is not intended to be human-readable.",
            ),
        ])
    });
    &SCALARS
}

fn argument(name: Name, ty: Type, description: &str) -> Node<InputValueDefinition> {
    let mut def = InputValueDefinition::new(name, ty);
    def.description = Some(description.to_owned());
    Node::new_parsed(def, built_in_location())
}

fn directive(
    name: Name,
    description: &str,
    locations: Vec<DirectiveLocation>,
    arguments: Vec<Node<InputValueDefinition>>,
) -> (Name, Node<DirectiveDefinition>) {
    let mut def = DirectiveDefinition::new(name.clone());
    def.description = Some(description.to_owned());
    def.locations = locations;
    def.arguments = arguments;
    (name, Node::new_parsed(def, built_in_location()))
}

pub(crate) fn directives() -> &'static IndexMap<Name, Node<DirectiveDefinition>> {
    static DIRECTIVES: LazyLock<IndexMap<Name, Node<DirectiveDefinition>>> = LazyLock::new(|| {
        IndexMap::from_iter([
            directive(
                name!("skip"),
                "Directs the executor to skip this field or fragment when the `if` argument is true.",
                vec![
                    DirectiveLocation::Field,
                    DirectiveLocation::FragmentSpread,
                    DirectiveLocation::InlineFragment,
                ],
                vec![argument(
                    name!("if"),
                    Type::new_named(name!("Boolean")).non_null(),
                    "Skipped when true.",
                )],
            ),
            directive(
                name!("include"),
                "Directs the executor to include this field or fragment only when the `if` argument is true.",
                vec![
                    DirectiveLocation::Field,
                    DirectiveLocation::FragmentSpread,
                    DirectiveLocation::InlineFragment,
                ],
                vec![argument(
                    name!("if"),
                    Type::new_named(name!("Boolean")).non_null(),
                    "Included when true.",
                )],
            ),
            directive(
                name!("deprecated"),
                "Marks an element of a GraphQL schema as no longer supported.",
                vec![
                    DirectiveLocation::FieldDefinition,
                    DirectiveLocation::ArgumentDefinition,
                    DirectiveLocation::InputFieldDefinition,
                    DirectiveLocation::EnumValue,
                ],
                vec![{
                    let mut reason = argument(
                        name!("reason"),
                        Type::new_named(name!("String")),
                        "Explains why this element was deprecated, usually also including a \
                         suggestion for how to access supported similar data. Formatted using \
                         the Markdown syntax, as specified by \
                         [CommonMark](https://commonmark.org/).",
                    );
                    reason.make_mut().default_value = Some(DefaultValue::Literal(Node::new(
                        Value::String("No longer supported".to_owned()),
                    )));
                    reason
                }],
            ),
            directive(
                name!("specifiedBy"),
                "Exposes a URL that specifies the behavior of this scalar.",
                vec![DirectiveLocation::Scalar],
                vec![argument(
                    name!("url"),
                    Type::new_named(name!("String")).non_null(),
                    "The URL that specifies the behavior of this scalar.",
                )],
            ),
        ])
    });
    &DIRECTIVES
}
