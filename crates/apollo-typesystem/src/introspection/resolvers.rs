//! One [`Resolver`] per introspection meta-type, reading directly
//! from the [`Schema`].

use crate::coercion;
use crate::introspection::resolver::impl_resolver;
use crate::introspection::resolver::ResolvedValue;
use crate::schema;
use crate::schema::DefaultValue;
use crate::schema::ExtendedType;
use crate::values::JsonMap;
use crate::values::JsonValue;
use crate::Schema;
use std::borrow::Cow;

pub(super) struct SchemaResolver<'a> {
    pub(super) schema: &'a Schema,
}

pub(super) struct TypeDefResolver<'a> {
    pub(super) schema: &'a Schema,
    pub(super) name: &'a str,
    pub(super) def: &'a ExtendedType,
}

/// Only used for non-null and list types. `TypeDefResolver` is used for
/// everything else.
struct TypeResolver<'a> {
    schema: &'a Schema,
    ty: Cow<'a, schema::Type>,
}

struct DirectiveResolver<'a> {
    schema: &'a Schema,
    def: &'a schema::DirectiveDefinition,
}

struct FieldResolver<'a> {
    schema: &'a Schema,
    def: &'a schema::FieldDefinition,
}

struct EnumValueResolver<'a> {
    def: &'a schema::EnumValueDefinition,
}

struct InputValueResolver<'a> {
    schema: &'a Schema,
    def: &'a schema::InputValueDefinition,
}

pub(super) fn type_def<'a>(schema: &'a Schema, name: impl AsRef<str>) -> ResolvedValue<'a> {
    ResolvedValue::opt_object(
        schema
            .types
            .get_key_value(name.as_ref())
            .map(|(name, def)| TypeDefResolver {
                schema,
                name: name.as_str(),
                def,
            }),
    )
}

fn type_def_opt<'a>(schema: &'a Schema, name: &Option<impl AsRef<str>>) -> ResolvedValue<'a> {
    if let Some(name) = name.as_ref() {
        type_def(schema, name)
    } else {
        ResolvedValue::null()
    }
}

fn ty<'a>(schema: &'a Schema, ty: &'a schema::Type) -> ResolvedValue<'a> {
    if let schema::Type::Named(name) = ty {
        type_def(schema, name)
    } else {
        ResolvedValue::object(TypeResolver {
            schema,
            ty: Cow::Borrowed(ty),
        })
    }
}

/// Although it should be non-null, the `includeDeprecated: Boolean = false`
/// argument may be absent
fn include_deprecated(args: &JsonMap) -> bool {
    matches!(args.get("includeDeprecated"), Some(JsonValue::Bool(true)))
}

impl_resolver! {
    for SchemaResolver<'_>:

    __typename = "__Schema";

    fn description(&self_) {
        Ok(ResolvedValue::leaf(self_.schema.description.as_deref()))
    }

    fn types(&self_) {
        Ok(ResolvedValue::list(self_.schema.types.iter().map(|(name, def)| {
            ResolvedValue::object(TypeDefResolver { schema: self_.schema, name: name.as_str(), def })
        })))
    }

    fn directives(&self_) {
        Ok(ResolvedValue::list(self_.schema.directive_definitions.values().map(|def| {
            ResolvedValue::object(DirectiveResolver { schema: self_.schema, def })
        })))
    }

    fn queryType(&self_) {
        Ok(type_def_opt(self_.schema, &self_.schema.query_type))
    }

    fn mutationType(&self_) {
        Ok(type_def_opt(self_.schema, &self_.schema.mutation_type))
    }

    fn subscriptionType(&self_) {
        Ok(type_def_opt(self_.schema, &self_.schema.subscription_type))
    }
}

impl_resolver! {
    for TypeDefResolver<'_>:

    __typename = "__Type";

    fn kind(&self_) {
        Ok(ResolvedValue::leaf(match self_.def {
            ExtendedType::Scalar(_) => "SCALAR",
            ExtendedType::Object(_) => "OBJECT",
            ExtendedType::Interface(_) => "INTERFACE",
            ExtendedType::Union(_) => "UNION",
            ExtendedType::Enum(_) => "ENUM",
            ExtendedType::InputObject(_) => "INPUT_OBJECT",
        }))
    }

    fn name(&self_) {
        Ok(ResolvedValue::leaf(self_.name))
    }

    fn description(&self_) {
        Ok(ResolvedValue::leaf(self_.def.description()))
    }

    fn specifiedByURL(&self_) {
        let ExtendedType::Scalar(def) = self_.def else {
            return Ok(ResolvedValue::null());
        };
        Ok(ResolvedValue::leaf(def.specified_by_url.as_deref()))
    }

    fn fields(&self_, args) {
        let fields = match self_.def {
            ExtendedType::Object(def) => &def.fields,
            ExtendedType::Interface(def) => &def.fields,
            ExtendedType::Scalar(_) |
            ExtendedType::Union(_) |
            ExtendedType::Enum(_) |
            ExtendedType::InputObject(_) => return Ok(ResolvedValue::null()),
        };
        let include_deprecated = include_deprecated(args);
        Ok(ResolvedValue::list(fields
            .values()
            .filter(move |def| {
                include_deprecated || def.deprecation_reason.is_none()
            })
            .map(|def| {
                ResolvedValue::object(FieldResolver { schema: self_.schema, def })
            })
        ))
    }

    fn interfaces(&self_) {
        let implements_interfaces = match self_.def {
            ExtendedType::Object(def) => &def.implements_interfaces,
            ExtendedType::Interface(def) => &def.implements_interfaces,
            ExtendedType::Scalar(_) |
            ExtendedType::Union(_) |
            ExtendedType::Enum(_) |
            ExtendedType::InputObject(_) => return Ok(ResolvedValue::null()),
        };
        Ok(ResolvedValue::list(implements_interfaces.iter().filter_map(|name| {
            self_.schema.types.get(name.as_str()).map(|def| {
                ResolvedValue::object(TypeDefResolver { schema: self_.schema, name: name.as_str(), def })
            })
        })))
    }

    fn possibleTypes(&self_) {
        if !self_.def.is_abstract_type() {
            return Ok(ResolvedValue::null());
        }
        Ok(ResolvedValue::list(
            self_
                .schema
                .possible_types(self_.name)
                .into_iter()
                .filter_map(|name| {
                    self_.schema.types.get(name.as_str()).map(|def| {
                        ResolvedValue::object(TypeDefResolver {
                            schema: self_.schema,
                            name: name.as_str(),
                            def,
                        })
                    })
                }),
        ))
    }

    fn enumValues(&self_, args) {
        let ExtendedType::Enum(def) = self_.def else {
            return Ok(ResolvedValue::null());
        };
        let include_deprecated = include_deprecated(args);
        Ok(ResolvedValue::list(def
            .values
            .values()
            .filter(move |def| {
                include_deprecated || def.deprecation_reason.is_none()
            })
            .map(|def| {
                ResolvedValue::object(EnumValueResolver { def })
            })
        ))
    }

    fn inputFields(&self_, args) {
        let ExtendedType::InputObject(def) = self_.def else {
            return Ok(ResolvedValue::null());
        };
        let include_deprecated = include_deprecated(args);
        Ok(ResolvedValue::list(def
            .fields
            .values()
            .filter(move |def| {
                include_deprecated || def.deprecation_reason.is_none()
            })
            .map(|def| {
                ResolvedValue::object(InputValueResolver { schema: self_.schema, def })
            })
        ))
    }

    fn ofType() {
        Ok(ResolvedValue::null())
    }
}

// Only used for non-null and list types
impl_resolver! {
    for TypeResolver<'_>:

    __typename = "__Type";

    fn kind(&self_) {
        Ok(ResolvedValue::leaf(match &*self_.ty {
            schema::Type::Named(_) => unreachable!(),
            schema::Type::List(_) => "LIST",
            schema::Type::NonNullNamed(_) |
            schema::Type::NonNullList(_) => "NON_NULL",
        }))
    }

    fn ofType(&self_) {
        Ok(match &*self_.ty {
            schema::Type::Named(_) => unreachable!(),
            schema::Type::List(inner) => ty(self_.schema, inner),
            schema::Type::NonNullNamed(inner) => type_def(self_.schema, inner),
            schema::Type::NonNullList(inner) => ResolvedValue::object(Self {
                schema: self_.schema,
                ty: Cow::Owned(schema::Type::List(inner.clone()))
            }),
        })
    }

    fn name() { Ok(ResolvedValue::null()) }
    fn description() { Ok(ResolvedValue::null()) }
    fn specifiedByURL() { Ok(ResolvedValue::null()) }
    fn fields() { Ok(ResolvedValue::null()) }
    fn interfaces() { Ok(ResolvedValue::null()) }
    fn possibleTypes() { Ok(ResolvedValue::null()) }
    fn enumValues() { Ok(ResolvedValue::null()) }
    fn inputFields() { Ok(ResolvedValue::null()) }
}

impl_resolver! {
    for DirectiveResolver<'_>:

    __typename = "__Directive";

    fn name(&self_) {
        Ok(ResolvedValue::leaf(self_.def.name.as_str()))
    }

    fn description(&self_) {
        Ok(ResolvedValue::leaf(self_.def.description.as_deref()))
    }

    fn isRepeatable(&self_) {
        Ok(ResolvedValue::leaf(self_.def.repeatable))
    }

    fn locations(&self_) {
        Ok(ResolvedValue::list(self_.def.locations.iter().map(|location| {
            ResolvedValue::leaf(location.name())
        })))
    }

    fn args(&self_, args) {
        let include_deprecated = include_deprecated(args);
        Ok(ResolvedValue::list(self_
            .def
            .arguments
            .iter()
            .filter(move |def| {
                include_deprecated || def.deprecation_reason.is_none()
            })
            .map(|def| {
                ResolvedValue::object(InputValueResolver { schema: self_.schema, def })
            })
        ))
    }
}

impl_resolver! {
    for FieldResolver<'_>:

    __typename = "__Field";

    fn name(&self_) {
        Ok(ResolvedValue::leaf(self_.def.name.as_str()))
    }

    fn description(&self_) {
        Ok(ResolvedValue::leaf(self_.def.description.as_deref()))
    }

    fn args(&self_, args) {
        let include_deprecated = include_deprecated(args);
        Ok(ResolvedValue::list(self_
            .def
            .arguments
            .iter()
            .filter(move |def| {
                include_deprecated || def.deprecation_reason.is_none()
            })
            .map(|def| {
                ResolvedValue::object(InputValueResolver { schema: self_.schema, def })
            })
        ))
    }

    fn type(&self_) {
        Ok(ty(self_.schema, &self_.def.ty))
    }

    fn isDeprecated(&self_) {
        Ok(ResolvedValue::leaf(self_.def.deprecation_reason.is_some()))
    }

    fn deprecationReason(&self_) {
        Ok(ResolvedValue::leaf(self_.def.deprecation_reason.as_deref()))
    }
}

impl_resolver! {
    for EnumValueResolver<'_>:

    __typename = "__EnumValue";

    fn name(&self_) {
        Ok(ResolvedValue::leaf(self_.def.value.as_str()))
    }

    fn description(&self_) {
        Ok(ResolvedValue::leaf(self_.def.description.as_deref()))
    }

    fn isDeprecated(&self_) {
        Ok(ResolvedValue::leaf(self_.def.deprecation_reason.is_some()))
    }

    fn deprecationReason(&self_) {
        Ok(ResolvedValue::leaf(self_.def.deprecation_reason.as_deref()))
    }
}

impl_resolver! {
    for InputValueResolver<'_>:

    __typename = "__InputValue";

    fn name(&self_) {
        Ok(ResolvedValue::leaf(self_.def.name.as_str()))
    }

    fn description(&self_) {
        Ok(ResolvedValue::leaf(self_.def.description.as_deref()))
    }

    fn type(&self_) {
        Ok(ty(self_.schema, &self_.def.ty))
    }

    fn defaultValue(&self_) {
        let Some(default) = &self_.def.default_value else {
            return Ok(ResolvedValue::null());
        };
        let printed = match default {
            // A stored literal prints as-is
            DefaultValue::Literal(literal) => literal_string(literal),
            // A pre-coerced value is reverse-coerced to a literal,
            // falling back to its plain JSON form
            DefaultValue::Coerced(value) => {
                match coercion::value_to_literal(self_.schema, &self_.def.ty, value) {
                    Some(literal) => literal.to_string(),
                    None => value.to_string(),
                }
            }
        };
        Ok(ResolvedValue::leaf(printed))
    }

    fn isDeprecated(&self_) {
        Ok(ResolvedValue::leaf(self_.def.deprecation_reason.is_some()))
    }

    fn deprecationReason(&self_) {
        Ok(ResolvedValue::leaf(self_.def.deprecation_reason.as_deref()))
    }
}

fn literal_string(literal: &crate::Node<crate::ast::Value>) -> String {
    (**literal).to_string()
}
