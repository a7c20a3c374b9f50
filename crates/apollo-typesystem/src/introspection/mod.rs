//! Schema introspection
//!
//! The meta-types (`__Schema`, `__Type`, `__Field`, `__InputValue`,
//! `__EnumValue`, `__Directive`, `__TypeKind`, `__DirectiveLocation`) are
//! part of every schema's type map, and `Schema::type_field` resolves the
//! meta-fields `__typename`, `__schema`, and `__type`.
//!
//! [`introspect`] produces the complete introspection response for a schema,
//! shaped like the result of executing the canonical introspection query:
//! full type information at the top level, and bounded `kind`/`name`/
//! `ofType` chains wherever a type is referenced.

use crate::collections::IndexMap;
use crate::schema::ExtendedType;
use crate::schema::Name;
use crate::schema::Schema;
use crate::values::JsonMap;
use crate::values::JsonValue;

pub(crate) mod resolver;
mod resolvers;
pub(crate) mod types;

use self::resolver::ObjectValue;
use self::resolver::ResolvedValue;
use self::resolvers::SchemaResolver;

/// The definitions of the introspection meta-types (`__Schema`, `__Type`,
/// `__Field`, `__InputValue`, `__EnumValue`, `__Directive`, `__TypeKind`,
/// `__DirectiveLocation`), exactly as added to every schema's type map.
pub fn meta_types() -> &'static IndexMap<Name, ExtendedType> {
    types::introspection_types()
}

/// Options for [`introspect_with`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntrospectionOptions {
    /// Include `description` fields in the response
    pub descriptions: bool,

    /// Include deprecated fields, arguments, input fields, and enum values
    /// (with their `isDeprecated` and `deprecationReason`)
    pub include_deprecated: bool,
}

impl Default for IntrospectionOptions {
    fn default() -> Self {
        Self {
            descriptions: true,
            include_deprecated: true,
        }
    }
}

/// Returns the complete introspection response for a schema,
/// with default options: `{"__schema": {...}}`.
pub fn introspect(schema: &Schema) -> JsonMap {
    introspect_with(schema, &IntrospectionOptions::default())
}

/// Returns the complete introspection response for a schema.
pub fn introspect_with(schema: &Schema, options: &IntrospectionOptions) -> JsonMap {
    let driver = Driver::new(options);
    let resolver = SchemaResolver { schema };
    let mut schema_map = JsonMap::new();
    if options.descriptions {
        schema_map.insert("description", driver.leaf(&resolver, "description"));
    }
    schema_map.insert("queryType", driver.object(&resolver, "queryType", Driver::type_ref));
    schema_map.insert(
        "mutationType",
        driver.object(&resolver, "mutationType", Driver::type_ref),
    );
    schema_map.insert(
        "subscriptionType",
        driver.object(&resolver, "subscriptionType", Driver::type_ref),
    );
    schema_map.insert("types", driver.list(&resolver, "types", Driver::full_type));
    schema_map.insert(
        "directives",
        driver.list(&resolver, "directives", Driver::directive),
    );
    let mut response = JsonMap::new();
    response.insert("__schema", JsonValue::Object(schema_map));
    response
}

/// Returns the full introspection of the type with the given name,
/// as the `__type(name:)` meta-field would: null for an unknown name.
pub fn introspect_type(schema: &Schema, name: &str) -> JsonValue {
    introspect_type_with(schema, name, &IntrospectionOptions::default())
}

/// Returns the full introspection of the type with the given name.
pub fn introspect_type_with(
    schema: &Schema,
    name: &str,
    options: &IntrospectionOptions,
) -> JsonValue {
    let driver = Driver::new(options);
    match resolvers::type_def(schema, name) {
        ResolvedValue::Object(resolver) => driver.full_type(&*resolver),
        _ => JsonValue::Null,
    }
}

struct Driver<'o> {
    options: &'o IntrospectionOptions,
    arguments: JsonMap,
}

impl<'o> Driver<'o> {
    fn new(options: &'o IntrospectionOptions) -> Self {
        let mut arguments = JsonMap::new();
        arguments.insert("includeDeprecated", options.include_deprecated.into());
        Self { options, arguments }
    }

    /// Resolve a field expected to be a leaf
    fn leaf(&self, resolver: &ObjectValue<'_>, field: &str) -> JsonValue {
        match resolver.resolve_field(field, &self.arguments) {
            Ok(ResolvedValue::Leaf(value)) => value,
            _ => JsonValue::Null,
        }
    }

    /// Resolve a field expected to be an object, shaping it with `shape`
    fn object(
        &self,
        resolver: &ObjectValue<'_>,
        field: &str,
        shape: fn(&Self, &ObjectValue<'_>) -> JsonValue,
    ) -> JsonValue {
        match resolver.resolve_field(field, &self.arguments) {
            Ok(ResolvedValue::Object(object)) => shape(self, &*object),
            _ => JsonValue::Null,
        }
    }

    /// Resolve a field expected to be a list, shaping each object item with
    /// `shape` and passing leaf items through
    fn list(
        &self,
        resolver: &ObjectValue<'_>,
        field: &str,
        shape: fn(&Self, &ObjectValue<'_>) -> JsonValue,
    ) -> JsonValue {
        match resolver.resolve_field(field, &self.arguments) {
            Ok(ResolvedValue::List(items)) => JsonValue::Array(
                items
                    .into_iter()
                    .map(|item| match item {
                        ResolvedValue::Object(object) => shape(self, &*object),
                        ResolvedValue::Leaf(value) => value,
                        ResolvedValue::List(_) => JsonValue::Null,
                    })
                    .collect(),
            ),
            _ => JsonValue::Null,
        }
    }

    fn insert_description(&self, map: &mut JsonMap, resolver: &ObjectValue<'_>) {
        if self.options.descriptions {
            map.insert("description", self.leaf(resolver, "description"));
        }
    }

    /// The `FullType` shape of the canonical introspection query
    fn full_type(&self, resolver: &ObjectValue<'_>) -> JsonValue {
        let mut map = JsonMap::new();
        map.insert("kind", self.leaf(resolver, "kind"));
        map.insert("name", self.leaf(resolver, "name"));
        self.insert_description(&mut map, resolver);
        map.insert("specifiedByURL", self.leaf(resolver, "specifiedByURL"));
        map.insert("fields", self.list(resolver, "fields", Self::field));
        map.insert(
            "interfaces",
            self.list(resolver, "interfaces", Self::type_ref),
        );
        map.insert(
            "possibleTypes",
            self.list(resolver, "possibleTypes", Self::type_ref),
        );
        map.insert(
            "enumValues",
            self.list(resolver, "enumValues", Self::enum_value),
        );
        map.insert(
            "inputFields",
            self.list(resolver, "inputFields", Self::input_value),
        );
        JsonValue::Object(map)
    }

    /// The `TypeRef` shape: a bounded `kind`/`name`/`ofType` chain
    /// (wrapping depth is finite by construction)
    fn type_ref(&self, resolver: &ObjectValue<'_>) -> JsonValue {
        let mut map = JsonMap::new();
        map.insert("kind", self.leaf(resolver, "kind"));
        map.insert("name", self.leaf(resolver, "name"));
        map.insert("ofType", self.object(resolver, "ofType", Self::type_ref));
        JsonValue::Object(map)
    }

    fn field(&self, resolver: &ObjectValue<'_>) -> JsonValue {
        let mut map = JsonMap::new();
        map.insert("name", self.leaf(resolver, "name"));
        self.insert_description(&mut map, resolver);
        map.insert("args", self.list(resolver, "args", Self::input_value));
        map.insert("type", self.object(resolver, "type", Self::type_ref));
        map.insert("isDeprecated", self.leaf(resolver, "isDeprecated"));
        map.insert("deprecationReason", self.leaf(resolver, "deprecationReason"));
        JsonValue::Object(map)
    }

    fn input_value(&self, resolver: &ObjectValue<'_>) -> JsonValue {
        let mut map = JsonMap::new();
        map.insert("name", self.leaf(resolver, "name"));
        self.insert_description(&mut map, resolver);
        map.insert("type", self.object(resolver, "type", Self::type_ref));
        map.insert("defaultValue", self.leaf(resolver, "defaultValue"));
        map.insert("isDeprecated", self.leaf(resolver, "isDeprecated"));
        map.insert("deprecationReason", self.leaf(resolver, "deprecationReason"));
        JsonValue::Object(map)
    }

    fn enum_value(&self, resolver: &ObjectValue<'_>) -> JsonValue {
        let mut map = JsonMap::new();
        map.insert("name", self.leaf(resolver, "name"));
        self.insert_description(&mut map, resolver);
        map.insert("isDeprecated", self.leaf(resolver, "isDeprecated"));
        map.insert("deprecationReason", self.leaf(resolver, "deprecationReason"));
        JsonValue::Object(map)
    }

    fn directive(&self, resolver: &ObjectValue<'_>) -> JsonValue {
        let mut map = JsonMap::new();
        map.insert("name", self.leaf(resolver, "name"));
        self.insert_description(&mut map, resolver);
        map.insert("isRepeatable", self.leaf(resolver, "isRepeatable"));
        map.insert("locations", self.list(resolver, "locations", Self::type_ref));
        map.insert("args", self.list(resolver, "args", Self::input_value));
        JsonValue::Object(map)
    }
}
