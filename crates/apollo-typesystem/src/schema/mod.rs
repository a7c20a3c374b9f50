//! High-level representation of a GraphQL schema

use crate::ast;
use crate::collections::IndexMap;
use crate::collections::IndexSet;
use crate::extensions::Extensions;
use crate::hooks::AbstractTypeResolver;
use crate::hooks::FieldResolver;
use crate::hooks::InputCoercer;
use crate::hooks::IsTypeOf;
use crate::hooks::LiteralCoercer;
use crate::hooks::OutputCoercer;
use crate::hooks::ValueEquality;
use crate::name;
use crate::node::SourceSpan;
use crate::validation::DiagnosticList;
use crate::validation::SchemaValidationError;
use crate::values::JsonValue;
use crate::Node;
use std::sync::LazyLock;
use std::sync::OnceLock;

pub(crate) mod built_in;
mod builder;
pub(crate) mod validation;

pub use self::builder::BuildError;
pub use self::builder::SchemaBuilder;
pub use crate::ast::DirectiveLocation;
pub use crate::ast::Type;
pub use crate::ast::Value;
pub use crate::name::{InvalidNameError, Name, NamedType};

/// High-level representation of a GraphQL schema
///
/// All definitions reference other types by [`Name`]; the schema owns the
/// only mapping from names to definitions. A schema is assembled once by a
/// [`SchemaBuilder`] and is effectively immutable afterwards: the builder
/// clones every user-provided collection, so mutating configuration values
/// after handoff does not affect the schema.
#[derive(Debug, Clone)]
pub struct Schema {
    /// The description of the schema itself, as introspectable
    /// through `__Schema.description`
    pub description: Option<String>,

    /// All named type definitions, in the order they were first discovered
    /// during assembly. Includes built-in scalars (when referenced)
    /// and introspection types (always).
    pub types: IndexMap<NamedType, ExtendedType>,

    /// Built-in and explicit directive definitions
    pub directive_definitions: IndexMap<Name, Node<DirectiveDefinition>>,

    /// Name of the object type for the `query` root operation
    pub query_type: Option<NamedType>,

    /// Name of the object type for the `mutation` root operation
    pub mutation_type: Option<NamedType>,

    /// Name of the object type for the `subscription` root operation
    pub subscription_type: Option<NamedType>,

    pub extensions: Extensions,

    pub(crate) assumed_valid: bool,
    pub(crate) implementers: OnceLock<IndexMap<Name, Implementers>>,
    pub(crate) validation: OnceLock<Vec<SchemaValidationError>>,
}

/// The definition of a named type.
#[derive(Debug, Clone, PartialEq)]
pub enum ExtendedType {
    Scalar(Node<ScalarType>),
    Object(Node<ObjectType>),
    Interface(Node<InterfaceType>),
    Union(Node<UnionType>),
    Enum(Node<EnumType>),
    InputObject(Node<InputObjectType>),
}

#[derive(Debug, Clone)]
pub struct ScalarType {
    pub name: Name,
    pub description: Option<String>,

    /// A URL pointing to a specification of this scalar's behavior,
    /// as introspectable through `__Type.specifiedByURL`
    pub specified_by_url: Option<String>,

    /// Input coercion. Identity when absent.
    pub parse_value: Option<InputCoercer>,

    /// Output coercion. Identity when absent.
    pub serialize: Option<OutputCoercer>,

    /// Literal coercion. When absent, the literal is converted to a plain
    /// value (substituting variables) and handed to `parse_value`.
    /// Must not be present without `parse_value`; schema assembly rejects that.
    pub parse_literal: Option<LiteralCoercer>,

    pub extensions: Extensions,
}

#[derive(Debug, Clone)]
pub struct ObjectType {
    pub name: Name,
    pub description: Option<String>,

    /// Names of the interfaces this object implements, in user order
    pub implements_interfaces: IndexSet<Name>,

    pub fields: IndexMap<Name, Node<FieldDefinition>>,

    /// Whether a runtime value belongs to this type,
    /// for abstract type dispatch by an executor
    pub is_type_of: Option<IsTypeOf>,

    pub extensions: Extensions,
}

#[derive(Debug, Clone)]
pub struct InterfaceType {
    pub name: Name,
    pub description: Option<String>,

    /// Names of the interfaces this interface itself implements, in user order
    pub implements_interfaces: IndexSet<Name>,

    pub fields: IndexMap<Name, Node<FieldDefinition>>,

    /// Names the object type a runtime value belongs to,
    /// for abstract type dispatch by an executor
    pub resolve_type: Option<AbstractTypeResolver>,

    pub extensions: Extensions,
}

#[derive(Debug, Clone)]
pub struct UnionType {
    pub name: Name,
    pub description: Option<String>,

    /// Names of the member object types, in user order
    pub members: IndexSet<NamedType>,

    pub resolve_type: Option<AbstractTypeResolver>,

    pub extensions: Extensions,
}

#[derive(Debug, Clone)]
pub struct EnumType {
    pub name: Name,
    pub description: Option<String>,

    /// The enum values, in user order
    pub values: IndexMap<Name, Node<EnumValueDefinition>>,

    /// Equality of internal values, used by output coercion.
    /// Structural equality of the JSON representation when absent.
    pub value_eq: Option<ValueEquality>,

    pub extensions: Extensions,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnumValueDefinition {
    /// The name of the enum value, as it appears in documents and responses
    pub value: Name,
    pub description: Option<String>,

    /// The internal representation of this value, as seen by resolvers.
    /// Defaults to the value name itself as a string.
    pub internal: JsonValue,

    pub deprecation_reason: Option<String>,
    pub extensions: Extensions,
}

#[derive(Debug, Clone)]
pub struct InputObjectType {
    pub name: Name,
    pub description: Option<String>,

    pub fields: IndexMap<Name, Node<InputValueDefinition>>,

    /// Exactly-one-field-set semantics: input coercion requires exactly one
    /// field to be provided, with a non-null value
    pub is_one_of: bool,

    pub extensions: Extensions,
}

/// The definition of a field of an object or interface type.
///
/// The `resolve` and `subscribe` handlers are stored for an external
/// executor; the type system never invokes them.
#[derive(Debug, Clone)]
pub struct FieldDefinition {
    pub description: Option<String>,
    pub name: Name,
    pub arguments: Vec<Node<InputValueDefinition>>,
    pub ty: Type,
    pub deprecation_reason: Option<String>,
    pub resolve: Option<FieldResolver>,
    pub subscribe: Option<FieldResolver>,
    pub extensions: Extensions,
}

/// The definition of an argument of a field or directive,
/// or of a field of an input object type.
///
/// Input values cannot define resolvers.
#[derive(Debug, Clone, PartialEq)]
pub struct InputValueDefinition {
    pub description: Option<String>,
    pub name: Name,
    pub ty: Type,
    pub default_value: Option<DefaultValue>,
    pub deprecation_reason: Option<String>,
    pub extensions: Extensions,
}

/// The default of an argument or input field, in one of two mutually
/// exclusive forms. At coercion time the stored form is applied uniformly.
#[derive(Debug, Clone, PartialEq)]
pub enum DefaultValue {
    /// An unparsed value literal. Printed as-is by
    /// `__InputValue.defaultValue`, coerced on use.
    Literal(Node<ast::Value>),

    /// An already-coerced internal value. Used as-is,
    /// reverse-coerced to a literal for printing.
    Coerced(JsonValue),
}

#[derive(Debug, Clone, PartialEq)]
pub struct DirectiveDefinition {
    pub description: Option<String>,
    pub name: Name,
    pub arguments: Vec<Node<InputValueDefinition>>,
    pub repeatable: bool,
    pub locations: Vec<DirectiveLocation>,
    pub extensions: Extensions,
}

/// The names of the types that implement one interface,
/// as computed by [`Schema::implementers_map`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Implementers {
    /// Object types that implement the interface
    pub objects: IndexSet<Name>,
    /// Interface types that implement the interface
    pub interfaces: IndexSet<Name>,
}

/// Could not find the requested field definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldLookupError {
    NoSuchType,
    NoSuchField,
}

impl Schema {
    /// Returns an (almost) empty schema.
    ///
    /// It starts with built-in directives and introspection types.
    pub fn new() -> Self {
        SchemaBuilder::new()
            .build()
            .expect("assembling an empty schema cannot fail")
    }

    /// Returns a new builder for assembling a schema from typed definitions,
    /// initialized with built-in directives, built-in scalars,
    /// and introspection types.
    ///
    /// ```rust
    /// use apollo_typesystem::Schema;
    ///
    /// let empty_schema = Schema::builder().build().unwrap();
    /// ```
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::new()
    }

    /// Examine the schema for structural errors.
    ///
    /// The result is computed on first call and memoized; a schema assembled
    /// with [`SchemaBuilder::assume_valid`] reports no errors without
    /// being examined. An empty slice means the schema is valid.
    pub fn validate(&self) -> &[SchemaValidationError] {
        self.validation.get_or_init(|| {
            let mut diagnostics = DiagnosticList::new();
            validation::validate_schema(&mut diagnostics, self);
            diagnostics.into_vec()
        })
    }

    /// Whether validation was skipped at assembly time
    pub fn assumed_valid(&self) -> bool {
        self.assumed_valid
    }

    /// Returns the definition of the type with the given name, if any
    pub fn get_type(&self, name: &str) -> Option<&ExtendedType> {
        self.types.get(name)
    }

    /// Returns the type with the given name, if it is a scalar type
    pub fn get_scalar(&self, name: &str) -> Option<&Node<ScalarType>> {
        if let Some(ExtendedType::Scalar(ty)) = self.types.get(name) {
            Some(ty)
        } else {
            None
        }
    }

    /// Returns the type with the given name, if it is an object type
    pub fn get_object(&self, name: &str) -> Option<&Node<ObjectType>> {
        if let Some(ExtendedType::Object(ty)) = self.types.get(name) {
            Some(ty)
        } else {
            None
        }
    }

    /// Returns the type with the given name, if it is an interface type
    pub fn get_interface(&self, name: &str) -> Option<&Node<InterfaceType>> {
        if let Some(ExtendedType::Interface(ty)) = self.types.get(name) {
            Some(ty)
        } else {
            None
        }
    }

    /// Returns the type with the given name, if it is a union type
    pub fn get_union(&self, name: &str) -> Option<&Node<UnionType>> {
        if let Some(ExtendedType::Union(ty)) = self.types.get(name) {
            Some(ty)
        } else {
            None
        }
    }

    /// Returns the type with the given name, if it is an enum type
    pub fn get_enum(&self, name: &str) -> Option<&Node<EnumType>> {
        if let Some(ExtendedType::Enum(ty)) = self.types.get(name) {
            Some(ty)
        } else {
            None
        }
    }

    /// Returns the type with the given name, if it is an input object type
    pub fn get_input_object(&self, name: &str) -> Option<&Node<InputObjectType>> {
        if let Some(ExtendedType::InputObject(ty)) = self.types.get(name) {
            Some(ty)
        } else {
            None
        }
    }

    /// Returns the definition of the `query` root operation type
    pub fn query_root(&self) -> Option<&Node<ObjectType>> {
        self.get_object(self.query_type.as_ref()?)
    }

    /// Returns the definition of the `mutation` root operation type
    pub fn mutation_root(&self) -> Option<&Node<ObjectType>> {
        self.get_object(self.mutation_type.as_ref()?)
    }

    /// Returns the definition of the `subscription` root operation type
    pub fn subscription_root(&self) -> Option<&Node<ObjectType>> {
        self.get_object(self.subscription_type.as_ref()?)
    }

    /// Returns the definition of the directive with the given name, if any
    pub fn get_directive(&self, name: &str) -> Option<&Node<DirectiveDefinition>> {
        self.directive_definitions.get(name)
    }

    /// Returns a map of interface names to names of types
    /// that implement that interface.
    ///
    /// `Schema` only stores the inverse relationship
    /// (in [`ObjectType::implements_interfaces`] and
    /// [`InterfaceType::implements_interfaces`]), so the map is computed
    /// with a linear scan on first access and memoized.
    pub fn implementers_map(&self) -> &IndexMap<Name, Implementers> {
        self.implementers.get_or_init(|| {
            let mut map = IndexMap::<Name, Implementers>::default();
            for (ty_name, ty) in &self.types {
                match ty {
                    ExtendedType::Object(def) => {
                        for interface in &def.implements_interfaces {
                            map.entry(interface.clone())
                                .or_default()
                                .objects
                                .insert(ty_name.clone());
                        }
                    }
                    ExtendedType::Interface(def) => {
                        for interface in &def.implements_interfaces {
                            map.entry(interface.clone())
                                .or_default()
                                .interfaces
                                .insert(ty_name.clone());
                        }
                    }
                    ExtendedType::Scalar(_)
                    | ExtendedType::Union(_)
                    | ExtendedType::Enum(_)
                    | ExtendedType::InputObject(_) => {}
                }
            }
            map
        })
    }

    /// Returns the objects and interfaces that declare
    /// they implement the given interface (direct edges only)
    pub fn implementations(&self, interface: &str) -> Option<&Implementers> {
        self.implementers_map().get(interface)
    }

    /// Returns whether `maybe_subtype` is a subtype of `abstract_type`, which means either:
    ///
    /// * `maybe_subtype` implements the interface `abstract_type`
    /// * `maybe_subtype` is a member of the union type `abstract_type`
    pub fn is_subtype(&self, abstract_type: &str, maybe_subtype: &str) -> bool {
        self.types.get(abstract_type).is_some_and(|ty| match ty {
            ExtendedType::Interface(_) => self.types.get(maybe_subtype).is_some_and(|ty2| {
                match ty2 {
                    ExtendedType::Object(def) => &def.implements_interfaces,
                    ExtendedType::Interface(def) => &def.implements_interfaces,
                    ExtendedType::Scalar(_)
                    | ExtendedType::Union(_)
                    | ExtendedType::Enum(_)
                    | ExtendedType::InputObject(_) => return false,
                }
                .contains(abstract_type)
            }),
            ExtendedType::Union(def) => def.members.contains(maybe_subtype),
            ExtendedType::Scalar(_)
            | ExtendedType::Object(_)
            | ExtendedType::Enum(_)
            | ExtendedType::InputObject(_) => false,
        })
    }

    /// Returns whether a value of type `maybe_subtype` can always be used
    /// where a value of type `super_type` is expected: equal types, stripping
    /// non-null wrappers covariantly, mapping over equal list nesting, and
    /// [`is_subtype`][Self::is_subtype] between the named types.
    pub fn is_subtype_of(&self, maybe_subtype: &Type, super_type: &Type) -> bool {
        if maybe_subtype == super_type {
            return true;
        }
        match (maybe_subtype, super_type) {
            // If the super type is non-null, the sub type must be non-null too
            (Type::NonNullNamed(sub), Type::NonNullNamed(sup)) => {
                sub == sup || self.is_subtype(sup, sub)
            }
            (Type::NonNullList(sub), Type::NonNullList(sup)) => self.is_subtype_of(sub, sup),
            (Type::Named(_) | Type::List(_), Type::NonNullNamed(_) | Type::NonNullList(_)) => false,
            // A non-null sub type can stand in for a nullable super type
            (Type::NonNullNamed(sub), _) => {
                self.is_subtype_of(&Type::Named(sub.clone()), super_type)
            }
            (Type::NonNullList(sub), _) => self.is_subtype_of(&Type::List(sub.clone()), super_type),
            (Type::List(sub), Type::List(sup)) => self.is_subtype_of(sub, sup),
            // A list is not a subtype of a named type, nor the other way around
            (Type::List(_), Type::Named(_)) | (Type::Named(_), Type::List(_)) => false,
            (Type::Named(sub), Type::Named(sup)) => self.is_subtype(sup, sub),
        }
    }

    /// Returns the possible runtime types of an abstract type:
    /// the members of a union, or the object implementers of an interface.
    pub fn possible_types(&self, abstract_type: &str) -> Vec<&NamedType> {
        match self.types.get(abstract_type) {
            Some(ExtendedType::Union(def)) => def.members.iter().collect(),
            Some(ExtendedType::Interface(_)) => self
                .implementations(abstract_type)
                .map(|implementers| implementers.objects.iter().collect())
                .unwrap_or_default(),
            _ => Vec::new(),
        }
    }

    /// Returns the definition of a type's explicit field or meta-field.
    ///
    /// `__typename` is found on every composite type; `__schema` and
    /// `__type` only on the query root type.
    pub fn type_field(
        &self,
        type_name: &str,
        field_name: &str,
    ) -> Result<&Node<FieldDefinition>, FieldLookupError> {
        let ty_def = self
            .types
            .get(type_name)
            .ok_or(FieldLookupError::NoSuchType)?;
        self.meta_fields_definitions(type_name)
            .iter()
            .find(|def| def.name == field_name)
            .or_else(|| match ty_def {
                ExtendedType::Object(ty) => ty.fields.get(field_name),
                ExtendedType::Interface(ty) => ty.fields.get(field_name),
                ExtendedType::Scalar(_)
                | ExtendedType::Union(_)
                | ExtendedType::Enum(_)
                | ExtendedType::InputObject(_) => None,
            })
            .ok_or(FieldLookupError::NoSuchField)
    }

    /// Return the meta-fields of the given type
    pub(crate) fn meta_fields_definitions(&self, type_name: &str) -> &'static [Node<FieldDefinition>] {
        static ROOT_QUERY_FIELDS: LazyLock<[Node<FieldDefinition>; 3]> = LazyLock::new(|| {
            [
                // __typename: String!
                Node::new(FieldDefinition::new(
                    name!("__typename"),
                    Type::new_named(name!("String")).non_null(),
                )),
                // __schema: __Schema!
                Node::new(FieldDefinition::new(
                    name!("__schema"),
                    Type::new_named(name!("__Schema")).non_null(),
                )),
                // __type(name: String!): __Type
                Node::new({
                    let mut field =
                        FieldDefinition::new(name!("__type"), Type::new_named(name!("__Type")));
                    field.arguments.push(Node::new(InputValueDefinition::new(
                        name!("name"),
                        Type::new_named(name!("String")).non_null(),
                    )));
                    field
                }),
            ]
        });
        let is_composite = self
            .types
            .get(type_name)
            .is_some_and(|ty| ty.is_composite_type());
        if !is_composite {
            &[]
        } else if self.query_type.as_deref() == Some(type_name) {
            // __typename, __schema, __type
            &*ROOT_QUERY_FIELDS
        } else {
            // __typename only
            std::slice::from_ref(&ROOT_QUERY_FIELDS[0])
        }
    }

    /// Returns whether the type `ty` is defined as an input type
    ///
    /// <https://spec.graphql.org/October2021/#sec-Input-and-Output-Types>
    pub fn is_input_type(&self, ty: &Type) -> bool {
        match self.types.get(ty.inner_named_type()) {
            Some(ExtendedType::Scalar(_))
            | Some(ExtendedType::Enum(_))
            | Some(ExtendedType::InputObject(_)) => true,
            Some(ExtendedType::Object(_))
            | Some(ExtendedType::Interface(_))
            | Some(ExtendedType::Union(_))
            | None => false,
        }
    }

    /// Returns whether the type `ty` is defined as an output type
    ///
    /// <https://spec.graphql.org/October2021/#sec-Input-and-Output-Types>
    pub fn is_output_type(&self, ty: &Type) -> bool {
        match self.types.get(ty.inner_named_type()) {
            Some(ExtendedType::Scalar(_))
            | Some(ExtendedType::Object(_))
            | Some(ExtendedType::Interface(_))
            | Some(ExtendedType::Union(_))
            | Some(ExtendedType::Enum(_)) => true,
            Some(ExtendedType::InputObject(_)) | None => false,
        }
    }
}

impl Default for Schema {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Schema {
    fn eq(&self, other: &Self) -> bool {
        let Self {
            description,
            types,
            directive_definitions,
            query_type,
            mutation_type,
            subscription_type,
            extensions,
            // validation status and memoized indexes are not
            // part of a schema's structural identity
            assumed_valid: _,
            implementers: _,
            validation: _,
        } = self;
        *description == other.description
            && *types == other.types
            && *directive_definitions == other.directive_definitions
            && *query_type == other.query_type
            && *mutation_type == other.mutation_type
            && *subscription_type == other.subscription_type
            && *extensions == other.extensions
    }
}

impl ExtendedType {
    /// Return the name of the type.
    pub fn name(&self) -> &Name {
        match self {
            Self::Scalar(ty) => &ty.name,
            Self::Object(ty) => &ty.name,
            Self::Interface(ty) => &ty.name,
            Self::Union(ty) => &ty.name,
            Self::Enum(ty) => &ty.name,
            Self::InputObject(ty) => &ty.name,
        }
    }

    /// Return the source location of the type's definition, if any.
    pub fn location(&self) -> Option<SourceSpan> {
        match self {
            Self::Scalar(ty) => ty.location(),
            Self::Object(ty) => ty.location(),
            Self::Interface(ty) => ty.location(),
            Self::Union(ty) => ty.location(),
            Self::Enum(ty) => ty.location(),
            Self::InputObject(ty) => ty.location(),
        }
    }

    pub fn description(&self) -> Option<&str> {
        match self {
            Self::Scalar(ty) => ty.description.as_deref(),
            Self::Object(ty) => ty.description.as_deref(),
            Self::Interface(ty) => ty.description.as_deref(),
            Self::Union(ty) => ty.description.as_deref(),
            Self::Enum(ty) => ty.description.as_deref(),
            Self::InputObject(ty) => ty.description.as_deref(),
        }
    }

    pub fn is_scalar(&self) -> bool {
        matches!(self, Self::Scalar(_))
    }

    pub fn is_object(&self) -> bool {
        matches!(self, Self::Object(_))
    }

    pub fn is_interface(&self) -> bool {
        matches!(self, Self::Interface(_))
    }

    pub fn is_union(&self) -> bool {
        matches!(self, Self::Union(_))
    }

    pub fn is_enum(&self) -> bool {
        matches!(self, Self::Enum(_))
    }

    pub fn is_input_object(&self) -> bool {
        matches!(self, Self::InputObject(_))
    }

    /// Returns true if a value of this type can be used as an input value.
    ///
    /// This implements spec function `IsInputType(type)`:
    /// <https://spec.graphql.org/draft/#IsInputType()>
    pub fn is_input_type(&self) -> bool {
        matches!(self, Self::Scalar(_) | Self::Enum(_) | Self::InputObject(_))
    }

    /// Returns true if a value of this type can be used as an output value.
    ///
    /// This implements spec function `IsOutputType(type)`:
    /// <https://spec.graphql.org/draft/#IsOutputType()>
    pub fn is_output_type(&self) -> bool {
        matches!(
            self,
            Self::Scalar(_) | Self::Enum(_) | Self::Object(_) | Self::Interface(_) | Self::Union(_)
        )
    }

    /// Returns true if this is a leaf type: a scalar or enum,
    /// coerced without a selection set.
    pub fn is_leaf_type(&self) -> bool {
        matches!(self, Self::Scalar(_) | Self::Enum(_))
    }

    /// Returns true if this is a composite type: an object, interface,
    /// or union, requiring a selection set.
    pub fn is_composite_type(&self) -> bool {
        matches!(self, Self::Object(_) | Self::Interface(_) | Self::Union(_))
    }

    /// Returns true if this is an abstract type: an interface or union,
    /// dispatched at runtime through `resolve_type` or `is_type_of`.
    pub fn is_abstract_type(&self) -> bool {
        matches!(self, Self::Interface(_) | Self::Union(_))
    }

    /// Returns whether this is a built-in scalar or introspection type
    pub fn is_built_in(&self) -> bool {
        match self {
            Self::Scalar(ty) => ty.is_built_in(),
            Self::Object(ty) => ty.is_built_in(),
            Self::Interface(ty) => ty.is_built_in(),
            Self::Union(ty) => ty.is_built_in(),
            Self::Enum(ty) => ty.is_built_in(),
            Self::InputObject(ty) => ty.is_built_in(),
        }
    }

    /// What kind of type this is, for error messages
    pub fn describe(&self) -> &'static str {
        match self {
            Self::Scalar(_) => "a scalar type",
            Self::Object(_) => "an object type",
            Self::Interface(_) => "an interface type",
            Self::Union(_) => "a union type",
            Self::Enum(_) => "an enum type",
            Self::InputObject(_) => "an input object type",
        }
    }

    /// The named types this definition references, in definition order:
    /// implemented interfaces, then field types and their argument types.
    pub(crate) fn referenced_types(&self) -> Vec<&NamedType> {
        match self {
            Self::Scalar(_) | Self::Enum(_) => Vec::new(),
            Self::Object(def) => object_like_references(&def.implements_interfaces, &def.fields),
            Self::Interface(def) => object_like_references(&def.implements_interfaces, &def.fields),
            Self::Union(def) => def.members.iter().collect(),
            Self::InputObject(def) => def
                .fields
                .values()
                .map(|field| field.ty.inner_named_type())
                .collect(),
        }
    }
}

fn object_like_references<'a>(
    implements_interfaces: &'a IndexSet<Name>,
    fields: &'a IndexMap<Name, Node<FieldDefinition>>,
) -> Vec<&'a NamedType> {
    let mut references: Vec<&NamedType> = implements_interfaces.iter().collect();
    for field in fields.values() {
        references.push(field.ty.inner_named_type());
        for argument in &field.arguments {
            references.push(argument.ty.inner_named_type());
        }
    }
    references
}

impl ScalarType {
    pub fn new(name: Name) -> Self {
        Self {
            name,
            description: None,
            specified_by_url: None,
            parse_value: None,
            serialize: None,
            parse_literal: None,
            extensions: Extensions::default(),
        }
    }

    /// Whether this is one of the five scalars
    /// defined by the GraphQL specification
    pub fn is_specified(&self) -> bool {
        built_in::is_built_in_scalar_name(&self.name)
    }
}

impl ObjectType {
    pub fn new(name: Name) -> Self {
        Self {
            name,
            description: None,
            implements_interfaces: IndexSet::default(),
            fields: IndexMap::default(),
            is_type_of: None,
            extensions: Extensions::default(),
        }
    }
}

impl InterfaceType {
    pub fn new(name: Name) -> Self {
        Self {
            name,
            description: None,
            implements_interfaces: IndexSet::default(),
            fields: IndexMap::default(),
            resolve_type: None,
            extensions: Extensions::default(),
        }
    }
}

impl UnionType {
    pub fn new(name: Name) -> Self {
        Self {
            name,
            description: None,
            members: IndexSet::default(),
            resolve_type: None,
            extensions: Extensions::default(),
        }
    }
}

impl EnumType {
    pub fn new(name: Name) -> Self {
        Self {
            name,
            description: None,
            values: IndexMap::default(),
            value_eq: None,
            extensions: Extensions::default(),
        }
    }
}

impl EnumValueDefinition {
    pub fn new(value: Name) -> Self {
        let internal = JsonValue::String(value.as_str().into());
        Self {
            value,
            description: None,
            internal,
            deprecation_reason: None,
            extensions: Extensions::default(),
        }
    }
}

impl InputObjectType {
    pub fn new(name: Name) -> Self {
        Self {
            name,
            description: None,
            fields: IndexMap::default(),
            is_one_of: false,
            extensions: Extensions::default(),
        }
    }
}

impl FieldDefinition {
    pub fn new(name: Name, ty: Type) -> Self {
        Self {
            description: None,
            name,
            arguments: Vec::new(),
            ty,
            deprecation_reason: None,
            resolve: None,
            subscribe: None,
            extensions: Extensions::default(),
        }
    }

    pub fn argument_by_name(&self, name: &str) -> Option<&Node<InputValueDefinition>> {
        self.arguments.iter().find(|argument| argument.name == name)
    }
}

impl InputValueDefinition {
    pub fn new(name: Name, ty: Type) -> Self {
        Self {
            description: None,
            name,
            ty,
            default_value: None,
            deprecation_reason: None,
            extensions: Extensions::default(),
        }
    }

    /// An argument or input field is required when its type is non-null
    /// and it has no default
    pub fn is_required(&self) -> bool {
        self.ty.is_non_null() && self.default_value.is_none()
    }
}

impl DirectiveDefinition {
    pub fn new(name: Name) -> Self {
        Self {
            description: None,
            name,
            arguments: Vec::new(),
            repeatable: false,
            locations: Vec::new(),
            extensions: Extensions::default(),
        }
    }

    pub fn argument_by_name(&self, name: &str) -> Option<&Node<InputValueDefinition>> {
        self.arguments.iter().find(|argument| argument.name == name)
    }

    /// Whether this is one of the directives defined by the GraphQL
    /// specification: `@skip`, `@include`, `@deprecated`, or `@specifiedBy`
    pub fn is_specified(&self) -> bool {
        built_in::is_built_in_directive_name(&self.name)
    }
}

impl PartialEq for ScalarType {
    fn eq(&self, other: &Self) -> bool {
        let Self {
            name,
            description,
            specified_by_url,
            extensions,
            // hooks are not part of a definition's structural identity
            parse_value: _,
            serialize: _,
            parse_literal: _,
        } = self;
        *name == other.name
            && *description == other.description
            && *specified_by_url == other.specified_by_url
            && *extensions == other.extensions
    }
}

impl PartialEq for ObjectType {
    fn eq(&self, other: &Self) -> bool {
        let Self {
            name,
            description,
            implements_interfaces,
            fields,
            extensions,
            is_type_of: _,
        } = self;
        *name == other.name
            && *description == other.description
            && *implements_interfaces == other.implements_interfaces
            && *fields == other.fields
            && *extensions == other.extensions
    }
}

impl PartialEq for InterfaceType {
    fn eq(&self, other: &Self) -> bool {
        let Self {
            name,
            description,
            implements_interfaces,
            fields,
            extensions,
            resolve_type: _,
        } = self;
        *name == other.name
            && *description == other.description
            && *implements_interfaces == other.implements_interfaces
            && *fields == other.fields
            && *extensions == other.extensions
    }
}

impl PartialEq for UnionType {
    fn eq(&self, other: &Self) -> bool {
        let Self {
            name,
            description,
            members,
            extensions,
            resolve_type: _,
        } = self;
        *name == other.name
            && *description == other.description
            && *members == other.members
            && *extensions == other.extensions
    }
}

impl PartialEq for EnumType {
    fn eq(&self, other: &Self) -> bool {
        let Self {
            name,
            description,
            values,
            extensions,
            value_eq: _,
        } = self;
        *name == other.name
            && *description == other.description
            && *values == other.values
            && *extensions == other.extensions
    }
}

impl PartialEq for FieldDefinition {
    fn eq(&self, other: &Self) -> bool {
        let Self {
            description,
            name,
            arguments,
            ty,
            deprecation_reason,
            extensions,
            resolve: _,
            subscribe: _,
        } = self;
        *description == other.description
            && *name == other.name
            && *arguments == other.arguments
            && *ty == other.ty
            && *deprecation_reason == other.deprecation_reason
            && *extensions == other.extensions
    }
}

impl PartialEq for InputObjectType {
    fn eq(&self, other: &Self) -> bool {
        let Self {
            name,
            description,
            fields,
            is_one_of,
            extensions,
        } = self;
        *name == other.name
            && *description == other.description
            && *fields == other.fields
            && *is_one_of == other.is_one_of
            && *extensions == other.extensions
    }
}

impl From<Node<ScalarType>> for ExtendedType {
    fn from(ty: Node<ScalarType>) -> Self {
        Self::Scalar(ty)
    }
}

impl From<Node<ObjectType>> for ExtendedType {
    fn from(ty: Node<ObjectType>) -> Self {
        Self::Object(ty)
    }
}

impl From<Node<InterfaceType>> for ExtendedType {
    fn from(ty: Node<InterfaceType>) -> Self {
        Self::Interface(ty)
    }
}

impl From<Node<UnionType>> for ExtendedType {
    fn from(ty: Node<UnionType>) -> Self {
        Self::Union(ty)
    }
}

impl From<Node<EnumType>> for ExtendedType {
    fn from(ty: Node<EnumType>) -> Self {
        Self::Enum(ty)
    }
}

impl From<Node<InputObjectType>> for ExtendedType {
    fn from(ty: Node<InputObjectType>) -> Self {
        Self::InputObject(ty)
    }
}

impl From<ScalarType> for ExtendedType {
    fn from(ty: ScalarType) -> Self {
        Self::Scalar(Node::new(ty))
    }
}

impl From<ObjectType> for ExtendedType {
    fn from(ty: ObjectType) -> Self {
        Self::Object(Node::new(ty))
    }
}

impl From<InterfaceType> for ExtendedType {
    fn from(ty: InterfaceType) -> Self {
        Self::Interface(Node::new(ty))
    }
}

impl From<UnionType> for ExtendedType {
    fn from(ty: UnionType) -> Self {
        Self::Union(Node::new(ty))
    }
}

impl From<EnumType> for ExtendedType {
    fn from(ty: EnumType) -> Self {
        Self::Enum(Node::new(ty))
    }
}

impl From<InputObjectType> for ExtendedType {
    fn from(ty: InputObjectType) -> Self {
        Self::InputObject(Node::new(ty))
    }
}

impl From<ast::Value> for DefaultValue {
    fn from(value: ast::Value) -> Self {
        Self::Literal(Node::new(value))
    }
}

impl From<Node<ast::Value>> for DefaultValue {
    fn from(value: Node<ast::Value>) -> Self {
        Self::Literal(value)
    }
}

impl From<JsonValue> for DefaultValue {
    fn from(value: JsonValue) -> Self {
        Self::Coerced(value)
    }
}

impl Implementers {
    /// Iterate over all implementers, objects then interfaces
    pub fn iter(&self) -> impl Iterator<Item = &Name> {
        self.objects.iter().chain(&self.interfaces)
    }
}
