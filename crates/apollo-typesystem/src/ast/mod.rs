//! Value literals and type references
//!
//! The query-language parser is an external collaborator: this crate never
//! parses GraphQL syntax. The types here are the small AST subset the type
//! system itself traffics in — type references in definitions, and value
//! literals used as argument or input field defaults and as coercion input.
//!
//! ## Serialization
//!
//! [`Type`] and [`Value`] implement [`Display`][std::fmt::Display] by
//! writing canonical GraphQL syntax, on a single line.

use crate::Node;

mod impls;
mod serialize;

pub use crate::name::{InvalidNameError, Name, NamedType};

/// The type of a field, argument, or input field, referring to
/// the underlying named type defined elsewhere in the schema.
///
/// A `NonNull` wrapper can never immediately wrap another `NonNull` wrapper:
/// the four variants below make such a type unrepresentable.
#[derive(Clone, Eq, PartialEq, Hash)]
pub enum Type {
    Named(NamedType),
    NonNullNamed(NamedType),
    List(Box<Type>),
    NonNullList(Box<Type>),
}

/// A GraphQL value literal, as would be written in a document.
///
/// `Variable` only carries the variable name;
/// substitution happens during literal coercion.
#[derive(Clone, Eq, PartialEq, Hash)]
pub enum Value {
    Null,
    Enum(Name),
    Variable(Name),
    String(String),
    Float(ordered_float::OrderedFloat<f64>),
    Int(i32),
    Boolean(bool),
    List(Vec<Node<Value>>),
    Object(Vec<(Name, Node<Value>)>),
}

/// The locations a directive is allowed to be used in,
/// covering both executable documents and type system definitions.
#[derive(Copy, Clone, Hash, PartialEq, Eq)]
pub enum DirectiveLocation {
    Query,
    Mutation,
    Subscription,
    Field,
    FragmentDefinition,
    FragmentSpread,
    InlineFragment,
    VariableDefinition,
    Schema,
    Scalar,
    Object,
    FieldDefinition,
    ArgumentDefinition,
    Interface,
    Union,
    Enum,
    EnumValue,
    InputObject,
    InputFieldDefinition,
}
