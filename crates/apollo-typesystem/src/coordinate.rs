//! Schema coordinates as described in [the RFC].
//!
//! Schema coordinates uniquely point to an item defined in a schema.
//!
//! [the RFC]: https://github.com/graphql/graphql-wg/blob/main/rfcs/SchemaCoordinates.md

use crate::name::Name;
use crate::name::NamedType;
use std::fmt;

/// A schema coordinate targeting a type definition: `Type`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeCoordinate {
    pub ty: NamedType,
}

/// A schema coordinate targeting a field definition or an enum value:
/// `Type.field`, `Enum.VALUE`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeAttributeCoordinate {
    pub ty: NamedType,
    pub attribute: Name,
}

/// A schema coordinate targeting a field argument definition: `Type.field(argument:)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldArgumentCoordinate {
    pub ty: NamedType,
    pub field: Name,
    pub argument: Name,
}

/// A schema coordinate targeting a directive definition: `@directive`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DirectiveCoordinate {
    pub directive: Name,
}

/// A schema coordinate targeting a directive argument definition: `@directive(argument:)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DirectiveArgumentCoordinate {
    pub directive: Name,
    pub argument: Name,
}

/// Any schema coordinate
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SchemaCoordinate {
    Type(TypeCoordinate),
    TypeAttribute(TypeAttributeCoordinate),
    FieldArgument(FieldArgumentCoordinate),
    Directive(DirectiveCoordinate),
    DirectiveArgument(DirectiveArgumentCoordinate),
}

impl TypeCoordinate {
    /// Create a coordinate for an attribute of this type, such as a field or enum value.
    pub fn attribute(&self, attribute: Name) -> TypeAttributeCoordinate {
        TypeAttributeCoordinate {
            ty: self.ty.clone(),
            attribute,
        }
    }
}

impl TypeAttributeCoordinate {
    /// Create a coordinate for an argument of this field.
    pub fn argument(&self, argument: Name) -> FieldArgumentCoordinate {
        FieldArgumentCoordinate {
            ty: self.ty.clone(),
            field: self.attribute.clone(),
            argument,
        }
    }
}

impl DirectiveCoordinate {
    /// Create a coordinate for an argument of this directive.
    pub fn argument(&self, argument: Name) -> DirectiveArgumentCoordinate {
        DirectiveArgumentCoordinate {
            directive: self.directive.clone(),
            argument,
        }
    }
}

impl From<TypeCoordinate> for SchemaCoordinate {
    fn from(coordinate: TypeCoordinate) -> Self {
        Self::Type(coordinate)
    }
}

impl From<TypeAttributeCoordinate> for SchemaCoordinate {
    fn from(coordinate: TypeAttributeCoordinate) -> Self {
        Self::TypeAttribute(coordinate)
    }
}

impl From<FieldArgumentCoordinate> for SchemaCoordinate {
    fn from(coordinate: FieldArgumentCoordinate) -> Self {
        Self::FieldArgument(coordinate)
    }
}

impl From<DirectiveCoordinate> for SchemaCoordinate {
    fn from(coordinate: DirectiveCoordinate) -> Self {
        Self::Directive(coordinate)
    }
}

impl From<DirectiveArgumentCoordinate> for SchemaCoordinate {
    fn from(coordinate: DirectiveArgumentCoordinate) -> Self {
        Self::DirectiveArgument(coordinate)
    }
}

impl fmt::Display for TypeCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.ty)
    }
}

impl fmt::Display for TypeAttributeCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.ty, self.attribute)
    }
}

impl fmt::Display for FieldArgumentCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}({}:)", self.ty, self.field, self.argument)
    }
}

impl fmt::Display for DirectiveCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}", self.directive)
    }
}

impl fmt::Display for DirectiveArgumentCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}({}:)", self.directive, self.argument)
    }
}

impl fmt::Display for SchemaCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Type(coordinate) => coordinate.fmt(f),
            Self::TypeAttribute(coordinate) => coordinate.fmt(f),
            Self::FieldArgument(coordinate) => coordinate.fmt(f),
            Self::Directive(coordinate) => coordinate.fmt(f),
            Self::DirectiveArgument(coordinate) => coordinate.fmt(f),
        }
    }
}
