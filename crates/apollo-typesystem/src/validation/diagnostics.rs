use crate::ast::Type;
use crate::coordinate::FieldArgumentCoordinate;
use crate::coordinate::SchemaCoordinate;
use crate::coordinate::TypeAttributeCoordinate;
use crate::name::Name;
use thiserror::Error;

/// Structured data about one schema validation error.
///
/// The `Display` implementation is the user-facing message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DiagnosticData {
    #[error("Query root type must be provided.")]
    QueryRootOperationType,

    #[error("{operation} root type must be Object type, it cannot be {name}.")]
    RootOperationObjectType {
        /// `"Query"`, `"Mutation"`, or `"Subscription"`
        operation: &'static str,
        name: Name,
    },

    #[error("Unknown type \"{name}\".")]
    UndefinedDefinition { name: Name },

    #[error(
        "Name \"{name}\" must not begin with \"__\", \
         which is reserved by GraphQL introspection."
    )]
    ReservedName { name: Name },

    #[error("Type {name} must define one or more fields.")]
    EmptyFieldSet { name: Name },

    #[error("The type of {coordinate} must be Output Type but got: {ty}.")]
    OutputType {
        coordinate: TypeAttributeCoordinate,
        ty: Type,
    },

    #[error("The type of {coordinate} must be Input Type but got: {ty}.")]
    InputType {
        coordinate: SchemaCoordinate,
        ty: Type,
    },

    #[error("{coordinate} has an incorrect default value: {detail}")]
    InvalidDefaultValue {
        coordinate: SchemaCoordinate,
        detail: String,
    },

    #[error("Type {name} must only implement Interface types, it cannot implement {interface}.")]
    ImplementsNonInterface { name: Name, interface: Name },

    #[error("Type {name} cannot implement itself because it would create a circular reference.")]
    RecursiveInterfaceDefinition { name: Name },

    #[error(
        "Type {name} must implement {missing_interface} \
         because it is implemented by {via_interface}."
    )]
    TransitiveImplementedInterfaces {
        name: Name,
        missing_interface: Name,
        via_interface: Name,
    },

    #[error("Interface field {interface_field} expected but {implementer} does not provide it.")]
    MissingInterfaceField {
        interface_field: TypeAttributeCoordinate,
        implementer: Name,
    },

    #[error(
        "Interface field {interface_field} expects type {expected} \
         but {implementer_field} is type {actual}."
    )]
    InterfaceFieldTypeMismatch {
        interface_field: TypeAttributeCoordinate,
        expected: Type,
        implementer_field: TypeAttributeCoordinate,
        actual: Type,
    },

    #[error(
        "Interface field argument {interface_argument} expected \
         but {implementer_field} does not provide it."
    )]
    MissingInterfaceFieldArgument {
        interface_argument: FieldArgumentCoordinate,
        implementer_field: TypeAttributeCoordinate,
    },

    #[error(
        "Interface field argument {interface_argument} expects type {expected} \
         but {implementer_argument} is type {actual}."
    )]
    InterfaceFieldArgumentTypeMismatch {
        interface_argument: FieldArgumentCoordinate,
        expected: Type,
        implementer_argument: FieldArgumentCoordinate,
        actual: Type,
    },

    #[error(
        "Object field {implementer_field} includes required argument {argument} \
         that is missing from the Interface field {interface_field}."
    )]
    ExtraRequiredArgument {
        implementer_field: TypeAttributeCoordinate,
        argument: Name,
        interface_field: TypeAttributeCoordinate,
    },

    #[error("Union type {name} must define one or more member types.")]
    EmptyMemberSet { name: Name },

    #[error("Union type {name} can only include Object types, it cannot include {member}.")]
    UnionMemberObjectType { name: Name, member: Name },

    #[error("Enum type {name} must define one or more values.")]
    EmptyValueSet { name: Name },

    #[error("Enum type {name} cannot include value: {value}.")]
    InvalidEnumValue { name: Name, value: Name },

    #[error("Input Object type {name} must define one or more fields.")]
    EmptyInputFieldSet { name: Name },

    #[error(
        "Cannot reference Input Object \"{name}\" within itself \
         through a series of non-null fields: \"{path}\"."
    )]
    RecursiveInputObjectDefinition {
        name: Name,
        /// The field names along the cycle, joined with `.`
        path: String,
    },

    #[error("OneOf input field {coordinate} must be nullable.")]
    OneOfFieldNonNullable { coordinate: TypeAttributeCoordinate },

    #[error("OneOf input field {coordinate} cannot have a default value.")]
    OneOfFieldDefault { coordinate: TypeAttributeCoordinate },
}
