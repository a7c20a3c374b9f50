//! Input coercion: runtime values to the internal representation
//!
//! <https://spec.graphql.org/October2021/#sec-Coercing-Variable-Values>

use crate::ast;
use crate::ast::Type;
use crate::coercion::literal;
use crate::coercion::CoercionError;
use crate::schema::DefaultValue;
use crate::schema::EnumType;
use crate::schema::ExtendedType;
use crate::schema::FieldDefinition;
use crate::schema::InputObjectType;
use crate::schema::Name;
use crate::schema::ScalarType;
use crate::schema::Schema;
use crate::Node;
use crate::suggestion::did_you_mean;
use crate::suggestion::suggestion_list;
use crate::values::JsonMap;
use crate::values::JsonValue;

/// Coerce a runtime value to the given type,
/// returning the internal representation.
pub fn coerce_input_value(
    schema: &Schema,
    ty: &Type,
    value: &JsonValue,
) -> Result<JsonValue, CoercionError> {
    if value.is_null() {
        return if ty.is_non_null() {
            Err(CoercionError::new(format!(
                "Expected non-nullable type \"{ty}\" not to be null."
            )))
        } else {
            Ok(JsonValue::Null)
        };
    }
    match ty {
        Type::List(item) | Type::NonNullList(item) => {
            // A single value not already in a list is coerced
            // as a list of one item
            // https://spec.graphql.org/October2021/#sec-List.Input-Coercion
            value
                .as_array()
                .map(Vec::as_slice)
                .unwrap_or(std::slice::from_ref(value))
                .iter()
                .map(|item_value| coerce_input_value(schema, item, item_value))
                .collect::<Result<Vec<_>, _>>()
                .map(JsonValue::Array)
        }
        Type::Named(name) | Type::NonNullNamed(name) => {
            coerce_named_input_value(schema, name, value)
        }
    }
}

fn coerce_named_input_value(
    schema: &Schema,
    name: &Name,
    value: &JsonValue,
) -> Result<JsonValue, CoercionError> {
    let Some(def) = schema.types.get(name.as_str()) else {
        return Err(CoercionError::new(format!("Unknown type \"{name}\".")));
    };
    match def {
        ExtendedType::Scalar(def) => coerce_scalar_input(def, value),
        ExtendedType::Enum(def) => coerce_enum_input(def, value),
        ExtendedType::InputObject(def) => coerce_input_object_value(schema, def, value),
        ExtendedType::Object(_) | ExtendedType::Interface(_) | ExtendedType::Union(_) => {
            Err(CoercionError::new(format!(
                "The type \"{name}\" is not an input type."
            )))
        }
    }
}

/// Coerce a runtime value through a scalar's `parse_value` hook,
/// or through the built-in rules for the five specified scalars.
/// Custom scalars without a hook pass values through unchanged.
pub(crate) fn coerce_scalar_input(
    def: &ScalarType,
    value: &JsonValue,
) -> Result<JsonValue, CoercionError> {
    if let Some(parse_value) = &def.parse_value {
        return parse_value.call(value);
    }
    match def.name.as_str() {
        // https://spec.graphql.org/October2021/#sec-Int.Input-Coercion
        "Int" => {
            if let Some(int) = value.as_i64() {
                if i32::try_from(int).is_ok() {
                    Ok(value.clone())
                } else {
                    Err(CoercionError::new(format!(
                        "Int cannot represent non 32-bit signed integer value: {value}"
                    )))
                }
            } else if let Some(float) = value.as_f64() {
                if float.fract() != 0.0 {
                    Err(CoercionError::new(format!(
                        "Int cannot represent non-integer value: {value}"
                    )))
                } else if (f64::from(i32::MIN)..=f64::from(i32::MAX)).contains(&float) {
                    Ok(JsonValue::from(float as i64))
                } else {
                    Err(CoercionError::new(format!(
                        "Int cannot represent non 32-bit signed integer value: {value}"
                    )))
                }
            } else {
                Err(CoercionError::new(format!(
                    "Int cannot represent non-integer value: {value}"
                )))
            }
        }
        // https://spec.graphql.org/October2021/#sec-Float.Input-Coercion
        "Float" => {
            if value.as_f64().is_some() {
                Ok(value.clone())
            } else {
                Err(CoercionError::new(format!(
                    "Float cannot represent non numeric value: {value}"
                )))
            }
        }
        // https://spec.graphql.org/October2021/#sec-String.Input-Coercion
        "String" => {
            if value.is_string() {
                Ok(value.clone())
            } else {
                Err(CoercionError::new(format!(
                    "String cannot represent a non string value: {value}"
                )))
            }
        }
        // https://spec.graphql.org/October2021/#sec-Boolean.Input-Coercion
        "Boolean" => {
            if value.is_boolean() {
                Ok(value.clone())
            } else {
                Err(CoercionError::new(format!(
                    "Boolean cannot represent a non boolean value: {value}"
                )))
            }
        }
        // https://spec.graphql.org/October2021/#sec-ID.Input-Coercion
        "ID" => {
            if value.is_string() {
                Ok(value.clone())
            } else if let Some(int) = value.as_i64() {
                Ok(JsonValue::from(int.to_string()))
            } else {
                Err(CoercionError::new(format!(
                    "ID cannot represent value: {value}"
                )))
            }
        }
        _ => Ok(value.clone()),
    }
}

/// Coerce an enum value name to the value's internal representation.
///
/// <https://spec.graphql.org/October2021/#sec-Enums.Input-Coercion>
pub(crate) fn coerce_enum_input(
    def: &EnumType,
    value: &JsonValue,
) -> Result<JsonValue, CoercionError> {
    let Some(value_name) = value.as_str() else {
        return Err(CoercionError::new(format!(
            "Enum \"{}\" cannot represent non-string value: {value}.",
            def.name
        )));
    };
    match def.values.get(value_name) {
        Some(value_def) => Ok(value_def.internal.clone()),
        None => {
            let suggestions =
                suggestion_list(value_name, def.values.keys().map(Name::as_str));
            Err(CoercionError::new(format!(
                "Value \"{value_name}\" does not exist in \"{}\" enum.{}",
                def.name,
                did_you_mean(Some("the enum value"), &suggestions)
            )))
        }
    }
}

fn coerce_input_object_value(
    schema: &Schema,
    def: &InputObjectType,
    value: &JsonValue,
) -> Result<JsonValue, CoercionError> {
    // https://spec.graphql.org/October2021/#sec-Input-Objects.Input-Coercion
    let Some(object) = value.as_object() else {
        return Err(CoercionError::new(format!(
            "Expected type \"{}\" to be an object.",
            def.name
        )));
    };
    for key in object.keys() {
        if !def.fields.contains_key(key.as_str()) {
            let suggestions =
                suggestion_list(key.as_str(), def.fields.keys().map(Name::as_str));
            return Err(CoercionError::new(format!(
                "Field \"{}\" is not defined by type \"{}\".{}",
                key.as_str(),
                def.name,
                did_you_mean(None, &suggestions)
            )));
        }
    }
    let mut coerced = JsonMap::new();
    for (field_name, field) in &def.fields {
        if let Some(field_value) = object.get(field_name.as_str()) {
            coerced.insert(
                field_name.as_str(),
                coerce_input_value(schema, &field.ty, field_value)?,
            );
        } else if let Some(default) = &field.default_value {
            coerced.insert(
                field_name.as_str(),
                coerce_default_value(schema, &field.ty, default)?,
            );
        } else if field.ty.is_non_null() {
            return Err(CoercionError::new(format!(
                "Field \"{}.{}\" of required type \"{}\" was not provided.",
                def.name, field_name, field.ty
            )));
        }
    }
    check_one_of(def, &coerced)?;
    Ok(JsonValue::Object(coerced))
}

/// Exactly one field, with a non-null value, for `@oneOf`-style input objects
pub(crate) fn check_one_of(def: &InputObjectType, coerced: &JsonMap) -> Result<(), CoercionError> {
    if !def.is_one_of {
        return Ok(());
    }
    if coerced.len() != 1 {
        return Err(CoercionError::new(format!(
            "Exactly one key must be specified for OneOf type \"{}\".",
            def.name
        )));
    }
    if let Some((key, field_value)) = coerced.iter().next() {
        if field_value.is_null() {
            return Err(CoercionError::new(format!(
                "Field \"{}\" must be non-null.",
                key.as_str()
            )));
        }
    }
    Ok(())
}

/// Coerce the literal arguments of one field or directive application
/// against the argument definitions of `field`, substituting variables.
///
/// An omitted argument takes its default; an explicitly null argument stays
/// null unless its type is non-null, in which case it is an error.
///
/// <https://spec.graphql.org/October2021/#sec-Coercing-Field-Arguments>
pub fn coerce_argument_values(
    schema: &Schema,
    field: &FieldDefinition,
    arguments: &[(Name, Node<ast::Value>)],
    variables: &JsonMap,
) -> Result<JsonMap, CoercionError> {
    let mut coerced = JsonMap::new();
    for argument_def in &field.arguments {
        let argument_name = &argument_def.name;
        let provided = arguments
            .iter()
            .find(|(name, _)| name == argument_name)
            .map(|(_, value)| value)
            // An omitted variable behaves as an omitted argument
            .filter(|value| match &***value {
                ast::Value::Variable(variable) => variables.contains_key(variable.as_str()),
                _ => true,
            });
        if let Some(value) = provided {
            let coerced_value =
                literal::coerce_input_literal(schema, &argument_def.ty, value, variables)
                    .map_err(|error| error.at(value.location()))?;
            coerced.insert(argument_name.as_str(), coerced_value);
        } else if let Some(default) = &argument_def.default_value {
            coerced.insert(
                argument_name.as_str(),
                coerce_default_value(schema, &argument_def.ty, default)?,
            );
        } else if argument_def.ty.is_non_null() {
            return Err(CoercionError::new(format!(
                "Argument \"{argument_name}\" of required type \"{}\" was not provided.",
                argument_def.ty
            ))
            .at(argument_def.location()));
        }
    }
    Ok(coerced)
}

/// Apply a stored default, in whichever of its two forms it was given:
/// a pre-coerced internal value is used as-is,
/// an unparsed literal is coerced against the type.
pub fn coerce_default_value(
    schema: &Schema,
    ty: &Type,
    default: &DefaultValue,
) -> Result<JsonValue, CoercionError> {
    match default {
        DefaultValue::Coerced(value) => Ok(value.clone()),
        DefaultValue::Literal(literal) => {
            literal::coerce_input_literal(schema, ty, literal, &JsonMap::new())
                .map_err(|error| error.at(literal.location()))
        }
    }
}
