//! Literal coercion: value literals to the internal representation,
//! and the reverse direction used for printing defaults.

use crate::ast;
use crate::ast::Type;
use crate::coercion::input;
use crate::coercion::CoercionError;
use crate::name::Name;
use crate::schema::EnumType;
use crate::schema::ExtendedType;
use crate::schema::InputObjectType;
use crate::schema::Schema;
use crate::suggestion::did_you_mean;
use crate::suggestion::suggestion_list;
use crate::values::JsonMap;
use crate::values::JsonValue;
use crate::Node;

/// Coerce a value literal to the given type, substituting variables from
/// `variables` (already coerced), and returning the internal representation.
pub fn coerce_input_literal(
    schema: &Schema,
    ty: &Type,
    value: &ast::Value,
    variables: &JsonMap,
) -> Result<JsonValue, CoercionError> {
    if let ast::Value::Variable(variable) = value {
        // Variable values were coerced against their own declared type
        return match variables.get(variable.as_str()) {
            Some(variable_value) if variable_value.is_null() && ty.is_non_null() => {
                Err(CoercionError::new(format!(
                    "Variable \"${variable}\" of non-null type \"{ty}\" must not be null."
                )))
            }
            Some(variable_value) => Ok(variable_value.clone()),
            None if ty.is_non_null() => Err(CoercionError::new(format!(
                "Missing variable \"${variable}\" for non-null type \"{ty}\"."
            ))),
            None => Ok(JsonValue::Null),
        };
    }
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
            if let Some(items) = value.as_list() {
                items
                    .iter()
                    .map(|item_value| coerce_input_literal(schema, item, item_value, variables))
                    .collect::<Result<Vec<_>, _>>()
                    .map(JsonValue::Array)
            } else {
                // A single literal is coerced as a list of one item
                Ok(JsonValue::Array(vec![coerce_input_literal(
                    schema, item, value, variables,
                )?]))
            }
        }
        Type::Named(name) | Type::NonNullNamed(name) => {
            coerce_named_literal(schema, name, value, variables)
        }
    }
}

fn coerce_named_literal(
    schema: &Schema,
    name: &Name,
    value: &ast::Value,
    variables: &JsonMap,
) -> Result<JsonValue, CoercionError> {
    let Some(def) = schema.types.get(name.as_str()) else {
        return Err(CoercionError::new(format!("Unknown type \"{name}\".")));
    };
    match def {
        ExtendedType::Scalar(def) => {
            if let Some(parse_literal) = &def.parse_literal {
                parse_literal.call(value, variables)
            } else {
                // Convert the literal to a plain value
                // and delegate to input coercion
                let plain = value_from_ast_untyped(value, variables);
                input::coerce_scalar_input(def, &plain)
            }
        }
        ExtendedType::Enum(def) => coerce_enum_literal(def, value),
        ExtendedType::InputObject(def) => {
            coerce_input_object_literal(schema, def, value, variables)
        }
        ExtendedType::Object(_) | ExtendedType::Interface(_) | ExtendedType::Union(_) => {
            Err(CoercionError::new(format!(
                "The type \"{name}\" is not an input type."
            )))
        }
    }
}

/// Only an enum-kind literal is accepted; notably a string literal is not.
///
/// <https://spec.graphql.org/October2021/#sec-Enums.Input-Coercion>
fn coerce_enum_literal(def: &EnumType, value: &ast::Value) -> Result<JsonValue, CoercionError> {
    let Some(value_name) = value.as_enum() else {
        // Common mistake: a string literal spelling an enum value
        let suggestions = value
            .as_str()
            .map(|string| suggestion_list(string, def.values.keys().map(Name::as_str)))
            .unwrap_or_default();
        return Err(CoercionError::new(format!(
            "Enum \"{}\" cannot represent non-enum value: {value}.{}",
            def.name,
            did_you_mean(Some("the enum value"), &suggestions)
        )));
    };
    match def.values.get(value_name.as_str()) {
        Some(value_def) => Ok(value_def.internal.clone()),
        None => {
            let suggestions =
                suggestion_list(value_name.as_str(), def.values.keys().map(Name::as_str));
            Err(CoercionError::new(format!(
                "Value \"{value_name}\" does not exist in \"{}\" enum.{}",
                def.name,
                did_you_mean(Some("the enum value"), &suggestions)
            )))
        }
    }
}

fn coerce_input_object_literal(
    schema: &Schema,
    def: &InputObjectType,
    value: &ast::Value,
    variables: &JsonMap,
) -> Result<JsonValue, CoercionError> {
    let Some(object) = value.as_object() else {
        return Err(CoercionError::new(format!(
            "Expected type \"{}\" to be an object.",
            def.name
        )));
    };
    for (key, _) in object {
        if !def.fields.contains_key(key.as_str()) {
            let suggestions = suggestion_list(key.as_str(), def.fields.keys().map(Name::as_str));
            return Err(CoercionError::new(format!(
                "Field \"{key}\" is not defined by type \"{}\".{}",
                def.name,
                did_you_mean(None, &suggestions)
            )));
        }
    }
    let mut coerced = JsonMap::new();
    for (field_name, field) in &def.fields {
        let provided = object
            .iter()
            .find(|(key, _)| key == field_name)
            .map(|(_, field_value)| field_value)
            // A variable with no provided value behaves as an omitted field
            .filter(|field_value| match &***field_value {
                ast::Value::Variable(variable) => variables.contains_key(variable.as_str()),
                _ => true,
            });
        if let Some(field_value) = provided {
            coerced.insert(
                field_name.as_str(),
                coerce_input_literal(schema, &field.ty, field_value, variables)?,
            );
        } else if let Some(default) = &field.default_value {
            coerced.insert(
                field_name.as_str(),
                input::coerce_default_value(schema, &field.ty, default)?,
            );
        } else if field.ty.is_non_null() {
            return Err(CoercionError::new(format!(
                "Field \"{}.{}\" of required type \"{}\" was not provided.",
                def.name, field_name, field.ty
            )));
        }
    }
    input::check_one_of(def, &coerced)?;
    Ok(JsonValue::Object(coerced))
}

/// Convert a value literal to a plain value without regard for the expected
/// type, substituting variables. This is the default literal parsing behavior
/// for scalars that do not supply a `parse_literal` hook.
pub fn value_from_ast_untyped(value: &ast::Value, variables: &JsonMap) -> JsonValue {
    match value {
        ast::Value::Null => JsonValue::Null,
        ast::Value::Enum(name) => JsonValue::String(name.as_str().into()),
        ast::Value::Variable(name) => variables
            .get(name.as_str())
            .cloned()
            .unwrap_or(JsonValue::Null),
        ast::Value::String(value) => JsonValue::String(value.as_str().into()),
        ast::Value::Float(value) => JsonValue::from(value.into_inner()),
        ast::Value::Int(value) => JsonValue::from(i64::from(*value)),
        ast::Value::Boolean(value) => JsonValue::from(*value),
        ast::Value::List(items) => JsonValue::Array(
            items
                .iter()
                .map(|item| value_from_ast_untyped(item, variables))
                .collect(),
        ),
        ast::Value::Object(fields) => JsonValue::Object(
            fields
                .iter()
                .map(|(name, field_value)| {
                    (
                        name.as_str().into(),
                        value_from_ast_untyped(field_value, variables),
                    )
                })
                .collect(),
        ),
    }
}

/// Reverse coercion: convert an internal value to a literal of the given
/// type, for printing. Returns `None` for values that cannot represent the
/// type, such as null for a non-null type or an unknown enum internal value.
pub fn value_to_literal(schema: &Schema, ty: &Type, value: &JsonValue) -> Option<ast::Value> {
    match ty {
        Type::NonNullNamed(_) | Type::NonNullList(_) => {
            if value.is_null() {
                None
            } else {
                value_to_literal(schema, &ty.clone().nullable(), value)
            }
        }
        Type::List(item) => {
            if value.is_null() {
                Some(ast::Value::Null)
            } else if let Some(items) = value.as_array() {
                items
                    .iter()
                    .map(|item_value| Some(Node::new(value_to_literal(schema, item, item_value)?)))
                    .collect::<Option<Vec<_>>>()
                    .map(ast::Value::List)
            } else {
                // A single value stands for a list of one item
                value_to_literal(schema, item, value)
            }
        }
        Type::Named(name) => {
            if value.is_null() {
                return Some(ast::Value::Null);
            }
            match schema.types.get(name.as_str())? {
                ExtendedType::Scalar(def) => scalar_value_to_literal(def.name.as_str(), value),
                ExtendedType::Enum(def) => {
                    let eq = |a: &JsonValue, b: &JsonValue| match &def.value_eq {
                        Some(value_eq) => value_eq.call(a, b),
                        None => a == b,
                    };
                    def.values
                        .values()
                        .find(|value_def| eq(&value_def.internal, value))
                        .map(|value_def| ast::Value::Enum(value_def.value.clone()))
                }
                ExtendedType::InputObject(def) => {
                    let object = value.as_object()?;
                    let mut fields = Vec::new();
                    for (field_name, field) in &def.fields {
                        let Some(field_value) = object.get(field_name.as_str()) else {
                            if field.is_required() {
                                return None;
                            }
                            continue;
                        };
                        let literal = value_to_literal(schema, &field.ty, field_value)?;
                        fields.push((field_name.clone(), Node::new(literal)));
                    }
                    Some(ast::Value::Object(fields))
                }
                ExtendedType::Object(_) | ExtendedType::Interface(_) | ExtendedType::Union(_) => {
                    None
                }
            }
        }
    }
}

fn scalar_value_to_literal(scalar_name: &str, value: &JsonValue) -> Option<ast::Value> {
    match scalar_name {
        "Int" => Some(ast::Value::Int(i32::try_from(value.as_i64()?).ok()?)),
        "Float" => {
            let float = value.as_f64()?;
            // Integral floats print without a decimal point
            if float.fract() == 0.0
                && (f64::from(i32::MIN)..=f64::from(i32::MAX)).contains(&float)
            {
                Some(ast::Value::Int(float as i32))
            } else {
                Some(ast::Value::Float(float.into()))
            }
        }
        "String" => Some(ast::Value::String(value.as_str()?.to_owned())),
        "Boolean" => Some(ast::Value::Boolean(value.as_bool()?)),
        "ID" => {
            if let Some(int) = value.as_i64() {
                Some(ast::Value::Int(i32::try_from(int).ok()?))
            } else {
                let string = value.as_str()?;
                // ID strings holding integer text print unquoted
                match string.parse::<i32>() {
                    Ok(int) => Some(ast::Value::Int(int)),
                    Err(_) => Some(ast::Value::String(string.to_owned())),
                }
            }
        }
        // Custom scalars fall back to a generic JSON-shaped literal
        _ => json_to_literal(value),
    }
}

fn json_to_literal(value: &JsonValue) -> Option<ast::Value> {
    match value {
        JsonValue::Null => Some(ast::Value::Null),
        JsonValue::Bool(value) => Some(ast::Value::Boolean(*value)),
        JsonValue::Number(number) => {
            if let Some(int) = number.as_i64() {
                match i32::try_from(int) {
                    Ok(int) => Some(ast::Value::Int(int)),
                    Err(_) => Some(ast::Value::Float((int as f64).into())),
                }
            } else {
                Some(ast::Value::Float(number.as_f64()?.into()))
            }
        }
        JsonValue::String(value) => Some(ast::Value::String(value.as_str().to_owned())),
        JsonValue::Array(items) => items
            .iter()
            .map(|item| Some(Node::new(json_to_literal(item)?)))
            .collect::<Option<Vec<_>>>()
            .map(ast::Value::List),
        JsonValue::Object(object) => {
            let mut fields = Vec::new();
            for (key, field_value) in object {
                let name = Name::new(key.as_str()).ok()?;
                fields.push((name, Node::new(json_to_literal(field_value)?)));
            }
            Some(ast::Value::Object(fields))
        }
    }
}
