//! Output coercion: internal values produced by resolvers
//! to the client-visible representation.
//!
//! Only leaf and wrapping types are coerced here: completing a composite
//! value requires a selection set, which is the executor's job, so values
//! of composite types pass through unchanged.

use crate::ast::Type;
use crate::coercion::CoercionError;
use crate::schema::EnumType;
use crate::schema::ExtendedType;
use crate::schema::ScalarType;
use crate::schema::Schema;
use crate::values::JsonValue;

/// Coerce a resolver result to the given type,
/// returning the client-visible representation.
pub fn coerce_result_value(
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
        Type::List(item) | Type::NonNullList(item) => value
            .as_array()
            .map(Vec::as_slice)
            .unwrap_or(std::slice::from_ref(value))
            .iter()
            .map(|item_value| coerce_result_value(schema, item, item_value))
            .collect::<Result<Vec<_>, _>>()
            .map(JsonValue::Array),
        Type::Named(name) | Type::NonNullNamed(name) => {
            let Some(def) = schema.types.get(name.as_str()) else {
                return Err(CoercionError::new(format!("Unknown type \"{name}\".")));
            };
            match def {
                ExtendedType::Scalar(def) => serialize_scalar(def, value),
                ExtendedType::Enum(def) => serialize_enum(def, value),
                ExtendedType::Object(_)
                | ExtendedType::Interface(_)
                | ExtendedType::Union(_) => Ok(value.clone()),
                ExtendedType::InputObject(_) => Err(CoercionError::new(format!(
                    "The type \"{name}\" is not an output type."
                ))),
            }
        }
    }
}

/// Serialize through a scalar's hook, or through the built-in rules for the
/// five specified scalars. Custom scalars without a hook pass through.
fn serialize_scalar(def: &ScalarType, value: &JsonValue) -> Result<JsonValue, CoercionError> {
    if let Some(serialize) = &def.serialize {
        return serialize.call(value);
    }
    match def.name.as_str() {
        "Int" => {
            let number = match value {
                JsonValue::Bool(value) => Some(i64::from(*value)),
                JsonValue::Number(number) => {
                    if let Some(int) = number.as_i64() {
                        Some(int)
                    } else {
                        match number.as_f64() {
                            Some(float) if float.fract() == 0.0 => Some(float as i64),
                            _ => None,
                        }
                    }
                }
                JsonValue::String(value) => value.as_str().parse().ok(),
                _ => None,
            };
            match number {
                Some(int) if i32::try_from(int).is_ok() => Ok(JsonValue::from(int)),
                Some(_) => Err(CoercionError::new(format!(
                    "Int cannot represent non 32-bit signed integer value: {value}"
                ))),
                None => Err(CoercionError::new(format!(
                    "Int cannot represent non-integer value: {value}"
                ))),
            }
        }
        "Float" => {
            let number = match value {
                JsonValue::Bool(value) => Some(f64::from(u8::from(*value))),
                JsonValue::Number(number) => number.as_f64(),
                JsonValue::String(value) => value.as_str().parse().ok(),
                _ => None,
            };
            match number {
                Some(float) if float.is_finite() => Ok(JsonValue::from(float)),
                _ => Err(CoercionError::new(format!(
                    "Float cannot represent non numeric value: {value}"
                ))),
            }
        }
        "String" => match value {
            JsonValue::String(_) => Ok(value.clone()),
            JsonValue::Bool(value) => Ok(JsonValue::from(value.to_string())),
            JsonValue::Number(number) => Ok(JsonValue::from(number.to_string())),
            _ => Err(CoercionError::new(format!(
                "String cannot represent value: {value}"
            ))),
        },
        "Boolean" => match value {
            JsonValue::Bool(_) => Ok(value.clone()),
            JsonValue::Number(number) => Ok(JsonValue::from(number.as_f64() != Some(0.0))),
            _ => Err(CoercionError::new(format!(
                "Boolean cannot represent a non boolean value: {value}"
            ))),
        },
        "ID" => match value {
            JsonValue::String(_) => Ok(value.clone()),
            JsonValue::Number(number) if number.as_i64().is_some() => {
                Ok(JsonValue::from(number.to_string()))
            }
            _ => Err(CoercionError::new(format!(
                "ID cannot represent value: {value}"
            ))),
        },
        _ => Ok(value.clone()),
    }
}

/// Find the enum value whose internal representation matches the resolver
/// result, and serialize to that value's name.
fn serialize_enum(def: &EnumType, value: &JsonValue) -> Result<JsonValue, CoercionError> {
    let eq = |a: &JsonValue, b: &JsonValue| match &def.value_eq {
        Some(value_eq) => value_eq.call(a, b),
        None => a == b,
    };
    def.values
        .values()
        .find(|value_def| eq(&value_def.internal, value))
        .map(|value_def| JsonValue::String(value_def.value.as_str().into()))
        .ok_or_else(|| {
            CoercionError::new(format!(
                "Enum \"{}\" cannot represent value: {value}",
                def.name
            ))
        })
}
