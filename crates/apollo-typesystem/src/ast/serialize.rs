//! Canonical single-line GraphQL syntax for values and type references,
//! as used by diagnostics and by `__InputValue.defaultValue` in introspection.

use super::*;
use std::fmt;

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Named(name) => write!(f, "{name}"),
            Type::NonNullNamed(name) => write!(f, "{name}!"),
            Type::List(inner) => write!(f, "[{inner}]"),
            Type::NonNullList(inner) => write!(f, "[{inner}]!"),
        }
    }
}

impl fmt::Debug for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// Serializing a type reference yields its canonical GraphQL form, e.g. `"[String!]!"`.
impl serde::Serialize for Type {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Boolean(true) => f.write_str("true"),
            Value::Boolean(false) => f.write_str("false"),
            Value::Enum(name) => f.write_str(name),
            Value::Variable(name) => write!(f, "${name}"),
            Value::String(value) => serialize_string_value(f, value),
            Value::Float(value) => write!(f, "{value}"),
            Value::Int(value) => write!(f, "{value}"),
            Value::List(items) => {
                f.write_str("[")?;
                for (index, item) in items.iter().enumerate() {
                    if index != 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", &**item)?;
                }
                f.write_str("]")
            }
            Value::Object(fields) => {
                f.write_str("{")?;
                for (index, (name, value)) in fields.iter().enumerate() {
                    if index != 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{name}: {}", &**value)?;
                }
                f.write_str("}")
            }
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

fn serialize_string_value(f: &mut fmt::Formatter<'_>, mut str: &str) -> fmt::Result {
    f.write_str("\"")?;
    loop {
        if let Some(i) = str.find(|c| c < ' ' || c == '"' || c == '\\') {
            let (without_escaping, rest) = str.split_at(i);
            f.write_str(without_escaping)?;
            // All characters that need escaping are in the ASCII range,
            // and so take a single byte in UTF-8.
            match rest.as_bytes()[0] {
                b'\x08' => f.write_str("\\b")?,
                b'\t' => f.write_str("\\t")?,
                b'\n' => f.write_str("\\n")?,
                b'\x0C' => f.write_str("\\f")?,
                b'\r' => f.write_str("\\r")?,
                b'"' => f.write_str("\\\"")?,
                b'\\' => f.write_str("\\\\")?,
                byte => write!(f, "\\u{byte:04X}")?,
            }
            str = &rest[1..]
        } else {
            f.write_str(str)?;
            break;
        }
    }
    f.write_str("\"")
}
