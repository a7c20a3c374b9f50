#![doc = include_str!("../README.md")]

pub mod ast;
pub mod coercion;
pub mod collections;
pub mod coordinate;
mod extensions;
pub mod hooks;
pub mod introspection;
mod name;
mod node;
pub mod schema;
mod suggestion;
pub mod validation;
mod values;

pub use self::coercion::CoercionError;
pub use self::extensions::{ExtensionKey, ExtensionSymbol, Extensions};
pub use self::name::{InvalidNameError, Name, NamedType};
pub use self::node::{FileId, Node, SourceSpan};
pub use self::schema::Schema;
pub use self::validation::SchemaValidationError;
pub use self::values::{serde_json_bytes, JsonMap, JsonValue};
