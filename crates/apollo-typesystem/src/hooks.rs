//! User-definable behavior attached to definitions
//!
//! Scalars carry coercion hooks, fields carry resolvers, and abstract types
//! carry runtime type dispatchers. The type system stores these function
//! values and invokes the coercion hooks itself; resolvers and subscribe
//! handlers are stored for an external executor to drive.
//!
//! Hooks are deliberately ignored by `PartialEq` on definition structs:
//! two definitions that only differ in hooks compare equal.

use crate::ast;
use crate::coercion::CoercionError;
use crate::name::Name;
use crate::values::JsonMap;
use crate::values::JsonValue;
use std::fmt;
use std::sync::Arc;

/// An error returned by a [`FieldResolver`] or subscribe handler.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct FieldError {
    pub message: String,
}

impl FieldError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

macro_rules! hooks {
    ($(
        $(#[$attr:meta])*
        $name:ident: ($($arg:ident: $ty:ty),*) -> $ret:ty;
    )*) => {
        $(
            $(#[$attr])*
            #[derive(Clone)]
            pub struct $name(Arc<dyn Fn($($ty),*) -> $ret + Send + Sync>);

            impl $name {
                pub fn new(hook: impl Fn($($ty),*) -> $ret + Send + Sync + 'static) -> Self {
                    Self(Arc::new(hook))
                }

                pub fn call(&self, $($arg: $ty),*) -> $ret {
                    (self.0)($($arg),*)
                }
            }

            impl fmt::Debug for $name {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(concat!(stringify!($name), "(..)"))
                }
            }
        )*
    };
}

hooks! {
    /// `parse_value` on a scalar: coerces a runtime value
    /// (from variables or pre-coerced defaults) to the internal representation.
    InputCoercer: (value: &JsonValue) -> Result<JsonValue, CoercionError>;

    /// `serialize` on a scalar: coerces an internal value produced by a
    /// resolver to the client-visible representation.
    OutputCoercer: (value: &JsonValue) -> Result<JsonValue, CoercionError>;

    /// `parse_literal` on a scalar: coerces a value literal,
    /// with a variable-substitution mapping, to the internal representation.
    ///
    /// A scalar that defines `parse_literal` must also define `parse_value`;
    /// this is checked during schema assembly.
    LiteralCoercer: (value: &ast::Value, variables: &JsonMap) -> Result<JsonValue, CoercionError>;

    /// Resolves one field of one source value, given coerced argument values.
    /// Stored on field definitions for an external executor.
    FieldResolver: (source: &JsonValue, arguments: &JsonMap) -> Result<JsonValue, FieldError>;

    /// `resolve_type` on an interface or union: names the object type
    /// a runtime value belongs to.
    AbstractTypeResolver: (value: &JsonValue) -> Option<Name>;

    /// `is_type_of` on an object type: whether a runtime value
    /// belongs to this type. The per-member alternative to
    /// [`AbstractTypeResolver`] for abstract type dispatch.
    IsTypeOf: (value: &JsonValue) -> bool;

    /// Equality of enum internal values, as used by output coercion
    /// to find the enum value a resolver returned. Defaults to structural
    /// equality of the JSON representation when absent.
    ValueEquality: (a: &JsonValue, b: &JsonValue) -> bool;
}
