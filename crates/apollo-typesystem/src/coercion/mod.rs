//! Value coercion in all three directions
//!
//! * [`coerce_input_value`]: runtime values (from variables or pre-coerced
//!   defaults) to the internal representation
//! * [`coerce_input_literal`]: value literals, with variable substitution,
//!   to the internal representation
//! * [`coerce_result_value`]: internal values produced by resolvers
//!   to the client-visible representation
//!
//! Plus the reverse direction used for printing defaults in introspection:
//! [`value_to_literal`].
//!
//! Errors are local: they are returned to the caller (typically an executor
//! or a variable coercer), which decides whether to record them as partial
//! results or abort.

use crate::node::SourceSpan;

mod input;
mod literal;
mod output;

pub use self::input::coerce_argument_values;
pub use self::input::coerce_default_value;
pub use self::input::coerce_input_value;
pub use self::literal::coerce_input_literal;
pub use self::literal::value_from_ast_untyped;
pub use self::literal::value_to_literal;
pub use self::output::coerce_result_value;

/// An invalid value was provided for a type.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct CoercionError {
    pub message: String,

    /// Locations of the literals or definitions involved, when known
    pub locations: Vec<SourceSpan>,
}

impl CoercionError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            locations: Vec::new(),
        }
    }

    pub(crate) fn at(mut self, location: Option<SourceSpan>) -> Self {
        self.locations.extend(location);
        self
    }
}
