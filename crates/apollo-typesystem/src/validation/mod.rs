//! Structural validation of assembled schemas
//!
//! Validation never throws: [`Schema::validate`][crate::Schema::validate]
//! accumulates every discoverable defect into a list of
//! [`SchemaValidationError`]s, each carrying structured
//! [data][DiagnosticData] and zero or more source locations.

use crate::node::SourceSpan;
use std::fmt;

mod diagnostics;

pub use self::diagnostics::DiagnosticData;

/// One structural defect found in a schema.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{data}")]
pub struct SchemaValidationError {
    pub data: DiagnosticData,

    /// Locations of the definitions involved, for diagnostics,
    /// when the definitions carry an AST origin
    pub locations: Vec<SourceSpan>,
}

/// Accumulates validation errors without failing fast.
#[derive(Debug, Clone, Default)]
pub struct DiagnosticList {
    diagnostics: Vec<SchemaValidationError>,
}

impl DiagnosticList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SchemaValidationError> {
        self.diagnostics.iter()
    }

    pub fn into_vec(self) -> Vec<SchemaValidationError> {
        self.diagnostics
    }

    pub(crate) fn push(
        &mut self,
        locations: impl IntoIterator<Item = Option<SourceSpan>>,
        data: DiagnosticData,
    ) {
        self.diagnostics.push(SchemaValidationError {
            data,
            locations: locations.into_iter().flatten().collect(),
        })
    }
}

impl fmt::Display for DiagnosticList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for diagnostic in &self.diagnostics {
            writeln!(f, "{diagnostic}")?
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a DiagnosticList {
    type Item = &'a SchemaValidationError;
    type IntoIter = std::slice::Iter<'a, SchemaValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
