//! Free-form metadata attached to definitions
//!
//! Every definition carries an [`Extensions`] mapping that the type system
//! itself never reads. Keys are either plain names or [`ExtensionSymbol`]s,
//! whose identity is stable for the life of the process.

use crate::collections::IndexMap;
use crate::values::JsonValue;
use std::fmt;
use std::sync::atomic;

/// Extension metadata attached to a definition: opaque to the type system,
/// preserved through clones and rebuilds.
pub type Extensions = IndexMap<ExtensionKey, JsonValue>;

#[derive(Clone, PartialEq, Eq, Hash)]
pub enum ExtensionKey {
    Name(String),
    Symbol(ExtensionSymbol),
}

/// A process-unique key, for extension entries that must not collide
/// with entries written by other software.
#[derive(Clone, Copy)]
pub struct ExtensionSymbol {
    id: u64,
    label: &'static str,
}

impl ExtensionSymbol {
    /// Returns a new symbol, distinct from every other symbol in this process.
    /// The label only shows up in `Debug` output.
    pub fn new(label: &'static str) -> Self {
        static NEXT: atomic::AtomicU64 = atomic::AtomicU64::new(0);
        Self {
            id: NEXT.fetch_add(1, atomic::Ordering::Relaxed),
            label,
        }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }
}

impl PartialEq for ExtensionSymbol {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id // label not included
    }
}

impl Eq for ExtensionSymbol {}

impl std::hash::Hash for ExtensionSymbol {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state)
    }
}

impl fmt::Debug for ExtensionSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ExtensionSymbol({}: {:?})", self.id, self.label)
    }
}

impl fmt::Debug for ExtensionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => name.fmt(f),
            Self::Symbol(symbol) => symbol.fmt(f),
        }
    }
}

impl From<&str> for ExtensionKey {
    fn from(name: &str) -> Self {
        Self::Name(name.to_owned())
    }
}

impl From<String> for ExtensionKey {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl From<ExtensionSymbol> for ExtensionKey {
    fn from(symbol: ExtensionSymbol) -> Self {
        Self::Symbol(symbol)
    }
}
