use std::fmt;
use std::hash;
use std::sync::atomic;
use triomphe::Arc;

/// Integer identifier for the source a definition originated from.
///
/// The type system itself never parses anything: identifiers are minted by
/// whatever produced a definition (typically an external parser), and
/// [`FileId::BUILT_IN`] marks definitions provided by this crate.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FileId {
    id: i64,
}

impl FileId {
    /// The sources of built-in scalars, built-in directives, and introspection types
    pub const BUILT_IN: Self = Self { id: -1 };

    /// Returns a new unique identifier
    pub fn new() -> Self {
        static NEXT: atomic::AtomicI64 = atomic::AtomicI64::new(1);
        Self {
            id: NEXT.fetch_add(1, atomic::Ordering::Relaxed),
        }
    }
}

impl Default for FileId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.id.fmt(f)
    }
}

/// The byte range of an AST node in some source,
/// usable as the opaque "AST origin" of a definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SourceSpan {
    pub file_id: FileId,
    pub offset: usize,
    pub end_offset: usize,
}

impl SourceSpan {
    pub fn new(file_id: FileId, offset: usize, end_offset: usize) -> Self {
        Self {
            file_id,
            offset,
            end_offset,
        }
    }
}

/// Smart pointer to some GraphQL node.
///
/// Thread-safe, reference-counted, and carries an optional [`SourceSpan`].
/// This span notably allows diagnostics to point to relevant parts of input
/// sources when definitions were produced by a parser.
pub struct Node<T>(Arc<NodeInner<T>>);

#[derive(Clone)]
struct NodeInner<T> {
    location: Option<SourceSpan>,
    node: T,
}

impl<T> Node<T> {
    /// Create a new `Node` for something created programatically,
    /// not parsed from a source file
    pub fn new(node: T) -> Self {
        Self(Arc::new(NodeInner {
            location: None,
            node,
        }))
    }

    /// Create a new `Node` for something parsed from the given source location
    pub fn new_parsed(node: T, location: SourceSpan) -> Self {
        Self(Arc::new(NodeInner {
            location: Some(location),
            node,
        }))
    }

    pub fn location(&self) -> Option<SourceSpan> {
        self.0.location
    }

    /// Whether this node is located in [`FileId::BUILT_IN`],
    /// which defines built-in directives, built-in scalars, and introspection types.
    pub fn is_built_in(&self) -> bool {
        self.location().map(|l| l.file_id) == Some(FileId::BUILT_IN)
    }

    /// Returns the given `node` at the same location as `self`
    /// (e.g. for a type conversion).
    pub fn same_location<U>(&self, node: U) -> Node<U> {
        Node(Arc::new(NodeInner {
            location: self.0.location,
            node,
        }))
    }

    /// Returns whether two `Node`s point to the same memory allocation
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// Returns a mutable reference to `T`, cloning it if necessary
    ///
    /// See [`triomphe::Arc::make_mut`].
    pub fn make_mut(&mut self) -> &mut T
    where
        T: Clone,
    {
        &mut Arc::make_mut(&mut self.0).node
    }

    /// Returns a mutable reference to `T` if this `Node` is uniquely owned
    pub fn get_mut(&mut self) -> Option<&mut T> {
        Arc::get_mut(&mut self.0).map(|inner| &mut inner.node)
    }
}

impl<T> std::ops::Deref for Node<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0.node
    }
}

impl<T> Clone for Node<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T: fmt::Debug> fmt::Debug for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(location) = self.location() {
            write!(
                f,
                "@{:?}:{}..{} ",
                location.file_id, location.offset, location.end_offset,
            )?
        }
        self.0.node.fmt(f)
    }
}

impl<T: Eq> Eq for Node<T> {}

impl<T: PartialEq> PartialEq for Node<T> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) // fast path
            || self.0.node == other.0.node // location not included
    }
}

impl<T: hash::Hash> hash::Hash for Node<T> {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.0.node.hash(state) // location not included
    }
}

impl<T> AsRef<T> for Node<T> {
    fn as_ref(&self) -> &T {
        self
    }
}

impl<T> From<T> for Node<T> {
    fn from(node: T) -> Self {
        Self::new(node)
    }
}
