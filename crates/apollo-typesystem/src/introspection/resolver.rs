//! Field-resolver abstraction for the introspection meta-types

use crate::values::JsonMap;
use crate::values::JsonValue;

/// A GraphQL object whose fields can be resolved on demand
pub(crate) type ObjectValue<'a> = dyn Resolver + 'a;

/// Abstraction for implementing field resolvers. Used through [`ObjectValue`].
///
/// Use the [`impl_resolver!`] macro to implement this trait
/// with reduced boilerplate.
pub(crate) trait Resolver {
    /// Returns the name of the concrete object type this resolver represents
    fn type_name(&self) -> &'static str;

    /// Resolves a field of this object with the given arguments
    fn resolve_field<'a>(
        &'a self,
        field_name: &str,
        arguments: &JsonMap,
    ) -> Result<ResolvedValue<'a>, ResolveError>;
}

pub(crate) struct ResolveError {
    pub(crate) message: String,
}

impl ResolveError {
    pub(crate) fn unknown_field(field_name: &str, type_name: &str) -> Self {
        Self {
            message: format!("unexpected field name: {field_name} in type {type_name}"),
        }
    }
}

impl std::fmt::Display for ResolveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// The value of a resolved field
pub(crate) enum ResolvedValue<'a> {
    /// Null, a leaf value, or an enum value represented as a string
    Leaf(JsonValue),

    /// Expected where the field type is an object type
    Object(Box<ObjectValue<'a>>),

    /// Expected where the field type is a list type
    List(Vec<ResolvedValue<'a>>),
}

impl<'a> ResolvedValue<'a> {
    /// Construct a null leaf resolved value
    pub(crate) fn null() -> Self {
        Self::Leaf(JsonValue::Null)
    }

    /// Construct a leaf resolved value from something that is convertible to JSON
    pub(crate) fn leaf(json: impl Into<JsonValue>) -> Self {
        Self::Leaf(json.into())
    }

    /// Construct an object resolved value from the resolver for that object
    pub(crate) fn object(resolver: impl Resolver + 'a) -> Self {
        Self::Object(Box::new(resolver))
    }

    /// Construct an object resolved value or null, from an optional resolver
    pub(crate) fn opt_object(opt_resolver: Option<impl Resolver + 'a>) -> Self {
        match opt_resolver {
            Some(resolver) => Self::Object(Box::new(resolver)),
            None => Self::null(),
        }
    }

    /// Construct a list resolved value from an iterator
    pub(crate) fn list(iter: impl IntoIterator<Item = Self>) -> Self {
        Self::List(iter.into_iter().collect())
    }
}

/// Implement the [`Resolver`] trait for one meta-type.
///
/// Each `fn` is one field; `(&self_)` receives the resolver,
/// `(&self_, args)` also receives coerced field arguments.
macro_rules! impl_resolver {
    (
        @body $self_expr:expr, $args_expr:expr, (), $body:block
    ) => {{
        let _ = $args_expr;
        $body
    }};
    (
        @body $self_expr:expr, $args_expr:expr, (&$self_:ident), $body:block
    ) => {{
        let $self_ = $self_expr;
        let _ = $args_expr;
        $body
    }};
    (
        @body $self_expr:expr, $args_expr:expr, (&$self_:ident, $args:ident), $body:block
    ) => {{
        let $self_ = $self_expr;
        let $args = $args_expr;
        $body
    }};
    (
        for $ty:ty:

        __typename = $type_name:expr;

        $(
            fn $field:tt($($params:tt)*) $body:block
        )*
    ) => {
        impl $crate::introspection::resolver::Resolver for $ty {
            fn type_name(&self) -> &'static str {
                $type_name
            }

            fn resolve_field<'a>(
                &'a self,
                field_name: &str,
                arguments: &$crate::values::JsonMap,
            ) -> Result<
                $crate::introspection::resolver::ResolvedValue<'a>,
                $crate::introspection::resolver::ResolveError,
            > {
                $(
                    if field_name == stringify!($field) {
                        return impl_resolver!(@body self, arguments, ($($params)*), $body);
                    }
                )*
                Err($crate::introspection::resolver::ResolveError::unknown_field(
                    field_name,
                    self.type_name(),
                ))
            }
        }
    };
}

pub(crate) use impl_resolver;
