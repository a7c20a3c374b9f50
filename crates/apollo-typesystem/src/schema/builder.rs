//! Assembling typed definitions into a [`Schema`]

use crate::collections::IndexMap;
use crate::extensions::ExtensionKey;
use crate::extensions::Extensions;
use crate::introspection::types::introspection_types;
use crate::name;
use crate::schema::built_in;
use crate::schema::DirectiveDefinition;
use crate::schema::ExtendedType;
use crate::schema::Name;
use crate::schema::NamedType;
use crate::schema::ObjectType;
use crate::schema::Schema;
use crate::values::JsonValue;
use crate::Node;
use indexmap::map::Entry;
use std::sync::OnceLock;

/// A problem that makes the supplied definitions impossible
/// to assemble into a schema.
///
/// Unlike [validation errors][Schema::validate], these are reported eagerly:
/// [`SchemaBuilder::build`] fails instead of producing a schema.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    #[error(
        "Schema must contain uniquely named types \
         but contains multiple types named \"{name}\"."
    )]
    DuplicateTypeName { name: Name },

    #[error(
        "Schema must contain uniquely named directives \
         but contains multiple directives named \"@{name}\"."
    )]
    DuplicateDirectiveName { name: Name },

    #[error("cannot find a definition for type \"{name}\", referenced by \"{referencer}\"")]
    UndefinedTypeReference { name: NamedType, referencer: Name },

    #[error("type name \"{name}\" is reserved for schema introspection")]
    ReservedTypeName { name: Name },

    #[error("scalar type \"{name}\" must provide `parse_value` together with `parse_literal`")]
    ParseLiteralWithoutParseValue { name: Name },
}

/// Collects root types, extra types, and directive definitions,
/// then assembles them into a [`Schema`] whose type map contains every
/// transitively reachable type, in discovery order.
#[derive(Debug, Clone, Default)]
pub struct SchemaBuilder {
    pub(crate) description: Option<String>,
    pub(crate) query: Option<Node<ObjectType>>,
    pub(crate) mutation: Option<Node<ObjectType>>,
    pub(crate) subscription: Option<Node<ObjectType>>,
    pub(crate) types: Vec<ExtendedType>,
    pub(crate) directives: Vec<Node<DirectiveDefinition>>,
    pub(crate) extensions: Extensions,
    pub(crate) assume_valid: bool,
}

impl SchemaBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the schema description, introspectable as `__Schema.description`
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the object type of the `query` root operation
    pub fn query(mut self, ty: impl Into<Node<ObjectType>>) -> Self {
        self.query = Some(ty.into());
        self
    }

    /// Set the object type of the `mutation` root operation
    pub fn mutation(mut self, ty: impl Into<Node<ObjectType>>) -> Self {
        self.mutation = Some(ty.into());
        self
    }

    /// Set the object type of the `subscription` root operation
    pub fn subscription(mut self, ty: impl Into<Node<ObjectType>>) -> Self {
        self.subscription = Some(ty.into());
        self
    }

    /// Add type definitions. Every type referenced from a root, another
    /// added type, or a directive argument must be added (built-in scalars
    /// and introspection types are provided implicitly), and added types
    /// are all included in the type map whether referenced or not.
    pub fn types<T: Into<ExtendedType>>(mut self, types: impl IntoIterator<Item = T>) -> Self {
        self.types.extend(types.into_iter().map(Into::into));
        self
    }

    /// Add directive definitions. An explicit definition of a built-in
    /// directive replaces the implicit one.
    pub fn directives<D: Into<Node<DirectiveDefinition>>>(
        mut self,
        directives: impl IntoIterator<Item = D>,
    ) -> Self {
        self.directives.extend(directives.into_iter().map(Into::into));
        self
    }

    /// Attach an extension entry to the schema itself
    pub fn extension(mut self, key: impl Into<ExtensionKey>, value: impl Into<JsonValue>) -> Self {
        self.extensions.insert(key.into(), value.into());
        self
    }

    /// Skip validation: [`Schema::validate`] on the built schema will report
    /// no errors without examining anything.
    pub fn assume_valid(mut self) -> Self {
        self.assume_valid = true;
        self
    }

    pub fn build(self) -> Result<Schema, BuildError> {
        // Everything explicitly supplied, keyed by name. Reachability below
        // only resolves through this pool and the implicit definitions.
        let mut provided = IndexMap::<Name, ExtendedType>::default();
        let mut seeds = Vec::<Name>::new();
        for root in [&self.query, &self.mutation, &self.subscription]
            .into_iter()
            .flatten()
        {
            let def = ExtendedType::Object(root.clone());
            seeds.push(root.name.clone());
            insert_provided(&mut provided, def)?;
        }
        for def in &self.types {
            seeds.push(def.name().clone());
            insert_provided(&mut provided, def.clone())?;
        }

        let mut directive_definitions = built_in::directives().clone();
        for directive in &self.directives {
            match directive_definitions.entry(directive.name.clone()) {
                Entry::Occupied(mut entry) => {
                    if entry.get().is_built_in() {
                        // An explicit definition replaces the implicit built-in
                        entry.insert(directive.clone());
                    } else if !entry.get().ptr_eq(directive) {
                        return Err(BuildError::DuplicateDirectiveName {
                            name: directive.name.clone(),
                        });
                    }
                }
                Entry::Vacant(entry) => {
                    entry.insert(directive.clone());
                }
            }
        }

        let mut types = IndexMap::<NamedType, ExtendedType>::default();
        for seed in &seeds {
            collect_type(&mut types, &provided, seed, seed)?;
        }
        for directive in directive_definitions.values() {
            for argument in &directive.arguments {
                collect_type(
                    &mut types,
                    &provided,
                    argument.ty.inner_named_type(),
                    &directive.name,
                )?;
            }
        }
        // The introspection meta-schema is part of every schema.
        // Walking `__Schema` pulls in the other meta-types,
        // as well as `Boolean` and `String`.
        let meta_root = name!("__Schema");
        collect_type(&mut types, &provided, &meta_root, &meta_root)?;

        for def in types.values() {
            if let ExtendedType::Scalar(scalar) = def {
                if scalar.parse_literal.is_some() && scalar.parse_value.is_none() {
                    return Err(BuildError::ParseLiteralWithoutParseValue {
                        name: scalar.name.clone(),
                    });
                }
            }
        }

        let validation = OnceLock::new();
        if self.assume_valid {
            let _ = validation.set(Vec::new());
        }
        Ok(Schema {
            description: self.description,
            types,
            directive_definitions,
            query_type: self.query.map(|ty| ty.name.clone()),
            mutation_type: self.mutation.map(|ty| ty.name.clone()),
            subscription_type: self.subscription.map(|ty| ty.name.clone()),
            extensions: self.extensions,
            assumed_valid: self.assume_valid,
            implementers: OnceLock::new(),
            validation,
        })
    }
}

impl Schema {
    /// Returns a builder seeded with this schema's definitions.
    ///
    /// Building it again produces an equal schema whose type map
    /// has the same iteration order.
    pub fn to_builder(&self) -> SchemaBuilder {
        SchemaBuilder {
            description: self.description.clone(),
            query: self.query_root().cloned(),
            mutation: self.mutation_root().cloned(),
            subscription: self.subscription_root().cloned(),
            types: self.types.values().cloned().collect(),
            directives: self.directive_definitions.values().cloned().collect(),
            extensions: self.extensions.clone(),
            assume_valid: self.assumed_valid,
        }
    }
}

/// Insert an explicitly-supplied definition into the pool.
///
/// Adding the same definition under the same name twice is idempotent;
/// two distinct definitions sharing a name is an error.
fn insert_provided(
    provided: &mut IndexMap<Name, ExtendedType>,
    def: ExtendedType,
) -> Result<(), BuildError> {
    let type_name = def.name();
    if type_name.is_reserved() {
        // The canonical introspection definitions themselves may flow back
        // through here (e.g. from `Schema::to_builder`); anything else
        // may not use the reserved prefix.
        if introspection_types()
            .get(type_name)
            .is_some_and(|canonical| same_definition(canonical, &def))
        {
            return Ok(());
        }
        return Err(BuildError::ReservedTypeName {
            name: type_name.clone(),
        });
    }
    match provided.entry(type_name.clone()) {
        Entry::Occupied(entry) => {
            if same_definition(entry.get(), &def) {
                Ok(())
            } else {
                Err(BuildError::DuplicateTypeName {
                    name: entry.key().clone(),
                })
            }
        }
        Entry::Vacant(entry) => {
            entry.insert(def);
            Ok(())
        }
    }
}

/// Add the definition of the given name to the type map if it isn't already
/// there, then its references, depth-first in definition order.
fn collect_type(
    types: &mut IndexMap<NamedType, ExtendedType>,
    provided: &IndexMap<Name, ExtendedType>,
    name: &NamedType,
    referencer: &Name,
) -> Result<(), BuildError> {
    if types.contains_key(name.as_str()) {
        return Ok(());
    }
    let def = provided
        .get(name.as_str())
        .or_else(|| built_in::scalars().get(name.as_str()))
        .or_else(|| introspection_types().get(name.as_str()))
        .ok_or_else(|| BuildError::UndefinedTypeReference {
            name: name.clone(),
            referencer: referencer.clone(),
        })?;
    types.insert(name.clone(), def.clone());
    for reference in def.referenced_types() {
        collect_type(types, provided, reference, name)?;
    }
    Ok(())
}

/// Whether two definitions are the same value, not merely equal:
/// both names point to one shared definition.
fn same_definition(a: &ExtendedType, b: &ExtendedType) -> bool {
    match (a, b) {
        (ExtendedType::Scalar(a), ExtendedType::Scalar(b)) => a.ptr_eq(b),
        (ExtendedType::Object(a), ExtendedType::Object(b)) => a.ptr_eq(b),
        (ExtendedType::Interface(a), ExtendedType::Interface(b)) => a.ptr_eq(b),
        (ExtendedType::Union(a), ExtendedType::Union(b)) => a.ptr_eq(b),
        (ExtendedType::Enum(a), ExtendedType::Enum(b)) => a.ptr_eq(b),
        (ExtendedType::InputObject(a), ExtendedType::InputObject(b)) => a.ptr_eq(b),
        _ => false,
    }
}
