//! The structural schema validator.
//!
//! Every check accumulates into the [`DiagnosticList`]; nothing here fails
//! fast, so one pass reports every defect a schema has.

use crate::ast::Type;
use crate::coercion;
use crate::collections::HashMap;
use crate::collections::HashSet;
use crate::collections::IndexMap;
use crate::collections::IndexSet;
use crate::coordinate::DirectiveCoordinate;
use crate::coordinate::SchemaCoordinate;
use crate::coordinate::TypeAttributeCoordinate;
use crate::coordinate::TypeCoordinate;
use crate::node::SourceSpan;
use crate::schema::DefaultValue;
use crate::schema::EnumType;
use crate::schema::ExtendedType;
use crate::schema::FieldDefinition;
use crate::schema::InputObjectType;
use crate::schema::InputValueDefinition;
use crate::schema::InterfaceType;
use crate::schema::Name;
use crate::schema::ObjectType;
use crate::schema::Schema;
use crate::schema::UnionType;
use crate::validation::DiagnosticData;
use crate::validation::DiagnosticList;
use crate::Node;

pub(crate) fn validate_schema(diagnostics: &mut DiagnosticList, schema: &Schema) {
    validate_root_operations(diagnostics, schema);
    for ty in schema.types.values() {
        // Built-in scalars and introspection types are known to be valid
        if ty.is_built_in() {
            continue;
        }
        if ty.name().is_reserved() {
            diagnostics.push(
                [ty.location()],
                DiagnosticData::ReservedName {
                    name: ty.name().clone(),
                },
            );
        }
        match ty {
            ExtendedType::Scalar(_) => {}
            ExtendedType::Object(def) => validate_object_type(diagnostics, schema, def),
            ExtendedType::Interface(def) => validate_interface_type(diagnostics, schema, def),
            ExtendedType::Union(def) => validate_union_type(diagnostics, schema, def),
            ExtendedType::Enum(def) => validate_enum_type(diagnostics, def),
            ExtendedType::InputObject(def) => validate_input_object_type(diagnostics, schema, def),
        }
    }
    validate_input_object_cycles(diagnostics, schema);
    validate_directive_definitions(diagnostics, schema);
}

fn validate_root_operations(diagnostics: &mut DiagnosticList, schema: &Schema) {
    if schema.query_type.is_none() {
        diagnostics.push([], DiagnosticData::QueryRootOperationType);
    }
    let roots = [
        ("Query", &schema.query_type),
        ("Mutation", &schema.mutation_type),
        ("Subscription", &schema.subscription_type),
    ];
    for (operation, root) in roots {
        let Some(name) = root else { continue };
        match schema.types.get(name.as_str()) {
            None => diagnostics.push(
                [],
                DiagnosticData::UndefinedDefinition { name: name.clone() },
            ),
            Some(def) if !def.is_object() => diagnostics.push(
                [def.location()],
                DiagnosticData::RootOperationObjectType {
                    operation,
                    name: name.clone(),
                },
            ),
            Some(_) => {}
        }
    }
}

fn validate_object_type(
    diagnostics: &mut DiagnosticList,
    schema: &Schema,
    object: &Node<ObjectType>,
) {
    validate_field_definitions(diagnostics, schema, &object.name, &object.fields);

    // https://spec.graphql.org/draft/#sel-FAHZhCFDBAACDA4qe
    if object.fields.is_empty() {
        diagnostics.push(
            [object.location()],
            DiagnosticData::EmptyFieldSet {
                name: object.name.clone(),
            },
        );
    }

    validate_implements_interfaces(
        diagnostics,
        schema,
        &object.name,
        object.location(),
        &object.implements_interfaces,
        &object.fields,
    );
}

fn validate_interface_type(
    diagnostics: &mut DiagnosticList,
    schema: &Schema,
    interface: &Node<InterfaceType>,
) {
    validate_field_definitions(diagnostics, schema, &interface.name, &interface.fields);

    // https://spec.graphql.org/draft/#sel-HAHbnBFBABABxB4a
    if interface.fields.is_empty() {
        diagnostics.push(
            [interface.location()],
            DiagnosticData::EmptyFieldSet {
                name: interface.name.clone(),
            },
        );
    }

    // An interface must not implement itself
    if interface.implements_interfaces.contains(&interface.name) {
        diagnostics.push(
            [interface.location()],
            DiagnosticData::RecursiveInterfaceDefinition {
                name: interface.name.clone(),
            },
        );
    }

    validate_implements_interfaces(
        diagnostics,
        schema,
        &interface.name,
        interface.location(),
        &interface.implements_interfaces,
        &interface.fields,
    );
}

fn validate_field_definitions(
    diagnostics: &mut DiagnosticList,
    schema: &Schema,
    type_name: &Name,
    fields: &IndexMap<Name, Node<FieldDefinition>>,
) {
    let type_coordinate = TypeCoordinate {
        ty: type_name.clone(),
    };
    for field in fields.values() {
        if field.name.is_reserved() {
            diagnostics.push(
                [field.location()],
                DiagnosticData::ReservedName {
                    name: field.name.clone(),
                },
            );
        }
        let field_coordinate = type_coordinate.attribute(field.name.clone());
        match schema.types.get(field.ty.inner_named_type().as_str()) {
            None => diagnostics.push(
                [field.location()],
                DiagnosticData::UndefinedDefinition {
                    name: field.ty.inner_named_type().clone(),
                },
            ),
            Some(def) if !def.is_output_type() => diagnostics.push(
                [field.location(), def.location()],
                DiagnosticData::OutputType {
                    coordinate: field_coordinate.clone(),
                    ty: field.ty.clone(),
                },
            ),
            Some(_) => {}
        }
        for argument in &field.arguments {
            validate_input_value_definition(
                diagnostics,
                schema,
                field_coordinate.argument(argument.name.clone()).into(),
                argument,
            );
        }
    }
}

/// Shared checks for field arguments, directive arguments, and input object
/// fields: reserved names, input type positions, and coercible defaults.
fn validate_input_value_definition(
    diagnostics: &mut DiagnosticList,
    schema: &Schema,
    coordinate: SchemaCoordinate,
    input_value: &Node<InputValueDefinition>,
) {
    if input_value.name.is_reserved() {
        diagnostics.push(
            [input_value.location()],
            DiagnosticData::ReservedName {
                name: input_value.name.clone(),
            },
        );
    }
    match schema.types.get(input_value.ty.inner_named_type().as_str()) {
        None => {
            diagnostics.push(
                [input_value.location()],
                DiagnosticData::UndefinedDefinition {
                    name: input_value.ty.inner_named_type().clone(),
                },
            );
            return;
        }
        Some(def) if !def.is_input_type() => {
            diagnostics.push(
                [input_value.location(), def.location()],
                DiagnosticData::InputType {
                    coordinate,
                    ty: input_value.ty.clone(),
                },
            );
            return;
        }
        Some(_) => {}
    }
    // Only check the default once the type position itself is sound
    let Some(default) = &input_value.default_value else {
        return;
    };
    let coerced = match default {
        DefaultValue::Literal(literal) => coercion::coerce_input_literal(
            schema,
            &input_value.ty,
            literal,
            &crate::values::JsonMap::new(),
        ),
        DefaultValue::Coerced(value) => {
            coercion::coerce_input_value(schema, &input_value.ty, value)
        }
    };
    if let Err(error) = coerced {
        diagnostics.push(
            [input_value.location()],
            DiagnosticData::InvalidDefaultValue {
                coordinate,
                detail: error.message,
            },
        );
    }
}

fn validate_implements_interfaces(
    diagnostics: &mut DiagnosticList,
    schema: &Schema,
    implementer_name: &Name,
    implementer_location: Option<SourceSpan>,
    implements_interfaces: &IndexSet<Name>,
    fields: &IndexMap<Name, Node<FieldDefinition>>,
) {
    let mut interface_definitions = Vec::new();
    for interface_name in implements_interfaces {
        match schema.types.get(interface_name.as_str()) {
            None => diagnostics.push(
                [implementer_location],
                DiagnosticData::UndefinedDefinition {
                    name: interface_name.clone(),
                },
            ),
            Some(ExtendedType::Interface(interface)) => {
                if interface_name != implementer_name {
                    interface_definitions.push(interface)
                }
            }
            Some(def) => diagnostics.push(
                [implementer_location, def.location()],
                DiagnosticData::ImplementsNonInterface {
                    name: implementer_name.clone(),
                    interface: interface_name.clone(),
                },
            ),
        }
    }

    for interface in &interface_definitions {
        // Interfaces implemented by an implemented interface
        // must be implemented directly as well
        for transitive in &interface.implements_interfaces {
            if transitive != implementer_name && !implements_interfaces.contains(transitive) {
                diagnostics.push(
                    [implementer_location],
                    DiagnosticData::TransitiveImplementedInterfaces {
                        name: implementer_name.clone(),
                        missing_interface: transitive.clone(),
                        via_interface: interface.name.clone(),
                    },
                );
            }
        }

        for interface_field in interface.fields.values() {
            let interface_field_coordinate = TypeAttributeCoordinate {
                ty: interface.name.clone(),
                attribute: interface_field.name.clone(),
            };
            let Some(field) = fields.get(interface_field.name.as_str()) else {
                diagnostics.push(
                    [implementer_location, interface_field.location()],
                    DiagnosticData::MissingInterfaceField {
                        interface_field: interface_field_coordinate,
                        implementer: implementer_name.clone(),
                    },
                );
                continue;
            };
            let field_coordinate = TypeAttributeCoordinate {
                ty: implementer_name.clone(),
                attribute: field.name.clone(),
            };

            // Field types are covariant
            if !schema.is_subtype_of(&field.ty, &interface_field.ty) {
                diagnostics.push(
                    [interface_field.location(), field.location()],
                    DiagnosticData::InterfaceFieldTypeMismatch {
                        interface_field: interface_field_coordinate.clone(),
                        expected: interface_field.ty.clone(),
                        implementer_field: field_coordinate.clone(),
                        actual: field.ty.clone(),
                    },
                );
            }

            // Argument types are invariant
            for interface_argument in &interface_field.arguments {
                let Some(argument) = field.argument_by_name(&interface_argument.name) else {
                    diagnostics.push(
                        [interface_argument.location(), field.location()],
                        DiagnosticData::MissingInterfaceFieldArgument {
                            interface_argument: interface_field_coordinate
                                .argument(interface_argument.name.clone()),
                            implementer_field: field_coordinate.clone(),
                        },
                    );
                    continue;
                };
                if argument.ty != interface_argument.ty {
                    diagnostics.push(
                        [interface_argument.location(), argument.location()],
                        DiagnosticData::InterfaceFieldArgumentTypeMismatch {
                            interface_argument: interface_field_coordinate
                                .argument(interface_argument.name.clone()),
                            expected: interface_argument.ty.clone(),
                            implementer_argument: field_coordinate
                                .argument(argument.name.clone()),
                            actual: argument.ty.clone(),
                        },
                    );
                }
            }

            // The implementing field may add arguments, but not required ones
            for argument in &field.arguments {
                if interface_field.argument_by_name(&argument.name).is_none()
                    && argument.is_required()
                {
                    diagnostics.push(
                        [argument.location(), interface_field.location()],
                        DiagnosticData::ExtraRequiredArgument {
                            implementer_field: field_coordinate.clone(),
                            argument: argument.name.clone(),
                            interface_field: interface_field_coordinate.clone(),
                        },
                    );
                }
            }
        }
    }
}

fn validate_union_type(
    diagnostics: &mut DiagnosticList,
    schema: &Schema,
    union_: &Node<UnionType>,
) {
    if union_.members.is_empty() {
        diagnostics.push(
            [union_.location()],
            DiagnosticData::EmptyMemberSet {
                name: union_.name.clone(),
            },
        );
    }
    for member in &union_.members {
        match schema.types.get(member.as_str()) {
            None => diagnostics.push(
                [union_.location()],
                DiagnosticData::UndefinedDefinition {
                    name: member.clone(),
                },
            ),
            Some(def) if !def.is_object() => diagnostics.push(
                [union_.location(), def.location()],
                DiagnosticData::UnionMemberObjectType {
                    name: union_.name.clone(),
                    member: member.clone(),
                },
            ),
            Some(_) => {}
        }
    }
}

fn validate_enum_type(diagnostics: &mut DiagnosticList, enum_: &Node<EnumType>) {
    if enum_.values.is_empty() {
        diagnostics.push(
            [enum_.location()],
            DiagnosticData::EmptyValueSet {
                name: enum_.name.clone(),
            },
        );
    }
    for value in enum_.values.values() {
        if value.value.is_reserved() {
            diagnostics.push(
                [value.location()],
                DiagnosticData::ReservedName {
                    name: value.value.clone(),
                },
            );
        }
        if matches!(value.value.as_str(), "true" | "false" | "null") {
            diagnostics.push(
                [value.location()],
                DiagnosticData::InvalidEnumValue {
                    name: enum_.name.clone(),
                    value: value.value.clone(),
                },
            );
        }
    }
}

fn validate_input_object_type(
    diagnostics: &mut DiagnosticList,
    schema: &Schema,
    input_object: &Node<InputObjectType>,
) {
    if input_object.fields.is_empty() {
        diagnostics.push(
            [input_object.location()],
            DiagnosticData::EmptyInputFieldSet {
                name: input_object.name.clone(),
            },
        );
    }
    let type_coordinate = TypeCoordinate {
        ty: input_object.name.clone(),
    };
    for field in input_object.fields.values() {
        let coordinate = type_coordinate.attribute(field.name.clone());
        validate_input_value_definition(diagnostics, schema, coordinate.clone().into(), field);
        if input_object.is_one_of {
            if field.ty.is_non_null() {
                diagnostics.push(
                    [field.location()],
                    DiagnosticData::OneOfFieldNonNullable {
                        coordinate: coordinate.clone(),
                    },
                );
            }
            if field.default_value.is_some() {
                diagnostics.push(
                    [field.location()],
                    DiagnosticData::OneOfFieldDefault { coordinate },
                );
            }
        }
    }
}

/// An input object may not have a required field whose type chain reaches
/// itself through only non-null edges.
fn validate_input_object_cycles(diagnostics: &mut DiagnosticList, schema: &Schema) {
    let mut visited = HashSet::default();
    let mut path = Vec::new();
    let mut path_index = HashMap::default();
    for ty in schema.types.values() {
        if let ExtendedType::InputObject(def) = ty {
            detect_cycle(
                diagnostics,
                schema,
                def,
                &mut visited,
                &mut path,
                &mut path_index,
            );
        }
    }
}

fn detect_cycle(
    diagnostics: &mut DiagnosticList,
    schema: &Schema,
    input_object: &Node<InputObjectType>,
    visited: &mut HashSet<Name>,
    path: &mut Vec<(Name, Option<SourceSpan>)>,
    path_index: &mut HashMap<Name, usize>,
) {
    if visited.contains(&input_object.name) {
        return;
    }
    visited.insert(input_object.name.clone());
    path_index.insert(input_object.name.clone(), path.len());
    for (field_name, field) in &input_object.fields {
        // Only direct non-null references can make a cycle unsatisfiable;
        // a list or nullable edge breaks it
        let Type::NonNullNamed(inner) = &field.ty else {
            continue;
        };
        let Some(ExtendedType::InputObject(target)) = schema.types.get(inner.as_str()) else {
            continue;
        };
        path.push((field_name.clone(), field.location()));
        if let Some(&cycle_index) = path_index.get(&target.name) {
            let cycle = &path[cycle_index..];
            diagnostics.push(
                cycle.iter().map(|(_, location)| *location).collect::<Vec<_>>(),
                DiagnosticData::RecursiveInputObjectDefinition {
                    name: target.name.clone(),
                    path: cycle
                        .iter()
                        .map(|(name, _)| name.as_str())
                        .collect::<Vec<_>>()
                        .join("."),
                },
            );
        } else {
            detect_cycle(diagnostics, schema, target, visited, path, path_index);
        }
        path.pop();
    }
    path_index.remove(&input_object.name);
}

fn validate_directive_definitions(diagnostics: &mut DiagnosticList, schema: &Schema) {
    for directive in schema.directive_definitions.values() {
        if directive.is_built_in() {
            continue;
        }
        if directive.name.is_reserved() {
            diagnostics.push(
                [directive.location()],
                DiagnosticData::ReservedName {
                    name: directive.name.clone(),
                },
            );
        }
        let coordinate = DirectiveCoordinate {
            directive: directive.name.clone(),
        };
        for argument in &directive.arguments {
            validate_input_value_definition(
                diagnostics,
                schema,
                coordinate.argument(argument.name.clone()).into(),
                argument,
            );
        }
    }
}
