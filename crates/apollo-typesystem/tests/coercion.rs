use apollo_typesystem::ast::Type;
use apollo_typesystem::ast::Value;
use apollo_typesystem::coercion::coerce_argument_values;
use apollo_typesystem::coercion::coerce_input_literal;
use apollo_typesystem::coercion::coerce_input_value;
use apollo_typesystem::coercion::coerce_result_value;
use apollo_typesystem::coercion::value_from_ast_untyped;
use apollo_typesystem::hooks::InputCoercer;
use apollo_typesystem::hooks::OutputCoercer;
use apollo_typesystem::name;
use apollo_typesystem::schema::DefaultValue;
use apollo_typesystem::schema::EnumType;
use apollo_typesystem::schema::EnumValueDefinition;
use apollo_typesystem::schema::ExtendedType;
use apollo_typesystem::schema::FieldDefinition;
use apollo_typesystem::schema::InputObjectType;
use apollo_typesystem::schema::InputValueDefinition;
use apollo_typesystem::schema::ObjectType;
use apollo_typesystem::schema::ScalarType;
use apollo_typesystem::CoercionError;
use apollo_typesystem::JsonMap;
use apollo_typesystem::JsonValue;
use apollo_typesystem::Name;
use apollo_typesystem::Node;
use apollo_typesystem::Schema;
use pretty_assertions::assert_eq;
use serde_json_bytes::json;

fn color_enum() -> EnumType {
    let mut def = EnumType::new(name!("Color"));
    for value in [name!("RED"), name!("GREEN"), name!("BLUE")] {
        def.values
            .insert(value.clone(), Node::new(EnumValueDefinition::new(value)));
    }
    def
}

fn point_input() -> InputObjectType {
    let mut def = InputObjectType::new(name!("Point"));
    def.fields.insert(
        name!("x"),
        Node::new(InputValueDefinition::new(
            name!("x"),
            Type::new_named(name!("Int")).non_null(),
        )),
    );
    let mut y = InputValueDefinition::new(name!("y"), Type::new_named(name!("Int")));
    y.default_value = Some(DefaultValue::Literal(Node::new(Value::Int(0))));
    def.fields.insert(name!("y"), Node::new(y));
    def
}

/// A schema with one of everything coercion cares about
fn test_schema() -> Schema {
    let mut query = ObjectType::new(name!("Query"));
    let mut field = FieldDefinition::new(name!("everything"), Type::new_named(name!("String")));
    for (argument, ty) in [
        (name!("int"), Type::new_named(name!("Int"))),
        (name!("float"), Type::new_named(name!("Float"))),
        (name!("id"), Type::new_named(name!("ID"))),
        (name!("color"), Type::new_named(name!("Color"))),
        (name!("point"), Type::new_named(name!("Point"))),
        (name!("foo"), Type::new_named(name!("Foo"))),
        (name!("bool"), Type::new_named(name!("Boolean"))),
    ] {
        field
            .arguments
            .push(Node::new(InputValueDefinition::new(argument, ty)));
    }
    query.fields.insert(name!("everything"), field.into());
    Schema::builder()
        .query(query)
        .types([
            ExtendedType::from(color_enum()),
            ExtendedType::from(point_input()),
            ExtendedType::from(ScalarType::new(name!("Foo"))),
        ])
        .build()
        .unwrap()
}

fn named(name: Name) -> Type {
    Type::new_named(name)
}

#[test]
fn hook_less_scalars_coerce_as_identity() {
    let schema = test_schema();
    let foo = named(name!("Foo"));
    assert_eq!(
        coerce_result_value(&schema, &foo, &json!(123)).unwrap(),
        json!(123)
    );
    assert_eq!(
        coerce_input_value(&schema, &foo, &json!("x")).unwrap(),
        json!("x")
    );
    assert_eq!(
        coerce_input_literal(&schema, &foo, &Value::Null, &JsonMap::new()).unwrap(),
        JsonValue::Null
    );
    assert_eq!(
        coerce_input_literal(
            &schema,
            &foo,
            &Value::Object(vec![(name!("anything"), Node::new(Value::Int(1)))]),
            &JsonMap::new()
        )
        .unwrap(),
        json!({ "anything": 1 })
    );
}

#[test]
fn scalar_hooks_are_applied() {
    let mut upper = ScalarType::new(name!("Upper"));
    upper.parse_value = Some(InputCoercer::new(|value| match value.as_str() {
        Some(string) => Ok(JsonValue::from(string.to_uppercase())),
        None => Err(CoercionError::new("Upper cannot represent a non string value")),
    }));
    upper.serialize = Some(OutputCoercer::new(|value| {
        Ok(JsonValue::from(value.to_string()))
    }));
    let mut query = ObjectType::new(name!("Query"));
    query.fields.insert(
        name!("up"),
        FieldDefinition::new(name!("up"), Type::new_named(name!("Upper"))).into(),
    );
    let schema = Schema::builder()
        .query(query)
        .types([upper])
        .build()
        .unwrap();
    let ty = named(name!("Upper"));
    assert_eq!(
        coerce_input_value(&schema, &ty, &json!("abc")).unwrap(),
        json!("ABC")
    );
    // Without `parse_literal`, literals convert to plain values
    // and go through `parse_value`
    assert_eq!(
        coerce_input_literal(&schema, &ty, &Value::from("abc"), &JsonMap::new()).unwrap(),
        json!("ABC")
    );
    assert_eq!(
        coerce_input_value(&schema, &ty, &json!(1)).unwrap_err().message,
        "Upper cannot represent a non string value"
    );
    assert_eq!(
        coerce_result_value(&schema, &ty, &json!(true)).unwrap(),
        json!("true")
    );
}

#[test]
fn int_rules() {
    let schema = test_schema();
    let int = named(name!("Int"));
    assert_eq!(coerce_input_value(&schema, &int, &json!(5)).unwrap(), json!(5));
    assert_eq!(
        coerce_input_value(&schema, &int, &json!(2147483648_i64))
            .unwrap_err()
            .message,
        "Int cannot represent non 32-bit signed integer value: 2147483648"
    );
    assert_eq!(
        coerce_input_value(&schema, &int, &json!(1.5)).unwrap_err().message,
        "Int cannot represent non-integer value: 1.5"
    );
    assert_eq!(
        coerce_input_value(&schema, &int, &json!("3")).unwrap_err().message,
        "Int cannot represent non-integer value: \"3\""
    );
    // Output coercion accepts numeric strings and booleans
    assert_eq!(coerce_result_value(&schema, &int, &json!("3")).unwrap(), json!(3));
    assert_eq!(coerce_result_value(&schema, &int, &json!(true)).unwrap(), json!(1));
}

#[test]
fn float_string_boolean_id_rules() {
    let schema = test_schema();
    let float = named(name!("Float"));
    assert_eq!(
        coerce_input_value(&schema, &float, &json!(5)).unwrap(),
        json!(5)
    );
    assert_eq!(
        coerce_input_value(&schema, &float, &json!("5")).unwrap_err().message,
        "Float cannot represent non numeric value: \"5\""
    );

    let string = named(name!("String"));
    assert_eq!(
        coerce_input_value(&schema, &string, &json!(5)).unwrap_err().message,
        "String cannot represent a non string value: 5"
    );
    assert_eq!(
        coerce_result_value(&schema, &string, &json!(5)).unwrap(),
        json!("5")
    );

    let boolean = named(name!("Boolean"));
    assert_eq!(
        coerce_input_value(&schema, &boolean, &json!("true"))
            .unwrap_err()
            .message,
        "Boolean cannot represent a non boolean value: \"true\""
    );

    let id = named(name!("ID"));
    assert_eq!(
        coerce_input_value(&schema, &id, &json!(4)).unwrap(),
        json!("4")
    );
    assert_eq!(
        coerce_input_value(&schema, &id, &json!("abc-123")).unwrap(),
        json!("abc-123")
    );
    assert_eq!(
        coerce_input_value(&schema, &id, &json!(true)).unwrap_err().message,
        "ID cannot represent value: true"
    );
}

#[test]
fn non_null_rejects_null() {
    let schema = test_schema();
    let int = named(name!("Int")).non_null();
    assert_eq!(
        coerce_input_value(&schema, &int, &JsonValue::Null)
            .unwrap_err()
            .message,
        "Expected non-nullable type \"Int!\" not to be null."
    );
    assert_eq!(
        coerce_result_value(&schema, &int, &JsonValue::Null)
            .unwrap_err()
            .message,
        "Expected non-nullable type \"Int!\" not to be null."
    );
    assert_eq!(
        coerce_input_literal(&schema, &int, &Value::Null, &JsonMap::new())
            .unwrap_err()
            .message,
        "Expected non-nullable type \"Int!\" not to be null."
    );
    // Nullable types keep the explicit null
    assert_eq!(
        coerce_input_value(&schema, &named(name!("Int")), &JsonValue::Null).unwrap(),
        JsonValue::Null
    );
}

#[test]
fn lists_wrap_single_values() {
    let schema = test_schema();
    let ints = named(name!("Int")).list();
    assert_eq!(
        coerce_input_value(&schema, &ints, &json!([1, 2, 3])).unwrap(),
        json!([1, 2, 3])
    );
    assert_eq!(
        coerce_input_value(&schema, &ints, &json!(42)).unwrap(),
        json!([42])
    );
    assert_eq!(
        coerce_result_value(&schema, &ints, &json!(42)).unwrap(),
        json!([42])
    );
    assert_eq!(
        coerce_input_literal(&schema, &ints, &Value::Int(42), &JsonMap::new()).unwrap(),
        json!([42])
    );
    let nested = named(name!("Int")).list().list();
    assert_eq!(
        coerce_input_value(&schema, &nested, &json!(7)).unwrap(),
        json!([[7]])
    );
    assert_eq!(
        coerce_input_value(&schema, &ints, &json!([1, "two"]))
            .unwrap_err()
            .message,
        "Int cannot represent non-integer value: \"two\""
    );
}

#[test]
fn enum_input_coercion() {
    let schema = test_schema();
    let color = named(name!("Color"));
    assert_eq!(
        coerce_input_value(&schema, &color, &json!("GREEN")).unwrap(),
        json!("GREEN")
    );
    assert_eq!(
        coerce_input_value(&schema, &color, &json!("GREEM"))
            .unwrap_err()
            .message,
        "Value \"GREEM\" does not exist in \"Color\" enum. \
         Did you mean the enum value \"GREEN\"?"
    );
    assert_eq!(
        coerce_input_value(&schema, &color, &json!(3)).unwrap_err().message,
        "Enum \"Color\" cannot represent non-string value: 3."
    );
}

#[test]
fn enum_literal_coercion() {
    let schema = test_schema();
    let color = named(name!("Color"));
    assert_eq!(
        coerce_input_literal(&schema, &color, &Value::Enum(name!("RED")), &JsonMap::new())
            .unwrap(),
        json!("RED")
    );
    // A string literal is not an enum literal
    assert_eq!(
        coerce_input_literal(&schema, &color, &Value::from("RED"), &JsonMap::new())
            .unwrap_err()
            .message,
        "Enum \"Color\" cannot represent non-enum value: \"RED\". \
         Did you mean the enum value \"RED\"?"
    );
}

#[test]
fn enum_output_coercion_round_trips() {
    let schema = test_schema();
    let color = named(name!("Color"));
    for value_name in ["RED", "GREEN", "BLUE"] {
        let internal = coerce_input_value(&schema, &color, &json!(value_name)).unwrap();
        let serialized = coerce_result_value(&schema, &color, &internal).unwrap();
        assert_eq!(serialized, json!(value_name));
    }
    assert_eq!(
        coerce_result_value(&schema, &color, &json!("MAGENTA"))
            .unwrap_err()
            .message,
        "Enum \"Color\" cannot represent value: \"MAGENTA\""
    );
}

#[test]
fn enum_custom_internal_values() {
    let mut status = EnumType::new(name!("Status"));
    let mut open = EnumValueDefinition::new(name!("OPEN"));
    open.internal = json!(1);
    let mut closed = EnumValueDefinition::new(name!("CLOSED"));
    closed.internal = json!(2);
    status.values.insert(name!("OPEN"), Node::new(open));
    status.values.insert(name!("CLOSED"), Node::new(closed));

    let mut query = ObjectType::new(name!("Query"));
    query.fields.insert(
        name!("status"),
        FieldDefinition::new(name!("status"), Type::new_named(name!("Status"))).into(),
    );
    let schema = Schema::builder()
        .query(query)
        .types([status])
        .build()
        .unwrap();
    let ty = named(name!("Status"));
    assert_eq!(
        coerce_input_value(&schema, &ty, &json!("OPEN")).unwrap(),
        json!(1)
    );
    assert_eq!(
        coerce_result_value(&schema, &ty, &json!(2)).unwrap(),
        json!("CLOSED")
    );
    assert_eq!(
        coerce_result_value(&schema, &ty, &json!(3)).unwrap_err().message,
        "Enum \"Status\" cannot represent value: 3"
    );
}

#[test]
fn input_object_coercion() {
    let schema = test_schema();
    let point = named(name!("Point"));
    // Defaults fill omitted fields
    assert_eq!(
        coerce_input_value(&schema, &point, &json!({ "x": 1 })).unwrap(),
        json!({ "x": 1, "y": 0 })
    );
    assert_eq!(
        coerce_input_value(&schema, &point, &json!({ "x": 1, "y": 2 })).unwrap(),
        json!({ "x": 1, "y": 2 })
    );
    assert_eq!(
        coerce_input_value(&schema, &point, &json!({ "y": 2 }))
            .unwrap_err()
            .message,
        "Field \"Point.x\" of required type \"Int!\" was not provided."
    );
    assert_eq!(
        coerce_input_value(&schema, &point, &json!({ "x": 1, "z": 3 }))
            .unwrap_err()
            .message,
        "Field \"z\" is not defined by type \"Point\". Did you mean \"x\" or \"y\"?"
    );
    assert_eq!(
        coerce_input_value(&schema, &point, &json!({ "x": 1, "xx": 3 }))
            .unwrap_err()
            .message,
        "Field \"xx\" is not defined by type \"Point\". Did you mean \"x\"?"
    );
    assert_eq!(
        coerce_input_value(&schema, &point, &json!("nope")).unwrap_err().message,
        "Expected type \"Point\" to be an object."
    );
}

#[test]
fn input_object_literal_coercion_with_variables() {
    let schema = test_schema();
    let point = named(name!("Point"));
    let mut variables = JsonMap::new();
    variables.insert("x", json!(7));

    let literal = Value::Object(vec![
        (name!("x"), Node::new(Value::Variable(name!("x")))),
        (name!("y"), Node::new(Value::Int(2))),
    ]);
    assert_eq!(
        coerce_input_literal(&schema, &point, &literal, &variables).unwrap(),
        json!({ "x": 7, "y": 2 })
    );

    // An unprovided variable behaves as an omitted field: the default applies
    let literal = Value::Object(vec![
        (name!("x"), Node::new(Value::Int(1))),
        (name!("y"), Node::new(Value::Variable(name!("missing")))),
    ]);
    assert_eq!(
        coerce_input_literal(&schema, &point, &literal, &variables).unwrap(),
        json!({ "x": 1, "y": 0 })
    );

    // A missing variable for a required field is an error
    let literal = Value::Object(vec![(
        name!("x"),
        Node::new(Value::Variable(name!("missing"))),
    )]);
    assert_eq!(
        coerce_input_literal(&schema, &point, &literal, &JsonMap::new())
            .unwrap_err()
            .message,
        "Field \"Point.x\" of required type \"Int!\" was not provided."
    );
}

#[test]
fn one_of_input_coercion() {
    let mut filter = InputObjectType::new(name!("Filter"));
    filter.is_one_of = true;
    filter.fields.insert(
        name!("byId"),
        Node::new(InputValueDefinition::new(
            name!("byId"),
            Type::new_named(name!("ID")),
        )),
    );
    filter.fields.insert(
        name!("byName"),
        Node::new(InputValueDefinition::new(
            name!("byName"),
            Type::new_named(name!("String")),
        )),
    );
    let mut query = ObjectType::new(name!("Query"));
    let mut field = FieldDefinition::new(name!("find"), Type::new_named(name!("String")));
    field.arguments.push(Node::new(InputValueDefinition::new(
        name!("filter"),
        Type::new_named(name!("Filter")),
    )));
    query.fields.insert(name!("find"), field.into());
    let schema = Schema::builder()
        .query(query)
        .types([filter])
        .build()
        .unwrap();

    let ty = named(name!("Filter"));
    assert_eq!(
        coerce_input_value(&schema, &ty, &json!({ "byId": "4" })).unwrap(),
        json!({ "byId": "4" })
    );
    assert_eq!(
        coerce_input_value(&schema, &ty, &json!({ "byId": "4", "byName": "x" }))
            .unwrap_err()
            .message,
        "Exactly one key must be specified for OneOf type \"Filter\"."
    );
    assert_eq!(
        coerce_input_value(&schema, &ty, &json!({})).unwrap_err().message,
        "Exactly one key must be specified for OneOf type \"Filter\"."
    );
    assert_eq!(
        coerce_input_value(&schema, &ty, &json!({ "byId": null }))
            .unwrap_err()
            .message,
        "Field \"byId\" must be non-null."
    );
}

#[test]
fn variables_substitute_into_literals() {
    let schema = test_schema();
    let int = named(name!("Int"));
    let mut variables = JsonMap::new();
    variables.insert("n", json!(3));
    assert_eq!(
        coerce_input_literal(&schema, &int, &Value::Variable(name!("n")), &variables).unwrap(),
        json!(3)
    );
    // Nullable type, missing variable: null
    assert_eq!(
        coerce_input_literal(&schema, &int, &Value::Variable(name!("m")), &variables).unwrap(),
        JsonValue::Null
    );
    // Non-null type, missing variable: error
    assert_eq!(
        coerce_input_literal(
            &schema,
            &int.clone().non_null(),
            &Value::Variable(name!("m")),
            &variables
        )
        .unwrap_err()
        .message,
        "Missing variable \"$m\" for non-null type \"Int!\"."
    );
}

#[test]
fn argument_coercion() {
    let mut field = FieldDefinition::new(name!("search"), Type::new_named(name!("String")));
    let mut limit = InputValueDefinition::new(name!("limit"), Type::new_named(name!("Int")));
    limit.default_value = Some(DefaultValue::Literal(Node::new(Value::Int(10))));
    field.arguments.push(Node::new(limit));
    field.arguments.push(Node::new(InputValueDefinition::new(
        name!("term"),
        Type::new_named(name!("String")).non_null(),
    )));
    let mut query = ObjectType::new(name!("Query"));
    query.fields.insert(name!("search"), field.into());
    let schema = Schema::builder().query(query).build().unwrap();
    let field = &schema.query_root().unwrap().fields["search"];

    // Omitted arguments take their defaults
    let arguments = [(name!("term"), Node::new(Value::from("cats")))];
    assert_eq!(
        coerce_argument_values(&schema, field, &arguments, &JsonMap::new()).unwrap(),
        *json!({ "limit": 10, "term": "cats" }).as_object().unwrap()
    );

    // An explicit null is kept for a nullable argument
    let arguments = [
        (name!("term"), Node::new(Value::from("cats"))),
        (name!("limit"), Node::new(Value::Null)),
    ];
    let coerced = coerce_argument_values(&schema, field, &arguments, &JsonMap::new()).unwrap();
    assert_eq!(coerced["limit"], JsonValue::Null);

    // An explicit null for a non-null argument is an error
    let arguments = [(name!("term"), Node::new(Value::Null))];
    assert_eq!(
        coerce_argument_values(&schema, field, &arguments, &JsonMap::new())
            .unwrap_err()
            .message,
        "Expected non-nullable type \"String!\" not to be null."
    );

    // A missing required argument is an error
    assert_eq!(
        coerce_argument_values(&schema, field, &[], &JsonMap::new())
            .unwrap_err()
            .message,
        "Argument \"term\" of required type \"String!\" was not provided."
    );

    // An unprovided variable behaves as an omitted argument
    let arguments = [
        (name!("term"), Node::new(Value::from("cats"))),
        (name!("limit"), Node::new(Value::Variable(name!("limit")))),
    ];
    let coerced = coerce_argument_values(&schema, field, &arguments, &JsonMap::new()).unwrap();
    assert_eq!(coerced["limit"], json!(10));
}

#[test]
fn untyped_literal_conversion() {
    let mut variables = JsonMap::new();
    variables.insert("v", json!([1, 2]));
    let literal = Value::Object(vec![
        (name!("a"), Node::new(Value::Enum(name!("UP")))),
        (name!("b"), Node::new(Value::Variable(name!("v")))),
        (
            name!("c"),
            Node::new(Value::List(vec![Node::new(Value::from(1.5))])),
        ),
    ]);
    assert_eq!(
        value_from_ast_untyped(&literal, &variables),
        json!({ "a": "UP", "b": [1, 2], "c": [1.5] })
    );
}
