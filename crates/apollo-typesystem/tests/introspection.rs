use apollo_typesystem::ast::Type;
use apollo_typesystem::ast::Value;
use apollo_typesystem::introspection::introspect;
use apollo_typesystem::introspection::introspect_type;
use apollo_typesystem::introspection::introspect_type_with;
use apollo_typesystem::introspection::introspect_with;
use apollo_typesystem::introspection::IntrospectionOptions;
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
use apollo_typesystem::JsonValue;
use apollo_typesystem::Node;
use apollo_typesystem::Schema;
use expect_test::expect;
use pretty_assertions::assert_eq;
use serde_json_bytes::json;

fn test_schema() -> Schema {
    let mut url = ScalarType::new(name!("Url"));
    url.specified_by_url = Some("https://url.spec.whatwg.org/".to_owned());

    let mut season = EnumType::new(name!("Season"));
    for value in [name!("SUMMER"), name!("WINTER")] {
        season
            .values
            .insert(value.clone(), Node::new(EnumValueDefinition::new(value)));
    }
    let mut foo = EnumValueDefinition::new(name!("FOO"));
    foo.deprecation_reason = Some("Just because".to_owned());
    season.values.insert(name!("FOO"), Node::new(foo));

    let mut point = InputObjectType::new(name!("Point"));
    point.fields.insert(
        name!("x"),
        Node::new(InputValueDefinition::new(
            name!("x"),
            Type::new_named(name!("Int")).non_null(),
        )),
    );
    let mut y = InputValueDefinition::new(name!("y"), Type::new_named(name!("Int")));
    y.default_value = Some(DefaultValue::Literal(Node::new(Value::Int(0))));
    point.fields.insert(name!("y"), Node::new(y));

    let mut query = ObjectType::new(name!("Query"));
    query.description = Some("The root of all queries".to_owned());
    let mut field = FieldDefinition::new(name!("season"), Type::new_named(name!("Season")));
    field.arguments.push(Node::new(InputValueDefinition::new(
        name!("at"),
        Type::new_named(name!("Point")),
    )));
    query.fields.insert(name!("season"), field.into());
    query.fields.insert(
        name!("url"),
        FieldDefinition::new(name!("url"), Type::new_named(name!("Url"))).into(),
    );
    let mut old = FieldDefinition::new(name!("old"), Type::new_named(name!("Url")));
    old.deprecation_reason = Some("gone".to_owned());
    query.fields.insert(name!("old"), old.into());

    Schema::builder()
        .description("A schema for introspection tests")
        .query(query)
        .types([
            ExtendedType::from(url),
            ExtendedType::from(season),
            ExtendedType::from(point),
        ])
        .build()
        .unwrap()
}

#[test]
fn schema_response_shape() {
    let schema = test_schema();
    assert!(schema.validate().is_empty());
    let response = introspect(&schema);
    let schema_json = &response["__schema"];
    assert_eq!(
        schema_json["description"].as_str(),
        Some("A schema for introspection tests")
    );
    assert_eq!(schema_json["queryType"]["name"].as_str(), Some("Query"));
    assert_eq!(schema_json["mutationType"], JsonValue::Null);
    assert_eq!(schema_json["subscriptionType"], JsonValue::Null);

    // `__Schema.types` iterates in the schema's type-map order
    let type_names: Vec<&str> = schema_json["types"]
        .as_array()
        .unwrap()
        .iter()
        .map(|ty| ty["name"].as_str().unwrap())
        .collect();
    assert_eq!(
        type_names,
        [
            "Query",
            "Season",
            "Point",
            "Int",
            "Url",
            "Boolean",
            "String",
            "__Schema",
            "__Type",
            "__TypeKind",
            "__Field",
            "__InputValue",
            "__EnumValue",
            "__Directive",
            "__DirectiveLocation",
        ]
    );

    let directive_names: Vec<&str> = schema_json["directives"]
        .as_array()
        .unwrap()
        .iter()
        .map(|directive| directive["name"].as_str().unwrap())
        .collect();
    assert_eq!(directive_names, ["skip", "include", "deprecated", "specifiedBy"]);
}

#[test]
fn scalar_type_introspection() {
    let schema = test_schema();
    let actual = serde_json::to_string_pretty(&introspect_type(&schema, "Url")).unwrap();
    expect![[r#"
        {
          "kind": "SCALAR",
          "name": "Url",
          "description": null,
          "specifiedByURL": "https://url.spec.whatwg.org/",
          "fields": null,
          "interfaces": null,
          "possibleTypes": null,
          "enumValues": null,
          "inputFields": null
        }"#]]
    .assert_eq(&actual);
}

#[test]
fn input_object_introspection() {
    let schema = test_schema();
    let actual = serde_json::to_string_pretty(&introspect_type(&schema, "Point")).unwrap();
    expect![[r#"
        {
          "kind": "INPUT_OBJECT",
          "name": "Point",
          "description": null,
          "specifiedByURL": null,
          "fields": null,
          "interfaces": null,
          "possibleTypes": null,
          "enumValues": null,
          "inputFields": [
            {
              "name": "x",
              "description": null,
              "type": {
                "kind": "NON_NULL",
                "name": null,
                "ofType": {
                  "kind": "SCALAR",
                  "name": "Int",
                  "ofType": null
                }
              },
              "defaultValue": null,
              "isDeprecated": false,
              "deprecationReason": null
            },
            {
              "name": "y",
              "description": null,
              "type": {
                "kind": "SCALAR",
                "name": "Int",
                "ofType": null
              },
              "defaultValue": "0",
              "isDeprecated": false,
              "deprecationReason": null
            }
          ]
        }"#]]
    .assert_eq(&actual);
}

#[test]
fn deprecated_elements_can_be_filtered() {
    let schema = test_schema();
    let enum_values = |include_deprecated: bool| -> Vec<String> {
        let options = IntrospectionOptions {
            include_deprecated,
            ..Default::default()
        };
        introspect_type_with(&schema, "Season", &options)["enumValues"]
            .as_array()
            .unwrap()
            .iter()
            .map(|value| value["name"].as_str().unwrap().to_owned())
            .collect()
    };
    assert_eq!(enum_values(true), ["SUMMER", "WINTER", "FOO"]);
    assert_eq!(enum_values(false), ["SUMMER", "WINTER"]);

    let options = IntrospectionOptions::default();
    let season = introspect_type_with(&schema, "Season", &options);
    let foo = &season["enumValues"].as_array().unwrap()[2];
    assert_eq!(foo["isDeprecated"], JsonValue::Bool(true));
    assert_eq!(foo["deprecationReason"].as_str(), Some("Just because"));

    // Field deprecation filters the same way
    let fields = |include_deprecated: bool| -> Vec<String> {
        let options = IntrospectionOptions {
            include_deprecated,
            ..Default::default()
        };
        introspect_type_with(&schema, "Query", &options)["fields"]
            .as_array()
            .unwrap()
            .iter()
            .map(|field| field["name"].as_str().unwrap().to_owned())
            .collect()
    };
    assert_eq!(fields(true), ["season", "url", "old"]);
    assert_eq!(fields(false), ["season", "url"]);
}

#[test]
fn descriptions_can_be_omitted() {
    let schema = test_schema();
    let options = IntrospectionOptions {
        descriptions: false,
        ..Default::default()
    };
    let response = introspect_with(&schema, &options);
    let schema_json = &response["__schema"];
    assert!(schema_json.as_object().unwrap().get("description").is_none());
    let query = &schema_json["types"].as_array().unwrap()[0];
    assert!(query.as_object().unwrap().get("description").is_none());

    let with_descriptions = introspect(&schema);
    let query = &with_descriptions["__schema"]["types"].as_array().unwrap()[0];
    assert_eq!(
        query["description"].as_str(),
        Some("The root of all queries")
    );
}

#[test]
fn unknown_type_introspects_to_null() {
    let schema = test_schema();
    assert_eq!(introspect_type(&schema, "Missing"), JsonValue::Null);
    assert_eq!(introspect_type(&schema, "season"), JsonValue::Null);
}

#[test]
fn default_values_print_as_literals() {
    let mut strange = InputObjectType::new(name!("Strange"));
    let mut escaped =
        InputValueDefinition::new(name!("escaped"), Type::new_named(name!("String")));
    escaped.default_value = Some(DefaultValue::Literal(Node::new(Value::from(
        "tes\t de\u{C}ault",
    ))));
    strange.fields.insert(name!("escaped"), Node::new(escaped));
    let mut emoji = InputValueDefinition::new(name!("emoji"), Type::new_named(name!("String")));
    emoji.default_value = Some(DefaultValue::Literal(Node::new(Value::from("Emoji: 😀"))));
    strange.fields.insert(name!("emoji"), Node::new(emoji));

    let mut letters = EnumType::new(name!("Letter"));
    letters.values.insert(
        name!("abc"),
        Node::new(EnumValueDefinition::new(name!("abc"))),
    );

    let mut xy = InputObjectType::new(name!("XY"));
    xy.fields.insert(
        name!("x"),
        Node::new(InputValueDefinition::new(
            name!("x"),
            Type::new_named(name!("String")).list(),
        )),
    );
    xy.fields.insert(
        name!("y"),
        Node::new(InputValueDefinition::new(
            name!("y"),
            Type::new_named(name!("Int")),
        )),
    );

    // Pre-coerced defaults are reverse-coerced into literals for printing
    let mut wrapper = InputObjectType::new(name!("Wrapper"));
    let mut pair = InputValueDefinition::new(name!("pair"), Type::new_named(name!("XY")));
    pair.default_value = Some(DefaultValue::Coerced(json!({ "x": ["abc"], "y": 123 })));
    wrapper.fields.insert(name!("pair"), Node::new(pair));
    let mut letter_list = InputValueDefinition::new(
        name!("letters"),
        Type::new_named(name!("Letter")).list(),
    );
    letter_list.default_value = Some(DefaultValue::Coerced(json!(["abc"])));
    wrapper.fields.insert(name!("letters"), Node::new(letter_list));
    let mut nothing = InputValueDefinition::new(name!("nothing"), Type::new_named(name!("Int")));
    nothing.default_value = Some(DefaultValue::Coerced(JsonValue::Null));
    wrapper.fields.insert(name!("nothing"), Node::new(nothing));

    let mut query = ObjectType::new(name!("Query"));
    let mut field = FieldDefinition::new(name!("f"), Type::new_named(name!("String")));
    for (argument, ty) in [
        (name!("strange"), name!("Strange")),
        (name!("wrapper"), name!("Wrapper")),
    ] {
        field
            .arguments
            .push(Node::new(InputValueDefinition::new(
                argument,
                Type::new_named(ty),
            )));
    }
    query.fields.insert(name!("f"), field.into());
    let schema = Schema::builder()
        .query(query)
        .types([
            ExtendedType::from(strange),
            ExtendedType::from(letters),
            ExtendedType::from(xy),
            ExtendedType::from(wrapper),
        ])
        .build()
        .unwrap();

    let default_of = |ty: &str, field: &str| -> JsonValue {
        introspect_type(&schema, ty)["inputFields"]
            .as_array()
            .unwrap()
            .iter()
            .find(|input_field| input_field["name"].as_str() == Some(field))
            .unwrap()["defaultValue"]
            .clone()
    };

    assert_eq!(
        default_of("Strange", "escaped").as_str(),
        Some("\"tes\\t de\\fault\"")
    );
    assert_eq!(
        default_of("Strange", "emoji").as_str(),
        Some("\"Emoji: 😀\"")
    );
    assert_eq!(
        default_of("Wrapper", "pair").as_str(),
        Some("{x: [\"abc\"], y: 123}")
    );
    assert_eq!(default_of("Wrapper", "letters").as_str(), Some("[abc]"));
    assert_eq!(default_of("Wrapper", "nothing").as_str(), Some("null"));
}
