use apollo_typesystem::ast::Type;
use apollo_typesystem::ast::Value;
use apollo_typesystem::name;
use apollo_typesystem::schema::DefaultValue;
use apollo_typesystem::schema::EnumValueDefinition;
use apollo_typesystem::schema::InputValueDefinition;
use apollo_typesystem::ExtensionKey;
use apollo_typesystem::ExtensionSymbol;
use apollo_typesystem::JsonValue;
use apollo_typesystem::Node;

#[test]
fn type_display_is_canonical() {
    let ty = Type::new_named(name!("String"));
    assert_eq!(ty.to_string(), "String");
    assert_eq!(ty.clone().non_null().to_string(), "String!");
    assert_eq!(ty.clone().non_null().list().to_string(), "[String!]");
    assert_eq!(ty.clone().non_null().list().non_null().to_string(), "[String!]!");
    assert_eq!(ty.list().list().to_string(), "[[String]]");
}

#[test]
fn type_serializes_to_its_canonical_form() {
    let ty = Type::new_named(name!("String")).non_null().list().non_null();
    assert_eq!(serde_json::to_string(&ty).unwrap(), "\"[String!]!\"");
}

#[test]
fn non_null_never_wraps_non_null() {
    let ty = Type::new_named(name!("Int")).non_null().non_null();
    assert_eq!(ty.to_string(), "Int!");
    let list = Type::new_named(name!("Int")).list().non_null().non_null();
    assert_eq!(list.to_string(), "[Int]!");
}

#[test]
fn unwrapping() {
    let ty = Type::new_named(name!("Int")).non_null().list().non_null();
    // One non-null layer at a time
    assert_eq!(ty.clone().nullable().to_string(), "[Int!]");
    // All the way to the underlying named type
    assert_eq!(ty.inner_named_type(), "Int");
    assert!(ty.is_non_null());
    assert!(ty.is_list());
    assert!(!ty.is_named());
    assert_eq!(ty.item_type().unwrap().to_string(), "Int!");
}

#[test]
fn wrapper_assignability() {
    let int = Type::new_named(name!("Int"));
    assert!(int.is_assignable_to(&int));
    assert!(int.clone().non_null().is_assignable_to(&int));
    assert!(!int.clone().is_assignable_to(&int.clone().non_null()));
    assert!(int.clone().non_null().list().is_assignable_to(&int.clone().list()));
    assert!(!int.clone().list().is_assignable_to(&int));
    assert!(!int.clone().is_assignable_to(&Type::new_named(name!("Float"))));
}

#[test]
fn required_arguments_and_input_fields() {
    let nullable = InputValueDefinition::new(name!("a"), Type::new_named(name!("Int")));
    assert!(!nullable.is_required());

    let non_null =
        InputValueDefinition::new(name!("b"), Type::new_named(name!("Int")).non_null());
    assert!(non_null.is_required());

    let mut with_default =
        InputValueDefinition::new(name!("c"), Type::new_named(name!("Int")).non_null());
    with_default.default_value = Some(DefaultValue::Literal(Node::new(Value::Int(3))));
    assert!(!with_default.is_required());
}

#[test]
fn enum_values_default_their_internal_representation_to_the_name() {
    let value = EnumValueDefinition::new(name!("NORTH"));
    assert_eq!(value.internal, JsonValue::from("NORTH"));
}

#[test]
fn value_display_is_canonical() {
    assert_eq!(Value::Null.to_string(), "null");
    assert_eq!(Value::Boolean(true).to_string(), "true");
    assert_eq!(Value::Int(123).to_string(), "123");
    assert_eq!(Value::from(0.5).to_string(), "0.5");
    assert_eq!(Value::Enum(name!("NORTH")).to_string(), "NORTH");
    assert_eq!(Value::Variable(name!("var")).to_string(), "$var");
    assert_eq!(Value::from("plain").to_string(), "\"plain\"");
    assert_eq!(
        Value::from("tes\t de\u{C}ault").to_string(),
        "\"tes\\t de\\fault\""
    );
    assert_eq!(Value::from("Emoji: 😀").to_string(), "\"Emoji: 😀\"");
    assert_eq!(
        Value::from("quotes \" and \\ slashes").to_string(),
        "\"quotes \\\" and \\\\ slashes\""
    );
    let list = Value::List(vec![Node::new(Value::Enum(name!("abc")))]);
    assert_eq!(list.to_string(), "[abc]");
    let object = Value::Object(vec![
        (
            name!("x"),
            Node::new(Value::List(vec![Node::new(Value::from("abc"))])),
        ),
        (name!("y"), Node::new(Value::Int(123))),
    ]);
    assert_eq!(object.to_string(), "{x: [\"abc\"], y: 123}");
}

#[test]
fn extension_keys() {
    let symbol = ExtensionSymbol::new("private marker");
    let other = ExtensionSymbol::new("private marker");
    // Two symbols are never the same key, even with the same label
    assert_ne!(ExtensionKey::from(symbol), ExtensionKey::from(other));
    assert_eq!(ExtensionKey::from(symbol), ExtensionKey::from(symbol));
    assert_eq!(ExtensionKey::from("meta"), ExtensionKey::from("meta"));
    assert_ne!(ExtensionKey::from("meta"), ExtensionKey::from(symbol));
}

#[test]
fn nodes_compare_by_content_not_location() {
    use apollo_typesystem::FileId;
    use apollo_typesystem::SourceSpan;

    let plain = Node::new(Value::Int(1));
    let located = Node::new_parsed(Value::Int(1), SourceSpan::new(FileId::new(), 0, 1));
    assert_eq!(plain, located);
    assert_eq!(located.location().unwrap().offset, 0);
    assert!(!plain.ptr_eq(&located));
    assert!(plain.ptr_eq(&plain.clone()));
}
