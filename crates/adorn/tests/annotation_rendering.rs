//! Integration tests for the annotation syntax target.

use adorn::{Decoration, Renderer, Syntax, Value};

fn renderer() -> Renderer {
    Renderer::new(Syntax::annotation())
}

#[test]
fn test_bare_annotation() {
    let entity = Decoration::new(r"ORM\Entity");
    assert_eq!(renderer().render(&entity).unwrap(), r"@ORM\Entity");
}

#[test]
fn test_named_parameters_use_equals() {
    let table = Decoration::new(r"ORM\Table").with_content(Value::map([
        ("name", "users"),
        ("schema", "public"),
    ]));
    assert_eq!(
        renderer().render(&table).unwrap(),
        r#"@ORM\Table(name="users", schema="public")"#
    );
}

#[test]
fn test_nested_lists_use_braces() {
    let index = Decoration::new(r"ORM\Index")
        .with_content(Value::map([("columns", Value::seq(["email", "status"]))]));
    assert_eq!(
        renderer().render(&index).unwrap(),
        r#"@ORM\Index(columns={"email", "status"})"#
    );
}

#[test]
fn test_composed_annotations() {
    let index = Decoration::new(r"ORM\Index").with_content(Value::map([
        ("name", Value::from("email_idx")),
        ("columns", Value::seq(["email"])),
    ]));
    let table = Decoration::new(r"ORM\Table").with_content(Value::map([
        ("name", Value::from("users")),
        ("indexes", Value::seq([index])),
    ]));
    assert_eq!(
        renderer().render(&table).unwrap(),
        r#"@ORM\Table(name="users", indexes={@ORM\Index(name="email_idx", columns={"email"})})"#
    );
}

#[test]
fn test_multiline_annotation() {
    let column = Decoration::new(r"ORM\Column")
        .with_content(Value::map([
            ("type", Value::from("string")),
            ("length", Value::from(255)),
        ]))
        .multiline(true);
    assert_eq!(
        renderer().render(&column).unwrap(),
        "@ORM\\Column(type=\"string\",\n    length=255\n)"
    );
}

#[test]
fn test_custom_syntax_constants() {
    // A C#-flavoured target built from the attribute preset.
    let syntax = Syntax::attribute()
        .with_prefix("[")
        .with_suffix("]")
        .with_list_delimiters("{ ", " }")
        .with_key_separator(" = ")
        .with_literals("True", "False", "None");
    let renderer = Renderer::new(syntax);

    let column = Decoration::new("Column").with_content(Value::map([
        ("Nullable", Value::from(false)),
        ("Default", Value::Null),
        ("Names", Value::seq(["a", "b"])),
    ]));
    assert_eq!(
        renderer.render(&column).unwrap(),
        r#"[Column(Nullable = False, Default = None, Names = { "a", "b" })]"#
    );
}
