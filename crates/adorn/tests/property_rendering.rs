//! Property tests for the rendering laws.

use adorn::{render, Decoration, Renderer, Syntax, Value};
use proptest::prelude::*;

// Scalars only; floats kept finite since non-finite floats are a render error.
fn scalar_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::Int),
        (-1.0e9..1.0e9f64).prop_map(Value::Float),
        "[a-zA-Z0-9_ '\"\\\\]{0,12}".prop_map(Value::Str),
    ]
}

// Arbitrary value trees up to 3 levels deep.
fn value_strategy() -> impl Strategy<Value = Value> {
    scalar_strategy().prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Seq),
            prop::collection::vec(("[a-z]{1,6}", inner), 0..4).prop_map(Value::Map),
        ]
    })
}

proptest! {
    #[test]
    fn test_rendering_is_deterministic(value in value_strategy(), multiline in any::<bool>()) {
        let decoration = Decoration::new("Test")
            .with_content(value)
            .multiline(multiline);
        let renderer = Renderer::default();
        prop_assert_eq!(
            renderer.render(&decoration).unwrap(),
            renderer.render(&decoration).unwrap()
        );
    }

    #[test]
    fn test_output_is_wrapped_in_decoration_delimiters(value in value_strategy()) {
        let rendered = render(&Decoration::new("Test").with_content(value)).unwrap();
        prop_assert!(rendered.starts_with("#[Test"));
        prop_assert!(rendered.ends_with(']'));
    }

    #[test]
    fn test_dense_integer_keyed_map_matches_sequence(
        items in prop::collection::vec(value_strategy(), 0..5)
    ) {
        let map = Value::Map(
            items
                .iter()
                .cloned()
                .enumerate()
                .map(|(i, v)| (i.to_string(), v))
                .collect(),
        );
        let seq = Value::Seq(items);
        prop_assert_eq!(
            render(&Decoration::new("Order").with_content(map)).unwrap(),
            render(&Decoration::new("Order").with_content(seq)).unwrap()
        );
    }

    #[test]
    fn test_multiline_is_ignored_below_two_entries(scalar in scalar_strategy()) {
        let single = Value::map([("only", scalar)]);
        let plain = render(&Decoration::new("Test").with_content(single.clone())).unwrap();
        let multi = render(
            &Decoration::new("Test").with_content(single).multiline(true)
        ).unwrap();
        prop_assert_eq!(plain, multi);
    }

    #[test]
    fn test_annotation_target_is_deterministic(value in value_strategy()) {
        let decoration = Decoration::new(r"ORM\Test").with_content(value);
        let renderer = Renderer::new(Syntax::annotation());
        prop_assert_eq!(
            renderer.render(&decoration).unwrap(),
            renderer.render(&decoration).unwrap()
        );
    }
}
