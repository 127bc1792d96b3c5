use optional_value::{omit_absent, Option};
use serde::{Deserialize, Serialize};
use serde_json::json;

#[omit_absent]
#[derive(Serialize, Deserialize, PartialEq, Debug)]
struct Foo {
    a: Option<u32>,
    b: Option<u32>,
    #[keep_if_absent]
    c: Option<u32>,
    d: std::option::Option<String>,
    meow: f32,
}

#[omit_absent(false)]
#[derive(Serialize, Deserialize, PartialEq, Debug)]
struct Bar {
    kept: Option<u32>,
    #[omit_if_absent]
    omitted: Option<u32>,
}

#[test]
fn test_serde_skip() {
    let foo = Foo {
        a: Option::present(1),
        b: Option::absent(),
        c: Option::absent(),
        d: None,
        meow: 0.5,
    };

    let serialized = serde_json::to_value(&foo).unwrap();
    assert_eq!(serialized, json!({"a": 1, "c": null, "meow": 0.5}));

    let back: Foo = serde_json::from_value(serialized).unwrap();
    assert_eq!(back, foo);
}

#[test]
fn test_serde_skip_opt_in() {
    let bar = Bar {
        kept: Option::absent(),
        omitted: Option::absent(),
    };
    assert_eq!(serde_json::to_value(&bar).unwrap(), json!({"kept": null}));

    let back: Bar = serde_json::from_value(json!({})).unwrap();
    assert_eq!(back, bar);
}
