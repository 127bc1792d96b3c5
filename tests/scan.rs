use optional_value::{Error, Option, Scan, ToParameter, Value};

#[test]
fn test_to_parameter() {
    let value = Option::present("foo").to_parameter().unwrap();
    assert_eq!(value.downcast_ref::<&str>(), Some(&"foo"));

    let value = Option::present(42).to_parameter().unwrap();
    assert_eq!(value.downcast::<i32>().unwrap(), 42);

    let value = Option::<String>::absent().to_parameter().unwrap();
    assert!(value.is_null());
}

#[test]
fn test_scan() {
    let mut option = Option::<String>::absent();
    option.scan(Value::new("foo".to_owned())).unwrap();
    assert_eq!(option, Option::present("foo".to_owned()));

    let mut option = Option::<i32>::absent();
    option.scan(Value::new(7)).unwrap();
    assert_eq!(option, Option::present(7));
}

#[test]
fn test_scan_null() {
    let mut option = Option::<String>::absent();
    option.scan(Value::Null).unwrap();
    assert_eq!(option, Option::absent());

    let mut option = Option::present("hi".to_owned());
    option.scan(Value::Null).unwrap();
    assert_eq!(option, Option::absent());
}

#[test]
fn test_scan_unsupported_type() {
    let mut option = Option::<String>::absent();
    let err = option.scan(Value::new(1_i32)).unwrap_err();
    assert_eq!(option, Option::absent());
    match err {
        Error::TypeMismatch { expected, found } => {
            assert_eq!(expected, std::any::type_name::<String>());
            assert_eq!(found, "i32");
        }
        other => panic!("unexpected error: {other}"),
    }

    let mut option = Option::present(3_i32);
    assert!(option.scan(Value::new("foo".to_owned())).is_err());
    assert_eq!(option, Option::absent());
}

#[test]
fn test_scan_does_not_widen() {
    let mut option = Option::<i64>::absent();
    assert!(option.scan(Value::new(1_i32)).is_err());
    assert!(option.is_absent());
}

#[test]
fn test_parameter_round_trip() {
    let original = Option::present(vec![1_u8, 2]);
    let mut scanned = Option::<Vec<u8>>::absent();
    scanned.scan(original.to_parameter().unwrap()).unwrap();
    assert_eq!(scanned, original);

    let original = Option::<Vec<u8>>::absent();
    let mut scanned = Option::present(vec![9]);
    scanned.scan(original.to_parameter().unwrap()).unwrap();
    assert_eq!(scanned, original);
}
