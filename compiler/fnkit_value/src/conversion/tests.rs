use super::*;

fn ok(value: Value, target: ValueType) -> Value {
    match convert(&value, target) {
        Ok(v) => v,
        Err(e) => panic!("unexpected conversion failure: {e}"),
    }
}

mod accepted {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn any_and_null_pass_through() {
        assert_eq!(ok(Value::from("x"), ValueType::Any), Value::from("x"));
        assert_eq!(ok(Value::Null, ValueType::Int), Value::Null);
        assert_eq!(ok(Value::Null, ValueType::List), Value::Null);
    }

    #[test]
    fn integers() {
        assert_eq!(ok(Value::from(" 42 "), ValueType::Int), Value::Int(42));
        assert_eq!(ok(Value::Bool(true), ValueType::Int), Value::Int(1));
        assert_eq!(ok(Value::Float(-3.0), ValueType::Int), Value::Int(-3));
    }

    #[test]
    fn integral_floats_at_the_range_edges() {
        let min = -(2.0_f64.powi(63));
        assert_eq!(ok(Value::Float(min), ValueType::Int), Value::Int(i64::MIN));
        assert_eq!(
            ok(Value::Float(9_007_199_254_740_992.0), ValueType::Int),
            Value::Int(9_007_199_254_740_992)
        );
    }

    #[test]
    fn floats_and_numbers() {
        assert_eq!(ok(Value::Int(2), ValueType::Float), Value::Float(2.0));
        assert_eq!(ok(Value::from("2.5"), ValueType::Float), Value::Float(2.5));
        assert_eq!(ok(Value::Int(2), ValueType::Number), Value::Int(2));
        assert_eq!(ok(Value::from("7"), ValueType::Number), Value::Int(7));
        assert_eq!(ok(Value::from("7.5"), ValueType::Number), Value::Float(7.5));
    }

    #[test]
    fn booleans() {
        assert_eq!(ok(Value::from("TRUE"), ValueType::Bool), Value::Bool(true));
        assert_eq!(ok(Value::Int(0), ValueType::Bool), Value::Bool(false));
    }

    #[test]
    fn strings_from_scalars() {
        assert_eq!(ok(Value::Int(5), ValueType::Str), Value::from("5"));
        assert_eq!(ok(Value::Bool(false), ValueType::Str), Value::from("false"));
    }
}

mod rejected {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn fractional_float_to_int() {
        let err = convert(&Value::Float(3.5), ValueType::Int).unwrap_err();
        assert_eq!(err.actual, ValueType::Float);
        assert_eq!(err.expected, "integer");
        assert_eq!(err.value, "3.5");
    }

    #[test]
    fn out_of_range_float_to_int() {
        assert!(convert(&Value::Float(1e19), ValueType::Int).is_err());
        assert!(convert(&Value::Float(f64::NAN), ValueType::Int).is_err());
    }

    #[test]
    fn list_to_scalar() {
        let list = Value::list(vec![Value::Int(1)]);
        assert!(convert(&list, ValueType::Int).is_err());
        assert!(convert(&list, ValueType::Str).is_err());
    }

    #[test]
    fn reference_only_to_reference() {
        let r = Value::reference("a");
        assert!(convert(&r, ValueType::Str).is_err());
        assert_eq!(ok(r.clone(), ValueType::Reference), r);
    }

    #[test]
    fn message_names_parameter_value_and_types() {
        let err = convert(&Value::from("abc"), ValueType::Int)
            .unwrap_err()
            .with_parameter("count");
        assert_eq!(
            err.to_string(),
            "parameter `count`: cannot convert abc of type string to integer"
        );
    }

    #[test]
    fn message_without_parameter() {
        let err = convert(&Value::from("abc"), ValueType::Bool).unwrap_err();
        assert_eq!(err.to_string(), "cannot convert abc of type string to boolean");
    }
}
