use super::*;
use crate::{CallError, SimpleContext};

fn params() -> ParameterList {
    ParameterList::new(vec![
        Parameter::required("a", ValueType::Int).unwrap(),
        Parameter::optional("b", ValueType::Str).unwrap(),
        Parameter::variable("rest", ValueType::Any).unwrap(),
    ])
    .unwrap()
}

fn prepared(b: Option<Value>, rest: Vec<Value>) -> PreparedArgs {
    PreparedArgs::from_parts(params(), [Some(Value::Int(5)), b], rest)
}

mod accessors {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn get_honours_optional() {
        let args = prepared(None, vec![]);
        assert_eq!(args.get(1).unwrap(), None);
        let args = prepared(Some(Value::from("x")), vec![]);
        assert_eq!(args.get(1).unwrap(), Some(&Value::from("x")));
    }

    #[test]
    fn get_treats_null_as_absent() {
        let args = prepared(Some(Value::Null), vec![]);
        assert_eq!(args.get(1).unwrap(), None);
    }

    #[test]
    fn get_on_required_fails_fast() {
        let err = prepared(None, vec![]).get(0).unwrap_err();
        assert_eq!(
            err,
            CallError::InvalidCardinalityUsage {
                parameter: "a".to_string(),
                cardinality: Cardinality::Required,
                accessor: "get",
            }
        );
    }

    #[test]
    fn get_or_fail_reports_missing_parameter() {
        let err = prepared(None, vec![]).get_or_fail(1).unwrap_err();
        assert_eq!(
            err,
            CallError::MissingRequiredParameter {
                parameter: "b".to_string(),
                index: 1,
            }
        );
        assert_eq!(err.to_string(), "missing value for required parameter `b` (index 1)");
    }

    #[test]
    fn get_variable_only_on_variable() {
        let args = prepared(None, vec![Value::Int(1), Value::Int(2)]);
        assert_eq!(args.get_variable(2).unwrap(), &[Value::Int(1), Value::Int(2)]);
        assert!(matches!(
            args.get_variable(0),
            Err(CallError::InvalidCardinalityUsage {
                accessor: "get_variable",
                ..
            })
        ));
        assert!(matches!(
            args.get_or_fail(2),
            Err(CallError::InvalidCardinalityUsage { .. })
        ));
    }

    #[test]
    fn index_past_end() {
        assert_eq!(
            prepared(None, vec![]).get(9).unwrap_err(),
            CallError::ParameterIndexOutOfRange { index: 9, count: 3 }
        );
    }

    #[test]
    fn typed_helpers() {
        let args = prepared(Some(Value::from("x")), vec![]);
        assert_eq!(args.int(0).unwrap(), 5);
        assert_eq!(args.float(0).unwrap(), 5.0);
        assert_eq!(args.str(1).unwrap(), "x");
        let err = args.bool(0).unwrap_err();
        assert_eq!(
            err.to_string(),
            "parameter `a`: cannot convert 5 of type integer to boolean"
        );
    }
}

mod flattened_variable {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn resolves_and_flattens_nested_references() {
        let ctx = SimpleContext::new()
            .with_reference("pair", Value::list(vec![Value::Int(2), Value::reference("three")]))
            .with_reference("three", Value::Int(3));
        let args = prepared(
            None,
            vec![Value::Int(1), Value::reference("pair"), Value::list(vec![Value::Int(4)])],
        );
        let flat = args
            .get_variable_flattened(2, &ctx, &PipelineConfig::default())
            .unwrap();
        assert_eq!(
            flat,
            vec![Value::Int(1), Value::Int(2), Value::Int(3), Value::Int(4)]
        );
    }

    #[test]
    fn unknown_reference_is_fatal() {
        let ctx = SimpleContext::new();
        let args = prepared(None, vec![Value::reference("nope")]);
        assert!(matches!(
            args.get_variable_flattened(2, &ctx, &PipelineConfig::default()),
            Err(CallError::UnresolvedReference { .. })
        ));
    }
}

mod shape {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn values_skip_absent_slots() {
        let args = prepared(None, vec![Value::Int(9)]);
        assert_eq!(args.to_vec(), vec![Value::Int(5), Value::Int(9)]);
        assert_eq!(args.len(), 2);
        assert!(!args.is_empty());
    }

    #[test]
    fn from_parts_pads_missing_slots_and_drops_orphan_tail() {
        let list = ParameterList::new(vec![
            Parameter::required("a", ValueType::Any).unwrap(),
            Parameter::optional("b", ValueType::Any).unwrap(),
        ])
        .unwrap();
        let args = PreparedArgs::from_parts(list, [Some(Value::Int(1))], vec![Value::Int(7)]);
        assert_eq!(args.to_vec(), vec![Value::Int(1)]);
        assert_eq!(args.get(1).unwrap(), None);
    }

    #[test]
    fn retain_clears_slots_and_removes_tail_entries() {
        let args = prepared(
            Some(Value::from("drop")),
            vec![Value::Int(1), Value::from("drop"), Value::Int(2)],
        )
        .retain(|v| v.as_str() != Some("drop"));
        assert_eq!(args.get(1).unwrap(), None);
        assert_eq!(args.get_variable(2).unwrap(), &[Value::Int(1), Value::Int(2)]);
    }

    #[test]
    fn with_value_replaces_single_slot() {
        let args = prepared(None, vec![])
            .with_value(1, Some(Value::from("y")))
            .unwrap();
        assert_eq!(args.str(1).unwrap(), "y");
        assert!(prepared(None, vec![]).with_value(2, None).is_err());
    }
}
