use super::*;
use crate::Parameter;
use fnkit_value::ValueType;
use pretty_assertions::assert_eq;

fn list(params: Vec<Parameter>) -> ParameterList {
    ParameterList::new(params).unwrap()
}

fn a_and_optional_b() -> ParameterList {
    list(vec![
        Parameter::required("a", ValueType::Number).unwrap(),
        Parameter::optional("b", ValueType::Number).unwrap(),
    ])
}

mod too_few {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn names_the_missing_parameter() {
        let err = validate_arity(0, &a_and_optional_b(), Some("add")).unwrap_err();
        assert_eq!((err.count(), err.min(), err.max()), (0, 1, Some(2)));
        assert_eq!(err.missing(), vec!["a"]);
        assert_eq!(err.extra(), None);
        assert_eq!(
            err.to_string(),
            "add: missing value for parameter `a`: expected 1..=2 arguments, got 0"
        );
    }

    #[test]
    fn enumerates_every_missing_name_in_order() {
        let params = list(vec![
            Parameter::required("x", ValueType::Any).unwrap(),
            Parameter::required("y", ValueType::Any).unwrap(),
            Parameter::required("z", ValueType::Any).unwrap(),
        ]);
        let err = validate_arity(1, &params, None).unwrap_err();
        assert_eq!(err.missing(), vec!["y", "z"]);
        assert_eq!(
            err.to_string(),
            "missing value for parameters `y`, `z`: expected 3 arguments, got 1"
        );
    }
}

mod too_many {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn reports_extra_count_without_names() {
        let err = validate_arity(5, &a_and_optional_b(), Some("add")).unwrap_err();
        assert_eq!(err.extra(), Some(3));
        assert!(err.missing().is_empty());
        assert_eq!(
            err.to_string(),
            "add: 3 extra arguments: expected 1..=2 arguments, got 5"
        );
    }

    #[test]
    fn zero_parameters_require_zero_arguments() {
        let empty = ParameterList::empty();
        assert!(validate_arity(0, &empty, None).is_ok());
        let err = validate_arity(1, &empty, Some("now")).unwrap_err();
        assert_eq!((err.min(), err.max()), (0, Some(0)));
        assert_eq!(err.to_string(), "now: 1 extra argument: expected 0 arguments, got 1");
    }

    #[test]
    fn single_required_parameter_message_is_singular() {
        let params = list(vec![Parameter::required("x", ValueType::Any).unwrap()]);
        let err = validate_arity(2, &params, None).unwrap_err();
        assert_eq!(err.to_string(), "1 extra argument: expected 1 argument, got 2");
    }
}

#[test]
fn variable_tail_has_no_upper_bound() {
    let params = list(vec![
        Parameter::required("first", ValueType::Any).unwrap(),
        Parameter::variable("rest", ValueType::Any).unwrap(),
    ]);
    assert!(validate_arity(1, &params, None).is_ok());
    assert!(validate_arity(1_000, &params, None).is_ok());
    let err = validate_arity(0, &params, None).unwrap_err();
    assert_eq!(err.max(), None);
    assert_eq!(
        err.to_string(),
        "missing value for parameter `first`: expected 1.. arguments, got 0"
    );
}

#[test]
fn renaming_produces_new_label_and_keeps_data() {
    let err = validate_arity(0, &a_and_optional_b(), Some("add")).unwrap_err();
    let renamed = err.clone().with_function_name(Some("plus"));
    assert_eq!(renamed.function_name(), Some("plus"));
    assert_eq!(err.function_name(), Some("add"));
    assert_eq!(renamed.parameters(), err.parameters());
    assert_eq!(renamed.bounds(), err.bounds());
    assert!(renamed.to_string().starts_with("plus: "));

    let anonymous = renamed.with_function_name(None);
    assert!(anonymous.to_string().starts_with("missing value"));
}

#[test]
fn bounds_display() {
    assert_eq!(ArityBounds { min: 2, max: Some(2) }.to_string(), "2");
    assert_eq!(ArityBounds { min: 0, max: Some(3) }.to_string(), "0..=3");
    assert_eq!(ArityBounds { min: 1, max: None }.to_string(), "1..");
}
