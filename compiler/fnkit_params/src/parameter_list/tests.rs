use super::*;
use fnkit_value::ValueType;
use pretty_assertions::assert_eq;

fn req(name: &str) -> Parameter {
    Parameter::required(name, ValueType::Any).unwrap()
}

fn opt(name: &str) -> Parameter {
    Parameter::optional(name, ValueType::Any).unwrap()
}

fn var(name: &str) -> Parameter {
    Parameter::variable(name, ValueType::Any).unwrap()
}

mod invariants {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn accepts_required_then_optional_then_variable() {
        assert!(ParameterList::new(vec![req("a"), opt("b"), var("c")]).is_ok());
    }

    #[test]
    fn rejects_duplicate_names() {
        assert_eq!(
            ParameterList::new(vec![req("a"), opt("a")]).unwrap_err(),
            ConstructionError::DuplicateParameter {
                name: "a".to_string()
            }
        );
    }

    #[test]
    fn rejects_variable_before_last() {
        assert_eq!(
            ParameterList::new(vec![var("rest"), opt("b")]).unwrap_err(),
            ConstructionError::VariableNotLast {
                name: "rest".to_string()
            }
        );
    }

    #[test]
    fn rejects_required_after_optional() {
        assert_eq!(
            ParameterList::new(vec![opt("a"), req("b")]).unwrap_err(),
            ConstructionError::RequiredAfterOptional {
                name: "b".to_string()
            }
        );
    }

    #[test]
    fn names_are_case_sensitive() {
        assert!(ParameterList::new(vec![req("a"), req("A")]).is_ok());
    }
}

mod bounds {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_list_accepts_only_zero() {
        let bounds = ParameterList::empty().bounds();
        assert_eq!(bounds, ArityBounds { min: 0, max: Some(0) });
    }

    #[test]
    fn sums_cardinalities() {
        let list = ParameterList::new(vec![req("a"), req("b"), opt("c")]).unwrap();
        assert_eq!(list.bounds(), ArityBounds { min: 2, max: Some(3) });
        assert_eq!(list.fixed_len(), 3);
    }

    #[test]
    fn trailing_variable_is_unbounded() {
        let list = ParameterList::new(vec![req("a"), var("rest")]).unwrap();
        assert_eq!(list.bounds(), ArityBounds { min: 1, max: None });
        assert_eq!(list.fixed_len(), 1);
        assert_eq!(list.variable().map(Parameter::name), Some("rest"));
    }
}

#[test]
fn display_renders_signature() {
    let list = ParameterList::new(vec![req("a"), opt("b"), var("rest")]).unwrap();
    assert_eq!(list.to_string(), "(a: any, b?: any, rest...: any)");
}

#[test]
fn find_by_name() {
    let list = ParameterList::new(vec![req("a"), opt("b")]).unwrap();
    assert_eq!(list.find("b").map(|(i, _)| i), Some(1));
    assert!(list.find("z").is_none());
}
