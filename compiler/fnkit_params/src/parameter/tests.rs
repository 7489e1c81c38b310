use super::*;
use crate::SimpleContext;
use pretty_assertions::assert_eq;

#[test]
fn list_parameter_requires_one_type_parameter() {
    let err = Parameter::required("xs", ValueType::List).unwrap_err();
    assert_eq!(
        err,
        ConstructionError::TypeParameterCount {
            parameter: "xs".to_string(),
            declared: ValueType::List,
            expected: 1,
            got: 0,
        }
    );

    let ok = Parameter::list("xs", Cardinality::Required, ValueType::Int).unwrap();
    assert_eq!(ok.element_type(), Some(ValueType::Int));
}

#[test]
fn scalar_parameter_rejects_type_parameters() {
    let err = Parameter::new("n", Cardinality::Required, ValueType::Int, [ValueType::Int]);
    assert!(matches!(
        err,
        Err(ConstructionError::TypeParameterCount { got: 1, .. })
    ));
}

#[test]
fn empty_name_is_rejected() {
    assert_eq!(
        Parameter::optional("", ValueType::Str).unwrap_err(),
        ConstructionError::EmptyParameterName
    );
}

#[test]
fn display_marks_cardinality_and_generic_type() {
    let a = Parameter::required("a", ValueType::Number).unwrap();
    let b = Parameter::optional("b", ValueType::Number).unwrap();
    let rest = Parameter::list("rest", Cardinality::Variable, ValueType::Int).unwrap();
    assert_eq!(a.to_string(), "a: number");
    assert_eq!(b.to_string(), "b?: number");
    assert_eq!(rest.to_string(), "rest...: list<integer>");
}

#[test]
fn effective_kinds_union_function_kinds() {
    let p = Parameter::required("a", ValueType::Any)
        .unwrap()
        .with_kinds(ParameterKinds::EVALUATE);
    assert_eq!(
        p.effective_kinds(FunctionKinds::FLATTEN),
        ParameterKinds::CONVERT | ParameterKinds::EVALUATE | ParameterKinds::FLATTEN
    );
}

#[test]
fn override_ignores_function_kinds() {
    let node = Parameter::required("node", ValueType::Any)
        .unwrap()
        .override_kinds(ParameterKinds::empty());
    assert_eq!(
        node.effective_kinds(FunctionKinds::all()),
        ParameterKinds::empty()
    );
    assert!(node.overrides_function_kinds());
}

#[test]
fn default_provider_runs_on_every_call() {
    use std::sync::atomic::{AtomicI64, Ordering};
    let calls = Arc::new(AtomicI64::new(0));
    let counter = Arc::clone(&calls);
    let p = Parameter::optional("b", ValueType::Int)
        .unwrap()
        .with_default(DefaultValue::new(move |_| {
            Value::Int(counter.fetch_add(1, Ordering::SeqCst) + 1)
        }));

    let ctx = SimpleContext::new();
    let provider = p.default_value().unwrap();
    assert_eq!(provider.provide(&ctx), Value::Int(1));
    assert_eq!(provider.provide(&ctx), Value::Int(2));
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}
