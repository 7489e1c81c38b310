use super::*;
use pretty_assertions::assert_eq;

#[test]
fn parameter_default_is_convert_only() {
    assert_eq!(ParameterKinds::default(), ParameterKinds::CONVERT);
    assert_eq!(FunctionKinds::default(), FunctionKinds::empty());
}

#[test]
fn function_kinds_map_to_parameter_stages() {
    let all = FunctionKinds::all().as_parameter_kinds();
    assert_eq!(
        all,
        ParameterKinds::EVALUATE | ParameterKinds::FLATTEN | ParameterKinds::RESOLVE_REFERENCES
    );
    assert!(!all.contains(ParameterKinds::CONVERT));
}

#[test]
fn single_function_kind_maps_to_single_stage() {
    assert_eq!(
        FunctionKinds::FLATTEN.as_parameter_kinds(),
        ParameterKinds::FLATTEN
    );
    assert_eq!(
        FunctionKinds::EVALUATED_PARAMETERS.as_parameter_kinds(),
        ParameterKinds::EVALUATE
    );
}

#[test]
fn display_lists_flag_names() {
    assert_eq!(
        (FunctionKinds::FLATTEN | FunctionKinds::RESOLVE_REFERENCES).to_string(),
        "FLATTEN | RESOLVE_REFERENCES"
    );
    assert_eq!(ParameterKinds::empty().to_string(), "none");
}
