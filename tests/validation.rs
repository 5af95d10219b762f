//! 입력 검증 테스트. 필드별로 서로 다른 오류가 나와야 한다.
use pu_injection_toolbox::injection::{
    calculate, InjectionError, ProcessParameters, ValidationError, DEFAULT_DENSITY_G_PER_CM3,
    DEFAULT_VISCOSITY_CP,
};

fn valid() -> ProcessParameters {
    ProcessParameters::new(100.0, 20.0, 25.0, 0.001)
}

fn rejection(params: ProcessParameters) -> ValidationError {
    match calculate(params) {
        Err(InjectionError::Validation(err)) => err,
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn defaults_are_applied() {
    let p = valid();
    assert_eq!(p.viscosity, DEFAULT_VISCOSITY_CP);
    assert_eq!(p.density, DEFAULT_DENSITY_G_PER_CM3);
    assert!(p.validate().is_ok());
}

#[test]
fn boundary_values_are_accepted() {
    assert!(ProcessParameters { pipe_length: 50.0, ..valid() }.validate().is_ok());
    assert!(ProcessParameters { temperature: 5.0, ..valid() }.validate().is_ok());
    assert!(ProcessParameters { temperature: 40.0, ..valid() }.validate().is_ok());
}

#[test]
fn each_constraint_has_its_own_error() {
    let cases = [
        (
            ProcessParameters { pipe_length: 49.0, ..valid() },
            ValidationError::PipeTooShort(49.0),
        ),
        (
            ProcessParameters { pipe_thickness: 0.0, ..valid() },
            ValidationError::NonPositiveThickness(0.0),
        ),
        (
            ProcessParameters { temperature: 4.0, ..valid() },
            ValidationError::TemperatureOutOfRange(4.0),
        ),
        (
            ProcessParameters { temperature: 41.0, ..valid() },
            ValidationError::TemperatureOutOfRange(41.0),
        ),
        (
            ProcessParameters { flow_rate: 0.0, ..valid() },
            ValidationError::NonPositiveFlowRate(0.0),
        ),
        (valid().with_viscosity(0.0), ValidationError::NonPositiveViscosity(0.0)),
        (valid().with_density(0.0), ValidationError::NonPositiveDensity(0.0)),
    ];
    for (params, expected) in cases {
        assert_eq!(rejection(params), expected);
    }
}

#[test]
fn messages_name_the_field() {
    let err = rejection(ProcessParameters { pipe_length: 49.0, ..valid() });
    assert!(err.to_string().starts_with("Pipe length must be at least 50mm"));
    assert_eq!(err.field(), "pipe_length");

    let err = rejection(ProcessParameters { temperature: 41.0, ..valid() });
    assert!(err.to_string().contains("between 5°C and 40°C"));
    assert_eq!(err.field(), "temperature");

    let err = rejection(valid().with_density(-1.0));
    assert!(err.to_string().starts_with("Density must be positive"));
    assert_eq!(err.field(), "density");
}

#[test]
fn first_violation_wins() {
    let params = ProcessParameters {
        pipe_length: 10.0,
        temperature: 100.0,
        flow_rate: -1.0,
        ..valid()
    };
    assert_eq!(rejection(params), ValidationError::PipeTooShort(10.0));
}

#[test]
fn non_finite_inputs_are_rejected() {
    let err = rejection(ProcessParameters { flow_rate: f64::NAN, ..valid() });
    assert_eq!(err, ValidationError::NonFinite { field: "flow_rate" });

    let err = rejection(ProcessParameters { pipe_length: f64::INFINITY, ..valid() });
    assert_eq!(err, ValidationError::NonFinite { field: "pipe_length" });
}

#[test]
fn parameters_deserialize_with_defaults() {
    let params: ProcessParameters = serde_json::from_str(
        r#"{"pipe_length": 120.0, "pipe_thickness": 15.0, "temperature": 20.0, "flow_rate": 0.0005}"#,
    )
    .expect("parse");
    assert_eq!(params.viscosity, DEFAULT_VISCOSITY_CP);
    assert_eq!(params.density, DEFAULT_DENSITY_G_PER_CM3);
    assert!(calculate(params).is_ok());
}
