//! 주입 계산 파이프라인 회귀 테스트. 기준값은 각 공식을 직접 전개해 구한다.
use approx::assert_relative_eq;
use pu_injection_toolbox::injection::warnings::generate_warnings;
use pu_injection_toolbox::injection::{
    calculate, flow, rheology, FlowRegime, InjectionError, ProcessParameters, ProcessWarning,
    PROFILE_POINTS,
};
use std::f64::consts::PI;

fn sample() -> ProcessParameters {
    ProcessParameters::new(100.0, 20.0, 25.0, 0.001)
        .with_viscosity(350.0)
        .with_density(1.12)
}

fn round(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

#[test]
fn sample_matches_formula_derivation() {
    let radius: f64 = 0.01;
    let length: f64 = 0.1;
    let q: f64 = 0.001;
    let n: f64 = 0.85;

    let gamma = 4.0 * q / (PI * radius * radius * radius);
    // 25°C는 기준 온도이므로 온도 보정 계수는 1
    let mu = 350.0 * 0.001 * gamma.powf(n - 1.0);
    let velocity = q / (PI * radius * radius);
    let re = 2.0 * radius * velocity * 1120.0 / mu;
    let dp_kpa = 8.0 * mu * length * q / (PI * radius.powi(4)) * ((3.0 * n + 1.0) / (4.0 * n))
        / 1000.0;
    let time = PI * radius * radius * length / q;

    let res = calculate(sample()).expect("sample calc");
    assert_relative_eq!(res.shear_rate, round(gamma, 2), epsilon = 1e-9);
    assert_relative_eq!(res.shear_rate, 1273.24, epsilon = 1e-9);
    assert_relative_eq!(res.apparent_viscosity, round(mu, 4), epsilon = 1e-12);
    assert_relative_eq!(res.reynolds_number, round(re, 2), epsilon = 1e-9);
    assert_relative_eq!(res.required_pressure, round(dp_kpa, 2), epsilon = 1e-9);
    assert_relative_eq!(res.optimal_injection_time, round(time, 2), epsilon = 1e-9);

    assert_relative_eq!(res.required_pressure, 3.18, epsilon = 1e-9);
    assert_relative_eq!(res.apparent_viscosity, 0.1198, epsilon = 1e-12);
    assert_relative_eq!(res.reynolds_number, 595.34, epsilon = 1e-9);
    assert_relative_eq!(res.optimal_injection_time, 0.03, epsilon = 1e-9);

    assert_eq!(res.flow_regime, FlowRegime::Laminar);
    assert_eq!(res.warnings, vec![ProcessWarning::HighShearRate]);
}

#[test]
fn temperature_factor_is_one_at_reference() {
    assert_relative_eq!(rheology::temperature_factor(25.0), 1.0, epsilon = 1e-15);
    assert!(rheology::temperature_factor(10.0) > 1.0);
    assert!(rheology::temperature_factor(40.0) < 1.0);
}

#[test]
fn warmer_material_is_thinner() {
    let reference = calculate(sample()).expect("25C");
    let warm = calculate(ProcessParameters { temperature: 40.0, ..sample() }).expect("40C");
    let cold = calculate(ProcessParameters { temperature: 5.0, ..sample() }).expect("5C");
    assert!(warm.apparent_viscosity < reference.apparent_viscosity);
    assert!(cold.apparent_viscosity > reference.apparent_viscosity);
    assert!(warm.required_pressure < cold.required_pressure);
}

#[test]
fn pressure_profile_shape() {
    let res = calculate(sample()).expect("calc");
    let profile = &res.pressure_profile;
    assert_eq!(profile.len(), PROFILE_POINTS);
    assert_eq!(profile.len(), 20);

    let first = profile.first().expect("first point");
    let last = profile.last().expect("last point");
    assert_eq!(first.distance, 0.0);
    assert_relative_eq!(last.distance, 100.0, epsilon = 0.05);
    assert_relative_eq!(first.pressure, res.required_pressure, epsilon = 0.01);
    assert_eq!(last.pressure, 0.0);

    for pair in profile.windows(2) {
        assert!(pair[1].distance > pair[0].distance);
        assert!(pair[1].pressure <= pair[0].pressure);
    }
    // 간격 = 100 / 19 ≈ 5.26 mm
    assert_relative_eq!(profile[1].distance, 5.3, epsilon = 1e-9);
    assert_relative_eq!(profile[2].distance, 10.5, epsilon = 1e-9);
}

#[test]
fn regime_tracks_reynolds_threshold() {
    let cases = [
        sample(),
        ProcessParameters::new(1000.0, 50.0, 20.0, 0.000_01),
        ProcessParameters::new(500.0, 10.0, 35.0, 0.01).with_viscosity(1.0),
        ProcessParameters::new(200.0, 25.0, 30.0, 0.005).with_viscosity(10.0),
    ];
    for params in cases {
        let res = calculate(params).expect("calc");
        let turbulent = res.reynolds_number >= 2300.0;
        assert_eq!(res.flow_regime == FlowRegime::Turbulent, turbulent, "{params:?}");
    }
}

#[test]
fn low_viscosity_fast_flow_raises_turbulence_and_shear_warnings() {
    let params = ProcessParameters::new(500.0, 10.0, 35.0, 0.01).with_viscosity(1.0);
    let res = calculate(params).expect("calc");
    assert_eq!(res.flow_regime, FlowRegime::Turbulent);
    assert_eq!(
        res.warnings,
        vec![ProcessWarning::TurbulentFlow, ProcessWarning::HighShearRate]
    );
    assert_eq!(
        res.warnings[0].message(),
        "Flow is turbulent (Re > 2300) - consider reducing flow rate"
    );
}

#[test]
fn thick_material_raises_viscosity_warning_only() {
    let params = ProcessParameters::new(500.0, 30.0, 10.0, 0.0001).with_viscosity(5000.0);
    let res = calculate(params).expect("calc");
    assert_eq!(res.flow_regime, FlowRegime::Laminar);
    assert_eq!(res.warnings, vec![ProcessWarning::HighViscosity]);
    assert_relative_eq!(res.apparent_viscosity, 8.4439, epsilon = 1e-9);
    assert_relative_eq!(res.required_pressure, 22.17, epsilon = 1e-9);
}

#[test]
fn gentle_flow_has_no_warnings() {
    let res = calculate(ProcessParameters::new(1000.0, 50.0, 20.0, 0.000_01)).expect("calc");
    assert!(res.warnings.is_empty());
    assert_relative_eq!(res.optimal_injection_time, 196.35, epsilon = 1e-9);
}

#[test]
fn repeated_calls_are_identical() {
    let a = calculate(sample()).expect("first");
    let b = calculate(sample()).expect("second");
    assert_eq!(a, b);
}

#[test]
fn stage_helpers_agree_with_closed_forms() {
    let r: f64 = 0.005;
    let q: f64 = 2.0e-4;
    assert_relative_eq!(
        rheology::shear_rate(q, r),
        4.0 * q / (PI * r.powi(3)),
        max_relative = 1e-12
    );
    assert_relative_eq!(flow::mean_velocity(q, r), q / (PI * r * r), max_relative = 1e-12);
    assert_relative_eq!(
        flow::injection_time(q, 0.2, r),
        PI * r * r * 0.2 / q,
        max_relative = 1e-12
    );
    assert_eq!(FlowRegime::classify(2299.99), FlowRegime::Laminar);
    assert_eq!(FlowRegime::classify(2300.0), FlowRegime::Turbulent);
    // 정확히 2300이면 난류로 분류하지만 경고는 2300 초과에서만 낸다
    assert!(generate_warnings(2300.0, 0.0, 0.0).is_empty());
    assert_eq!(
        generate_warnings(2300.01, 0.0, 0.0),
        vec![ProcessWarning::TurbulentFlow]
    );
}

#[test]
fn vanishing_pipe_reports_non_finite_shear_rate() {
    // r³이 0으로 언더플로되어 전단율이 무한대가 된다
    let params = ProcessParameters { pipe_thickness: 1e-110, ..sample() };
    assert!(params.validate().is_ok());
    match calculate(params) {
        Err(InjectionError::NonFinite { quantity, value }) => {
            assert_eq!(quantity, "shear rate");
            assert!(value.is_infinite());
        }
        other => panic!("expected non-finite error, got {other:?}"),
    }
}

#[test]
fn enormous_pipe_reports_non_finite_viscosity() {
    // 전단율이 0이 되어 γ^(n-1)이 발산한다
    let params = ProcessParameters { pipe_thickness: 1e200, ..sample() };
    match calculate(params) {
        Err(InjectionError::NonFinite { quantity, value }) => {
            assert_eq!(quantity, "apparent viscosity");
            assert!(value.is_infinite());
        }
        other => panic!("expected non-finite error, got {other:?}"),
    }
}

#[test]
fn result_serializes_with_plain_strings() {
    let res = calculate(sample()).expect("calc");
    let json = serde_json::to_value(&res).expect("json");
    assert_eq!(json["flow_regime"], "laminar");
    assert_eq!(json["warnings"][0], "High shear rate may affect material properties");
    assert_eq!(json["pressure_profile"].as_array().map(Vec::len), Some(20));
}
