use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

use super::flow::{self, FlowRegime};
use super::params::{ProcessParameters, ValidationError};
use super::profile::{pressure_profile, PressurePoint};
use super::rheology;
use super::warnings::{generate_warnings, ProcessWarning};
use crate::rounding::round_to;
use crate::units::{
    convert_density, convert_length, convert_pressure, DensityUnit, LengthUnit, PressureUnit,
};

/// 주입 계산 오류.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InjectionError {
    #[error("invalid input: {0}")]
    Validation(#[from] ValidationError),
    /// 유효한 입력이었지만 중간 계산값이 유한하지 않은 경우
    #[error("calculation produced a non-finite {quantity}: {value}")]
    NonFinite { quantity: &'static str, value: f64 },
}

/// 주입 계산 결과. 모든 값은 반올림된 표시용 값이다.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculationResult {
    /// 필요 주입 압력 [kPa]
    pub required_pressure: f64,
    /// 벽면 전단율 [1/s]
    pub shear_rate: f64,
    /// 겉보기 점도 [Pa·s]
    pub apparent_viscosity: f64,
    pub reynolds_number: f64,
    /// 배관 충전 시간 [s]
    pub optimal_injection_time: f64,
    pub pressure_profile: Vec<PressurePoint>,
    pub flow_regime: FlowRegime,
    pub warnings: Vec<ProcessWarning>,
}

/// 주입 조건을 계산한다.
///
/// 입력 검증 → SI 환산 → 전단율 → 겉보기 점도 → 레이놀즈수 → 압력강하 →
/// 압력 분포 → 충전 시간 → 유동 영역 → 경고 순으로 진행한다.
/// 반올림은 마지막 결과 조립 단계에서만 적용한다.
pub fn calculate(params: ProcessParameters) -> Result<CalculationResult, InjectionError> {
    if let Err(err) = params.validate() {
        warn!(field = err.field(), %err, "rejected injection parameters");
        return Err(err.into());
    }

    // 두께는 내경으로 취급하므로 반지름은 절반
    let radius =
        convert_length(params.pipe_thickness, LengthUnit::Millimeter, LengthUnit::Meter) / 2.0;
    let length = convert_length(params.pipe_length, LengthUnit::Millimeter, LengthUnit::Meter);
    let density = convert_density(params.density, DensityUnit::GramPerCm3, DensityUnit::KgPerM3);

    let shear_rate = ensure_finite("shear rate", rheology::shear_rate(params.flow_rate, radius))?;
    let apparent_viscosity = ensure_finite(
        "apparent viscosity",
        rheology::apparent_viscosity(params.viscosity, params.temperature, shear_rate),
    )?;
    let reynolds = ensure_finite(
        "Reynolds number",
        flow::reynolds_number(params.flow_rate, radius, apparent_viscosity, density),
    )?;
    let pressure_drop_pa = ensure_finite(
        "pressure drop",
        flow::pressure_drop(apparent_viscosity, params.flow_rate, length, radius),
    )?;
    let pressure_drop_kpa =
        convert_pressure(pressure_drop_pa, PressureUnit::Pascal, PressureUnit::KiloPascal);
    let injection_time = ensure_finite(
        "injection time",
        flow::injection_time(params.flow_rate, length, radius),
    )?;

    debug!(
        radius_m = radius,
        length_m = length,
        density_kg_m3 = density,
        shear_rate,
        apparent_viscosity,
        reynolds,
        pressure_drop_kpa,
        injection_time,
        "injection pipeline evaluated"
    );

    let profile = pressure_profile(pressure_drop_kpa, params.pipe_length);
    let flow_regime = FlowRegime::classify(reynolds);
    let warnings = generate_warnings(reynolds, shear_rate, apparent_viscosity);

    Ok(CalculationResult {
        required_pressure: round_to(pressure_drop_kpa, 2),
        shear_rate: round_to(shear_rate, 2),
        apparent_viscosity: round_to(apparent_viscosity, 4),
        reynolds_number: round_to(reynolds, 2),
        optimal_injection_time: round_to(injection_time, 2),
        pressure_profile: profile,
        flow_regime,
        warnings,
    })
}

fn ensure_finite(quantity: &'static str, value: f64) -> Result<f64, InjectionError> {
    if value.is_finite() {
        Ok(value)
    } else {
        warn!(quantity, value, "non-finite intermediate value");
        Err(InjectionError::NonFinite { quantity, value })
    }
}
