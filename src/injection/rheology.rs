//! 전단 박화(shear-thinning) 유체의 전단율과 겉보기 점도 계산.

use std::f64::consts::PI;

use crate::units::{convert_viscosity, to_kelvin, TemperatureUnit, ViscosityUnit};

/// 아레니우스 식의 활성화 에너지 [J/mol]
pub const ACTIVATION_ENERGY_J_PER_MOL: f64 = 50_000.0;
/// 기체 상수 [J/(mol·K)]
pub const GAS_CONSTANT_J_PER_MOL_K: f64 = 8.314;
/// 멱법칙 지수 n (n < 1 이면 전단 박화)
pub const POWER_LAW_INDEX: f64 = 0.85;
/// 점도 기준 온도 [°C]
pub const REFERENCE_TEMPERATURE_C: f64 = 25.0;

/// 원형 배관 벽면 전단율 [1/s].
///
/// γ̇ = 4Q / (π r³)
pub fn shear_rate(flow_rate_m3_s: f64, radius_m: f64) -> f64 {
    4.0 * flow_rate_m3_s / (PI * radius_m.powi(3))
}

/// 25°C 기준 아레니우스 온도 보정 계수(무차원).
///
/// 기준보다 따뜻하면 1보다 작고, 차가우면 1보다 크다.
pub fn temperature_factor(temperature_c: f64) -> f64 {
    let temp_k = to_kelvin(temperature_c, TemperatureUnit::Celsius);
    let ref_temp_k = to_kelvin(REFERENCE_TEMPERATURE_C, TemperatureUnit::Celsius);
    ((ACTIVATION_ENERGY_J_PER_MOL / GAS_CONSTANT_J_PER_MOL_K) * (1.0 / temp_k - 1.0 / ref_temp_k))
        .exp()
}

/// 온도와 전단율을 모두 반영한 겉보기 점도 [Pa·s].
///
/// μ = μ0(25°C) · f(T) · γ̇^(n-1)
pub fn apparent_viscosity(viscosity_cp: f64, temperature_c: f64, shear_rate_per_s: f64) -> f64 {
    let base_viscosity =
        convert_viscosity(viscosity_cp, ViscosityUnit::Centipoise, ViscosityUnit::PascalSecond);
    let temp_factor = temperature_factor(temperature_c);
    let shear_factor = shear_rate_per_s.powf(POWER_LAW_INDEX - 1.0);
    base_viscosity * temp_factor * shear_factor
}
