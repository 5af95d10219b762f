use std::f64::consts::PI;
use std::fmt;

use serde::Serialize;

use super::rheology::POWER_LAW_INDEX;

/// 층류/난류 경계 레이놀즈수
pub const TURBULENT_REYNOLDS: f64 = 2300.0;

/// 유동 영역.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FlowRegime {
    Laminar,
    Turbulent,
}

impl FlowRegime {
    /// 레이놀즈수로 유동 영역을 판정한다. 2300 이상은 난류로 본다.
    pub fn classify(reynolds: f64) -> Self {
        if reynolds < TURBULENT_REYNOLDS {
            FlowRegime::Laminar
        } else {
            FlowRegime::Turbulent
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FlowRegime::Laminar => "laminar",
            FlowRegime::Turbulent => "turbulent",
        }
    }
}

impl fmt::Display for FlowRegime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 평균 유속 [m/s]
pub fn mean_velocity(flow_rate_m3_s: f64, radius_m: f64) -> f64 {
    flow_rate_m3_s / (PI * radius_m * radius_m)
}

/// 레이놀즈수. Re = ρ v D / μ
pub fn reynolds_number(
    flow_rate_m3_s: f64,
    radius_m: f64,
    viscosity_pa_s: f64,
    density_kg_m3: f64,
) -> f64 {
    let velocity = mean_velocity(flow_rate_m3_s, radius_m);
    2.0 * radius_m * velocity * density_kg_m3 / viscosity_pa_s
}

/// 멱법칙 유체용 수정 Hagen-Poiseuille 압력강하 [Pa].
///
/// ΔP = 8 μ L Q / (π r⁴) · (3n + 1) / (4n)
pub fn pressure_drop(
    viscosity_pa_s: f64,
    flow_rate_m3_s: f64,
    length_m: f64,
    radius_m: f64,
) -> f64 {
    let n = POWER_LAW_INDEX;
    (8.0 * viscosity_pa_s * length_m * flow_rate_m3_s / (PI * radius_m.powi(4)))
        * ((3.0 * n + 1.0) / (4.0 * n))
}

/// 배관을 한 번 채우는 데 걸리는 시간 [s].
pub fn injection_time(flow_rate_m3_s: f64, length_m: f64, radius_m: f64) -> f64 {
    let pipe_volume = PI * radius_m * radius_m * length_m;
    pipe_volume / flow_rate_m3_s
}
