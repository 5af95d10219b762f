use std::fmt;

use serde::{Serialize, Serializer};

use super::flow::TURBULENT_REYNOLDS;

/// 이 값을 넘는 전단율은 재료 물성에 영향을 줄 수 있다 [1/s]
pub const HIGH_SHEAR_RATE_PER_S: f64 = 1000.0;
/// 이 값을 넘는 겉보기 점도는 추가 압력이 필요하다 [Pa·s]
pub const HIGH_VISCOSITY_PA_S: f64 = 1.0;

/// 공정 경고. 직렬화하면 사람이 읽을 수 있는 문장이 된다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessWarning {
    TurbulentFlow,
    HighShearRate,
    HighViscosity,
}

impl ProcessWarning {
    pub fn message(&self) -> &'static str {
        match self {
            ProcessWarning::TurbulentFlow => {
                "Flow is turbulent (Re > 2300) - consider reducing flow rate"
            }
            ProcessWarning::HighShearRate => "High shear rate may affect material properties",
            ProcessWarning::HighViscosity => "High viscosity may require increased pressure",
        }
    }
}

impl fmt::Display for ProcessWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl Serialize for ProcessWarning {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.message())
    }
}

/// 계산값으로부터 경고 목록을 만든다. 순서: 난류, 전단율, 점도.
///
/// 난류 경고는 Re가 2300을 "초과"할 때만 붙는다. Re = 2300 이면 영역은
/// 난류로 판정되지만 경고는 없다.
pub fn generate_warnings(
    reynolds: f64,
    shear_rate_per_s: f64,
    viscosity_pa_s: f64,
) -> Vec<ProcessWarning> {
    let mut warnings = Vec::new();
    if reynolds > TURBULENT_REYNOLDS {
        warnings.push(ProcessWarning::TurbulentFlow);
    }
    if shear_rate_per_s > HIGH_SHEAR_RATE_PER_S {
        warnings.push(ProcessWarning::HighShearRate);
    }
    if viscosity_pa_s > HIGH_VISCOSITY_PA_S {
        warnings.push(ProcessWarning::HighViscosity);
    }
    warnings
}
