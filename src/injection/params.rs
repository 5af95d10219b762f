use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 25°C 기준 기본 점도 [cP]
pub const DEFAULT_VISCOSITY_CP: f64 = 350.0;
/// 기본 밀도 [g/cm³]
pub const DEFAULT_DENSITY_G_PER_CM3: f64 = 1.12;

/// 허용 최소 배관 길이 [mm]
pub const MIN_PIPE_LENGTH_MM: f64 = 50.0;
/// 허용 공정 온도 하한 [°C]
pub const MIN_TEMPERATURE_C: f64 = 5.0;
/// 허용 공정 온도 상한 [°C]
pub const MAX_TEMPERATURE_C: f64 = 40.0;

/// 입력 검증 오류. 첫 번째로 위반된 조건 하나만 보고한다.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// NaN 또는 무한대 입력
    #[error("{field} must be a finite number")]
    NonFinite { field: &'static str },
    #[error("Pipe length must be at least 50mm (got {0} mm)")]
    PipeTooShort(f64),
    #[error("Pipe thickness must be positive (got {0} mm)")]
    NonPositiveThickness(f64),
    #[error("Temperature must be between 5°C and 40°C (got {0} °C)")]
    TemperatureOutOfRange(f64),
    #[error("Flow rate must be positive (got {0} m³/s)")]
    NonPositiveFlowRate(f64),
    #[error("Viscosity must be positive (got {0} cP)")]
    NonPositiveViscosity(f64),
    #[error("Density must be positive (got {0} g/cm³)")]
    NonPositiveDensity(f64),
}

impl ValidationError {
    /// 오류가 가리키는 입력 필드 이름.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::NonFinite { field } => field,
            ValidationError::PipeTooShort(_) => "pipe_length",
            ValidationError::NonPositiveThickness(_) => "pipe_thickness",
            ValidationError::TemperatureOutOfRange(_) => "temperature",
            ValidationError::NonPositiveFlowRate(_) => "flow_rate",
            ValidationError::NonPositiveViscosity(_) => "viscosity",
            ValidationError::NonPositiveDensity(_) => "density",
        }
    }
}

/// 폴리우레탄 주입 공정 입력값.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProcessParameters {
    /// 배관 길이 [mm]
    pub pipe_length: f64,
    /// 배관 두께(내경으로 취급) [mm]
    pub pipe_thickness: f64,
    /// 공정 온도 [°C]
    pub temperature: f64,
    /// 체적 유량 [m³/s]
    pub flow_rate: f64,
    /// 25°C 기준 점도 [cP]
    #[serde(default = "default_viscosity")]
    pub viscosity: f64,
    /// 밀도 [g/cm³]
    #[serde(default = "default_density")]
    pub density: f64,
}

fn default_viscosity() -> f64 {
    DEFAULT_VISCOSITY_CP
}

fn default_density() -> f64 {
    DEFAULT_DENSITY_G_PER_CM3
}

impl ProcessParameters {
    /// 기본 점도/밀도로 입력값을 만든다.
    pub fn new(pipe_length: f64, pipe_thickness: f64, temperature: f64, flow_rate: f64) -> Self {
        Self {
            pipe_length,
            pipe_thickness,
            temperature,
            flow_rate,
            viscosity: DEFAULT_VISCOSITY_CP,
            density: DEFAULT_DENSITY_G_PER_CM3,
        }
    }

    pub fn with_viscosity(mut self, viscosity_cp: f64) -> Self {
        self.viscosity = viscosity_cp;
        self
    }

    pub fn with_density(mut self, density_g_per_cm3: f64) -> Self {
        self.density = density_g_per_cm3;
        self
    }

    /// 모든 입력 제약을 순서대로 확인한다.
    ///
    /// 순서: 길이, 두께, 온도, 유량, 점도, 밀도.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let length = finite("pipe_length", self.pipe_length)?;
        if length < MIN_PIPE_LENGTH_MM {
            return Err(ValidationError::PipeTooShort(length));
        }
        let thickness = finite("pipe_thickness", self.pipe_thickness)?;
        if thickness <= 0.0 {
            return Err(ValidationError::NonPositiveThickness(thickness));
        }
        let temperature = finite("temperature", self.temperature)?;
        if !(MIN_TEMPERATURE_C..=MAX_TEMPERATURE_C).contains(&temperature) {
            return Err(ValidationError::TemperatureOutOfRange(temperature));
        }
        let flow_rate = finite("flow_rate", self.flow_rate)?;
        if flow_rate <= 0.0 {
            return Err(ValidationError::NonPositiveFlowRate(flow_rate));
        }
        let viscosity = finite("viscosity", self.viscosity)?;
        if viscosity <= 0.0 {
            return Err(ValidationError::NonPositiveViscosity(viscosity));
        }
        let density = finite("density", self.density)?;
        if density <= 0.0 {
            return Err(ValidationError::NonPositiveDensity(density));
        }
        Ok(())
    }
}

fn finite(field: &'static str, value: f64) -> Result<f64, ValidationError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ValidationError::NonFinite { field })
    }
}
