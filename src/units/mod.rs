//! 단위 정의 및 변환 모듈 모음.
//!
//! 주입 계산 파이프라인은 입력을 모두 SI 기준으로 환산한 뒤 계산한다.

pub mod density;
pub mod length;
pub mod pressure;
pub mod temperature;
pub mod viscosity;

pub use density::{convert_density, DensityUnit};
pub use length::{convert_length, LengthUnit};
pub use pressure::{convert_pressure, PressureUnit};
pub use temperature::{to_kelvin, TemperatureUnit};
pub use viscosity::{convert_viscosity, ViscosityUnit};
