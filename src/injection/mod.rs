//! 폴리우레탄 주입 공정 계산 모듈 모음.
//!
//! 멱법칙(power-law) 유체를 원형 배관에 주입할 때 필요한 압력, 전단율,
//! 겉보기 점도, 유동 영역과 경고를 계산한다.

pub mod calculator;
pub mod flow;
pub mod params;
pub mod profile;
pub mod rheology;
pub mod warnings;

pub use calculator::*;
pub use flow::FlowRegime;
pub use params::*;
pub use profile::{PressurePoint, PROFILE_POINTS};
pub use warnings::ProcessWarning;
