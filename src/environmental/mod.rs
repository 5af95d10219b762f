//! 발포제 전환에 따른 환경 영향 비교 모듈.

pub mod impact;

pub use impact::*;
