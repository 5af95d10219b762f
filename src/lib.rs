//! 폴리우레탄 주입 공정 계산 로직을 라이브러리로 분리하여 CLI 외의 호출자도 쓸 수 있게 한다.

pub mod agent_db;
pub mod app;
pub mod config;
pub mod environmental;
pub mod i18n;
pub mod injection;
pub mod rounding;
pub mod ui_cli;
pub mod units;
