use std::io::BufRead;
use std::path::Path;

use thiserror::Error;

use crate::config::{Config, ConfigError};
use crate::environmental::ImpactError;
use crate::i18n::{self, Translator};
use crate::injection::InjectionError;
use crate::ui_cli::{self, MenuChoice};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    #[error("주입 계산 오류: {0}")]
    Injection(#[from] InjectionError),
    #[error("환경 영향 계산 오류: {0}")]
    Impact(#[from] ImpactError),
    #[error("JSON 출력 오류: {0}")]
    Json(#[from] serde_json::Error),
}

/// 대화형 CLI 메인 루프를 실행한다.
///
/// 계산 오류는 메뉴로 돌아가고, 입출력/설정 오류만 루프를 끝낸다.
/// 메뉴에서 입력이 끝나면 설정을 저장하고 정상 종료한다.
pub fn run(
    config: &mut Config,
    config_path: &Path,
    tr: &mut Translator,
    input: &mut impl BufRead,
) -> Result<(), AppError> {
    loop {
        let outcome = match ui_cli::main_menu(tr, input)? {
            MenuChoice::Injection => ui_cli::handle_injection(tr, config, input),
            MenuChoice::Impact => ui_cli::handle_impact(tr, config, input),
            MenuChoice::Demo => ui_cli::run_demo(tr, config.output),
            MenuChoice::Settings => {
                ui_cli::handle_settings(tr, config, input)?;
                config.save(config_path)?;
                *tr = ui_cli::translator_for(None, config);
                Ok(())
            }
            MenuChoice::Exit => {
                config.save(config_path)?;
                println!("{}", tr.t(i18n::keys::APP_EXIT));
                break;
            }
        };
        match outcome {
            Err(err @ (AppError::Injection(_) | AppError::Impact(_))) => {
                println!("{} {err}", tr.t(i18n::keys::ERROR_PREFIX));
            }
            other => other?,
        }
    }
    Ok(())
}
