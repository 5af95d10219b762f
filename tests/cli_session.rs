//! 대화형 메뉴 세션 테스트. 표준 입력 대신 메모리 버퍼를 넣는다.
use std::io::{Cursor, ErrorKind};
use std::path::{Path, PathBuf};

use pu_injection_toolbox::app::{self, AppError};
use pu_injection_toolbox::config::{self, Config, OutputFormat};
use pu_injection_toolbox::i18n::Translator;
use pu_injection_toolbox::ui_cli::{main_menu, MenuChoice};

fn temp_config(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("pu_injection_{name}_{}", std::process::id()));
    std::fs::create_dir_all(&dir).expect("create temp dir");
    let path = dir.join("config.toml");
    let _ = std::fs::remove_file(&path);
    path
}

fn run_session(path: &Path, script: &str) -> Result<Config, AppError> {
    let mut cfg = Config::default();
    let mut tr = Translator::new("en");
    app::run(&mut cfg, path, &mut tr, &mut Cursor::new(script.as_bytes()))?;
    Ok(cfg)
}

#[test]
fn menu_treats_end_of_input_as_exit() {
    let tr = Translator::new("en");
    let choice = main_menu(&tr, &mut Cursor::new("9\nabc\n")).expect("menu");
    assert_eq!(choice, MenuChoice::Exit);
    let choice = main_menu(&tr, &mut Cursor::new("")).expect("menu");
    assert_eq!(choice, MenuChoice::Exit);
}

#[test]
fn empty_input_ends_session_and_saves_config() {
    let path = temp_config("empty_input");
    run_session(&path, "").expect("session");
    assert!(path.exists());
}

#[test]
fn input_ending_inside_a_prompt_is_an_error() {
    let path = temp_config("truncated_prompt");
    match run_session(&path, "1\n100\nnot-a-number\n") {
        Err(AppError::Io(err)) => assert_eq!(err.kind(), ErrorKind::UnexpectedEof),
        other => panic!("expected end-of-input error, got {other:?}"),
    }
}

#[test]
fn calculation_errors_return_to_the_menu() {
    let path = temp_config("calc_error");
    // 길이 10mm는 검증에서 거부되고 메뉴로 돌아온 뒤 종료한다
    run_session(&path, "1\n10\n20\n25\n0.001\n\n\n2\n1\nCO2\n5000\n0\n").expect("session");
}

#[test]
fn settings_change_is_persisted() {
    let path = temp_config("settings");
    let cfg = run_session(&path, "3\n4\n4\n4\n2\n500\n0\n").expect("session");
    assert_eq!(cfg.output, OutputFormat::Json);
    assert_eq!(cfg.defaults.viscosity_cp, 500.0);

    let saved = config::load_or_default(&path).expect("reload");
    assert_eq!(saved, cfg);
}
