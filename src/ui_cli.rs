use std::io::{self, BufRead, Write};

use crate::app::AppError;
use crate::config::{Config, OutputFormat};
use crate::environmental::{self, EnvironmentalImpactResult};
use crate::i18n::{keys, resolve_language, Translator};
use crate::injection::{self, CalculationResult, ProcessParameters};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Injection,
    Impact,
    Demo,
    Settings,
    Exit,
}

/// 예제 입력: L=100mm, D=20mm, 25°C, Q=0.001m³/s, 350cP, 1.12g/cm³
pub fn sample_parameters() -> ProcessParameters {
    ProcessParameters::new(100.0, 20.0, 25.0, 0.001)
        .with_viscosity(350.0)
        .with_density(1.12)
}

/// 예제 환경 영향 입력: HFC 연 5000kg
pub const SAMPLE_AGENT: &str = "HFC";
pub const SAMPLE_CONSUMPTION_KG: f64 = 5000.0;

/// 메인 메뉴를 표시하고 선택값을 반환한다. 입력이 끝나면 종료를 선택한 것으로 본다.
pub fn main_menu(tr: &Translator, input: &mut impl BufRead) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_INJECTION));
    println!("{}", tr.t(keys::MAIN_MENU_IMPACT));
    println!("{}", tr.t(keys::MAIN_MENU_DEMO));
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = match read_line(input, tr.t(keys::PROMPT_MENU_SELECT)) {
            Ok(sel) => sel,
            Err(AppError::Io(e)) if e.kind() == io::ErrorKind::UnexpectedEof => {
                println!();
                return Ok(MenuChoice::Exit);
            }
            Err(e) => return Err(e),
        };
        match sel.trim() {
            "1" => return Ok(MenuChoice::Injection),
            "2" => return Ok(MenuChoice::Impact),
            "3" => return Ok(MenuChoice::Demo),
            "4" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 주입 조건 계산 메뉴를 처리한다.
pub fn handle_injection(
    tr: &Translator,
    cfg: &Config,
    input: &mut impl BufRead,
) -> Result<(), AppError> {
    println!("{}", tr.t(keys::INJECTION_HEADING));
    let length = read_f64(input, tr, tr.t(keys::PROMPT_PIPE_LENGTH))?;
    let thickness = read_f64(input, tr, tr.t(keys::PROMPT_PIPE_THICKNESS))?;
    let temperature = read_f64(input, tr, tr.t(keys::PROMPT_TEMPERATURE))?;
    let flow_rate = read_f64(input, tr, tr.t(keys::PROMPT_FLOW_RATE))?;
    let defaults = &cfg.defaults;
    let viscosity = read_f64_or(input, tr, tr.t(keys::PROMPT_VISCOSITY), defaults.viscosity_cp)?;
    let density = read_f64_or(input, tr, tr.t(keys::PROMPT_DENSITY), defaults.density_g_per_cm3)?;
    let params = ProcessParameters::new(length, thickness, temperature, flow_rate)
        .with_viscosity(viscosity)
        .with_density(density);
    let result = injection::calculate(params)?;
    print_calculation(tr, &result, cfg.output)
}

/// 환경 영향 메뉴를 처리한다.
pub fn handle_impact(
    tr: &Translator,
    cfg: &Config,
    input: &mut impl BufRead,
) -> Result<(), AppError> {
    println!("{}", tr.t(keys::IMPACT_HEADING));
    println!("{}", tr.t(keys::IMPACT_OPTIONS));
    let sel = read_line(input, tr.t(keys::PROMPT_SELECT))?;
    match sel.trim() {
        "1" => {
            let agent = read_line(input, tr.t(keys::PROMPT_AGENT))?;
            let consumption = read_f64(input, tr, tr.t(keys::PROMPT_CONSUMPTION))?;
            let impact = environmental::estimate(agent.trim(), consumption)?;
            print_impacts(tr, &[impact], cfg.output)?;
        }
        "2" => {
            let consumption = read_f64(input, tr, tr.t(keys::PROMPT_CONSUMPTION))?;
            let impacts = environmental::compare_all(consumption)?;
            print_impacts(tr, &impacts, cfg.output)?;
        }
        _ => println!("{}", tr.t(keys::INVALID_SELECTION)),
    }
    Ok(())
}

/// 예제 입력으로 두 계산을 모두 실행한다.
pub fn run_demo(tr: &Translator, format: OutputFormat) -> Result<(), AppError> {
    if format == OutputFormat::Text {
        println!("{}", tr.t(keys::DEMO_HEADING));
    }
    let result = injection::calculate(sample_parameters())?;
    print_calculation(tr, &result, format)?;
    let impact = environmental::estimate(SAMPLE_AGENT, SAMPLE_CONSUMPTION_KG)?;
    print_impacts(tr, &[impact], format)
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(
    tr: &Translator,
    cfg: &mut Config,
    input: &mut impl BufRead,
) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!(
        "{} language={} ({}), viscosity={} cP, density={} g/cm³, output={:?}",
        tr.t(keys::SETTINGS_CURRENT),
        cfg.language,
        tr.language().as_code(),
        cfg.defaults.viscosity_cp,
        cfg.defaults.density_g_per_cm3,
        cfg.output
    );
    println!("{}", tr.t(keys::SETTINGS_OPTIONS));
    let sel = read_line(input, tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    match sel.trim() {
        "" => return Ok(()),
        "1" => {
            let code = read_line(input, tr.t(keys::PROMPT_LANGUAGE))?;
            cfg.language = code.trim().to_lowercase();
        }
        "2" => {
            let current = cfg.defaults.viscosity_cp;
            match read_positive(input, tr, tr.t(keys::PROMPT_VISCOSITY), current)? {
                Some(v) => cfg.defaults.viscosity_cp = v,
                None => {
                    println!("{}", tr.t(keys::SETTINGS_INVALID));
                    return Ok(());
                }
            }
        }
        "3" => {
            let current = cfg.defaults.density_g_per_cm3;
            match read_positive(input, tr, tr.t(keys::PROMPT_DENSITY), current)? {
                Some(v) => cfg.defaults.density_g_per_cm3 = v,
                None => {
                    println!("{}", tr.t(keys::SETTINGS_INVALID));
                    return Ok(());
                }
            }
        }
        "4" => {
            cfg.output = match cfg.output {
                OutputFormat::Text => OutputFormat::Json,
                OutputFormat::Json => OutputFormat::Text,
            };
        }
        _ => {
            println!("{}", tr.t(keys::SETTINGS_INVALID));
            return Ok(());
        }
    }
    println!("{}", tr.t(keys::SETTINGS_SAVED));
    Ok(())
}

/// 주입 계산 결과를 출력한다.
pub fn print_calculation(
    tr: &Translator,
    result: &CalculationResult,
    format: OutputFormat,
) -> Result<(), AppError> {
    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(result)?);
        return Ok(());
    }
    println!("{} {} kPa", tr.t(keys::RESULT_REQUIRED_PRESSURE), result.required_pressure);
    println!("{} {} s⁻¹", tr.t(keys::RESULT_SHEAR_RATE), result.shear_rate);
    println!("{} {} Pa·s", tr.t(keys::RESULT_APPARENT_VISCOSITY), result.apparent_viscosity);
    println!("{} {}", tr.t(keys::RESULT_REYNOLDS), result.reynolds_number);
    println!("{} {}", tr.t(keys::RESULT_FLOW_REGIME), tr.regime(result.flow_regime));
    println!("{} {} s", tr.t(keys::RESULT_INJECTION_TIME), result.optimal_injection_time);

    println!("{}", tr.t(keys::RESULT_PROFILE_HEADING));
    for point in &result.pressure_profile {
        println!("  {:>8.1}  {:>12.2}", point.distance, point.pressure);
    }

    if !result.warnings.is_empty() {
        println!("{}", tr.t(keys::RESULT_WARNINGS_HEADING));
        for warning in &result.warnings {
            println!("- {}", tr.warning(*warning));
        }
    }
    Ok(())
}

/// 환경 영향 결과를 출력한다.
pub fn print_impacts(
    tr: &Translator,
    impacts: &[EnvironmentalImpactResult],
    format: OutputFormat,
) -> Result<(), AppError> {
    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(impacts)?);
        return Ok(());
    }
    for impact in impacts {
        println!("\n[{} → Ecomate]", impact.agent);
        println!("{} {}", tr.t(keys::RESULT_CO2_REDUCTION), impact.co2_reduction);
        println!("{} {}", tr.t(keys::RESULT_THERMAL_IMPROVEMENT), impact.thermal_improvement);
        println!("{} {}", tr.t(keys::RESULT_COST_SAVINGS), impact.cost_savings);
        println!("{} {}", tr.t(keys::RESULT_ODP_REDUCTION), impact.odp_reduction);
    }
    Ok(())
}

/// 설정/플래그를 반영한 번역기를 만든다.
pub fn translator_for(cli_lang: Option<&str>, cfg: &Config) -> Translator {
    Translator::new(&resolve_language(cli_lang, Some(&cfg.language)))
}

/// 한 줄을 읽는다. 입력이 끝났으면 `UnexpectedEof` 오류를 돌려준다.
fn read_line(input: &mut impl BufRead, prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Err(io::Error::from(io::ErrorKind::UnexpectedEof).into());
    }
    Ok(buf)
}

fn read_f64(input: &mut impl BufRead, tr: &Translator, prompt: &str) -> Result<f64, AppError> {
    loop {
        let s = read_line(input, prompt)?;
        match s.trim().parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

/// 빈 입력이면 `default`를 돌려준다.
fn read_f64_or(
    input: &mut impl BufRead,
    tr: &Translator,
    prompt: &str,
    default: f64,
) -> Result<f64, AppError> {
    loop {
        let s = read_line(input, prompt)?;
        let s = s.trim();
        if s.is_empty() {
            return Ok(default);
        }
        match s.parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

/// 양수만 받는다. 빈 입력이면 `current`를 유지한다.
fn read_positive(
    input: &mut impl BufRead,
    tr: &Translator,
    prompt: &str,
    current: f64,
) -> Result<Option<f64>, AppError> {
    let v = read_f64_or(input, tr, prompt, current)?;
    Ok((v.is_finite() && v > 0.0).then_some(v))
}
