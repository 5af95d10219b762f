use sys_locale::get_locale;

use crate::injection::{FlowRegime, ProcessWarning};

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_INJECTION: &str = "main_menu.injection";
    pub const MAIN_MENU_IMPACT: &str = "main_menu.impact";
    pub const MAIN_MENU_DEMO: &str = "main_menu.demo";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const PROMPT_SELECT: &str = "prompt.select";
    pub const INVALID_SELECTION: &str = "error.invalid_selection";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";

    pub const INJECTION_HEADING: &str = "injection.heading";
    pub const PROMPT_PIPE_LENGTH: &str = "prompt.pipe_length";
    pub const PROMPT_PIPE_THICKNESS: &str = "prompt.pipe_thickness";
    pub const PROMPT_TEMPERATURE: &str = "prompt.temperature";
    pub const PROMPT_FLOW_RATE: &str = "prompt.flow_rate";
    pub const PROMPT_VISCOSITY: &str = "prompt.viscosity";
    pub const PROMPT_DENSITY: &str = "prompt.density";

    pub const RESULT_REQUIRED_PRESSURE: &str = "result.required_pressure";
    pub const RESULT_SHEAR_RATE: &str = "result.shear_rate";
    pub const RESULT_APPARENT_VISCOSITY: &str = "result.apparent_viscosity";
    pub const RESULT_REYNOLDS: &str = "result.reynolds";
    pub const RESULT_FLOW_REGIME: &str = "result.flow_regime";
    pub const RESULT_INJECTION_TIME: &str = "result.injection_time";
    pub const RESULT_PROFILE_HEADING: &str = "result.profile_heading";
    pub const RESULT_WARNINGS_HEADING: &str = "result.warnings_heading";

    pub const REGIME_LAMINAR: &str = "regime.laminar";
    pub const REGIME_TURBULENT: &str = "regime.turbulent";

    pub const WARNING_TURBULENT: &str = "warning.turbulent";
    pub const WARNING_HIGH_SHEAR: &str = "warning.high_shear";
    pub const WARNING_HIGH_VISCOSITY: &str = "warning.high_viscosity";

    pub const IMPACT_HEADING: &str = "impact.heading";
    pub const IMPACT_OPTIONS: &str = "impact.options";
    pub const PROMPT_AGENT: &str = "prompt.agent";
    pub const PROMPT_CONSUMPTION: &str = "prompt.consumption";
    pub const RESULT_CO2_REDUCTION: &str = "result.co2_reduction";
    pub const RESULT_THERMAL_IMPROVEMENT: &str = "result.thermal_improvement";
    pub const RESULT_COST_SAVINGS: &str = "result.cost_savings";
    pub const RESULT_ODP_REDUCTION: &str = "result.odp_reduction";

    pub const DEMO_HEADING: &str = "demo.heading";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT: &str = "settings.current";
    pub const SETTINGS_OPTIONS: &str = "settings.options";
    pub const SETTINGS_PROMPT_CHANGE: &str = "settings.prompt_change";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";
    pub const PROMPT_LANGUAGE: &str = "prompt.language";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("ko") {
            Language::Ko
        } else {
            Language::En
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }
}

/// 내장 문자열 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 en으로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    /// 번역을 가져온다. 없는 키는 키 문자열 자체를 돌려준다.
    pub fn t(&self, key: &'static str) -> &'static str {
        let found = match self.lang {
            Language::Ko => ko(key),
            Language::En => en(key),
        };
        found.unwrap_or(key)
    }

    /// 유동 영역 이름.
    pub fn regime(&self, regime: FlowRegime) -> &'static str {
        match regime {
            FlowRegime::Laminar => self.t(keys::REGIME_LAMINAR),
            FlowRegime::Turbulent => self.t(keys::REGIME_TURBULENT),
        }
    }

    /// 공정 경고 문장. 영어는 결과에 담긴 원문을 그대로 쓴다.
    pub fn warning(&self, warning: ProcessWarning) -> &'static str {
        if self.lang == Language::En {
            return warning.message();
        }
        match warning {
            ProcessWarning::TurbulentFlow => self.t(keys::WARNING_TURBULENT),
            ProcessWarning::HighShearRate => self.t(keys::WARNING_HIGH_SHEAR),
            ProcessWarning::HighViscosity => self.t(keys::WARNING_HIGH_VISCOSITY),
        }
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: Option<&str>, config_lang: Option<&str>) -> String {
    cli_arg
        .and_then(normalize_lang)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(lang) = get_locale().as_deref().and_then(normalize_locale_string) {
        return Some(lang);
    }
    ["LC_ALL", "LANG"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|v| normalize_locale_string(&v))
}

fn ko(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "오류:",
        APP_EXIT => "프로그램을 종료합니다.",
        MAIN_MENU_TITLE => "\n=== 폴리우레탄 주입 계산기 ===",
        MAIN_MENU_INJECTION => "1) 주입 조건 계산",
        MAIN_MENU_IMPACT => "2) 발포제 환경 영향 비교",
        MAIN_MENU_DEMO => "3) 예제 실행",
        MAIN_MENU_SETTINGS => "4) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        PROMPT_SELECT => "선택: ",
        INVALID_SELECTION => "잘못된 선택입니다.",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        INJECTION_HEADING => "\n-- 주입 조건 계산 --",
        PROMPT_PIPE_LENGTH => "배관 길이 [mm] (50 이상): ",
        PROMPT_PIPE_THICKNESS => "배관 두께(내경) [mm]: ",
        PROMPT_TEMPERATURE => "공정 온도 [°C] (5~40): ",
        PROMPT_FLOW_RATE => "체적 유량 [m³/s]: ",
        PROMPT_VISCOSITY => "25°C 점도 [cP] (엔터=기본값): ",
        PROMPT_DENSITY => "밀도 [g/cm³] (엔터=기본값): ",
        RESULT_REQUIRED_PRESSURE => "필요 주입 압력:",
        RESULT_SHEAR_RATE => "전단율:",
        RESULT_APPARENT_VISCOSITY => "겉보기 점도:",
        RESULT_REYNOLDS => "레이놀즈수:",
        RESULT_FLOW_REGIME => "유동 영역:",
        RESULT_INJECTION_TIME => "최적 주입 시간:",
        RESULT_PROFILE_HEADING => "\n압력 분포 (거리 [mm] / 압력 [kPa]):",
        RESULT_WARNINGS_HEADING => "\n경고:",
        REGIME_LAMINAR => "층류",
        REGIME_TURBULENT => "난류",
        WARNING_TURBULENT => "난류 유동입니다 (Re > 2300). 유량을 줄이는 것을 고려하세요.",
        WARNING_HIGH_SHEAR => "전단율이 높아 재료 물성에 영향을 줄 수 있습니다.",
        WARNING_HIGH_VISCOSITY => "점도가 높아 주입 압력을 높여야 할 수 있습니다.",
        IMPACT_HEADING => "\n-- 발포제 환경 영향 (Ecomate 기준) --",
        IMPACT_OPTIONS => "1) 발포제 하나  2) 전체 비교",
        PROMPT_AGENT => "현재 발포제 (HFC/HCFC/Pentane/HFO): ",
        PROMPT_CONSUMPTION => "연간 사용량 [kg]: ",
        RESULT_CO2_REDUCTION => "CO₂ 감축량 [t/년]:",
        RESULT_THERMAL_IMPROVEMENT => "단열 성능 개선 [%]:",
        RESULT_COST_SAVINGS => "비용 절감 [/년]:",
        RESULT_ODP_REDUCTION => "ODP 감축량 [kg/년]:",
        DEMO_HEADING => "\n-- 예제: L=100mm, D=20mm, 25°C, Q=0.001m³/s, 350cP, 1.12g/cm³ --",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT => "현재 설정:",
        SETTINGS_OPTIONS => "1) 언어  2) 기본 점도  3) 기본 밀도  4) 출력 형식(text/json 전환)",
        SETTINGS_PROMPT_CHANGE => "변경할 번호(취소하려면 엔터): ",
        SETTINGS_INVALID => "잘못된 입력이므로 변경하지 않습니다.",
        SETTINGS_SAVED => "설정이 변경되었습니다.",
        PROMPT_LANGUAGE => "언어 코드 (ko/en/auto): ",
        _ => return None,
    })
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error:",
        APP_EXIT => "Exiting.",
        MAIN_MENU_TITLE => "\n=== Polyurethane Injection Calculator ===",
        MAIN_MENU_INJECTION => "1) Injection parameters",
        MAIN_MENU_IMPACT => "2) Blowing-agent environmental impact",
        MAIN_MENU_DEMO => "3) Run sample",
        MAIN_MENU_SETTINGS => "4) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        PROMPT_SELECT => "Select: ",
        INVALID_SELECTION => "Invalid selection.",
        INVALID_SELECTION_RETRY => "Invalid input. Please choose again.",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        INJECTION_HEADING => "\n-- Injection Parameters --",
        PROMPT_PIPE_LENGTH => "Pipe length [mm] (>= 50): ",
        PROMPT_PIPE_THICKNESS => "Pipe thickness (inner diameter) [mm]: ",
        PROMPT_TEMPERATURE => "Process temperature [°C] (5-40): ",
        PROMPT_FLOW_RATE => "Volumetric flow rate [m³/s]: ",
        PROMPT_VISCOSITY => "Viscosity at 25°C [cP] (enter = default): ",
        PROMPT_DENSITY => "Density [g/cm³] (enter = default): ",
        RESULT_REQUIRED_PRESSURE => "Required injection pressure:",
        RESULT_SHEAR_RATE => "Shear rate:",
        RESULT_APPARENT_VISCOSITY => "Apparent viscosity:",
        RESULT_REYNOLDS => "Reynolds number:",
        RESULT_FLOW_REGIME => "Flow regime:",
        RESULT_INJECTION_TIME => "Optimal injection time:",
        RESULT_PROFILE_HEADING => "\nPressure profile (distance [mm] / pressure [kPa]):",
        RESULT_WARNINGS_HEADING => "\nWarnings:",
        REGIME_LAMINAR => "laminar",
        REGIME_TURBULENT => "turbulent",
        WARNING_TURBULENT => "Flow is turbulent (Re > 2300) - consider reducing flow rate",
        WARNING_HIGH_SHEAR => "High shear rate may affect material properties",
        WARNING_HIGH_VISCOSITY => "High viscosity may require increased pressure",
        IMPACT_HEADING => "\n-- Blowing-agent Impact (vs. Ecomate) --",
        IMPACT_OPTIONS => "1) Single agent  2) Compare all",
        PROMPT_AGENT => "Current blowing agent (HFC/HCFC/Pentane/HFO): ",
        PROMPT_CONSUMPTION => "Annual consumption [kg]: ",
        RESULT_CO2_REDUCTION => "CO₂ reduction [t/yr]:",
        RESULT_THERMAL_IMPROVEMENT => "Thermal efficiency improvement [%]:",
        RESULT_COST_SAVINGS => "Cost savings [/yr]:",
        RESULT_ODP_REDUCTION => "ODP reduction [kg/yr]:",
        DEMO_HEADING => "\n-- Sample: L=100mm, D=20mm, 25°C, Q=0.001m³/s, 350cP, 1.12g/cm³ --",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT => "Current settings:",
        SETTINGS_OPTIONS => "1) Language  2) Default viscosity  3) Default density  4) Output format (toggle text/json)",
        SETTINGS_PROMPT_CHANGE => "Enter number to change (enter to cancel): ",
        SETTINGS_INVALID => "Invalid input; settings unchanged.",
        SETTINGS_SAVED => "Settings updated.",
        PROMPT_LANGUAGE => "Language code (ko/en/auto): ",
        _ => return None,
    })
}
