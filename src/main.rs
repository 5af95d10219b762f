use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use pu_injection_toolbox::app::{self, AppError};
use pu_injection_toolbox::config::{self, OutputFormat, DEFAULT_CONFIG_PATH};
use pu_injection_toolbox::injection::{self, ProcessParameters};
use pu_injection_toolbox::{environmental, ui_cli};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pu_injection_toolbox")]
#[command(about = "Polyurethane injection calculator for shear-thinning foam in pipes", long_about = None)]
struct Cli {
    /// UI language (auto/ko/en)
    #[arg(long, short = 'L', global = true)]
    lang: Option<String>,
    /// Configuration file path
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute injection pressure, shear rate, viscosity and flow regime
    Calc {
        /// Pipe length [mm]
        #[arg(long)]
        length: f64,
        /// Pipe thickness, used as inner diameter [mm]
        #[arg(long)]
        thickness: f64,
        /// Process temperature [°C]
        #[arg(long)]
        temperature: f64,
        /// Volumetric flow rate [m³/s]
        #[arg(long)]
        flow_rate: f64,
        /// Viscosity at 25 °C [cP] (defaults to the configured value)
        #[arg(long)]
        viscosity: Option<f64>,
        /// Density [g/cm³] (defaults to the configured value)
        #[arg(long)]
        density: Option<f64>,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Compare a blowing agent against Ecomate
    #[command(allow_missing_positional = true)]
    Impact {
        /// Current blowing agent (HFC, HCFC, Pentane, HFO); omit with --all
        #[arg(required_unless_present = "all")]
        agent: Option<String>,
        /// Annual consumption [kg]
        #[arg(allow_negative_numbers = true)]
        consumption: f64,
        /// Compare every agent in the reference table
        #[arg(long, conflicts_with = "agent")]
        all: bool,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Run the reference sample calculation
    Demo {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 하위 명령 또는 대화형 메뉴를 실행한다.
fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match try_run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn try_run(cli: Cli) -> Result<(), AppError> {
    let mut cfg = config::load_or_default(&cli.config)?;
    let mut tr = ui_cli::translator_for(cli.lang.as_deref(), &cfg);
    let configured_format = cfg.output;
    let format_for = move |json: bool| {
        if json {
            OutputFormat::Json
        } else {
            configured_format
        }
    };

    match cli.command {
        None => app::run(&mut cfg, &cli.config, &mut tr, &mut std::io::stdin().lock())?,
        Some(Commands::Calc {
            length,
            thickness,
            temperature,
            flow_rate,
            viscosity,
            density,
            json,
        }) => {
            let params = ProcessParameters::new(length, thickness, temperature, flow_rate)
                .with_viscosity(viscosity.unwrap_or(cfg.defaults.viscosity_cp))
                .with_density(density.unwrap_or(cfg.defaults.density_g_per_cm3));
            let result = injection::calculate(params)?;
            ui_cli::print_calculation(&tr, &result, format_for(json))?;
        }
        Some(Commands::Impact {
            agent,
            consumption,
            all,
            json,
        }) => {
            let impacts = match agent {
                Some(name) if !all => vec![environmental::estimate(&name, consumption)?],
                _ => environmental::compare_all(consumption)?,
            };
            ui_cli::print_impacts(&tr, &impacts, format_for(json))?;
        }
        Some(Commands::Demo { json }) => ui_cli::run_demo(&tr, format_for(json))?,
    }
    Ok(())
}
