use std::path::PathBuf;
use std::process::ExitCode;

use screenprint_pricing::{
    domain::{compute, OrderSpec, PricingError},
    ui::render_report,
    util::{
        persistence::{self, ConfigError},
        telemetry::init_tracing,
        version::{version_label, APP_NAME},
    },
};
use tracing::{info, warn};

const USAGE: &str = "usage: print-pricing [ORDER.json] [--json] [--version]";

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("{0}")]
    Usage(String),
    #[error("order file not found: {}", .0.display())]
    OrderNotFound(PathBuf),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("cannot price order: {0}")]
    Pricing(#[from] PricingError),
    #[error(transparent)]
    Serde(#[from] serde_json::Error),
}

fn usage(message: impl std::fmt::Display) -> CliError {
    CliError::Usage(format!("{message}\n{USAGE}"))
}

#[derive(Debug, Default)]
struct Args {
    order_path: Option<PathBuf>,
    json: bool,
    version: bool,
}

fn parse_args(args: impl Iterator<Item = String>) -> Result<Args, CliError> {
    let mut parsed = Args::default();
    for arg in args {
        match arg.as_str() {
            "--json" => parsed.json = true,
            "--version" | "-V" => parsed.version = true,
            flag if flag.starts_with('-') => {
                return Err(usage(format_args!("unknown option {flag}")))
            }
            path => {
                if parsed.order_path.is_some() {
                    return Err(usage("only one order file may be given"));
                }
                parsed.order_path = Some(PathBuf::from(path));
            }
        }
    }
    Ok(parsed)
}

fn load_order(path: Option<&PathBuf>) -> Result<OrderSpec, CliError> {
    match path {
        Some(path) => {
            persistence::load_json(path)?.ok_or_else(|| CliError::OrderNotFound(path.clone()))
        }
        None => Ok(persistence::load_last_order().unwrap_or_else(|| {
            info!("no saved order, quoting the default job");
            OrderSpec::default()
        })),
    }
}

fn run() -> Result<(), CliError> {
    let args = parse_args(std::env::args().skip(1))?;
    if args.version {
        println!("{APP_NAME} {}", version_label());
        return Ok(());
    }

    let config = persistence::load_pricing_config()?;
    let order = load_order(args.order_path.as_ref())?;
    let report = compute(&order, &config)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_report(&order, &report));
    }

    if let Err(err) = persistence::save_last_order(&order) {
        warn!("failed to save order: {err}");
    }
    Ok(())
}

fn main() -> ExitCode {
    init_tracing("warn");

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
