use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use eco_core::content::QUESTIONS;
use eco_core::model::QuizConfig;
use services::{Clock, HttpQuizSubmitter, QuizSubmitter, SubmitConfig};
use ui::{App, UiApp, build_app_context};

#[derive(Debug, PartialEq, Eq)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidApiUrl { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidApiUrl { raw } => write!(f, "invalid --api value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    quiz_config: QuizConfig,
    clock: Clock,
    submitter: Arc<HttpQuizSubmitter>,
}

impl UiApp for DesktopApp {
    fn quiz_config(&self) -> QuizConfig {
        self.quiz_config
    }

    fn clock(&self) -> Clock {
        self.clock
    }

    fn quiz_submitter(&self) -> Arc<dyn QuizSubmitter> {
        self.submitter.clone()
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Parsed {
    Run(SubmitConfig),
    Help,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  eco [--api <base_url>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --api http://127.0.0.1:5000");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  ECO_API_URL, ECO_LOG");
}

fn parse_args(
    args: impl IntoIterator<Item = String>,
    base: SubmitConfig,
) -> Result<Parsed, ArgsError> {
    let mut config = base;
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--api" => {
                let value = require_value(&mut args, "--api")?;
                let trimmed = value.trim();
                if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
                    return Err(ArgsError::InvalidApiUrl { raw: value });
                }
                config = SubmitConfig::with_base_url(trimmed);
            }
            "--help" | "-h" => return Ok(Parsed::Help),
            _ => return Err(ArgsError::UnknownArg(arg)),
        }
    }

    Ok(Parsed::Run(config))
}

fn init_tracing() -> Result<(), Box<dyn std::error::Error>> {
    let filter = tracing_subscriber::EnvFilter::try_from_env("ECO_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|err| format!("failed to initialize tracing subscriber: {err}"))?;
    Ok(())
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing()?;

    let submit_config = match parse_args(std::env::args().skip(1), SubmitConfig::from_env()) {
        Ok(Parsed::Run(config)) => config,
        Ok(Parsed::Help) => {
            print_usage();
            return Ok(());
        }
        Err(err) => {
            eprintln!("{err}");
            print_usage();
            return Err(err.into());
        }
    };
    tracing::info!(endpoint = %submit_config.endpoint(), "quiz endpoint configured");

    let total_questions = u32::try_from(QUESTIONS.len())?;
    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        quiz_config: QuizConfig::default().with_total_questions(total_questions),
        clock: Clock::default_clock(),
        submitter: Arc::new(HttpQuizSubmitter::new(submit_config)),
    });
    let context = build_app_context(&app);

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("EcoAlerte")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
