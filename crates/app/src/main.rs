use std::fmt;

use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use dioxus::LaunchBuilder;
use sansu_core::model::MAX_LEVELS;
use ui::{App, AppContext};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidLevel { raw: String },
    InvalidSeed { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidLevel { raw } => {
                write!(f, "invalid --start-level value (want 1-{MAX_LEVELS}): {raw}")
            }
            ArgsError::InvalidSeed { raw } => write!(f, "invalid --seed value: {raw}"),
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

struct Args {
    start_level: u32,
    seed: Option<u64>,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--start-level <1-{MAX_LEVELS}>] [--seed <u64>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --start-level 1");
    eprintln!("  no fixed seed (every game is different)");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  SANSU_START_LEVEL, SANSU_SEED");
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut start_level = std::env::var("SANSU_START_LEVEL")
            .ok()
            .and_then(|value| value.parse::<u32>().ok())
            .unwrap_or(1);
        let mut seed = std::env::var("SANSU_SEED")
            .ok()
            .and_then(|value| value.parse::<u64>().ok());

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--start-level" => {
                    let value = require_value(args, "--start-level")?;
                    let parsed: u32 = value
                        .parse()
                        .map_err(|_| ArgsError::InvalidLevel { raw: value.clone() })?;
                    if !(1..=MAX_LEVELS).contains(&parsed) {
                        return Err(ArgsError::InvalidLevel { raw: value });
                    }
                    start_level = parsed;
                }
                "--seed" => {
                    let value = require_value(args, "--seed")?;
                    seed = Some(
                        value
                            .parse()
                            .map_err(|_| ArgsError::InvalidSeed { raw: value.clone() })?,
                    );
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self { start_level, seed })
    }
}

fn main() {
    let mut argv = std::env::args().skip(1);
    let parsed = match Args::parse(&mut argv) {
        Ok(parsed) => parsed,
        Err(err) => {
            // At this layer (binary glue), printing once is fine.
            eprintln!("{err}");
            print_usage();
            std::process::exit(2);
        }
    };

    let context = AppContext::new(parsed.start_level, parsed.seed);

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Waku Waku Math")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
}
