// SPDX-License-Identifier: MPL-2.0
use car_gallery::app::{self, paths, Flags};
use car_gallery::domain::gallery::catalog;
use car_gallery::ui::theming::ThemeMode;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
Car Gallery

USAGE:
  car_gallery [OPTIONS]

OPTIONS:
  --config-dir <DIR>    Directory holding settings.toml
  --theme <MODE>        light, dark or system (this run only)
  --log <FILTER>        Log filter, e.g. debug or car_gallery=trace
  -h, --help            Print this help
";

struct Args {
    config_dir: Option<String>,
    theme: Option<ThemeMode>,
    log: Option<String>,
}

fn parse_args() -> Result<Option<Args>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let parsed = Args {
        config_dir: args.opt_value_from_str("--config-dir")?,
        theme: args.opt_value_from_str("--theme")?,
        log: args.opt_value_from_str("--log")?,
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        eprintln!("Ignoring unexpected arguments: {remaining:?}");
    }

    Ok(Some(parsed))
}

/// Priority: `--log` > `RUST_LOG` > `warn`.
fn env_filter(filter: Option<&str>) -> EnvFilter {
    match filter {
        Some(directives) => {
            EnvFilter::try_new(directives).unwrap_or_else(|_| EnvFilter::new("warn"))
        }
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    }
}

fn init_tracing(filter: Option<&str>) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(env_filter(filter))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .compact(),
        )
        .try_init()
        .ok();
}

fn main() -> ExitCode {
    let args = match parse_args() {
        Ok(Some(args)) => args,
        Ok(None) => {
            print!("{HELP}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("Error: {err}\n\n{HELP}");
            return ExitCode::FAILURE;
        }
    };

    init_tracing(args.log.as_deref());
    paths::init_cli_overrides(args.config_dir);

    let collection = match catalog::cars() {
        Ok(collection) => collection,
        Err(err) => {
            tracing::error!("invalid built-in catalog: {err}");
            return ExitCode::FAILURE;
        }
    };

    let flags = Flags { theme: args.theme };

    match app::run(flags, collection) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("application error: {err}");
            ExitCode::FAILURE
        }
    }
}
