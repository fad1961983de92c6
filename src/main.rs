use std::{env, process};

use rnboot::cli::commands::execute_command;
use rnboot::cli::{output, CliResult};
use rnboot::config::Settings;
use rnboot::infrastructure::di::ServiceContainer;
use rnboot::infrastructure::InfraError;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

/// Log filter directives, e.g. `RNBOOT_LOG=debug`.
const LOG_ENV: &str = "RNBOOT_LOG";

fn main() {
    setup_logging();

    let args: Vec<String> = env::args_os()
        .skip(1)
        .map(|a| a.to_string_lossy().into_owned())
        .collect();

    let code = match run(&args) {
        Ok(code) => code,
        Err(e) => {
            output::error(&e);
            e.exit_code()
        }
    };
    process::exit(code);
}

fn run(args: &[String]) -> CliResult<i32> {
    let cwd = env::current_dir().map_err(|e| InfraError::io("determine working directory", e))?;
    let settings = Settings::load()?;
    tracing::debug!("settings: {:?}", settings);
    let container = ServiceContainer::new(settings);
    execute_command(args, &cwd, &container)
}

fn setup_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    // Create a subscriber with formatted output directed to stderr
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false)
        .with_span_events(FmtSpan::CLOSE);

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(filter))
        .init();
}
