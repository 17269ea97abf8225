//! bspcheck CLI entry point.

use std::process::ExitCode;

use bspcheck::cli::{Cli, CommandDispatcher};
use bspcheck::output::should_use_colors;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Exit code for suite, argument and IO errors.
const ERROR_EXIT_CODE: u8 = 2;

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN
///
/// Logs go to stderr; stdout carries only the report. ANSI styling follows
/// `--no-color`, `NO_COLOR` and whether stderr is a terminal.
fn init_tracing(debug: bool, no_color: bool) {
    let filter = if debug {
        EnvFilter::new("bspcheck=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("bspcheck=warn"))
    };

    let ansi = !no_color
        && std::env::var_os("NO_COLOR").is_none()
        && console::Term::stderr().is_term();

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_ansi(ansi)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug, cli.no_color);

    tracing::debug!("bspcheck starting with args: {:?}", cli);

    let use_color = !cli.no_color && should_use_colors();

    // Determine project root
    let project_root = cli
        .project
        .as_ref()
        .cloned()
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_default());

    let dispatcher = CommandDispatcher::new(project_root, use_color);
    let mut stdout = std::io::stdout().lock();

    match dispatcher.dispatch(&cli, &mut stdout) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(ERROR_EXIT_CODE)
        }
    }
}
