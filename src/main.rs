//! rigup CLI entry point.

use std::io::IsTerminal;
use std::process::ExitCode;

use clap::Parser;
use rigup::cli::{Cli, CommandContext, CommandDispatcher};
use rigup::config::load_config;
use rigup::shell::is_ci;
use rigup::ui::{create_ui, OutputMode};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("rigup=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("rigup=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn flag_output_mode(cli: &Cli) -> Option<OutputMode> {
    if cli.quiet {
        Some(OutputMode::Quiet)
    } else if cli.verbose {
        Some(OutputMode::Verbose)
    } else {
        None
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("rigup starting with args: {:?}", cli);

    // Handle --no-color
    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    let cwd = std::env::current_dir().unwrap_or_default();
    let loaded = match load_config(cli.config.as_deref(), &cwd) {
        Ok(loaded) => loaded,
        Err(e) => {
            let mut ui = create_ui(false, flag_output_mode(&cli).unwrap_or_default());
            ui.error(&format!("Error: {}", e));
            return ExitCode::from(1);
        }
    };

    let output_mode = flag_output_mode(&cli)
        .or(loaded.config.output)
        .unwrap_or_default();

    // Prompts need a terminal on both ends
    let non_interactive_flag = matches!(
        &cli.command,
        Some(rigup::cli::Commands::Install(args)) if args.non_interactive
    );
    let is_interactive = console::Term::stdout().is_term()
        && std::io::stdin().is_terminal()
        && !is_ci()
        && !non_interactive_flag;

    let mut ui = create_ui(is_interactive, output_mode);

    let context = CommandContext::new(loaded.config, cli.profile);
    let dispatcher = CommandDispatcher::new(context, is_interactive);

    match dispatcher.dispatch(&cli, ui.as_mut()) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}
