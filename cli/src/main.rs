mod analyze;
mod cli;
mod error;
mod health;
mod init;
mod progress;
mod ui;

use analyze::AnalyzeArgs;
use clap::Parser;
use cli::{Cli, Commands};
use colored::Colorize;
use std::process;
use tracing_subscriber::EnvFilter;

/// Initialize tracing on stderr so reports on stdout stay clean.
///
/// `RUST_LOG` wins when set; otherwise `--verbose` raises the library's level
/// to debug.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "truth_finder=debug,truthfinder=debug"
    } else {
        "truth_finder=warn,truthfinder=warn"
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.command.verbose());

    let result = match cli.command {
        Commands::Analyze {
            url,
            endpoint,
            config,
            format,
            no_bars,
            verbose,
        } => analyze::execute(AnalyzeArgs {
            url,
            endpoint,
            config_path: config,
            format,
            no_bars,
            verbose,
        }),
        Commands::Health {
            endpoint,
            config,
            verbose,
        } => health::execute(config, endpoint, verbose),
        Commands::Init { config, force } => init::execute(config, force),
    };

    if let Err(err) = result {
        eprintln!("{} {}", "Error:".bold().red(), err.user_message());
        process::exit(1);
    }
}
