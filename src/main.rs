//! json-to-ts CLI
//!
//! Command-line interface for generating TypeScript declarations from JSON

use clap::{CommandFactory, Parser};
use json_to_ts::cli::{log_directives, Cli, Runner};
use tracing_subscriber::EnvFilter;

fn main() {
    // Bare invocation prints usage and succeeds
    if std::env::args_os().len() <= 1 {
        if Cli::command().print_help().is_err() {
            std::process::exit(1);
        }
        println!();
        return;
    }

    let cli = Cli::parse();

    // Logs go to stderr so stdout only carries declarations
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(log_directives(
            cli.verbose,
            rust_log.as_deref(),
        )))
        .with_writer(std::io::stderr)
        .init();

    let runner = Runner::new(cli);

    if let Err(e) = runner.run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
