//! gen-config: generate configuration files from a CSV and a template.
//!
//! This is the main entry point for the `gen-config` CLI. It parses arguments,
//! resolves settings, runs the generator, and maps errors to exit codes.

mod cli;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod filename;
pub mod fs;
pub mod generator;
pub mod rows;
pub mod template;

#[cfg(test)]
mod test_support;

use cli::Cli;
use config::Config;
use error::Result;
use generator::{Generator, Job};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    init_logging(&cli);

    match run(&cli) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Errors share stdout with the Generated lines
            println!("Error: {}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = Config::resolve(cli)?;
    tracing::debug!(?config, "resolved settings");

    let job = Job {
        input: &cli.input,
        template: &cli.template,
        output_dir: &cli.output,
    };

    let mut stdout = std::io::stdout().lock();
    let summary = Generator::new(config).run(&job, &mut stdout)?;
    tracing::info!(files = summary.generated.len(), "all rows generated");
    Ok(())
}

/// Diagnostics go to stderr; `RUST_LOG` overrides the `-v` level.
fn init_logging(cli: &Cli) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level()));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
