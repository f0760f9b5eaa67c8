//! CLI argument parsing for gen-config.
//!
//! Uses clap derive macros for declarative argument definitions.
//! The run itself lives in the `generator` module.

use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Generate configuration files from a CSV and a template.
///
/// Every `{column}` token in the template is replaced with the row's value
/// for that column, and one file per CSV row is written to the output
/// directory, named after the row's first column.
#[derive(Parser, Debug)]
#[command(name = "gen-config")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// The input CSV file.
    #[arg(short, long)]
    pub input: PathBuf,

    /// The template file.
    #[arg(short, long)]
    pub template: PathBuf,

    /// The output folder to generate the new files.
    #[arg(short, long)]
    pub output: PathBuf,

    /// YAML file with run settings (flags take precedence).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// What to do when a row cannot be generated (skip, abort).
    #[arg(long)]
    pub on_row_error: Option<String>,

    /// Extension appended to filenames that contain no '.' (default: txt).
    #[arg(long)]
    pub default_extension: Option<String>,

    /// CSV field delimiter (default: ',').
    #[arg(long)]
    pub delimiter: Option<char>,

    /// Increase diagnostic output on stderr (-v, -vv, -vvv).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    /// Default log filter for the requested verbosity.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_debug_assert() {
        // Verifies the CLI arguments configuration is valid
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_short_flags() {
        let cli =
            Cli::try_parse_from(["gen-config", "-i", "hosts.csv", "-t", "host.tmpl", "-o", "out"])
                .unwrap();
        assert_eq!(cli.input, PathBuf::from("hosts.csv"));
        assert_eq!(cli.template, PathBuf::from("host.tmpl"));
        assert_eq!(cli.output, PathBuf::from("out"));
        assert!(cli.config.is_none());
        assert!(cli.on_row_error.is_none());
        assert!(cli.default_extension.is_none());
        assert!(cli.delimiter.is_none());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn parse_long_flags() {
        let cli = Cli::try_parse_from([
            "gen-config",
            "--input",
            "hosts.csv",
            "--template",
            "host.tmpl",
            "--output",
            "out",
            "--config",
            "gen.yaml",
            "--on-row-error",
            "abort",
            "--default-extension",
            "cfg",
            "--delimiter",
            ";",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("gen.yaml")));
        assert_eq!(cli.on_row_error.as_deref(), Some("abort"));
        assert_eq!(cli.default_extension.as_deref(), Some("cfg"));
        assert_eq!(cli.delimiter, Some(';'));
    }

    #[test]
    fn missing_required_args_fail() {
        assert!(Cli::try_parse_from(["gen-config"]).is_err());
        assert!(Cli::try_parse_from(["gen-config", "-i", "hosts.csv", "-t", "host.tmpl"]).is_err());
        assert!(Cli::try_parse_from(["gen-config", "-i", "hosts.csv", "-o", "out"]).is_err());
        assert!(Cli::try_parse_from(["gen-config", "-t", "host.tmpl", "-o", "out"]).is_err());
    }

    #[test]
    fn multi_char_delimiter_is_rejected() {
        let result = Cli::try_parse_from([
            "gen-config",
            "-i",
            "a.csv",
            "-t",
            "t",
            "-o",
            "out",
            "--delimiter",
            "ab",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn verbosity_maps_to_log_level() {
        let base = ["gen-config", "-i", "a.csv", "-t", "t", "-o", "out"];

        let cli = Cli::try_parse_from(base).unwrap();
        assert_eq!(cli.log_level(), "warn");

        let cli = Cli::try_parse_from(base.iter().copied().chain(["-v"])).unwrap();
        assert_eq!(cli.log_level(), "info");

        let cli = Cli::try_parse_from(base.iter().copied().chain(["-vv"])).unwrap();
        assert_eq!(cli.log_level(), "debug");

        let cli = Cli::try_parse_from(base.iter().copied().chain(["-vvvv"])).unwrap();
        assert_eq!(cli.log_level(), "trace");
    }
}
