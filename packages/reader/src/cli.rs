//! Command-line interface for reading build logs.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use buildlog_model::BuildLog;

use crate::config::{validate_input_path, ReaderConfig};
use crate::error::Result;
use crate::output::{render, render_stats, OutputFormat};
use crate::reader::read_from_xml_with_config;

/// buildlog - Inspect XML build logs.
#[derive(Parser)]
#[command(name = "buildlog")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the log tree.
    Show {
        /// XML build log file
        file: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Tree)]
        format: OutputFormat,

        /// Only show this many levels below the build (tree format only)
        #[arg(short = 'd', long)]
        max_depth: Option<usize>,

        /// Accept documents that carry a DTD
        #[arg(long)]
        allow_dtd: bool,
    },

    /// Print the build result and node counts.
    Stats {
        /// XML build log file
        file: PathBuf,

        /// Accept documents that carry a DTD
        #[arg(long)]
        allow_dtd: bool,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Show {
            file,
            format,
            max_depth,
            allow_dtd,
        } => {
            let log = load(&file, allow_dtd)?;
            print!("{}", render(&log, format, max_depth)?);
            Ok(())
        }
        Commands::Stats { file, allow_dtd } => {
            let log = load(&file, allow_dtd)?;
            println!("{}", style(file.display()).bold());
            print!("{}", render_stats(&log));
            Ok(())
        }
    }
}

/// Validate the path and read the log, showing a spinner on stderr meanwhile.
fn load(file: &Path, allow_dtd: bool) -> Result<BuildLog> {
    validate_input_path(file)?;

    let pb = ProgressBar::new_spinner();
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("valid template"),
    );
    pb.set_message(format!("Reading {}...", file.display()));
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    let config = ReaderConfig::default().with_allow_dtd(allow_dtd);
    let result = read_from_xml_with_config(file, &config);
    pb.finish_and_clear();
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_show_defaults() {
        let cli = Cli::parse_from(["buildlog", "show", "build.xml"]);

        let Commands::Show {
            file,
            format,
            max_depth,
            allow_dtd,
        } = cli.command
        else {
            panic!("expected show command");
        };
        assert_eq!(file, PathBuf::from("build.xml"));
        assert_eq!(format, OutputFormat::Tree);
        assert!(max_depth.is_none());
        assert!(!allow_dtd);
    }

    #[test]
    fn test_cli_parse_show_with_options() {
        let cli = Cli::parse_from([
            "buildlog",
            "show",
            "build.xml",
            "--format",
            "json",
            "--max-depth",
            "2",
        ]);

        let Commands::Show {
            format, max_depth, ..
        } = cli.command
        else {
            panic!("expected show command");
        };
        assert_eq!(format, OutputFormat::Json);
        assert_eq!(max_depth, Some(2));
    }

    #[test]
    fn test_cli_parse_stats() {
        let cli = Cli::parse_from(["buildlog", "stats", "build.xml", "--allow-dtd"]);

        let Commands::Stats { file, allow_dtd } = cli.command else {
            panic!("expected stats command");
        };
        assert_eq!(file, PathBuf::from("build.xml"));
        assert!(allow_dtd);
    }

    #[test]
    fn test_cli_rejects_unknown_format() {
        let result = Cli::try_parse_from(["buildlog", "show", "build.xml", "--format", "xml"]);
        assert!(result.is_err());
    }
}
