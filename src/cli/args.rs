//! Clap argument types.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use userdata_report::generate::GenerateOutcome;

/// Reqres user data report generator with offline fallback.
#[derive(Parser, Debug)]
#[command(name = "userdata-report", version = userdata_report::constants::VERSION)]
pub struct Cli {
    /// Enable debug logging (overrides RUST_LOG).
    #[arg(long, short = 'v', global = true, default_value_t = false)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Fetch users (or fall back to the built-in dataset) and write the CSV report.
    Generate(GenerateArgs),

    /// Print the mock listing payload for a page value.
    MockPage(MockPageArgs),

    /// Print the fallback dataset as CSV.
    Fallback,
}

/// Arguments for the `generate` subcommand.
#[derive(Parser, Debug)]
pub struct GenerateArgs {
    /// User listing URL (overrides config and USERDATA_REPORT_URL).
    #[arg(long)]
    pub url: Option<String>,

    /// Page to request; replaces the `page` query parameter of the URL.
    #[arg(long, allow_hyphen_values = true)]
    pub page: Option<String>,

    /// CSV output path.
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Request timeout in seconds.
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,

    /// Summary format.
    #[arg(long, default_value = "terminal")]
    pub format: OutputFormat,

    /// Suppress progress lines and the banner.
    #[arg(long, short = 'q', default_value_t = false)]
    pub quiet: bool,
}

/// Arguments for the `mock-page` subcommand.
#[derive(Parser, Debug)]
pub struct MockPageArgs {
    /// Raw page value; any string is accepted.
    #[arg(long, allow_hyphen_values = true)]
    pub page: Option<String>,
}

/// Output format for the run summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Terminal,
    Json,
}

impl OutputFormat {
    /// Render the outcome using the renderer for this format.
    pub fn render(&self, outcome: &GenerateOutcome) -> String {
        use userdata_report::output::SummaryRenderer;
        match self {
            OutputFormat::Terminal => userdata_report::output::terminal::TerminalRenderer.render(outcome),
            OutputFormat::Json => userdata_report::output::json::JsonRenderer.render(outcome),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_generate_defaults() {
        let cli = Cli::try_parse_from(["userdata-report", "generate"]).unwrap();
        match cli.command {
            Command::Generate(args) => {
                assert!(args.url.is_none());
                assert!(args.page.is_none());
                assert_eq!(args.format, OutputFormat::Terminal);
                assert!(!args.quiet);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn parse_generate_overrides() {
        let cli = Cli::try_parse_from([
            "userdata-report",
            "generate",
            "--url",
            "http://localhost:8080/api/users",
            "--page",
            "1",
            "-o",
            "out.csv",
            "--timeout",
            "2",
            "--format",
            "json",
        ])
        .unwrap();
        let Command::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(args.url.as_deref(), Some("http://localhost:8080/api/users"));
        assert_eq!(args.page.as_deref(), Some("1"));
        assert_eq!(args.output, Some(PathBuf::from("out.csv")));
        assert_eq!(args.timeout, Some(2));
        assert_eq!(args.format, OutputFormat::Json);
    }

    #[test]
    fn zero_timeout_is_rejected() {
        assert!(Cli::try_parse_from(["userdata-report", "generate", "--timeout", "0"]).is_err());
    }

    #[test]
    fn mock_page_accepts_negative_values() {
        let cli = Cli::try_parse_from(["userdata-report", "mock-page", "--page", "-1"]).unwrap();
        let Command::MockPage(args) = cli.command else {
            panic!("expected mock-page");
        };
        assert_eq!(args.page.as_deref(), Some("-1"));
    }

    #[test]
    fn verbose_is_global() {
        let cli = Cli::try_parse_from(["userdata-report", "fallback", "--verbose"]).unwrap();
        assert!(cli.verbose);
    }
}
