//! userdata-report — Reqres user data CSV report with offline fallback.
//!
//! Entry point and error handling boundary. Uses `anyhow` for
//! ergonomic error propagation and user-facing messages.

mod cli;

use userdata_report::config::Config;
use userdata_report::env::Env;
use userdata_report::fetch::{Fetcher, HttpUserSource};
use userdata_report::{generate, mock, report};

use std::process;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use cli::args::{Cli, Command, GenerateArgs, MockPageArgs, OutputFormat};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Generate(args) => run_generate(args).await,
        Command::MockPage(args) => run_mock_page(args),
        Command::Fallback => run_fallback(),
    }
}

/// Install the fmt subscriber. `RUST_LOG` wins unless `--verbose` is set.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        tracing_subscriber::EnvFilter::new("debug")
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Fetch (or fall back) and write the CSV report.
///
/// Exits successfully even when the write fails; the failure is part of
/// the printed summary.
async fn run_generate(args: GenerateArgs) -> Result<()> {
    let work_dir = std::env::current_dir().context("failed to determine working directory")?;
    let mut config =
        Config::load(Some(&work_dir), &Env::real()).context("failed to load configuration")?;

    // CLI flags take precedence over config and environment.
    if let Some(url) = args.url {
        config.fetch.url = url;
    }
    if let Some(ref page) = args.page {
        config
            .fetch
            .set_page(page)
            .context("failed to apply --page")?;
    }
    if let Some(timeout) = args.timeout {
        config.fetch.timeout_secs = timeout;
    }
    if let Some(output) = args.output {
        config.report.output = output;
    }

    let quiet = args.quiet || args.format == OutputFormat::Json;
    if !quiet {
        cli::print_banner();
    }

    let source = HttpUserSource::from_config(&config.fetch);
    let fetcher = Fetcher::new(Arc::new(source), config.fallback_dataset());
    let outcome = generate::generate(&fetcher, &config.report.output, quiet).await;

    if args.format == OutputFormat::Json || !args.quiet {
        print!("{}", args.format.render(&outcome));
        if args.format == OutputFormat::Json {
            println!();
        }
    }

    Ok(())
}

/// Print the dispatcher payload for a page value.
fn run_mock_page(args: MockPageArgs) -> Result<()> {
    let payload = mock::page_payload(args.page.as_deref());
    let json = serde_json::to_string_pretty(&payload).context("failed to serialize payload")?;
    println!("{json}");
    Ok(())
}

/// Print the fallback dataset (config override or built-in) as CSV.
fn run_fallback() -> Result<()> {
    let work_dir = std::env::current_dir().context("failed to determine working directory")?;
    let config =
        Config::load(Some(&work_dir), &Env::real()).context("failed to load configuration")?;
    let csv = report::render_csv(&config.fallback_dataset()).context("failed to render CSV")?;
    print!("{csv}");
    Ok(())
}
