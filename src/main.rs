//! Command-line client for a URL shortener service.
//!
//! # Usage
//!
//! ```bash
//! # Shorten a URL
//! url-shortener-client shorten https://example.com
//!
//! # Show statistics for a short code
//! url-shortener-client stats aB3xYz
//! url-shortener-client stats aB3xYz --summary
//!
//! # Prompt for operations until quit
//! url-shortener-client interactive
//! ```
//!
//! # Environment Variables
//!
//! - `SHORTENER_BASE_URL`: service base URL (default: `http://localhost:8000`)
//! - `SHORTENER_TIMEOUT_SECS`: request timeout in seconds (default: none)
//!
//! Results are printed to stdout; logs and errors go to stderr.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Input, Select};

use url_shortener_client::api::dto::StatsSummary;
use url_shortener_client::application::services::ShortenerService;
use url_shortener_client::config::Config;
use url_shortener_client::domain::ElementId;
use url_shortener_client::infrastructure::{HttpShortenerApi, TerminalPage};
use url_shortener_client::{ClientError, logging};

type Service = ShortenerService<HttpShortenerApi>;

/// Client for a URL shortener service.
#[derive(Parser)]
#[command(name = "url-shortener-client")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Service base URL
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    timeout: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Shorten a long URL
    Shorten {
        /// The URL to shorten
        long_url: String,
    },

    /// Show usage statistics for a short code
    Stats {
        /// Short code to look up
        code: String,

        /// Also print a readable summary when the service reports clicks
        #[arg(short, long)]
        summary: bool,
    },

    /// Prompt for operations until quit
    Interactive,
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("{} {:#}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::from_env()?.with_overrides(cli.base_url, cli.timeout);
    config.validate().context("Invalid configuration")?;

    logging::init(&config);
    config.print_summary();

    let api = HttpShortenerApi::from_config(&config).context("Failed to build HTTP client")?;
    let service = ShortenerService::new(Arc::new(api));

    match cli.command {
        Commands::Shorten { long_url } => shorten(&service, long_url).await?,
        Commands::Stats { code, summary } => stats(&service, code, summary).await?,
        Commands::Interactive => interactive(&service).await?,
    }

    Ok(())
}

async fn shorten(service: &Service, long_url: String) -> Result<(), ClientError> {
    let page = TerminalPage::stdout().with_field(ElementId::LongUrl, long_url);
    service.shorten(&page).await?;
    Ok(())
}

async fn stats(service: &Service, code: String, with_summary: bool) -> Result<(), ClientError> {
    let page = TerminalPage::stdout().with_field(ElementId::ShortCode, code);
    let response = service.stats_response(&page).await?;

    if with_summary {
        match response.summary() {
            Some(summary) => print_summary(&summary),
            None => println!("{}", "  No summary available for this response".yellow()),
        }
    }

    Ok(())
}

/// Prints the typed statistics view.
///
/// ```text
/// Summary
///
///   Code:   aB3xYz
///   Target: https://example.com
///   Clicks: 2
///
///   Timestamp             IP
///   2024-01-15 10:30:00   127.0.0.1
/// ```
fn print_summary(summary: &StatsSummary) {
    println!();
    println!("{}", "Summary".bright_blue().bold());
    println!();
    println!("  Code:   {}", summary.short_code.cyan());
    println!("  Target: {}", summary.long_url.bright_white());
    println!(
        "  Clicks: {}",
        summary.total_clicks.to_string().bright_green().bold()
    );

    if summary.click_logs.is_empty() {
        println!();
        return;
    }

    println!();
    println!(
        "  {:<21} {}",
        "Timestamp".bright_white().bold(),
        "IP".bright_white().bold()
    );
    for click in &summary.click_logs {
        println!(
            "  {:<21} {}",
            click.timestamp.as_deref().unwrap_or("-").bright_black(),
            click.ip.as_deref().unwrap_or("-")
        );
    }
    println!();
}

/// Operations offered by the interactive prompt.
const MENU: &[&str] = &["Shorten a URL", "Show statistics", "Quit"];

/// Interactive loop: choose an operation, enter its input, see the result.
///
/// Service errors are reported and the loop continues; prompt errors
/// (e.g. closed stdin) end it.
async fn interactive(service: &Service) -> Result<()> {
    println!("{}", "URL Shortener".bright_blue().bold());
    println!();

    loop {
        let choice = Select::new()
            .with_prompt("Choose an operation")
            .items(MENU)
            .default(0)
            .interact()?;

        let result = match choice {
            0 => {
                let long_url: String = Input::new().with_prompt("Long URL").interact_text()?;
                shorten(service, long_url).await
            }
            1 => {
                let code: String = Input::new().with_prompt("Short code").interact_text()?;
                stats(service, code, false).await
            }
            _ => break,
        };

        if let Err(e) = result {
            eprintln!("{} {}", "error:".red().bold(), e);
        }
        println!();
    }

    Ok(())
}
