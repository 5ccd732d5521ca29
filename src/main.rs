mod config;
mod page;
mod parser;
mod profile;
mod session;
mod transport;

use std::io::Read;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Context;
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};

use crate::config::Settings;
use crate::session::{is_profile_url, Outcome, Session, Status};
use crate::transport::Transport;

#[derive(Parser)]
#[command(name = "profile_scraper", about = "Extract LinkedIn profiles from rendered HTML and save them")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract a profile and print it as JSON
    Extract {
        /// Rendered page HTML ("-" for stdin)
        input: PathBuf,
        /// Page URL, used as the profile URL when given
        #[arg(short, long)]
        url: Option<String>,
        /// Single-line JSON
        #[arg(long)]
        compact: bool,
    },
    /// Extract a profile and POST it to the collection endpoint
    Save {
        /// Rendered page HTML ("-" for stdin)
        input: PathBuf,
        /// Page URL; must be a profile page
        #[arg(short, long)]
        url: String,
        /// Override the configured endpoint
        #[arg(short, long)]
        endpoint: Option<String>,
    },
    /// Check whether a URL is a profile page
    Check {
        url: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();

    match cli.command {
        Commands::Extract { input, url, compact } => {
            let html = read_input(&input)?;
            println!("{}", render_profile(&html, url.as_deref(), compact)?);
        }
        Commands::Save { input, url, endpoint } => {
            let settings = Settings::load()?;
            let html = read_input(&input)?;
            let endpoint = endpoint.unwrap_or(settings.endpoint);
            let session = Session::new(Transport::new(endpoint), settings.profile_marker);

            let pb = ProgressBar::new_spinner();
            pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
            pb.enable_steady_tick(Duration::from_millis(100));
            pb.set_message(Status::Ready.to_string());

            let outcome = session
                .capture(&url, &html, |status| pb.set_message(status.to_string()))
                .await;
            pb.finish_and_clear();
            println!("{}", outcome.status());

            let elapsed = t0.elapsed();
            if elapsed.as_secs() >= 1 {
                println!("Done in {}", format_duration(elapsed));
            }
            if !matches!(outcome, Outcome::Saved { .. }) {
                std::process::exit(1);
            }
        }
        Commands::Check { url } => {
            let settings = Settings::load()?;
            if is_profile_url(&url, &settings.profile_marker) {
                println!("{}", Status::Ready);
            } else {
                println!("{}", Status::NotApplicable);
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

/// Extraction only; needs no settings.
fn render_profile(html: &str, url: Option<&str>, compact: bool) -> anyhow::Result<String> {
    let profile = parser::process_page(html, url);
    let json = if compact {
        serde_json::to_string(&profile)?
    } else {
        serde_json::to_string_pretty(&profile)?
    };
    Ok(json)
}

fn read_input(input: &PathBuf) -> anyhow::Result<String> {
    if input.as_os_str() == "-" {
        let mut html = String::new();
        std::io::stdin()
            .read_to_string(&mut html)
            .context("Failed to read HTML from stdin")?;
        return Ok(html);
    }
    std::fs::read_to_string(input).with_context(|| format!("Failed to read {}", input.display()))
}

fn format_duration(d: Duration) -> String {
    let secs = d.as_secs();
    if secs < 60 {
        format!("{:.1}s", d.as_secs_f64())
    } else {
        format!("{}m {}s", secs / 60, secs % 60)
    }
}

// ── Tests ──
