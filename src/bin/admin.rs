//! CLI tool for inspecting and exercising shortlink-edge.
//!
//! Runs the same path rules, gateways and form logic as the server, without
//! starting it.
//!
//! # Usage
//!
//! ```bash
//! # How would the filter treat a path?
//! cargo run --bin admin -- classify /abc123
//!
//! # Ask the redirect API about a short code
//! cargo run --bin admin -- resolve abc123
//!
//! # Shorten URLs through a running server
//! cargo run --bin admin -- shorten https://example.com https://rust-lang.org --server http://localhost:3000
//! ```
//!
//! # Environment Variables
//!
//! - `REDIRECT_API_URL`: default for `resolve --api`
//! - `RESERVED_PREFIXES`: extra skip prefixes for `classify`

use shortlink_edge::config::parse_prefix_list;
use shortlink_edge::domain::form::{FormPhase, ShortenForm};
use shortlink_edge::domain::gateways::{RedirectGateway, ShortenerGateway};
use shortlink_edge::domain::path_rules::{PathClass, PathRules};
use shortlink_edge::domain::redirect::RedirectLookup;
use shortlink_edge::domain::short_code::ShortCode;
use shortlink_edge::infrastructure::upstream::{
    HttpRedirectGateway, HttpShortenerGateway, build_http_client,
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use url::Url;

/// CLI tool for shortlink-edge.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show how the filter classifies a request path
    Classify {
        /// Request path, e.g. "/abc123"
        path: String,
    },

    /// Look up a short code against the redirect API
    Resolve {
        /// Six-character short code
        code: String,

        /// Redirect API base URL (defaults to REDIRECT_API_URL)
        #[arg(long)]
        api: Option<String>,
    },

    /// Shorten URLs through a running server's /api/shorten
    Shorten {
        /// URLs to shorten
        #[arg(required = true)]
        urls: Vec<String>,

        /// Server origin
        #[arg(short, long, default_value = "http://localhost:3000")]
        server: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Classify { path } => handle_classify(&path),
        Commands::Resolve { code, api } => handle_resolve(&code, api).await?,
        Commands::Shorten { urls, server } => handle_shorten(urls, &server).await?,
    }

    Ok(())
}

/// Prints the filter's verdict for a path.
///
/// # Output Format
///
/// ```text
/// 🔍 /abc123
///   CANDIDATE  looked up as abc123
/// ```
fn handle_classify(path: &str) {
    let extra = std::env::var("RESERVED_PREFIXES")
        .map(|v| parse_prefix_list(&v))
        .unwrap_or_default();

    let rules = PathRules::with_extra_prefixes(&extra);

    println!("{} {}", "🔍".bright_blue(), path.bright_white().bold());

    match rules.classify(path) {
        PathClass::Skip => {
            println!("  {}  matched a skip rule, never looked up", "SKIP".yellow());
        }
        PathClass::Candidate(code) => {
            println!(
                "  {}  looked up as {}",
                "CANDIDATE".green().bold(),
                code.as_str().cyan()
            );
        }
        PathClass::NotShortCode => {
            println!(
                "  {}  not shaped like a short code, passed through",
                "PASS".bright_black()
            );
        }
    }
}

/// Performs one redirect lookup and prints the outcome.
async fn handle_resolve(code: &str, api: Option<String>) -> Result<()> {
    let code = ShortCode::parse(code).with_context(|| {
        format!(
            "'{}' is not a short code ({} lowercase letters or digits)",
            code,
            ShortCode::LENGTH
        )
    })?;

    let api = match api {
        Some(api) => api,
        None => std::env::var("REDIRECT_API_URL")
            .context("Pass --api or set REDIRECT_API_URL")?,
    };
    let api: Url = api.parse().context("Invalid redirect API URL")?;

    let gateway = HttpRedirectGateway::new(build_http_client()?, &api);

    println!(
        "{} {}",
        "🔗 Resolving".bright_blue().bold(),
        code.as_str().cyan()
    );
    println!();

    match gateway.lookup(&code).await {
        RedirectLookup::Found { location, status } => {
            println!(
                "  {} {} → {}",
                status.status_code().as_u16().to_string().green().bold(),
                code.as_str().cyan(),
                location.bright_white()
            );
        }
        RedirectLookup::NotFound => {
            println!("  {}", "Not found, the site would handle this path".yellow());
        }
        RedirectLookup::Error(reason) => {
            println!("  {} {}", "Lookup failed:".red().bold(), reason);
            println!("  {}", "The request would be passed through".bright_black());
        }
    }
    println!();

    Ok(())
}

/// Drives one shortening form against a running server, URL by URL.
async fn handle_shorten(urls: Vec<String>, server: &str) -> Result<()> {
    let origin = server.trim_end_matches('/');
    let endpoint: Url = format!("{}/api/shorten", origin)
        .parse()
        .context("Invalid server URL")?;
    let gateway = HttpShortenerGateway::new(build_http_client()?, endpoint);

    println!("{}", "✂️  Shorten URL".bright_blue().bold());
    println!();

    let mut form = ShortenForm::default();
    for url in urls {
        form.clear();
        form.set_url(url);

        if form.submit().is_ok() {
            let result = gateway.shorten(form.url()).await;
            form.apply(origin, result);
        }

        match form.phase() {
            FormPhase::Success { short_url, .. } => {
                println!(
                    "  {} → {}",
                    form.url().bright_black(),
                    short_url.bright_green().bold()
                );
            }
            FormPhase::Error { message } => {
                println!("  {} {} {}", "❌".red(), form.url().bright_black(), message.red());
            }
            FormPhase::Idle | FormPhase::Submitting => {}
        }
    }
    println!();

    Ok(())
}
