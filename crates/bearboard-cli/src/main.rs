//! Bearboard CLI
//!
//! Thin wrapper around bearboard-core for command-line usage.
//!
//! ## Usage
//!
//! ```bash
//! # Check a key against the remote validation endpoint
//! bearboard validate <key>
//!
//! # Generate a dashboard and save the HTML
//! bearboard generate "monthly revenue by region for 2024" --key <key> --out dash.html
//!
//! # Run the local validator function
//! bearboard check-key <key> --secret <secret>
//!
//! # Show the avatar frames planned for a focus change
//! bearboard frames --from EMAIL --to PASSWORD+reveal
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use bearboard_core::animation::{clamp_progress, plan, Continuation, PhaseKind, Plan, Transition};
use bearboard_core::{BearFrames, BoardConfig, DashboardClient, FieldFocus, KeyValidator};
use clap::{Parser, Subcommand};

/// Bearboard - Agentic AI dashboards from the command line
#[derive(Parser)]
#[command(name = "bearboard")]
#[command(version = "0.1.0")]
#[command(about = "Bearboard - generate dashboards from natural-language queries")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Config file (default: <config dir>/bearboard/bearboard.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate an API key against the remote endpoint
    Validate {
        /// API key to check
        key: String,
    },

    /// Generate a dashboard for a query
    Generate {
        /// Natural-language query
        query: String,

        /// API key sent with the request
        #[arg(short, long)]
        key: String,

        /// Write the HTML here instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Run the local key validator and print its JSON reply
    CheckKey {
        /// API key to check
        key: String,

        /// Shared secret (default: $SECRET_API_KEY)
        #[arg(short, long)]
        secret: Option<String>,
    },

    /// Print the avatar frames planned for a focus change
    Frames {
        /// Previous focus: EMAIL, PASSWORD or PASSWORD+reveal
        #[arg(long)]
        from: FieldFocus,

        /// Next focus: EMAIL, PASSWORD or PASSWORD+reveal
        #[arg(long)]
        to: FieldFocus,

        /// Typing progress in [0, 1]
        #[arg(short, long, default_value_t = 0.0)]
        progress: f64,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let config = BoardConfig::load(cli.config.as_deref())
        .with_context(|| match &cli.config {
            Some(path) => format!("loading config from {}", path.display()),
            None => "loading config".to_string(),
        })?;

    match cli.command {
        Commands::Validate { key } => {
            let client = DashboardClient::new(config.api)?;
            if client.validate_key(&key).await? {
                println!("API key validated!");
            } else {
                println!("Invalid API key");
                std::process::exit(1);
            }
        }

        Commands::Generate { query, key, out } => {
            let client = DashboardClient::new(config.api)?;
            let mut attempts = 0;
            let output = client
                .generate(&query, &key, |_| attempts += 1)
                .await?;
            tracing::info!(attempts, "Generation finished");

            if let Some(html) = output.html() {
                match out {
                    Some(path) => {
                        std::fs::write(&path, html)
                            .with_context(|| format!("writing {}", path.display()))?;
                        println!("Dashboard written to {}", path.display());
                    }
                    None => println!("{}", html),
                }
            }
            if let Some(url) = output.url() {
                println!("Dashboard URL: {}", url);
            }
        }

        Commands::CheckKey { key, secret } => {
            let validator = match secret {
                Some(secret) => KeyValidator::new(secret),
                None => KeyValidator::from_env(),
            };
            let body = serde_json::json!({ "x_api_key": key }).to_string();
            let reply = validator.handle("POST", Some(&body));
            tracing::info!(status = reply.status, "Validator replied");
            println!("{}", reply.body);
        }

        Commands::Frames { from, to, progress } => {
            let frames = BearFrames::from_asset_dir(&config.ui.asset_dir);
            let transition = Transition::new(from, to, clamp_progress(progress));
            print_plan(&plan(&transition, &frames, &config.animation), &frames, &transition);
        }
    }

    Ok(())
}

fn print_plan(plan: &Plan, frames: &BearFrames, transition: &Transition) {
    println!("{} -> {} (progress {:.2})", transition.from, transition.to, transition.progress);
    match plan {
        Plan::Noop => println!("  no change; frames in flight keep playing"),
        Plan::Watch(frame) => println!("  +0ms\twatch\t{}", frame.as_deref().unwrap_or("-")),
        Plan::Chain(chain) => {
            let schedule = chain.schedule(transition.to.reveal);
            for scheduled in &schedule {
                println!(
                    "  +{}ms\t{}\t{}",
                    scheduled.at.as_millis(),
                    phase_label(scheduled.phase),
                    scheduled.frame
                );
            }
            if chain.then == Continuation::Watch {
                let at = chain.first.span().as_millis();
                let frame = frames.watching_frame(transition.progress);
                println!("  +{}ms\twatch\t{}", at, frame.map(String::as_str).unwrap_or("-"));
            }
        }
    }
}

fn phase_label(phase: PhaseKind) -> String {
    serde_json::to_value(phase)
        .ok()
        .and_then(|v| v.as_str().map(str::to_string))
        .unwrap_or_else(|| format!("{:?}", phase))
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}
