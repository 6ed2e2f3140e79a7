use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use scrollpager_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "scrollpager")]
#[command(author, version, about = "Snap-aware scroll paging engine")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a direction token to axis, sign and label
    Resolve {
        /// Direction token (left, right, up, down, inline-start, inline-end, block-start, block-end)
        #[arg(short, long, default_value = "right")]
        direction: String,
        /// Container snapshot (.toml or JSON); without it the default descriptor is used
        #[arg(short, long)]
        snapshot: Option<PathBuf>,
    },
    /// Compute the scroll request for one activation
    Page {
        #[arg(short, long, default_value = "right")]
        direction: String,
        #[arg(short, long)]
        snapshot: PathBuf,
    },
    /// Check whether the container can scroll further in a direction
    CanScroll {
        #[arg(short, long, default_value = "right")]
        direction: String,
        #[arg(short, long)]
        snapshot: PathBuf,
    },
    /// List the snap candidates of a container along an axis
    Candidates {
        /// Axis (x or y)
        #[arg(short, long, default_value = "x")]
        axis: String,
        #[arg(short, long)]
        snapshot: PathBuf,
    },
    /// Interactive carousel demo
    Demo,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = AppConfig::load()?;

    // Initialize logging (stderr, so command output stays clean)
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| config.general.log_level.clone()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    match cli.command {
        Some(Commands::Resolve {
            direction,
            snapshot,
        }) => commands::resolve::run(&direction, snapshot.as_deref(), cli.json),
        Some(Commands::Page {
            direction,
            snapshot,
        }) => commands::page::run(&config, &direction, &snapshot, cli.json),
        Some(Commands::CanScroll {
            direction,
            snapshot,
        }) => commands::can_scroll::run(&direction, &snapshot, cli.json),
        Some(Commands::Candidates { axis, snapshot }) => {
            commands::candidates::run(&config, &axis, &snapshot, cli.json)
        }
        Some(Commands::Demo) | None => commands::demo::run(config),
    }
}
