use std::fs::OpenOptions;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use kinetype_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "kinetype")]
#[command(author, version, about = "Scroll-driven hero title and typewriter preview")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the terminal preview
    Run {
        /// Show the settled pose instead of animating
        #[arg(long)]
        reduced_motion: bool,
    },
    /// Print one frame as JSON
    Sample {
        /// Progress through the hero section
        #[arg(short, long)]
        progress: f64,
        /// Progress through the paragraph section
        #[arg(long, default_value_t = 0.0)]
        paragraph: f64,
        /// Viewport width in pixels
        #[arg(long, default_value_t = 1440.0)]
        width: f64,
        /// Viewport height in pixels
        #[arg(long, default_value_t = 900.0)]
        height: f64,
        /// Seed for the style order (random when omitted)
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Print the phase boundaries
    Timeline,
    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Init never reads the existing file, so it can replace a broken one
    if let Some(Commands::Init { force }) = cli.command {
        return commands::init::run(force);
    }

    // Load configuration
    let config = Arc::new(AppConfig::load()?);

    // The preview owns the terminal, so its logs go to a file
    let interactive = matches!(cli.command, Some(Commands::Run { .. }) | None);
    init_logging(&config, interactive)?;

    match cli.command {
        Some(Commands::Run { reduced_motion }) => {
            commands::run::run(config.clone(), reduced_motion || config.ui.reduced_motion)
        }
        None => commands::run::run(config.clone(), config.ui.reduced_motion),
        Some(Commands::Sample {
            progress,
            paragraph,
            width,
            height,
            seed,
        }) => commands::sample::run(
            &config,
            commands::sample::SampleArgs {
                progress,
                paragraph,
                width,
                height,
                seed,
            },
        ),
        Some(Commands::Timeline) => commands::timeline::run(&config),
        Some(Commands::Init { force }) => commands::init::run(force),
    }
}

fn init_logging(config: &AppConfig, to_file: bool) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| config.general.log_level.clone()),
    );

    if to_file {
        let path = config.log_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating log directory {}", parent.display()))?;
        }
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("opening log file {}", path.display()))?;

        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    Ok(())
}
