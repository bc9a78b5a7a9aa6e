//! iOS battery sensor poller
//!
//! Stands in for the hub scheduler: sets up a level and a state sensor for
//! every registered iOS device, then refreshes them on a fixed interval and
//! publishes each entity's state as a JSON line on stdout.

mod poller;
mod source;

use anyhow::{Context, Result};
use clap::Parser;
use ios_config::SensorConfig;
use poller::Poller;
use source::RegistrySource;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "ios-poller")]
#[command(about = "Poll battery sensors of iOS companion app devices")]
struct Cli {
    /// Configuration file (defaults to the system and user config files)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Poll once and exit
    #[arg(long)]
    once: bool,

    /// Use simulated devices instead of the registry file
    #[arg(long)]
    demo: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => SensorConfig::load(path)
            .with_context(|| format!("Failed to load configuration {}", path.display()))?,
        None => SensorConfig::load_default().context("Failed to load configuration")?,
    };

    setup_logging(&config.logging.level);
    info!("iOS battery poller starting...");

    let source = if cli.demo {
        info!("Demo mode, using simulated devices");
        RegistrySource::demo()?
    } else {
        RegistrySource::open_file(&config.registry.path)?
    };

    let mut poller = Poller::new(source, config.polling.discovery)?;

    if cli.once {
        return poller.poll_once();
    }

    info!(
        "Polling {} sensor(s) every {:?}",
        poller.sensors().len(),
        config.polling.interval()
    );
    poller.run(config.polling.interval()).await
}

/// Setup logging to stderr, keeping stdout for entity state
fn setup_logging(default_level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();
}
