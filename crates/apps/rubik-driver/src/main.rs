use anyhow::{Context, Result};
use clap::Parser;
use rubik_driver::{load_config, load_config_or_default, Driver, Session};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "rubik-driver")]
#[command(about = "Replay an input session against a 3x3x3 cube", long_about = None)]
struct Args {
    /// Input session (TOML)
    session: PathBuf,

    /// Driver configuration; defaults are used when omitted
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the final report as JSON
    #[arg(long)]
    json: bool,

    /// Write the final report to a file instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize tracing
    let log_level = args.log_level.parse().unwrap_or(tracing::Level::INFO);
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("rubik={0},rubik_driver={0}", log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Rubik driver v{}", env!("CARGO_PKG_VERSION"));

    let config = match &args.config {
        Some(path) => load_config(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => load_config_or_default(&PathBuf::from("config.toml"))
            .context("Failed to load config.toml")?,
    };
    let session = Session::load(&args.session)
        .with_context(|| format!("Failed to load session {}", args.session.display()))?;

    let mut driver = Driver::new(&config).context("Invalid driver configuration")?;
    driver.run(&session);

    let report = driver.report();
    let rendered = if args.json {
        serde_json::to_string_pretty(&report).context("Failed to serialize report")?
    } else {
        report.to_string()
    };

    match &args.output {
        Some(path) => {
            std::fs::write(path, rendered + "\n")
                .with_context(|| format!("Failed to write report {}", path.display()))?;
            tracing::info!("Report written to {}", path.display());
        }
        None => println!("{}", rendered),
    }

    Ok(())
}
