use anyhow::Result;
use clap::{Parser, Subcommand};
use mfo_scan::{ScanConfig, ScanError, ScanPipeline};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "mfo-cli")]
#[command(about = "MedTech funding opportunity finder")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Scan every source once and write the dashboard CSV.
    Scan,
}

fn init_logging() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer())
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging();

    match cli.command.unwrap_or(Commands::Scan) {
        Commands::Scan => {
            let pipeline = ScanPipeline::new(ScanConfig::default())?;
            match pipeline.run_once().await {
                Ok(summary) => {
                    println!(
                        "scan complete: run_id={} sources={} extracted={} unique={} output={}",
                        summary.run_id,
                        summary.sources_scanned,
                        summary.extracted,
                        summary.unique_records,
                        summary.output_path
                    );
                }
                Err(ScanError::NoData) => {
                    println!("no data found from any source; snapshot not written");
                }
                Err(ScanError::Persist(err)) if err.is_file_in_use() => {
                    println!(
                        "could not write the snapshot ({err}); close the file in whatever has it open and run again"
                    );
                }
                Err(ScanError::Persist(err)) => {
                    println!("could not write the snapshot: {err}");
                }
            }
        }
    }

    Ok(())
}
