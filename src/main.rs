use anyhow::Result;
use clap::Parser;
use papertrawl::{ClientConfig, PubMedClient, pipeline, report};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "papertrawl",
    about = "Fetch PubMed research papers based on a query.",
    long_about = "Fetches PubMed articles matching a query, flags industry-affiliated \
                  authors, and writes a merged CSV report"
)]
struct Cli {
    /// Search query for PubMed
    query: String,

    /// Output filename for CSV results
    #[arg(short, long, default_value = "results.csv")]
    file: PathBuf,

    /// Enable debug mode (progress messages on stdout)
    #[arg(short, long)]
    debug: bool,

    /// Maximum number of articles to fetch
    #[arg(short = 'n', long, default_value_t = 5)]
    max_results: usize,

    /// API key for NCBI E-utilities
    #[arg(long, env = "NCBI_API_KEY")]
    api_key: Option<String>,

    /// Email for NCBI requests (recommended)
    #[arg(long, env = "NCBI_EMAIL")]
    email: Option<String>,

    /// Tool name for NCBI requests
    #[arg(long, env = "NCBI_TOOL", default_value = "papertrawl")]
    tool: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.debug { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .without_time()
        .init();

    let mut config = ClientConfig::new().with_tool(&cli.tool);
    if let Some(api_key) = &cli.api_key {
        config = config.with_api_key(api_key);
    }
    if let Some(email) = &cli.email {
        config = config.with_email(email);
    }
    let client = PubMedClient::with_config(config);

    let rows = pipeline::collect_report(&client, &cli.query, cli.max_results).await?;
    report::write_csv(&cli.file, &rows)?;

    println!("Merged CSV file saved as '{}'", cli.file.display());
    Ok(())
}
