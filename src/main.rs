use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pado::analyzer::TrendAnalyzer;
use pado::config::Config;
use pado::models::TrendPeriod;
use pado::ranking::platform_ranking;
use pado::server::{ApiServer, ServerConfig};
use pado::trends::GoogleTrendsClient;

#[derive(Parser)]
#[command(
    name = "pado",
    version,
    about = "Korean blog platform trend aggregator",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file (TOML); environment variables used otherwise
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log format (text, json)
    #[arg(long, global = true, default_value = "text")]
    log_format: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP API server
    Serve {
        /// Bind host
        #[arg(long, default_value = "0.0.0.0")]
        host: String,

        /// Bind port
        #[arg(short, long, default_value = "8080")]
        port: u16,

        /// Disable CORS headers
        #[arg(long, default_value = "false")]
        no_cors: bool,
    },

    /// Analyze blog URLs and print the result as JSON
    Analyze {
        /// Blog URLs to analyze
        #[arg(short, long, required = true, num_args = 1..)]
        url: Vec<String>,
    },

    /// Print trending searches for a time window
    Trending {
        /// Period: daily, week, month, or year
        #[arg(short, long, default_value = "daily")]
        period: String,
    },

    /// Print the platform ranking as JSON
    Ranking,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_tracing(&cli.log_format, cli.verbose)?;

    let config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::from_env()?,
    };
    config.validate()?;

    match cli.command {
        Commands::Serve { host, port, no_cors } => {
            tracing::info!(host = %host, port = %port, "Starting serve command");
            serve(config, host, port, no_cors).await?;
        }

        Commands::Analyze { url } => {
            tracing::info!(urls = ?url, "Starting analyze command");
            analyze(config, url).await?;
        }

        Commands::Trending { period } => {
            tracing::info!(period = %period, "Starting trending command");
            trending(config, period).await?;
        }

        Commands::Ranking => {
            let ranking = platform_ranking();
            println!("{}", serde_json::to_string_pretty(&ranking)?);
        }
    }

    Ok(())
}

fn setup_tracing(format: &str, verbose: bool) -> Result<()> {
    let env_filter = if verbose {
        tracing_subscriber::EnvFilter::new("pado=debug,info")
    } else {
        tracing_subscriber::EnvFilter::new("pado=info,warn")
    };

    match format {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().pretty())
                .init();
        }
    }

    Ok(())
}

fn build_analyzer(config: &Config) -> Result<Arc<TrendAnalyzer>> {
    let client = GoogleTrendsClient::new(config.trends.clone())
        .map_err(|e| anyhow::anyhow!("Failed to build trends client: {e}"))?;
    Ok(Arc::new(TrendAnalyzer::new(Arc::new(client))))
}

async fn serve(config: Config, host: String, port: u16, no_cors: bool) -> Result<()> {
    let server_config = ServerConfig::builder()
        .bind_address_str(&format!("{host}:{port}"))?
        .enable_cors(!no_cors)
        .build()?;

    let analyzer = build_analyzer(&config)?;
    let server = ApiServer::new(server_config, analyzer)?;

    server
        .start_with_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("Shutdown signal received");
        })
        .await?;

    Ok(())
}

async fn analyze(config: Config, urls: Vec<String>) -> Result<()> {
    let analyzer = build_analyzer(&config)?;
    let analysis = analyzer.analyze_urls(&urls).await?;
    println!("{}", serde_json::to_string_pretty(&analysis)?);
    Ok(())
}

async fn trending(config: Config, period: String) -> Result<()> {
    let period = TrendPeriod::parse(&period)
        .ok_or_else(|| anyhow::anyhow!("Invalid period: {period}"))?;

    let analyzer = build_analyzer(&config)?;
    let searches = analyzer.trending(period).await;
    for (i, search) in searches.iter().enumerate() {
        println!("{:2}. {search}", i + 1);
    }
    Ok(())
}
