use adreset::config::{self, Environment};
use adreset::server;
use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Self-service Active Directory password reset API.
#[derive(Parser)]
#[command(name = "adreset")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Deployment environment (overrides ADRESET_ENV)
    #[arg(short, long)]
    env: Option<Environment>,

    /// Port to listen on (overrides PORT)
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = match cli.env {
        Some(environment) => config::load_for(environment)?,
        None => config::load_from_env()?,
    };
    if let Some(port) = cli.port {
        config.port = port;
    }

    init_tracing(&config.log_level, &config.log_format);
    config.print_summary();

    server::run(config).await
}

fn init_tracing(log_level: &str, log_format: &str) {
    let filter = EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    if log_format == "json" {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
