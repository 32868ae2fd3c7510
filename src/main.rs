use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, level_filters::LevelFilter, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use classboard_server::config::{AppConfig, CliConfig, FileConfig};
use classboard_server::server::state::{OptionalAnalyticsStore, OptionalProgressStore};
use classboard_server::server::{run_server, RequestsLoggingLevel, ServerConfig};
use classboard_server::{AnalyticsStore, HttpAnalyticsStore, ProgressStore, RestProgressStore};

#[derive(Parser, Debug)]
struct CliArgs {
    /// The port to listen on.
    #[clap(short, long, default_value_t = 3001)]
    pub port: u16,

    /// The level of logging to perform on each request.
    #[clap(long, default_value = "path")]
    pub logging_level: RequestsLoggingLevel,

    /// Timeout in seconds for requests to the backing stores.
    #[clap(long, default_value_t = 10)]
    pub request_timeout_sec: u64,

    /// Path to a TOML config file. Values there override CLI arguments.
    #[clap(long)]
    pub config: Option<PathBuf>,

    /// Base URL of the records backend.
    #[clap(long, env = "RECORDS_BACKEND_URL")]
    pub records_url: Option<String>,

    /// Public API key for the records backend.
    #[clap(long, env = "RECORDS_BACKEND_ANON_KEY")]
    pub records_anon_key: Option<String>,

    /// Base URL of the analytics store data API.
    #[clap(long, env = "ANALYTICS_STORE_URL")]
    pub analytics_url: Option<String>,

    /// Write API key for the analytics store.
    #[clap(long, env = "ANALYTICS_STORE_API_KEY")]
    pub analytics_api_key: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()?;

    let file_config = match &cli_args.config {
        Some(path) => Some(FileConfig::load(path)?),
        None => None,
    };

    let cli_config = CliConfig {
        port: cli_args.port,
        logging_level: cli_args.logging_level,
        request_timeout_sec: cli_args.request_timeout_sec,
        records_url: cli_args.records_url,
        records_anon_key: cli_args.records_anon_key,
        analytics_url: cli_args.analytics_url,
        analytics_api_key: cli_args.analytics_api_key,
    };

    let config = AppConfig::resolve(&cli_config, file_config)?;

    let progress_store: OptionalProgressStore = match &config.records_backend {
        Some(settings) => {
            info!("Records backend configured at {}", settings.url);
            Some(Arc::new(RestProgressStore::new(
                settings.url.clone(),
                settings.anon_key.clone(),
                config.request_timeout_sec,
            )) as Arc<dyn ProgressStore>)
        }
        None => {
            warn!("Records backend not configured; class-average requests will be rejected");
            None
        }
    };

    let analytics_store: OptionalAnalyticsStore = match &config.analytics_store {
        Some(settings) => {
            info!("Analytics store configured at {}", settings.url);
            Some(Arc::new(HttpAnalyticsStore::new(
                settings.url.clone(),
                settings.api_key.clone(),
                config.request_timeout_sec,
            )) as Arc<dyn AnalyticsStore>)
        }
        None => {
            warn!("Analytics store not configured; computed averages will not be mirrored");
            None
        }
    };

    info!("Ready to serve at port {}!", config.port);
    run_server(
        ServerConfig {
            port: config.port,
            requests_logging_level: config.logging_level,
        },
        progress_store,
        analytics_store,
    )
    .await
}
