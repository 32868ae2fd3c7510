mod file_config;

pub use file_config::{AnalyticsStoreConfig, FileConfig, RecordsBackendConfig};

use crate::server::RequestsLoggingLevel;
use anyhow::{bail, Result};
use clap::ValueEnum;

/// CLI arguments that can be overridden by the TOML config file.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub port: u16,
    pub logging_level: RequestsLoggingLevel,
    pub request_timeout_sec: u64,
    pub records_url: Option<String>,
    pub records_anon_key: Option<String>,
    pub analytics_url: Option<String>,
    pub analytics_api_key: Option<String>,
}

#[derive(Debug, Clone)]
pub struct RecordsBackendSettings {
    pub url: String,
    pub anon_key: String,
}

#[derive(Debug, Clone)]
pub struct AnalyticsStoreSettings {
    pub url: String,
    pub api_key: String,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub logging_level: RequestsLoggingLevel,
    pub request_timeout_sec: u64,

    // Either store may be left unconfigured; requests that need it then
    // answer with a misconfiguration error instead of a silent no-op.
    pub records_backend: Option<RecordsBackendSettings>,
    pub analytics_store: Option<AnalyticsStoreSettings>,
}

fn parse_logging_level(s: &str) -> Option<RequestsLoggingLevel> {
    RequestsLoggingLevel::from_str(s, true).ok()
}

impl AppConfig {
    /// Resolve configuration from CLI arguments and optional TOML file config.
    /// TOML values override CLI values where present.
    pub fn resolve(cli: &CliConfig, file_config: Option<FileConfig>) -> Result<Self> {
        let file = file_config.unwrap_or_default();

        let port = file.port.unwrap_or(cli.port);

        let logging_level = file
            .logging_level
            .and_then(|s| parse_logging_level(&s))
            .unwrap_or_else(|| cli.logging_level.clone());

        let request_timeout_sec = file.request_timeout_sec.unwrap_or(cli.request_timeout_sec);

        let records_file = file.records_backend.unwrap_or_default();
        let records_url = records_file.url.or_else(|| cli.records_url.clone());
        let records_anon_key = records_file.anon_key.or_else(|| cli.records_anon_key.clone());
        let records_backend = match (records_url, records_anon_key) {
            (Some(url), Some(anon_key)) => Some(RecordsBackendSettings { url, anon_key }),
            (None, None) => None,
            _ => bail!("records backend requires both a URL and an anon key"),
        };

        let analytics_file = file.analytics_store.unwrap_or_default();
        let analytics_url = analytics_file.url.or_else(|| cli.analytics_url.clone());
        let analytics_api_key = analytics_file
            .api_key
            .or_else(|| cli.analytics_api_key.clone());
        let analytics_store = match (analytics_url, analytics_api_key) {
            (Some(url), Some(api_key)) => Some(AnalyticsStoreSettings { url, api_key }),
            (None, None) => None,
            _ => bail!("analytics store requires both a URL and an API key"),
        };

        Ok(Self {
            port,
            logging_level,
            request_timeout_sec,
            records_backend,
            analytics_store,
        })
    }
}
