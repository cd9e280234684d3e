//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the CLI adapter:
//! - Lookup client (via trackdl-lookup), behind `TrackInfoPort`
//! - Download pipeline (via trackdl-download)
//!
//! Command handlers receive the composed `CliContext`.

use std::path::PathBuf;
use std::sync::Arc;

use trackdl_core::TrackInfoPort;
use trackdl_download::{DownloadConfig, DownloadPipeline};
use trackdl_lookup::{LookupClient, LookupConfig};

use crate::error::CliError;
use crate::parser::Cli;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Where downloaded files are written.
    pub output_dir: PathBuf,
    /// Opaque credential for the lookup service; empty means none.
    pub cookies: String,
    /// Lookup client configuration.
    pub lookup: LookupConfig,
    /// Pipeline configuration.
    pub download: DownloadConfig,
}

impl CliConfig {
    /// Create config with default paths and no credentials.
    pub fn with_defaults() -> Self {
        Self {
            output_dir: default_output_dir(),
            cookies: String::new(),
            lookup: LookupConfig::default(),
            download: DownloadConfig::default(),
        }
    }

    /// Create config from parsed arguments, falling back to defaults.
    pub fn from_cli(cli: &Cli) -> Self {
        let mut config = Self::with_defaults();
        if let Some(dir) = &cli.output_dir {
            config.output_dir.clone_from(dir);
        }
        if let Some(cookies) = &cli.cookies {
            config.cookies = cookies.trim().to_string();
        }
        if let Some(endpoint) = &cli.endpoint {
            config.lookup = config.lookup.with_endpoint(endpoint.trim());
        }
        config
    }
}

/// Default output directory: the platform music directory, then `~/Music`,
/// then the working directory.
pub fn default_output_dir() -> PathBuf {
    dirs::audio_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join("Music")))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Fully composed application context for CLI commands.
pub struct CliContext {
    /// Track metadata lookup.
    pub lookup: Arc<dyn TrackInfoPort>,
    /// Download-and-tag pipeline.
    pub pipeline: DownloadPipeline,
    /// Where downloaded files are written.
    pub output_dir: PathBuf,
    /// Opaque credential for the lookup service.
    pub cookies: String,
}

/// Bootstrap the CLI with all dependencies wired up.
pub fn bootstrap(config: CliConfig) -> Result<CliContext, CliError> {
    let lookup = LookupClient::new(config.lookup)
        .map_err(|e| CliError::Config(format!("lookup client: {e}")))?;
    let pipeline = DownloadPipeline::new(config.download)?;

    tracing::debug!(
        output_dir = %config.output_dir.display(),
        endpoint = %lookup.endpoint(),
        has_cookies = !config.cookies.is_empty(),
        "CLI context ready"
    );

    Ok(CliContext {
        lookup: Arc::new(lookup),
        pipeline,
        output_dir: config.output_dir,
        cookies: config.cookies,
    })
}
