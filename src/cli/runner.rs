//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::config::ProxyConfig;
use crate::engine::{EngineConfig, PaginationEngine};
use crate::error::Result;
use crate::http::{HttpClient, HttpClientConfig};
use crate::types::CredentialSource;
use crate::validate::{RawSearchRequest, RequestValidator};
use serde::Serialize;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let config = self.effective_config()?;

        match &self.cli.command {
            Commands::Serve { .. } => crate::cli::serve(config).await,
            Commands::Search {
                query,
                coordinates,
                api_key,
            } => {
                self.search(&config, query, coordinates.as_deref(), api_key)
                    .await
            }
            Commands::Config => {
                print!("{}", config.to_yaml()?);
                Ok(())
            }
        }
    }

    /// Load the config file (if any) and apply command-line overrides
    pub fn effective_config(&self) -> Result<ProxyConfig> {
        let mut config = match &self.cli.config {
            Some(path) => ProxyConfig::load(path)?,
            None => ProxyConfig::default(),
        };

        if let Some(max_pages) = self.cli.max_pages {
            config.upstream.max_pages = max_pages;
        }
        if let Some(base_url) = &self.cli.base_url {
            config.upstream.base_url.clone_from(base_url);
        }

        if let Commands::Serve {
            host,
            port,
            credential_source,
        } = &self.cli.command
        {
            if let Some(host) = host {
                config.server.host.clone_from(host);
            }
            if let Some(port) = port {
                config.server.port = *port;
            }
            if let Some(source) = credential_source {
                config.server.credential_source = *source;
            }
        }

        config.validate()?;
        Ok(config)
    }

    /// Run one search and print the aggregated payload
    async fn search(
        &self,
        config: &ProxyConfig,
        query: &str,
        coordinates: Option<&str>,
        api_key: &str,
    ) -> Result<()> {
        let mut raw = RawSearchRequest::new(query).api_key(api_key);
        raw.coordinates = coordinates.map(ToString::to_string);
        let request = RequestValidator::new(CredentialSource::Body).validate(&raw, None)?;

        let client = HttpClient::with_config(
            HttpClientConfig::builder()
                .base_url(&config.upstream.base_url)
                .timeout(config.upstream.timeout())
                .user_agent(&config.upstream.user_agent)
                .build(),
        )?;
        let engine = PaginationEngine::new(EngineConfig::from(&config.upstream));

        let response = engine.search(&client, &request).await?;
        self.emit(&response)
    }

    fn emit<T: Serialize>(&self, value: &T) -> Result<()> {
        let output = match self.cli.format {
            OutputFormat::Json => serde_json::to_string(value)?,
            OutputFormat::Pretty => serde_json::to_string_pretty(value)?,
        };
        println!("{output}");
        Ok(())
    }
}
