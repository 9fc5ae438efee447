// src/sources/waybackurls.rs
use crate::runner::CommandRunner;
use crate::types::{BHuntyError, FetcherConfig};
use crate::utils::split_output_lines;
use std::sync::Arc;

/// Archive fetcher adapter (`waybackurls https://<subdomain>`), bounded by a timeout.
pub struct WaybackSource {
    config: FetcherConfig,
    runner: Arc<dyn CommandRunner>,
}

impl WaybackSource {
    pub fn new(config: FetcherConfig, runner: Arc<dyn CommandRunner>) -> Self {
        Self { config, runner }
    }

    pub fn name(&self) -> &str {
        &self.config.binary
    }

    /// Fetch archived URLs for one subdomain.
    ///
    /// Errors here are per-subdomain; the collector decides to tolerate them.
    pub async fn fetch(&self, subdomain: &str) -> Result<Vec<String>, BHuntyError> {
        let target = format!("https://{}", subdomain);
        let output = self
            .runner
            .run_with_timeout(&self.config.binary, &[target], Some(self.config.timeout()))
            .await?;

        if !output.success {
            return Err(BHuntyError::ToolError {
                tool: self.name().to_string(),
                message: format!("{} for {}", output.status_description(), subdomain),
            });
        }

        Ok(split_output_lines(&output.stdout))
    }
}
