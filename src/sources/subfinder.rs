// src/sources/subfinder.rs
use crate::runner::CommandRunner;
use crate::types::{BHuntyError, EnumeratorConfig};
use crate::utils::split_output_lines;
use log::debug;
use std::sync::Arc;

/// Subdomain enumerator adapter (`subfinder -silent -d <domain>`).
pub struct SubfinderSource {
    config: EnumeratorConfig,
    runner: Arc<dyn CommandRunner>,
}

impl SubfinderSource {
    pub fn new(config: EnumeratorConfig, runner: Arc<dyn CommandRunner>) -> Self {
        Self { config, runner }
    }

    pub fn name(&self) -> &str {
        &self.config.binary
    }

    fn args(&self, domain: &str) -> Vec<String> {
        let mut args = vec!["-silent".to_string(), "-d".to_string(), domain.to_string()];
        args.extend(self.config.extra_args.iter().cloned());
        args
    }

    /// Run the enumerator and return its lines in order, duplicates included.
    ///
    /// Any failure to run, or a non-zero exit, is fatal for the whole run.
    pub async fn enumerate(&self, domain: &str) -> Result<Vec<String>, BHuntyError> {
        let output = self
            .runner
            .run_with_timeout(&self.config.binary, &self.args(domain), None)
            .await?;

        if !output.success {
            let stderr = output.stderr.trim();
            let message = if stderr.is_empty() {
                output.status_description()
            } else {
                format!("{}: {}", output.status_description(), stderr)
            };
            return Err(BHuntyError::ToolError {
                tool: self.name().to_string(),
                message,
            });
        }

        let subdomains = split_output_lines(&output.combined());
        debug!("{} returned {} lines for {}", self.name(), subdomains.len(), domain);
        Ok(subdomains)
    }
}
