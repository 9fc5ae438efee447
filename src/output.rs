// src/output.rs
use crate::error::{ErrorContext, Result};
use crate::types::{BHuntyError, RunReport};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

pub const SUBDOMAINS_FILE: &str = "subdomains.txt";
pub const WAYBACK_FILE: &str = "waybackurls.txt";
pub const SENSITIVE_FILE: &str = "sensitive.txt";
pub const PARAMS_FILE: &str = "params.txt";

/// Owns the `<root>/<domain>/` layout of result artifacts.
pub struct OutputManager {
    root: PathBuf,
}

impl OutputManager {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn domain_dir(&self, domain: &str) -> PathBuf {
        self.root.join(domain)
    }

    /// Create the domain's directory if absent and return it.
    pub fn prepare(&self, domain: &str) -> Result<PathBuf> {
        let dir = self.domain_dir(domain);
        fs::create_dir_all(&dir)
            .with_context(|| format!("Unable to create output directory {}", dir.display()))?;
        Ok(dir)
    }

    /// Overwrite `path` with one line per entry, each newline-terminated.
    pub fn write_lines(&self, path: &Path, lines: &[String]) -> Result<()> {
        let file = File::create(path).with_context(|| format!("Unable to write file {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        for line in lines {
            writeln!(writer, "{}", line).with_context(|| format!("Unable to write file {}", path.display()))?;
        }
        writer
            .flush()
            .with_context(|| format!("Unable to write file {}", path.display()))
    }

    pub fn write_report_json<W: Write>(&self, writer: &mut W, report: &RunReport) -> Result<()> {
        let json = serde_json::to_string_pretty(report)
            .map_err(|e| BHuntyError::OutputError(format!("Failed to serialize JSON: {}", e)))?;

        writeln!(writer, "{}", json).map_err(|e| BHuntyError::OutputError(e.to_string()))?;

        Ok(())
    }
}
