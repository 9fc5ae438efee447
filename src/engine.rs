use crate::cli::Args;
use crate::collector::ArchiveCollector;
use crate::config;
use crate::error::Result;
use crate::filter::{extract_params, KeywordFilter};
use crate::output::{OutputManager, PARAMS_FILE, SENSITIVE_FILE, SUBDOMAINS_FILE, WAYBACK_FILE};
use crate::prompt::{is_yes, LineReader, StdinReader};
use crate::resolver::resolve_target;
use crate::runner::{CommandRunner, ProcessRunner};
use crate::sources::{SubfinderSource, WaybackSource};
use crate::types::{Config, RunOutcome, RunReport};
use crate::utils::plural;
use log::info;
use std::fmt::Display;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

pub const DOMAIN_PROMPT: &str = "(Domain or URL): ";
pub const SCAN_PROMPT: &str = "\n[?] Scan waybackurls.txt for sensitive keywords? [y/N]: ";

/// Drives one run: resolve, enumerate, collect, then the optional scans.
pub struct BHuntyEngine<R: LineReader = StdinReader> {
    args: Args,
    enumerator: SubfinderSource,
    fetcher: WaybackSource,
    output_manager: OutputManager,
    keyword_filter: KeywordFilter,
    reader: R,
}

impl BHuntyEngine<StdinReader> {
    pub fn new(args: Args) -> Result<Self> {
        let mut config = config::load_config(args.config_path.as_deref())?;
        apply_cli_overrides(&mut config, &args);
        config::validate_config(&config)?;

        Self::with_parts(args, config, Arc::new(ProcessRunner::new()), StdinReader)
    }
}

/// Command-line values win over the config file and environment.
pub fn apply_cli_overrides(config: &mut Config, args: &Args) {
    if let Some(dir) = &args.output_dir {
        config.output_dir = dir.clone();
    }
    if let Some(secs) = args.timeout {
        config.fetcher.timeout_secs = secs;
    }
    if let Some(binary) = &args.subfinder {
        config.enumerator.binary = binary.clone();
    }
    if let Some(binary) = &args.waybackurls {
        config.fetcher.binary = binary.clone();
    }
}

impl<R: LineReader> BHuntyEngine<R> {
    pub fn with_parts(
        args: Args,
        config: Config,
        runner: Arc<dyn CommandRunner>,
        reader: R,
    ) -> Result<Self> {
        Ok(Self {
            enumerator: SubfinderSource::new(config.enumerator, runner.clone()),
            fetcher: WaybackSource::new(config.fetcher, runner),
            output_manager: OutputManager::new(config.output_dir),
            keyword_filter: KeywordFilter::sensitive()?,
            args,
            reader,
        })
    }

    pub fn reader(&self) -> &R {
        &self.reader
    }

    fn status(&self, message: impl Display) {
        if !self.args.silent {
            println!("{}", message);
        }
    }

    fn draw_box(&self, message: &str) {
        let border = format!("+{}+", "-".repeat(message.chars().count() + 2));
        self.status(&border);
        self.status(format!("| {} |", message));
        self.status(&border);
    }

    fn resolve_domain(&mut self) -> Result<String> {
        let raw = match &self.args.target {
            Some(target) => target.clone(),
            None => self
                .reader
                .read_line(DOMAIN_PROMPT)?
                .map(|line| line.trim().to_string())
                .unwrap_or_default(),
        };
        resolve_target(&raw)
    }

    fn wants_sensitive_scan(&mut self) -> Result<bool> {
        match self.args.sensitive_choice() {
            Some(choice) => Ok(choice),
            None => Ok(is_yes(self.reader.read_line(SCAN_PROMPT)?.as_deref())),
        }
    }

    pub async fn run(&mut self) -> Result<RunReport> {
        let start_time = Instant::now();

        let domain = self.resolve_domain()?;
        info!("Resolved target to {}", domain);

        let output_dir = self.output_manager.prepare(&domain)?;
        let mut report = RunReport {
            domain: domain.clone(),
            output_dir: output_dir.clone(),
            outcome: RunOutcome::NoSubdomains,
            subdomains: 0,
            urls: 0,
            failed_fetches: 0,
            sensitive: None,
            params: None,
            artifacts: Vec::new(),
            duration: Default::default(),
            timestamp: String::new(),
        };

        // Stage 1: subdomains
        self.status("[*] Finding subdomains...");
        let subdomains = self.enumerator.enumerate(&domain).await?;
        let subs_path = output_dir.join(SUBDOMAINS_FILE);
        self.output_manager.write_lines(&subs_path, &subdomains)?;
        report.subdomains = subdomains.len();
        report.artifacts.push(subs_path.clone());

        if subdomains.is_empty() {
            self.status("[-] No subdomains found. Exiting.");
            return Ok(finish(report, start_time));
        }

        self.draw_box(&format!(
            "✅  Found {} subdomain{} for {}",
            subdomains.len(),
            plural(subdomains.len()),
            domain
        ));

        // Stage 2: archived URLs
        self.status("[*] Fetching waybackurls for all subdomains...");
        let show_progress = !self.args.silent && atty::is(atty::Stream::Stderr);
        let collection = ArchiveCollector::new(&self.fetcher, show_progress)
            .collect(&subdomains)
            .await;
        if !collection.failed.is_empty() {
            info!(
                "{} of {} subdomain fetches failed or timed out",
                collection.failed.len(),
                subdomains.len()
            );
        }
        let wayback_path = output_dir.join(WAYBACK_FILE);
        self.output_manager.write_lines(&wayback_path, &collection.urls)?;
        report.urls = collection.urls.len();
        report.failed_fetches = collection.failed.len();
        report.artifacts.push(wayback_path.clone());

        self.status("\n[✓] Saved:");
        self.status(format!(" - Subdomains: {}", subs_path.display()));
        self.status(format!(" - WaybackURLs: {}", wayback_path.display()));

        // Stage 3: optional scans
        if self.wants_sensitive_scan()? {
            self.status("[*] Scanning for sensitive keywords...");
            let matches = self.keyword_filter.filter(&collection.urls);
            let path = self.write_artifact(&output_dir, SENSITIVE_FILE, &matches, &mut report)?;
            self.status(format!(
                "\n🔍 Found {} potentially sensitive URL{}.",
                matches.len(),
                plural(matches.len())
            ));
            self.status(format!(" - Sensitive matches saved to: {}", path.display()));
            report.sensitive = Some(matches.len());
        } else {
            self.status("[-] Skipping sensitive scan.");
        }

        if self.args.params {
            self.status("[*] Extracting URLs with parameters...");
            let hits = extract_params(&collection.urls);
            let path = self.write_artifact(&output_dir, PARAMS_FILE, &hits, &mut report)?;
            self.status(format!("🔍 Found {} URL{} with parameters.", hits.len(), plural(hits.len())));
            self.status(format!(" - Parameterized URLs saved to: {}", path.display()));
            report.params = Some(hits.len());
        }

        report.outcome = RunOutcome::Completed;
        Ok(finish(report, start_time))
    }

    fn write_artifact(
        &self,
        output_dir: &Path,
        name: &str,
        lines: &[String],
        report: &mut RunReport,
    ) -> Result<PathBuf> {
        let path = output_dir.join(name);
        self.output_manager.write_lines(&path, lines)?;
        report.artifacts.push(path.clone());
        Ok(path)
    }

    pub fn write_report_json(&self, report: &RunReport) -> Result<()> {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        self.output_manager.write_report_json(&mut handle, report)
    }
}

fn finish(mut report: RunReport, start_time: Instant) -> RunReport {
    report.duration = start_time.elapsed();
    report.timestamp = chrono::Utc::now().to_rfc3339();
    report
}
