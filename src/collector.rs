// src/collector.rs
use crate::sources::WaybackSource;
use crate::utils::dedup_sorted;
use indicatif::{ProgressBar, ProgressStyle};
use log::debug;

/// URLs gathered across all subdomains of one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Collection {
    /// Sorted, deduplicated, no empty lines
    pub urls: Vec<String>,
    /// Subdomains whose fetch failed or timed out
    pub failed: Vec<String>,
}

pub struct ArchiveCollector<'a> {
    source: &'a WaybackSource,
    show_progress: bool,
}

impl<'a> ArchiveCollector<'a> {
    pub fn new(source: &'a WaybackSource, show_progress: bool) -> Self {
        Self { source, show_progress }
    }

    fn progress_bar(&self, total: usize) -> ProgressBar {
        if !self.show_progress {
            return ProgressBar::hidden();
        }
        let bar = ProgressBar::new(total as u64);
        let style = ProgressStyle::with_template("  {spinner:.cyan} [{bar:30.cyan/blue}] {pos}/{len} 🌐 {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=> ");
        bar.set_style(style);
        bar
    }

    /// Fetch every subdomain in order, one at a time.
    ///
    /// A failed or timed-out fetch contributes no URLs and does not stop the loop.
    pub async fn collect(&self, subdomains: &[String]) -> Collection {
        let bar = self.progress_bar(subdomains.len());
        let mut all_urls = Vec::new();
        let mut failed = Vec::new();

        for subdomain in subdomains {
            bar.set_message(subdomain.clone());

            if subdomain.trim().is_empty() {
                bar.inc(1);
                continue;
            }

            match self.source.fetch(subdomain).await {
                Ok(urls) => {
                    debug!("{}: {} urls from {}", self.source.name(), urls.len(), subdomain);
                    all_urls.extend(urls);
                }
                Err(e) => {
                    debug!("{}: skipping {}: {}", self.source.name(), subdomain, e);
                    failed.push(subdomain.clone());
                }
            }
            bar.inc(1);
        }
        bar.finish_and_clear();

        Collection {
            urls: dedup_sorted(all_urls),
            failed,
        }
    }
}
