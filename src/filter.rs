// src/filter.rs
use crate::types::BHuntyError;
use regex::{Regex, RegexBuilder};

/// Terms that flag a URL as worth a closer look.
pub const SENSITIVE_KEYWORDS: &[&str] = &[
    "admin", "login", "passwd", "password", "secret", "api", "key", "config", "debug", "token",
    "backup", "dump", "db", "sql", "shell", "root", "ssh", "env", "vault", "staging", "dev",
    "wp-admin", "wp-json", "cdn", "assets.", "_next",
];

/// Case-insensitive substring match against a fixed keyword set.
#[derive(Debug, Clone)]
pub struct KeywordFilter {
    pattern: Regex,
}

impl KeywordFilter {
    /// Keywords are matched literally; `assets.` needs the dot.
    pub fn new(keywords: &[&str]) -> Result<Self, BHuntyError> {
        if keywords.is_empty() {
            return Err(BHuntyError::ConfigError("Keyword list must not be empty".to_string()));
        }
        let alternation = keywords
            .iter()
            .map(|keyword| regex::escape(keyword))
            .collect::<Vec<_>>()
            .join("|");
        let pattern = RegexBuilder::new(&alternation)
            .case_insensitive(true)
            .build()
            .map_err(|e| BHuntyError::ConfigError(format!("Invalid keyword pattern: {}", e)))?;
        Ok(Self { pattern })
    }

    pub fn sensitive() -> Result<Self, BHuntyError> {
        Self::new(SENSITIVE_KEYWORDS)
    }

    pub fn is_match(&self, url: &str) -> bool {
        self.pattern.is_match(url)
    }

    /// Matching URLs, in input order.
    pub fn filter(&self, urls: &[String]) -> Vec<String> {
        urls.iter().filter(|url| self.is_match(url)).cloned().collect()
    }
}

/// URLs carrying a query string with at least one `key=value` pair.
pub fn extract_params(urls: &[String]) -> Vec<String> {
    urls.iter()
        .filter(|url| url.contains('?') && url.contains('='))
        .cloned()
        .collect()
}
