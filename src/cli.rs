use clap::Parser;
use std::path::PathBuf;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("GIT_HASH"),
    ", built ",
    env!("BUILD_TIME"),
    ")"
);

#[derive(Parser, Debug, Clone, Default)]
#[command(
    name = "bhunty",
    version,
    long_version = LONG_VERSION,
    about = "Automated recon: subdomains + Wayback URLs + optional sensitive keyword scan",
    long_about = "BHunty runs subfinder against a domain, feeds every subdomain to waybackurls,\nmerges the archived URLs and can flag the ones containing sensitive keywords.",
    after_help = r#"EXAMPLES:
    bhunty example.com
    bhunty https://sub.domain.com/page
    bhunty                  # prompts for the domain interactively

OUTPUT:
    results/<domain>/subdomains.txt     (subfinder output)
    results/<domain>/waybackurls.txt    (Wayback Machine URLs)
    results/<domain>/sensitive.txt      (sensitive keyword matches, if scanned)
    results/<domain>/params.txt         (URLs with GET parameters, with --params)"#
)]
pub struct Args {
    /// Domain or URL to scan (prompted for when omitted)
    #[arg(value_name = "DOMAIN_OR_URL")]
    pub target: Option<String>,

    /// Root directory for results
    #[arg(short = 'o', long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Configuration file path (TOML)
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config_path: Option<PathBuf>,

    /// Per-subdomain waybackurls timeout in seconds
    #[arg(long = "timeout", value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Path to the subfinder binary
    #[arg(long = "subfinder", value_name = "PATH")]
    pub subfinder: Option<String>,

    /// Path to the waybackurls binary
    #[arg(long = "waybackurls", value_name = "PATH")]
    pub waybackurls: Option<String>,

    /// Scan for sensitive keywords without asking
    #[arg(long = "sensitive", conflicts_with = "no_sensitive")]
    pub sensitive: bool,

    /// Skip the sensitive keyword scan without asking
    #[arg(long = "no-sensitive")]
    pub no_sensitive: bool,

    /// Extract URLs with GET parameters into params.txt
    #[arg(long = "params")]
    pub params: bool,

    /// Print a JSON run report when done
    #[arg(long = "json")]
    pub json: bool,

    /// Silent mode (no banner, status lines or progress bar)
    #[arg(long = "silent")]
    pub silent: bool,

    /// Verbose mode (debug diagnostics, including skipped fetches)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

impl Args {
    /// Whether the sensitive scan was decided on the command line.
    pub fn sensitive_choice(&self) -> Option<bool> {
        if self.sensitive {
            Some(true)
        } else if self.no_sensitive {
            Some(false)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_positional_target() {
        let args = Args::parse_from(["bhunty", "https://sub.example.com/path", "--params"]);
        assert_eq!(args.target.as_deref(), Some("https://sub.example.com/path"));
        assert!(args.params);
        assert_eq!(args.sensitive_choice(), None);
    }

    #[test]
    fn test_no_target() {
        let args = Args::parse_from(["bhunty", "--sensitive", "-v"]);
        assert!(args.target.is_none());
        assert_eq!(args.sensitive_choice(), Some(true));
        assert!(args.verbose);
    }

    #[test]
    fn test_sensitive_flags_conflict() {
        assert!(Args::try_parse_from(["bhunty", "example.com", "--sensitive", "--no-sensitive"]).is_err());
    }

    #[test]
    fn test_help_is_not_an_error_kind() {
        let err = Args::try_parse_from(["bhunty", "--help"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
        assert_eq!(err.exit_code(), 0);
    }
}
