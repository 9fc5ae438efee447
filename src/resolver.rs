// src/resolver.rs
use crate::types::BHuntyError;
use regex::Regex;
use std::sync::OnceLock;

fn domain_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[a-zA-Z0-9.-]+$").expect("domain pattern is valid"))
}

/// Normalize a domain or URL into the bare domain that keys every artifact.
///
/// `https://sub.example.com/path` becomes `sub.example.com`. Anything outside
/// `[a-zA-Z0-9.-]` after the scheme is stripped is rejected. A single trailing
/// dot is removed. A domain made only of dots is rejected.
pub fn resolve_target(input: &str) -> Result<String, BHuntyError> {
    let host = extract_authority(input);

    if !domain_pattern().is_match(host) {
        return Err(BHuntyError::InvalidDomain(input.to_string()));
    }

    let domain = host.strip_suffix('.').unwrap_or(host);
    // `.` or `..` would key artifacts at or above the results root
    if domain.chars().all(|c| c == '.') {
        return Err(BHuntyError::InvalidDomain(input.to_string()));
    }

    Ok(domain.to_string())
}

/// Text between `//` and the next `/` for http(s) inputs, the input itself otherwise.
fn extract_authority(input: &str) -> &str {
    let rest = match input
        .strip_prefix("http://")
        .or_else(|| input.strip_prefix("https://"))
    {
        Some(rest) => rest,
        None => return input,
    };

    rest.split('/').next().unwrap_or(rest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_domain_passes_through() {
        assert_eq!(resolve_target("example.com").unwrap(), "example.com");
        assert_eq!(resolve_target("Sub-1.Example.COM").unwrap(), "Sub-1.Example.COM");
    }

    #[test]
    fn test_single_trailing_dot_stripped() {
        assert_eq!(resolve_target("example.com.").unwrap(), "example.com");
        assert_eq!(resolve_target("example.com..").unwrap(), "example.com.");
    }

    #[test]
    fn test_url_authority_extracted() {
        assert_eq!(resolve_target("https://sub.example.com/path").unwrap(), "sub.example.com");
        assert_eq!(resolve_target("http://example.com").unwrap(), "example.com");
        assert_eq!(resolve_target("https://a.b.example.com/x/y?z=1").unwrap(), "a.b.example.com");
        assert_eq!(resolve_target("https://example.com./").unwrap(), "example.com");
    }

    #[test]
    fn test_invalid_characters_rejected() {
        for input in [
            "exa mple.com",
            "ex@mple.com",
            "example.com:8080",
            "https://user@example.com/",
            "",
            ".",
            "..",
            "...",
            "https://../",
            "ftp://example.com",
        ] {
            let err = resolve_target(input).unwrap_err();
            assert!(matches!(err, BHuntyError::InvalidDomain(_)), "accepted {:?}", input);
        }
    }

    #[test]
    fn test_error_names_original_input() {
        let err = resolve_target("https://bad host/").unwrap_err();
        assert_eq!(err.to_string(), "Invalid domain or URL format: https://bad host/");
    }
}
