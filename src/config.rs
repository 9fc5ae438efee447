use crate::types::{BHuntyError, Config};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const ENV_SUBFINDER: &str = "BHUNTY_SUBFINDER";
pub const ENV_WAYBACKURLS: &str = "BHUNTY_WAYBACKURLS";
pub const ENV_FETCH_TIMEOUT: &str = "BHUNTY_FETCH_TIMEOUT";
pub const ENV_OUTPUT_DIR: &str = "BHUNTY_OUTPUT_DIR";

/// Load configuration from an optional TOML file, then apply environment overrides.
pub fn load_config(config_path: Option<&Path>) -> Result<Config, BHuntyError> {
    let mut config = match config_path {
        Some(path) => {
            let contents = fs::read_to_string(path).map_err(|e| {
                BHuntyError::ConfigError(format!("Failed to read config file {}: {}", path.display(), e))
            })?;
            parse_config(&contents)?
        }
        None => Config::default(),
    };

    apply_env_overrides(&mut config, |key| env::var(key).ok())?;
    validate_config(&config)?;

    Ok(config)
}

pub fn parse_config(contents: &str) -> Result<Config, BHuntyError> {
    toml::from_str(contents)
        .map_err(|e| BHuntyError::ConfigError(format!("Failed to parse config file: {}", e)))
}

pub fn apply_env_overrides<F>(config: &mut Config, lookup: F) -> Result<(), BHuntyError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(binary) = lookup(ENV_SUBFINDER) {
        config.enumerator.binary = binary.trim().to_string();
    }
    if let Some(binary) = lookup(ENV_WAYBACKURLS) {
        config.fetcher.binary = binary.trim().to_string();
    }
    if let Some(secs) = lookup(ENV_FETCH_TIMEOUT) {
        config.fetcher.timeout_secs = secs.trim().parse().map_err(|e| {
            BHuntyError::ConfigError(format!("{} must be a number of seconds: {}", ENV_FETCH_TIMEOUT, e))
        })?;
    }
    if let Some(dir) = lookup(ENV_OUTPUT_DIR) {
        config.output_dir = PathBuf::from(dir.trim());
    }
    Ok(())
}

pub fn validate_config(config: &Config) -> Result<(), BHuntyError> {
    if config.fetcher.timeout_secs == 0 {
        return Err(BHuntyError::ConfigError("Fetch timeout must be greater than 0".to_string()));
    }
    if config.enumerator.binary.is_empty() {
        return Err(BHuntyError::ConfigError("Enumerator binary must not be empty".to_string()));
    }
    if config.fetcher.binary.is_empty() {
        return Err(BHuntyError::ConfigError("Fetcher binary must not be empty".to_string()));
    }
    if config.output_dir.as_os_str().is_empty() {
        return Err(BHuntyError::ConfigError("Output directory must not be empty".to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_parse_partial_config_keeps_defaults() {
        let config = parse_config(
            r#"
            output_dir = "out"

            [enumerator]
            extra_args = ["-all"]
            "#,
        )
        .unwrap();

        assert_eq!(config.output_dir, PathBuf::from("out"));
        assert_eq!(config.enumerator.binary, "subfinder");
        assert_eq!(config.enumerator.extra_args, vec!["-all".to_string()]);
        assert_eq!(config.fetcher.binary, "waybackurls");
        assert_eq!(config.fetcher.timeout_secs, 50);
    }

    #[test]
    fn test_parse_invalid_config() {
        let err = parse_config("output_dir = [").unwrap_err();
        assert!(matches!(err, BHuntyError::ConfigError(_)));
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = [
            (ENV_SUBFINDER, "/opt/bin/subfinder"),
            (ENV_FETCH_TIMEOUT, " 10 "),
            (ENV_OUTPUT_DIR, "/tmp/recon"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        apply_env_overrides(&mut config, |key| vars.get(key).map(|v| v.to_string())).unwrap();

        assert_eq!(config.enumerator.binary, "/opt/bin/subfinder");
        assert_eq!(config.fetcher.binary, "waybackurls");
        assert_eq!(config.fetcher.timeout_secs, 10);
        assert_eq!(config.output_dir, PathBuf::from("/tmp/recon"));
    }

    #[test]
    fn test_env_override_rejects_bad_timeout() {
        let mut config = Config::default();
        let result = apply_env_overrides(&mut config, |key| {
            (key == ENV_FETCH_TIMEOUT).then(|| "soon".to_string())
        });
        assert!(matches!(result, Err(BHuntyError::ConfigError(_))));
    }

    #[test]
    fn test_validate_config() {
        assert!(validate_config(&Config::default()).is_ok());

        let mut config = Config::default();
        config.fetcher.timeout_secs = 0;
        assert!(validate_config(&config).is_err());

        let mut config = Config::default();
        config.enumerator.binary.clear();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_load_config_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[fetcher]\nbinary = \"gau\"\ntimeout_secs = 5").unwrap();

        let config = load_config(Some(file.path())).unwrap();
        assert_eq!(config.fetcher.timeout_secs, 5);
    }

    #[test]
    fn test_load_config_missing_file() {
        let err = load_config(Some(Path::new("/nonexistent/bhunty.toml"))).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
