use super::Host;
use super::common::{LogLevel, init_logging};
use super::config::Config;
use crate::Result;
use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use std::io::Write;

#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// Path to configuration file (default is `eda.toml`)
    #[arg(long, short = 'c', value_name = "PATH")]
    pub config: Option<Utf8PathBuf>,

    /// Set the logging level for diagnostic output
    #[arg(long, value_name = "LEVEL", default_value = "none")]
    pub log_level: LogLevel,
}

pub fn validate_config<H: Host>(host: &mut H, args: &ValidateArgs) -> Result<()> {
    init_logging(args.log_level);
    let config_path = args.config.as_ref();

    match Config::load(Utf8Path::new("."), config_path) {
        Ok(_) => {
            let _ = writeln!(host.output(), "Configuration file is valid");
            if let Some(path) = config_path {
                let _ = writeln!(host.output(), "Config file: {path}");
            } else {
                let _ = writeln!(host.output(), "Using default configuration (no config file found)");
            }
            Ok(())
        }
        Err(e) => {
            let _ = writeln!(host.error(), "❌ Configuration validation failed: {e}");
            host.exit(1);
            Err(e)
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::commands::host::TestHost;
    use crate::commands::init::{InitArgs, init_config};

    fn temp_path(dir: &tempfile::TempDir, name: &str) -> Utf8PathBuf {
        Utf8PathBuf::from(dir.path().to_string_lossy().to_string()).join(name)
    }

    fn validate(path: Utf8PathBuf) -> (Result<()>, TestHost) {
        let mut host = TestHost::new();
        let args = ValidateArgs {
            config: Some(path),
            log_level: LogLevel::None,
        };
        let result = validate_config(&mut host, &args);
        (result, host)
    }

    #[test]
    fn test_default_config_is_valid() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");

        for name in ["eda.toml", "eda.yml", "eda.json"] {
            let config_path = temp_path(&temp_dir, name);

            let mut init_host = TestHost::new();
            let init_args = InitArgs {
                output: config_path.clone(),
            };
            init_config(&mut init_host, &init_args).expect("init_config should succeed");
            assert!(init_host.output_str().contains("Generated default configuration file"));

            let (result, host) = validate(config_path);
            assert!(result.is_ok(), "Default configuration should validate successfully: {result:?}");
            assert!(host.output_str().contains("Configuration file is valid"));
            assert_eq!(host.exit_code, None);
        }
    }

    #[test]
    fn test_default_config_matches_embedded() {
        let parsed: Config =
            toml::from_str(super::super::config::DEFAULT_CONFIG_TOML).expect("DEFAULT_CONFIG_TOML should parse successfully");
        assert_eq!(Config::default(), parsed);
    }

    #[test]
    fn test_invalid_toml_syntax() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let config_path = temp_path(&temp_dir, "invalid_syntax.toml");
        std::fs::write(&config_path, "top_genres = [\n").expect("Failed to write test config");

        let (result, host) = validate(config_path);
        assert!(result.is_err(), "Invalid TOML syntax should fail validation");
        assert!(host.error_str().contains("Configuration validation failed"));
        assert_eq!(host.exit_code, Some(1));
    }

    #[test]
    fn test_unknown_field() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let config_path = temp_path(&temp_dir, "unknown_field.toml");
        std::fs::write(&config_path, "top_genres = 5\nunknown_field = \"value\"\n").expect("Failed to write test config");

        let (result, _) = validate(config_path);
        assert!(result.is_err(), "Unknown field should fail validation");
    }

    #[test]
    fn test_zero_top_k_is_invalid() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let config_path = temp_path(&temp_dir, "zero.json");
        std::fs::write(&config_path, r#"{ "top_countries": 0 }"#).expect("Failed to write test config");

        let (result, host) = validate(config_path);
        assert!(result.is_err(), "Zero top_countries should fail validation");
        assert!(host.error_str().contains("top_countries"));
    }

    #[test]
    fn test_empty_config_is_valid() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let config_path = temp_path(&temp_dir, "empty.toml");
        std::fs::write(&config_path, "# Empty config file\n").expect("Failed to write test config");

        let (result, _) = validate(config_path);
        assert!(result.is_ok(), "Empty config should be valid (uses defaults)");
    }
}
