use crate::Result;
use crate::catalog::FieldNormalizer;
use crate::views::ViewOptions;
use camino::{Utf8Path, Utf8PathBuf};
use ohno::{IntoAppError, app_err};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;

/// The default configuration TOML content, embedded from `default_config.toml`
pub const DEFAULT_CONFIG_TOML: &str = include_str!("../../default_config.toml");

/// File names probed, in order, when no configuration path is given
pub const CONFIG_FILE_NAMES: [&str; 4] = ["eda.toml", "eda.yml", "eda.yaml", "eda.json"];

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Formats tried in order when parsing `date_added`
    #[serde(default = "default_date_formats")]
    pub date_formats: Vec<String>,

    /// Number of genres in the top genres view
    #[serde(default = "default_top_genres")]
    pub top_genres: usize,

    /// Number of most frequent genres broken down by content type
    #[serde(default = "default_top_genres_by_type")]
    pub top_genres_by_type: usize,

    /// Number of countries in the top countries view
    #[serde(default = "default_top_countries")]
    pub top_countries: usize,

    /// Genres followed in the genre trends view
    #[serde(default = "default_focus_genres")]
    pub focus_genres: Vec<String>,

    /// Number of titles in the dashboard's data sample
    #[serde(default = "default_sample_rows")]
    pub sample_rows: usize,
}

fn default_date_formats() -> Vec<String> {
    crate::catalog::DEFAULT_DATE_FORMATS.iter().map(ToString::to_string).collect()
}

const fn default_top_genres() -> usize {
    15
}

const fn default_top_genres_by_type() -> usize {
    10
}

const fn default_top_countries() -> usize {
    10
}

fn default_focus_genres() -> Vec<String> {
    crate::views::DEFAULT_FOCUS_GENRES.iter().map(ToString::to_string).collect()
}

const fn default_sample_rows() -> usize {
    20
}

impl Config {
    /// Load configuration from a file or use defaults
    ///
    /// Without an explicit path, the first of [`CONFIG_FILE_NAMES`] found in `base_dir` is used.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if its values are invalid
    pub fn load(base_dir: &Utf8Path, config_path: Option<&Utf8PathBuf>) -> Result<Self> {
        let (final_path, text) = if let Some(path) = config_path {
            let text = fs::read_to_string(path).into_app_err_with(|| format!("reading configuration from {path}"))?;
            (path.clone(), text)
        } else {
            let mut found = None;
            for name in CONFIG_FILE_NAMES {
                let path = base_dir.join(name);
                match fs::read_to_string(&path) {
                    Ok(text) => {
                        found = Some((path, text));
                        break;
                    }
                    Err(e) if e.kind() == io::ErrorKind::NotFound => {}
                    Err(e) => return Err(e).into_app_err_with(|| format!("reading configuration from {path}")),
                }
            }

            let Some(result) = found else {
                log::debug!("no configuration file found in '{base_dir}', using defaults");
                return Ok(Self::default());
            };
            result
        };

        let extension = final_path.extension().unwrap_or_default();
        let config: Self = match extension {
            "toml" => toml::from_str(&text).into_app_err_with(|| format!("parsing TOML configuration from {final_path}"))?,
            "yml" | "yaml" => serde_yaml::from_str(&text).into_app_err_with(|| format!("parsing YAML configuration from {final_path}"))?,
            "json" => serde_json::from_str(&text).into_app_err_with(|| format!("parsing JSON configuration from {final_path}"))?,
            _ => return Err(app_err!("unsupported configuration file extension: {extension}")),
        };

        config.validate()?;
        log::info!("loaded configuration from {final_path}");
        Ok(config)
    }

    /// Save configuration to a file, choosing the format from the extension
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written or serialization fails
    pub fn save(&self, output_path: &Utf8Path) -> Result<()> {
        let extension = output_path.extension().unwrap_or_default();
        let text = match extension {
            "toml" => toml::to_string_pretty(self)
                .into_app_err_with(|| format!("serializing configuration to TOML for saving to {output_path}"))?,
            "yml" | "yaml" => serde_yaml::to_string(self)
                .into_app_err_with(|| format!("serializing configuration to YAML for saving to {output_path}"))?,
            "json" => serde_json::to_string_pretty(self)
                .into_app_err_with(|| format!("serializing configuration to JSON for saving to {output_path}"))?,
            _ => return Err(app_err!("unsupported configuration file extension: {extension}")),
        };

        fs::write(output_path, text).into_app_err_with(|| format!("writing configuration to {output_path}"))?;
        Ok(())
    }

    /// Save the default configuration
    ///
    /// TOML output keeps the commented template verbatim; other formats are serialized.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written
    pub fn save_default(output_path: &Utf8Path) -> Result<()> {
        if output_path.extension() == Some("toml") {
            fs::write(output_path, DEFAULT_CONFIG_TOML).into_app_err_with(|| format!("writing default configuration to {output_path}"))?;
            return Ok(());
        }

        Self::default().save(output_path)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error if a value is out of range
    pub fn validate(&self) -> Result<()> {
        if self.date_formats.is_empty() {
            return Err(app_err!("date_formats must list at least one format"));
        }

        for (name, value) in [
            ("top_genres", self.top_genres),
            ("top_genres_by_type", self.top_genres_by_type),
            ("top_countries", self.top_countries),
            ("sample_rows", self.sample_rows),
        ] {
            if value == 0 {
                return Err(app_err!("{name} must be greater than zero"));
            }
        }

        Ok(())
    }

    #[must_use]
    pub fn view_options(&self) -> ViewOptions {
        ViewOptions {
            top_genres: self.top_genres,
            top_genres_by_type: self.top_genres_by_type,
            top_countries: self.top_countries,
            focus_genres: self.focus_genres.clone(),
        }
    }

    #[must_use]
    pub fn normalizer(&self) -> FieldNormalizer {
        FieldNormalizer::new(self.date_formats.clone())
    }
}

impl Default for Config {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG_TOML).expect("default_config.toml should be valid TOML that deserializes to Config")
    }
}
