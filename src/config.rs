//! Configuration management for the career coach

use crate::error::{CareerCoachError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub catalog: CatalogConfig,
    pub results: ResultsConfig,
    pub output: OutputConfig,
    pub cover_letter: CoverLetterConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// CSV file with "Job Role" and "Required Skills" columns
    pub path: PathBuf,
    /// Field delimiter, `,` or `\t` in practice
    pub delimiter: char,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultsConfig {
    pub path: PathBuf,
    pub enabled: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub top_matches: usize,
    pub show_recommendations: bool,
    pub color_output: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoverLetterConfig {
    pub output_path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog: CatalogConfig {
                path: PathBuf::from("data").join("job_roles.csv"),
                delimiter: ',',
            },
            results: ResultsConfig {
                path: PathBuf::from("data").join("resume_results.csv"),
                enabled: true,
            },
            output: OutputConfig {
                format: OutputFormat::Console,
                top_matches: 2,
                show_recommendations: true,
                color_output: true,
            },
            cover_letter: CoverLetterConfig {
                output_path: PathBuf::from("cover_letter.txt"),
            },
        }
    }
}

impl Config {
    /// Load from the user config directory, writing defaults on first run
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    /// Load an explicit config file; a missing file is an error here
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CareerCoachError::Configuration(format!(
                "Config file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| CareerCoachError::Configuration(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| CareerCoachError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("career-coach")
            .join("config.toml")
    }

    fn validate(&self) -> Result<()> {
        if !self.catalog.delimiter.is_ascii() {
            return Err(CareerCoachError::Configuration(format!(
                "Catalog delimiter must be a single ASCII character, got {:?}",
                self.catalog.delimiter
            )));
        }
        if self.output.top_matches == 0 {
            return Err(CareerCoachError::Configuration(
                "output.top_matches must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Catalog delimiter as the byte the CSV reader expects
    pub fn catalog_delimiter(&self) -> u8 {
        // validate() guarantees ASCII; fall back to comma for hand-built configs
        u8::try_from(self.catalog.delimiter).unwrap_or(b',')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_round_trips_through_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        Config::default().save_to(&path).unwrap();
        let loaded = Config::load_from(&path).unwrap();

        assert_eq!(loaded.output.top_matches, 2);
        assert_eq!(loaded.output.format, OutputFormat::Console);
        assert_eq!(loaded.catalog.delimiter, ',');
        assert!(loaded.results.enabled);
    }

    #[test]
    fn test_missing_config_file_is_error() {
        let result = Config::load_from(Path::new("does/not/exist.toml"));
        assert!(matches!(result, Err(CareerCoachError::Configuration(_))));
    }

    #[test]
    fn test_zero_top_matches_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.output.top_matches = 0;
        config.save_to(&path).unwrap();

        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn test_tab_delimiter() {
        let mut config = Config::default();
        config.catalog.delimiter = '\t';
        assert_eq!(config.catalog_delimiter(), b'\t');
    }
}
