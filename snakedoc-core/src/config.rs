use crate::scanner::{DEFAULT_DESTINATION_DIR, DEFAULT_EXTENSION, DEFAULT_SOURCE_DIR};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Directory tree the documentation is read from
    #[serde(default = "default_source_dir")]
    pub source_dir: PathBuf,

    /// Existing directory the renamed copies are written to
    #[serde(default = "default_destination_dir")]
    pub destination_dir: PathBuf,

    /// File name suffix selecting the files to copy
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Default output format: "summary" or "json"
    #[serde(default = "default_output_format")]
    pub output_format: String,

    /// Glob patterns, relative to the source directory, that are never copied
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            source_dir: default_source_dir(),
            destination_dir: default_destination_dir(),
            extension: default_extension(),
            output_format: default_output_format(),
            exclude: vec![],
        }
    }
}

fn default_source_dir() -> PathBuf {
    PathBuf::from(DEFAULT_SOURCE_DIR)
}

fn default_destination_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DESTINATION_DIR)
}

fn default_extension() -> String {
    DEFAULT_EXTENSION.to_string()
}

fn default_output_format() -> String {
    "summary".to_string()
}

impl Config {
    /// Load config from .snakedoc/config.toml under `working_dir` if it exists
    pub fn load(working_dir: &Path) -> Result<Self> {
        let config_path = working_dir.join(".snakedoc").join("config.toml");
        if config_path.exists() {
            return Self::load_from_path(&config_path);
        }

        Ok(Self::default())
    }

    /// Load config from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        Ok(config)
    }

    /// Save config to a specific path
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.defaults.source_dir, PathBuf::from("userguide"));
        assert_eq!(config.defaults.destination_dir, PathBuf::from("foo"));
        assert_eq!(config.defaults.extension, ".adoc");
        assert_eq!(config.defaults.output_format, "summary");
        assert!(config.defaults.exclude.is_empty());
    }

    #[test]
    fn test_load_save_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");

        let mut config = Config::default();
        config.defaults.destination_dir = PathBuf::from("docs/flat");
        config.defaults.output_format = "json".to_string();
        config.defaults.exclude = vec!["drafts".to_string()];

        config.save_to_path(&config_path).unwrap();

        let loaded = Config::load_from_path(&config_path).unwrap();
        assert_eq!(loaded.defaults.destination_dir, PathBuf::from("docs/flat"));
        assert_eq!(loaded.defaults.output_format, "json");
        assert_eq!(loaded.defaults.exclude, vec!["drafts".to_string()]);
        assert_eq!(loaded.defaults.source_dir, PathBuf::from("userguide"));
    }

    #[test]
    fn test_partial_config() {
        let toml_content = r#"
[defaults]
destination_dir = "userguide_snake"
"#;

        let config: Config = toml::from_str(toml_content).unwrap();
        assert_eq!(config.defaults.destination_dir, PathBuf::from("userguide_snake"));
        assert_eq!(config.defaults.source_dir, PathBuf::from("userguide"));
        assert_eq!(config.defaults.extension, ".adoc");
    }

    #[test]
    fn test_load_without_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::load(temp_dir.path()).unwrap();
        assert_eq!(config.defaults.destination_dir, PathBuf::from("foo"));
    }

    #[test]
    fn test_load_from_working_dir() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join(".snakedoc");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("config.toml"), "[defaults]\nextension = \".asciidoc\"\n").unwrap();

        let config = Config::load(temp_dir.path()).unwrap();
        assert_eq!(config.defaults.extension, ".asciidoc");
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[defaults\n").unwrap();

        let err = Config::load_from_path(&path).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to parse config"));
    }
}
