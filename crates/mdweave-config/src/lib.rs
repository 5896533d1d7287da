//! Configuration management for mdweave.
//!
//! Parses `mdweave.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ```toml
//! [output]
//! dir = "out"
//! copy_media = true
//! fence_language = "go"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "mdweave.toml";

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override the output directory.
    pub outdir: Option<PathBuf>,
    /// Override the media copy flag.
    pub copy_media: Option<bool>,
}

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Output configuration.
    pub output: OutputConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Output configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Destination directory for generated Markdown and copied media.
    pub dir: PathBuf,
    /// Copy referenced media next to the generated documents.
    pub copy_media: bool,
    /// Language tag emitted on opening code fences.
    pub fence_language: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("out"),
            copy_media: true,
            fence_language: "go".to_owned(),
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

impl Config {
    /// Load configuration.
    ///
    /// When `config_path` is given, that file must exist. Otherwise the
    /// filename is auto-discovered from the current directory upward, falling
    /// back to defaults when no file is found. `cli_settings` is applied on
    /// top of the loaded values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` for an explicit path that does not
    /// exist, and `ConfigError::Io`/`ConfigError::Parse` for unreadable or
    /// invalid files.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    /// Search for the config file in the current directory and its parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;
        config.config_path = Some(path.to_path_buf());
        Ok(config)
    }

    /// Apply CLI settings on top of loaded values.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(dir) = &settings.outdir {
            self.output.dir.clone_from(dir);
        }
        if let Some(copy_media) = settings.copy_media {
            self.output.copy_media = copy_media;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.output.dir, PathBuf::from("out"));
        assert!(config.output.copy_media);
        assert_eq!(config.output.fence_language, "go");
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        fs::write(
            &path,
            "[output]\ndir = \"docs/generated\"\ncopy_media = false\nfence_language = \"rust\"\n",
        )
        .unwrap();

        let config = Config::load(Some(&path), None).unwrap();
        assert_eq!(config.output.dir, PathBuf::from("docs/generated"));
        assert!(!config.output.copy_media);
        assert_eq!(config.output.fence_language, "rust");
        assert_eq!(config.config_path, Some(path));
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        fs::write(&path, "[output]\ndir = \"elsewhere\"\n").unwrap();

        let config = Config::load(Some(&path), None).unwrap();
        assert_eq!(config.output.dir, PathBuf::from("elsewhere"));
        assert!(config.output.copy_media);
        assert_eq!(config.output.fence_language, "go");
    }

    #[test]
    fn test_cli_settings_override_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        fs::write(&path, "[output]\ndir = \"from-file\"\n").unwrap();

        let settings = CliSettings {
            outdir: Some(PathBuf::from("from-cli")),
            copy_media: Some(false),
        };
        let config = Config::load(Some(&path), Some(&settings)).unwrap();
        assert_eq!(config.output.dir, PathBuf::from("from-cli"));
        assert!(!config.output.copy_media);
    }

    #[test]
    fn test_explicit_missing_path_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let err = Config::load(Some(&path), None).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn test_invalid_toml_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        fs::write(&path, "[output\n").unwrap();
        let err = Config::load(Some(&path), None).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
