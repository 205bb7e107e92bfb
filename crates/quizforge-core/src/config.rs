//! quizforge configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::model::MetadataDefaults;

/// Top-level quizforge configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizforgeConfig {
    /// Metadata used when the caller leaves a field out.
    #[serde(default)]
    pub defaults: MetadataDefaults,
    /// Directory generated pages are written to when no output path is given.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

impl Default for QuizforgeConfig {
    fn default() -> Self {
        Self {
            defaults: MetadataDefaults::default(),
            output_dir: default_output_dir(),
        }
    }
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `quizforge.toml` in the current directory
/// 2. `~/.config/quizforge/config.toml`
///
/// Environment variable overrides: `QUIZFORGE_TEST_NAME`,
/// `QUIZFORGE_CATEGORY`, `QUIZFORGE_DURATION`.
pub fn load_config() -> Result<QuizforgeConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<QuizforgeConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("quizforge.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            parse_config(&path)?
        }
        None => QuizforgeConfig::default(),
    };

    apply_env_overrides(&mut config, |key| std::env::var(key).ok());

    Ok(config)
}

fn parse_config(path: &Path) -> Result<QuizforgeConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    toml::from_str::<QuizforgeConfig>(&content)
        .with_context(|| format!("failed to parse config: {}", path.display()))
}

fn apply_env_overrides(config: &mut QuizforgeConfig, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(name) = lookup("QUIZFORGE_TEST_NAME") {
        config.defaults.test_name = name;
    }
    if let Some(category) = lookup("QUIZFORGE_CATEGORY") {
        config.defaults.category = category;
    }
    if let Some(raw) = lookup("QUIZFORGE_DURATION") {
        match raw.trim().parse::<u32>() {
            Ok(minutes) => config.defaults.duration_minutes = minutes,
            Err(_) => tracing::warn!("ignoring non-numeric QUIZFORGE_DURATION: {raw:?}"),
        }
    }
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("quizforge"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn default_config() {
        let config = QuizforgeConfig::default();
        assert_eq!(config.defaults.test_name, "My Quiz Test");
        assert_eq!(config.defaults.duration_minutes, 60);
        assert_eq!(config.defaults.category, "General Knowledge");
        assert_eq!(config.output_dir, PathBuf::from("."));
    }

    #[test]
    fn parse_partial_config() {
        let toml_str = r#"
output_dir = "quizzes"

[defaults]
duration_minutes = 15
"#;
        let config: QuizforgeConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.output_dir, PathBuf::from("quizzes"));
        assert_eq!(config.defaults.duration_minutes, 15);
        assert_eq!(config.defaults.test_name, "My Quiz Test");
    }

    #[test]
    fn load_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quizforge.toml");
        std::fs::write(&path, "[defaults]\ncategory = \"Science\"\n").unwrap();

        let config = load_config_from(Some(&path)).unwrap();
        assert_eq!(config.defaults.category, "Science");
    }

    #[test]
    fn missing_explicit_path_is_error() {
        let err = load_config_from(Some(Path::new("/no/such/quizforge.toml"))).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
    }

    #[test]
    fn malformed_config_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "defaults = [").unwrap();
        assert!(parse_config(&path).is_err());
    }

    #[test]
    fn env_overrides_apply() {
        let env: HashMap<&str, &str> = [
            ("QUIZFORGE_TEST_NAME", "Weekly Test"),
            ("QUIZFORGE_DURATION", "25"),
        ]
        .into_iter()
        .collect();

        let mut config = QuizforgeConfig::default();
        apply_env_overrides(&mut config, |k| env.get(k).map(|v| v.to_string()));
        assert_eq!(config.defaults.test_name, "Weekly Test");
        assert_eq!(config.defaults.duration_minutes, 25);
        assert_eq!(config.defaults.category, "General Knowledge");
    }

    #[test]
    fn non_numeric_duration_override_ignored() {
        let mut config = QuizforgeConfig::default();
        apply_env_overrides(&mut config, |k| {
            (k == "QUIZFORGE_DURATION").then(|| "soon".to_string())
        });
        assert_eq!(config.defaults.duration_minutes, 60);
    }
}
