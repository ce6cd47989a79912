use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use url::Url;

/// Default search host when no config file overrides it.
pub const DEFAULT_ENDPOINT: &str = "https://search.meridian-institute.org";

const DEFAULT_SCROLL_DURATION_MS: u64 = 600;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Base URL of the search service, e.g. `http://localhost:3000` against
    /// a local backend.
    pub endpoint: String,
    /// How long the results scroll-into-view animation runs.
    pub scroll_duration_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            scroll_duration_ms: DEFAULT_SCROLL_DURATION_MS,
        }
    }
}

impl Config {
    pub fn endpoint_url(&self) -> Result<Url> {
        Url::parse(&self.endpoint)
            .with_context(|| format!("invalid endpoint URL: {}", self.endpoint))
    }
}

pub fn config_path() -> Option<PathBuf> {
    home::home_dir().map(|mut path| {
        path.push(".config");
        path.push("seeker");
        path.push("config.toml");
        path
    })
}

/// Loads the config file if present; any missing or unreadable file falls
/// back to the defaults rather than failing startup.
pub fn load() -> Config {
    match config_path() {
        Some(path) => load_from(&path),
        None => Config::default(),
    }
}

fn load_from(path: &Path) -> Config {
    if let Ok(content) = std::fs::read_to_string(path) {
        if let Ok(config) = toml::from_str::<Config>(&content) {
            return config;
        }
    }
    Config::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_endpoint_is_a_valid_url() {
        let config = Config::default();
        let url = config.endpoint_url().unwrap();
        assert_eq!(url.as_str(), format!("{DEFAULT_ENDPOINT}/"));
    }

    #[test]
    fn partial_file_keeps_remaining_defaults() {
        let config: Config = toml::from_str(r#"endpoint = "http://localhost:3000""#).unwrap();
        assert_eq!(config.endpoint, "http://localhost:3000");
        assert_eq!(config.scroll_duration_ms, DEFAULT_SCROLL_DURATION_MS);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_from(&dir.path().join("does-not-exist.toml"));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn garbage_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "endpoint = 7").unwrap();
        assert_eq!(load_from(&path), Config::default());
    }

    #[test]
    fn file_overrides_are_honored() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "endpoint = \"http://localhost:3000\"\nscroll_duration_ms = 250\n",
        )
        .unwrap();
        let config = load_from(&path);
        assert_eq!(config.endpoint, "http://localhost:3000");
        assert_eq!(config.scroll_duration_ms, 250);
    }
}
