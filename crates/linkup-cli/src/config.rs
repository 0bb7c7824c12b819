use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::Deserialize;

/// Server configuration, read from a YAML file. Every field is optional;
/// a missing file means all defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub data_dir: Option<PathBuf>,
    pub port: Option<u16>,
    pub provider: ProviderConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub model: Option<String>,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(raw) => Ok(serde_yaml::from_str(&raw)?),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(error) => Err(error.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let config = Config::load(Path::new("/nonexistent/linkup.yaml")).unwrap();
        assert!(config.port.is_none());
        assert!(config.provider.api_key.is_none());
    }

    #[test]
    fn parses_partial_yaml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("linkup.yaml");
        fs::write(
            &path,
            "port: 8080\nprovider:\n  model: openai/gpt-4o-mini\n",
        )
        .unwrap();
        let config = Config::load(&path).unwrap();
        assert_eq!(config.port, Some(8080));
        assert_eq!(config.provider.model.as_deref(), Some("openai/gpt-4o-mini"));
        assert!(config.provider.api_key.is_none());
    }

    #[test]
    fn malformed_yaml_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("linkup.yaml");
        fs::write(&path, "port: [not a port").unwrap();
        assert!(Config::load(&path).is_err());
    }
}
