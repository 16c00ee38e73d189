use rewind_protocol_core::TranslatorConfig;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Client version at the end of the translator chain. The server side is always 1.21.2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum ClientVersion {
    #[serde(rename = "1.21")]
    V1_21,
    #[serde(rename = "1.20.5")]
    V1_20_5,
}

#[derive(Debug, Deserialize)]
pub struct ReplayConfig {
    #[serde(default = "default_client_version")]
    pub client_version: ClientVersion,
    #[serde(default)]
    pub mappings_file: Option<PathBuf>,
    #[serde(default)]
    pub translator: TranslatorConfig,
}

fn default_client_version() -> ClientVersion {
    ClientVersion::V1_21
}

impl Default for ReplayConfig {
    fn default() -> Self {
        Self {
            client_version: default_client_version(),
            mappings_file: None,
            translator: TranslatorConfig::default(),
        }
    }
}

impl ReplayConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if path.exists() {
            let contents = std::fs::read_to_string(path)?;
            let config: ReplayConfig = toml::from_str(&contents)?;
            Ok(config)
        } else {
            tracing::info!("No config file found at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full() {
        let config: ReplayConfig = toml::from_str(
            r#"
            client_version = "1.20.5"
            mappings_file = "data/mappings.json"

            [translator]
            suppress_emulation_warnings = true
            "#,
        )
        .unwrap();
        assert_eq!(config.client_version, ClientVersion::V1_20_5);
        assert_eq!(config.mappings_file, Some(PathBuf::from("data/mappings.json")));
        assert!(config.translator.suppress_emulation_warnings);
    }

    #[test]
    fn test_defaults() {
        let config: ReplayConfig = toml::from_str("").unwrap();
        assert_eq!(config.client_version, ClientVersion::V1_21);
        assert!(config.mappings_file.is_none());
        assert!(!config.translator.suppress_emulation_warnings);
    }

    #[test]
    fn test_unknown_version_rejected() {
        assert!(toml::from_str::<ReplayConfig>(r#"client_version = "1.19""#).is_err());
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = ReplayConfig::load(Path::new("does/not/exist.toml")).unwrap();
        assert_eq!(config.client_version, ClientVersion::V1_21);
    }
}
