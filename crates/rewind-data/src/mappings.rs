use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::translations::translation_fallback_1_21_2;

#[derive(Debug, Error)]
pub enum MappingError {
    #[error("Cannot read mapping file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid mapping file: {0}")]
    Json(#[from] serde_json::Error),
}

/// Id tables supplied from outside the binary: block state and particle remaps and
/// translation fallbacks on top of the built-in ones.
#[derive(Debug, Default, Deserialize)]
pub struct MappingData {
    #[serde(default)]
    block_states: HashMap<i32, i32>,
    #[serde(default)]
    particles: HashMap<i32, i32>,
    #[serde(default)]
    translations: HashMap<String, String>,
}

impl MappingData {
    pub fn from_json(json: &str) -> Result<Self, MappingError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self, MappingError> {
        let contents = std::fs::read_to_string(path)?;
        let data = Self::from_json(&contents)?;
        tracing::info!(
            "Loaded {} block state, {} particle and {} translation mappings from {}",
            data.block_states.len(),
            data.particles.len(),
            data.translations.len(),
            path.display()
        );
        Ok(data)
    }

    /// Block states without an entry keep their id.
    pub fn map_block_state(&self, id: i32) -> i32 {
        self.block_states.get(&id).copied().unwrap_or(id)
    }

    pub fn map_particle(&self, id: i32) -> i32 {
        self.particles.get(&id).copied().unwrap_or(id)
    }

    /// Fallback text for a translation key the older client does not know.
    pub fn translation(&self, key: &str) -> Option<&str> {
        self.translations
            .get(key)
            .map(String::as_str)
            .or_else(|| translation_fallback_1_21_2(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_lookup() {
        let data = MappingData::from_json(
            r#"{"block_states": {"27000": 1}, "particles": {"36": 35}, "translations": {"item.minecraft.pale_oak_boat": "Pale Oak Boat"}}"#,
        )
        .unwrap();
        assert_eq!(data.map_block_state(27000), 1);
        assert_eq!(data.map_block_state(5), 5);
        assert_eq!(data.map_particle(36), 35);
        assert_eq!(data.map_particle(1), 1);
        assert_eq!(
            data.translation("item.minecraft.pale_oak_boat"),
            Some("Pale Oak Boat")
        );
        assert_eq!(data.translation("entity.minecraft.creaking"), Some("Creaking"));
    }

    #[test]
    fn test_empty_document() {
        let data = MappingData::from_json("{}").unwrap();
        assert_eq!(data.map_block_state(9), 9);
    }

    #[test]
    fn test_invalid_document() {
        assert!(matches!(
            MappingData::from_json("{\"block_states\": []}"),
            Err(MappingError::Json(_))
        ));
    }
}
