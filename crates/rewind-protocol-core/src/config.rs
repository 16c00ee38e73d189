use serde::Deserialize;

/// Options shared by all translators of a pipeline.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TranslatorConfig {
    /// Silence the one-time warning about teleports whose motion cannot be emulated.
    #[serde(default)]
    pub suppress_emulation_warnings: bool,
}
