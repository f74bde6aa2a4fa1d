use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory holding the persisted token; defaults to the config dir
    pub dir: Option<String>,
}
