use serde::{Deserialize, Serialize};

/// Image reference shown in the picks view when a fighter has none
/// configured.
pub const DEFAULT_PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/96x96?text=No+Img";

/// Where snapshots come from when no `--data` override is given.
pub const DEFAULT_SOURCE: &str = "data.json";

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Snapshot source: a filesystem path or an http(s) URL.
    #[serde(default)]
    pub source: Option<String>,

    /// Image reference substituted for fighters with no configured image.
    #[serde(default)]
    pub placeholder_image: Option<String>,
}

impl Config {
    pub fn source(&self) -> &str {
        self.source.as_deref().unwrap_or(DEFAULT_SOURCE)
    }

    pub fn placeholder_image(&self) -> &str {
        self.placeholder_image
            .as_deref()
            .unwrap_or(DEFAULT_PLACEHOLDER_IMAGE)
    }
}
