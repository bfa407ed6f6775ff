//! CLI configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// CLI configuration file (`stride.toml`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Render defaults.
    #[serde(default)]
    pub render: RenderConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }
}

/// Defaults for the render command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Page title used when `--title` is not given.
    #[serde(default = "default_title")]
    pub title: String,

    /// Output file used when `-o` is not given; stdout when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
}

fn default_title() -> String {
    "Stride Shoes".to_string()
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            output: None,
        }
    }
}
