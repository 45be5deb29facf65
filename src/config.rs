use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::Result;

/// Templates for the default titles given to new columns and tasks.
/// `{n}` is replaced with the item's ordinal (current count + 1).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Naming {
    pub column_title: String,
    pub task_content: String,
}

impl Naming {
    const PLACEHOLDER: &'static str = "{n}";

    pub fn column_title(&self, n: usize) -> String {
        self.column_title.replace(Self::PLACEHOLDER, &n.to_string())
    }

    pub fn task_content(&self, n: usize) -> String {
        self.task_content.replace(Self::PLACEHOLDER, &n.to_string())
    }
}

impl Default for Naming {
    fn default() -> Self {
        Self {
            column_title: "Column {n}".to_string(),
            task_content: "Task {n}".to_string(),
        }
    }
}

/// Pointer handling settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DragConfig {
    /// Distance in pixels the pointer must travel before a press turns into
    /// a drag, so clicks on buttons inside cards still register
    pub activation_distance: f64,
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            activation_distance: 3.0,
        }
    }
}

/// Board configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub naming: Naming,
    pub drag: DragConfig,
}

impl Config {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Loads configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}
