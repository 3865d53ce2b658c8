use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// One task declaration from the cookbook file.
#[derive(Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TaskEntry {
    pub name: String,
    pub description: Option<String>,
    /// Shell command run as the task's action. A task with no command is a
    /// pure grouping of its dependencies.
    pub command: Option<String>,
    pub dependencies: Option<Vec<String>>,
}

/// The cookbook file: the declaration surface for the runner.
#[derive(Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CookbookConfig {
    pub name: Option<String>,
    pub description: Option<String>,
    pub tasks: Vec<TaskEntry>,
}

pub fn parse_cookbook(yaml_str: &str) -> Result<CookbookConfig> {
    let config: CookbookConfig =
        serde_yaml::from_str(yaml_str).context("Failed to parse cookbook")?;
    Ok(config)
}

pub fn load_cookbook(path: &Path) -> Result<CookbookConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read cookbook {}", path.display()))?;
    parse_cookbook(&content)
}
