use crate::home::Platform;
use crate::{CONFIG_FILE, EXERCISES_DIR};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Component, Path};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub config_file: String,
    pub exercises_dir: String,
    pub locator: Platform,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            config_file: CONFIG_FILE.to_string(),
            exercises_dir: EXERCISES_DIR.to_string(),
            locator: Platform::default(),
        }
    }
}

impl Settings {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file: {}", path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("Invalid settings file: {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        let settings: Settings = if content.trim().is_empty() {
            Settings::default()
        } else {
            serde_yaml::from_str(content).with_context(|| "Failed to parse settings")?
        };

        validate_name("config_file", &settings.config_file)?;
        validate_name("exercises_dir", &settings.exercises_dir)?;

        Ok(settings)
    }
}

fn validate_name(field: &str, name: &str) -> Result<()> {
    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) if !name.contains(['/', '\\']) => Ok(()),
        _ => anyhow::bail!("{} must be a single file name, got '{}'", field, name),
    }
}
