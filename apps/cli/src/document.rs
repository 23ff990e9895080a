//! Reading and writing documents by file extension.

use std::fs;
use std::path::Path;

use anyhow::{Context, bail};
use serde::Serialize;
use serde::de::DeserializeOwned;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
    Toml,
}

impl DocumentFormat {
    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("json") => Ok(Self::Json),
            Some("yaml" | "yml") => Ok(Self::Yaml),
            Some("toml") => Ok(Self::Toml),
            _ => bail!(
                "unsupported document type for {} (expected .json, .yaml, .yml or .toml)",
                path.display()
            ),
        }
    }

    pub fn parse<T: DeserializeOwned>(self, text: &str) -> anyhow::Result<T> {
        Ok(match self {
            Self::Json => serde_json::from_str(text)?,
            Self::Yaml => serde_yaml::from_str(text)?,
            Self::Toml => toml::from_str(text)?,
        })
    }

    pub fn render<T: Serialize>(self, document: &T) -> anyhow::Result<String> {
        Ok(match self {
            Self::Json => {
                let mut text = serde_json::to_string_pretty(document)?;
                text.push('\n');
                text
            }
            Self::Yaml => serde_yaml::to_string(document)?,
            Self::Toml => toml::to_string(document)?,
        })
    }
}

pub fn read<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let format = DocumentFormat::from_path(path)?;
    let text =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    format
        .parse(&text)
        .with_context(|| format!("failed to parse {}", path.display()))
}

pub fn write<T: Serialize>(path: &Path, document: &T) -> anyhow::Result<()> {
    let text = DocumentFormat::from_path(path)?
        .render(document)
        .with_context(|| format!("failed to encode {}", path.display()))?;
    fs::write(path, text).with_context(|| format!("failed to write {}", path.display()))
}
