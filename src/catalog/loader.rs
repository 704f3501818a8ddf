// SPDX-License-Identifier: PMPL-1.0-or-later

//! Loading and exporting catalog files.
//!
//! Format is chosen by file extension on load and by the `--format` flag on
//! export. Only JSON and YAML are supported; both carry the same record
//! shape (see [`super::record`]).

use super::record::Title;
use anyhow::{bail, Context, Result};
use clap::ValueEnum;
use std::fs;
use std::path::Path;

/// Serialization formats for `movix export`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CatalogFormat {
    Json,
    Yaml,
}

impl CatalogFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "json" => Some(CatalogFormat::Json),
            "yaml" | "yml" => Some(CatalogFormat::Yaml),
            _ => None,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            CatalogFormat::Json => "json",
            CatalogFormat::Yaml => "yaml",
        }
    }

    pub fn serialize(&self, catalog: &[Title]) -> Result<String> {
        match self {
            CatalogFormat::Json => Ok(serde_json::to_string_pretty(catalog)?),
            CatalogFormat::Yaml => Ok(serde_yaml::to_string(catalog)?),
        }
    }
}

/// Load a catalog file, dispatching on its extension.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Vec<Title>> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading catalog {}", path.display()))?;
    match path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .as_deref()
    {
        Some("json") => {
            serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))
        }
        Some("yaml") | Some("yml") => {
            serde_yaml::from_str(&raw).with_context(|| format!("parsing {}", path.display()))
        }
        other => bail!(
            "unsupported catalog extension {:?} for {} (expected json, yaml, or yml)",
            other,
            path.display()
        ),
    }
}
