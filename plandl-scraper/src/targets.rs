use anyhow::{Context, Result};
use plandl_game::{Aircraft, image_filename, image_path};
use serde::{Deserialize, Serialize};
use std::path::Path;

const EMBEDDED_TARGETS: &str = include_str!("../data/targets.json");

/// An aircraft to look for, with the Commons search phrase to use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrapeTarget {
    pub manufacturer: String,
    pub model: String,
    pub version: String,
    pub search: String,
}

impl ScrapeTarget {
    pub fn label(&self) -> String {
        format!("{} {} {}", self.manufacturer, self.model, self.version)
    }

    pub fn filename(&self) -> String {
        image_filename(&self.manufacturer, &self.model, &self.version)
    }

    pub fn to_aircraft(&self, attribution: Option<String>) -> Aircraft {
        Aircraft {
            manufacturer: self.manufacturer.clone(),
            model: self.model.clone(),
            version: self.version.clone(),
            image: image_path(&self.manufacturer, &self.model, &self.version),
            attribution,
        }
    }
}

pub fn embedded_targets() -> Result<Vec<ScrapeTarget>> {
    serde_json::from_str(EMBEDDED_TARGETS).context("parsing embedded target list")
}

/// Targets from `path`, or the embedded list when no path is given.
pub fn load_targets(path: Option<&Path>) -> Result<Vec<ScrapeTarget>> {
    let Some(path) = path else {
        return embedded_targets();
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading target list {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing target list {}", path.display()))
}
