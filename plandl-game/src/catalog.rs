use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::constants::{IMAGE_DIR, IMAGE_EXTENSION};
use crate::error::GameError;

static SEPARATOR_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\s/]+").expect("static regex"));

/// One photographed aircraft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Aircraft {
    pub manufacturer: String,
    pub model: String,
    pub version: String,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribution: Option<String>,
}

impl Aircraft {
    /// Build a record whose `image` points at the conventional asset path.
    #[must_use]
    pub fn with_default_image(manufacturer: &str, model: &str, version: &str) -> Self {
        Self {
            manufacturer: manufacturer.to_string(),
            model: model.to_string(),
            version: version.to_string(),
            image: image_path(manufacturer, model, version),
            attribution: None,
        }
    }

    /// `true` when both records name the same (manufacturer, model, version).
    #[must_use]
    pub fn same_identity(&self, other: &Self) -> bool {
        self.manufacturer == other.manufacturer
            && self.model == other.model
            && self.version == other.version
    }
}

/// Ordered collection of aircraft available for selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Catalog {
    aircraft: Vec<Aircraft>,
}

impl Catalog {
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_aircraft(aircraft: Vec<Aircraft>) -> Self {
        Self { aircraft }
    }

    /// Parse a `planes.json` array.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::CatalogFormat`] if the JSON is not an array of
    /// aircraft records.
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        serde_json::from_str(json).map_err(|e| GameError::CatalogFormat(e.to_string()))
    }

    /// Serialize as a pretty-printed JSON array.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.aircraft)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.aircraft.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.aircraft.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Aircraft> {
        self.aircraft.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Aircraft> {
        self.aircraft.iter()
    }

    #[must_use]
    pub fn contains_identity(&self, aircraft: &Aircraft) -> bool {
        self.aircraft.iter().any(|a| a.same_identity(aircraft))
    }

    /// Append entries not already present by identity. Returns how many were added.
    pub fn merge(&mut self, entries: impl IntoIterator<Item = Aircraft>) -> usize {
        let mut added = 0;
        for entry in entries {
            if !self.contains_identity(&entry) {
                self.aircraft.push(entry);
                added += 1;
            }
        }
        added
    }

    /// Distinct manufacturers, sorted.
    #[must_use]
    pub fn manufacturers(&self) -> Vec<String> {
        distinct(self.aircraft.iter().map(|a| &a.manufacturer))
    }

    /// Distinct models for a manufacturer, sorted.
    #[must_use]
    pub fn models(&self, manufacturer: &str) -> Vec<String> {
        distinct(
            self.aircraft
                .iter()
                .filter(|a| a.manufacturer == manufacturer)
                .map(|a| &a.model),
        )
    }

    /// Distinct versions for a manufacturer and model, sorted.
    #[must_use]
    pub fn versions(&self, manufacturer: &str, model: &str) -> Vec<String> {
        distinct(
            self.aircraft
                .iter()
                .filter(|a| a.manufacturer == manufacturer && a.model == model)
                .map(|a| &a.version),
        )
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a String>) -> Vec<String> {
    values
        .map(String::as_str)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

fn slug(part: &str) -> String {
    SEPARATOR_RUN.replace_all(&part.to_lowercase(), "_").into_owned()
}

/// Deterministic asset filename, e.g. `cessna_citation_cj3.jpg`.
#[must_use]
pub fn image_filename(manufacturer: &str, model: &str, version: &str) -> String {
    format!(
        "{}_{}_{}.{IMAGE_EXTENSION}",
        slug(manufacturer),
        slug(model),
        slug(version)
    )
}

/// Relative path stored in the catalog's `image` field.
#[must_use]
pub fn image_path(manufacturer: &str, model: &str, version: &str) -> String {
    format!(
        "{IMAGE_DIR}/{}",
        image_filename(manufacturer, model, version)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Catalog {
        Catalog::from_json(
            r#"[
                {"manufacturer": "Cessna", "model": "172", "version": "Skyhawk", "image": "images/a.jpg"},
                {"manufacturer": "Piper", "model": "PA-28", "version": "Cherokee", "image": "images/b.jpg", "attribution": "Jane Doe"},
                {"manufacturer": "Cessna", "model": "150", "version": "Standard", "image": "images/c.jpg"},
                {"manufacturer": "Cessna", "model": "172", "version": "Cutlass", "image": "images/d.jpg"},
                {"manufacturer": "Cessna", "model": "172", "version": "Skyhawk", "image": "images/e.jpg"}
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn parses_optional_attribution() {
        let catalog = sample();
        assert_eq!(catalog.len(), 5);
        assert_eq!(catalog.get(0).unwrap().attribution, None);
        assert_eq!(
            catalog.get(1).unwrap().attribution.as_deref(),
            Some("Jane Doe")
        );
    }

    #[test]
    fn rejects_non_array_json() {
        assert!(matches!(
            Catalog::from_json(r#"{"planes": []}"#),
            Err(GameError::CatalogFormat(_))
        ));
    }

    #[test]
    fn cascading_queries_are_sorted_and_distinct() {
        let catalog = sample();
        assert_eq!(catalog.manufacturers(), vec!["Cessna", "Piper"]);
        assert_eq!(catalog.models("Cessna"), vec!["150", "172"]);
        assert_eq!(catalog.versions("Cessna", "172"), vec!["Cutlass", "Skyhawk"]);
        assert!(catalog.models("Boeing").is_empty());
        assert!(catalog.versions("Piper", "172").is_empty());
    }

    #[test]
    fn merge_skips_known_identities() {
        let mut catalog = sample();
        let added = catalog.merge(vec![
            Aircraft::with_default_image("Cessna", "150", "Standard"),
            Aircraft::with_default_image("Piper", "J-3", "Cub"),
        ]);
        assert_eq!(added, 1);
        assert_eq!(catalog.len(), 6);
        assert_eq!(catalog.get(5).unwrap().image, "images/piper_j-3_cub.jpg");
    }

    #[test]
    fn filenames_collapse_spaces_and_slashes() {
        assert_eq!(
            image_filename("Cessna", "Citation", "CJ3"),
            "cessna_citation_cj3.jpg"
        );
        assert_eq!(
            image_filename("de Havilland Canada", "DHC-6", "Twin  Otter"),
            "de_havilland_canada_dhc-6_twin_otter.jpg"
        );
        assert_eq!(
            image_filename("Boeing", "F/A-18 / E", "Super Hornet"),
            "boeing_f_a-18_e_super_hornet.jpg"
        );
    }
}
