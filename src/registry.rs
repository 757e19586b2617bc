//! Static table of boundary datasets queried for every address.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use url::Url;

use crate::error::ConfigError;
use crate::models::Category;

const TIGERWEB_BASE: &str = "https://tigerweb.geo.census.gov/arcgis/rest/services/TIGERweb";

/// Built-in TIGERweb layers: (category, dataset name, path under the TIGERweb root)
const TIGERWEB_LAYERS: &[(Category, &str, &str)] = &[
    (
        Category::Federal,
        "congressional_district",
        "Legislative/MapServer/0",
    ),
    (
        Category::State,
        "state_senate_district",
        "Legislative/MapServer/1",
    ),
    (
        Category::State,
        "state_house_district",
        "Legislative/MapServer/2",
    ),
    (Category::State, "state_boundaries", "State_County/MapServer/0"),
    (Category::Local, "county_boundaries", "State_County/MapServer/1"),
    (
        Category::Local,
        "municipal_boundaries",
        "Places_CouSub_ConCity_SubMCD/MapServer/1",
    ),
    (
        Category::Local,
        "city_boundaries",
        "Places_CouSub_ConCity_SubMCD/MapServer/4",
    ),
    (
        Category::Local,
        "unified_school_district",
        "School/MapServer/0",
    ),
];

/// Dataset entry as written in a config file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetEntry {
    pub category: Category,
    pub name: String,
    pub url: String,
}

/// One point-in-polygon feature layer
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub category: Category,
    pub name: String,
    /// Base URL of the feature layer (without `/query`)
    pub url: Url,
}

/// Immutable set of datasets, ordered by category then declaration order.
#[derive(Debug, Clone)]
pub struct DatasetRegistry {
    datasets: Vec<Dataset>,
}

impl DatasetRegistry {
    /// The US Census TIGERweb legislative and administrative layers
    pub fn tiger_web() -> Result<Self, ConfigError> {
        let entries: Vec<DatasetEntry> = TIGERWEB_LAYERS
            .iter()
            .map(|(category, name, path)| DatasetEntry {
                category: *category,
                name: name.to_string(),
                url: format!("{}/{}", TIGERWEB_BASE, path),
            })
            .collect();

        Self::from_entries(entries)
    }

    /// Build a registry from config entries
    pub fn from_entries(entries: Vec<DatasetEntry>) -> Result<Self, ConfigError> {
        let mut seen = HashSet::new();
        let mut datasets = Vec::with_capacity(entries.len());

        for entry in entries {
            if !seen.insert((entry.category, entry.name.clone())) {
                return Err(ConfigError::DuplicateDataset {
                    category: entry.category.to_string(),
                    dataset: entry.name,
                });
            }

            let url = Url::parse(entry.url.trim_end_matches('/')).map_err(|source| {
                ConfigError::InvalidUrl {
                    dataset: entry.name.clone(),
                    source,
                }
            })?;

            datasets.push(Dataset {
                category: entry.category,
                name: entry.name,
                url,
            });
        }

        // Stable sort keeps declaration order within a category
        datasets.sort_by_key(|d| d.category);

        Ok(Self { datasets })
    }

    /// Iterate datasets in lookup order
    pub fn iter(&self) -> impl Iterator<Item = &Dataset> {
        self.datasets.iter()
    }

    /// Datasets belonging to one category
    pub fn category(&self, category: Category) -> impl Iterator<Item = &Dataset> {
        self.datasets.iter().filter(move |d| d.category == category)
    }

    pub fn len(&self) -> usize {
        self.datasets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.datasets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(category: Category, name: &str, url: &str) -> DatasetEntry {
        DatasetEntry {
            category,
            name: name.to_string(),
            url: url.to_string(),
        }
    }

    #[test]
    fn test_tiger_web_layers() {
        let registry = DatasetRegistry::tiger_web().unwrap();
        assert_eq!(registry.len(), 8);
        assert_eq!(registry.category(Category::Federal).count(), 1);
        assert_eq!(registry.category(Category::State).count(), 3);
        assert_eq!(registry.category(Category::Local).count(), 4);

        let congressional = registry.iter().next().unwrap();
        assert_eq!(congressional.name, "congressional_district");
        assert_eq!(
            congressional.url.as_str(),
            "https://tigerweb.geo.census.gov/arcgis/rest/services/TIGERweb/Legislative/MapServer/0"
        );
    }

    #[test]
    fn test_tiger_web_urls_parse() {
        let registry = DatasetRegistry::tiger_web().unwrap();
        assert!(registry
            .iter()
            .all(|d| d.url.host_str() == Some("tigerweb.geo.census.gov")));
    }

    #[test]
    fn test_declaration_order_within_category() {
        let registry = DatasetRegistry::tiger_web().unwrap();
        let local: Vec<&str> = registry
            .category(Category::Local)
            .map(|d| d.name.as_str())
            .collect();
        assert_eq!(
            local,
            vec![
                "county_boundaries",
                "municipal_boundaries",
                "city_boundaries",
                "unified_school_district"
            ]
        );
    }

    #[test]
    fn test_entries_grouped_by_category() {
        let registry = DatasetRegistry::from_entries(vec![
            entry(Category::Local, "b", "http://example.com/b"),
            entry(Category::Federal, "a", "http://example.com/a"),
            entry(Category::Local, "c", "http://example.com/c/"),
        ])
        .unwrap();

        let names: Vec<&str> = registry.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
        assert_eq!(registry.iter().last().unwrap().url.as_str(), "http://example.com/c");
    }

    #[test]
    fn test_duplicate_dataset_rejected() {
        let result = DatasetRegistry::from_entries(vec![
            entry(Category::State, "dup", "http://example.com/1"),
            entry(Category::State, "dup", "http://example.com/2"),
        ]);
        assert!(matches!(result, Err(ConfigError::DuplicateDataset { .. })));
    }

    #[test]
    fn test_same_name_in_different_categories() {
        let registry = DatasetRegistry::from_entries(vec![
            entry(Category::State, "boundaries", "http://example.com/1"),
            entry(Category::Local, "boundaries", "http://example.com/2"),
        ])
        .unwrap();
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_invalid_url_rejected() {
        let result =
            DatasetRegistry::from_entries(vec![entry(Category::Local, "bad", "not a url")]);
        assert!(matches!(result, Err(ConfigError::InvalidUrl { .. })));
    }
}
