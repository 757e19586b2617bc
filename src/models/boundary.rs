//! Legislative boundary types returned per dataset.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::Coordinate;

/// Level of government a dataset belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Federal,
    State,
    Local,
}

impl Category {
    /// All categories in response order (federal first)
    pub fn all() -> &'static [Category] {
        &[Category::Federal, Category::State, Category::Local]
    }

    /// Get the key used for this category in responses and config
    pub fn field_name(&self) -> &'static str {
        match self {
            Category::Federal => "federal",
            Category::State => "state",
            Category::Local => "local",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.field_name())
    }
}

/// A single boundary polygon found for a point.
///
/// Rings hold `[latitude, longitude]` pairs rounded to 6 decimal places.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoundaryResult {
    pub name: String,
    pub polygon_coordinates: Vec<Vec<[f64; 2]>>,
}

/// Boundaries found for a point, grouped by category and keyed by dataset name.
///
/// Keys keep insertion order, which the resolver makes registry order. A
/// dataset with no matching feature has no key at all; there are no null
/// placeholders.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LegislativeBoundaries {
    pub federal: IndexMap<String, BoundaryResult>,
    pub state: IndexMap<String, BoundaryResult>,
    pub local: IndexMap<String, BoundaryResult>,
}

impl LegislativeBoundaries {
    /// Set the boundary for a dataset in a given category
    pub fn insert(
        &mut self,
        category: Category,
        dataset: impl Into<String>,
        result: BoundaryResult,
    ) {
        self.get_mut(category).insert(dataset.into(), result);
    }

    /// Get all boundaries found for a category
    pub fn get(&self, category: Category) -> &IndexMap<String, BoundaryResult> {
        match category {
            Category::Federal => &self.federal,
            Category::State => &self.state,
            Category::Local => &self.local,
        }
    }

    fn get_mut(&mut self, category: Category) -> &mut IndexMap<String, BoundaryResult> {
        match category {
            Category::Federal => &mut self.federal,
            Category::State => &mut self.state,
            Category::Local => &mut self.local,
        }
    }

    /// Total number of datasets with a result
    pub fn len(&self) -> usize {
        Category::all().iter().map(|c| self.get(*c).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Successful response for an address lookup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseDocument {
    /// Address exactly as supplied by the caller
    pub address: String,
    pub coordinates: Coordinate,
    pub legislative_boundaries: LegislativeBoundaries,
}
