//! Fan-out of a coordinate to every dataset in the registry.

use async_trait::async_trait;
use futures::future::join_all;
use tracing::{debug, warn};

use crate::error::UpstreamError;
use crate::models::{BoundaryResult, Coordinate, LegislativeBoundaries};
use crate::registry::{Dataset, DatasetRegistry};

/// Looks up the boundary containing a point in a single dataset.
///
/// `Ok(None)` means the dataset has no feature at that point.
#[async_trait]
pub trait BoundarySource: Send + Sync {
    async fn fetch_boundary(
        &self,
        coordinate: Coordinate,
        dataset: &Dataset,
    ) -> Result<Option<BoundaryResult>, UpstreamError>;
}

/// Query every dataset for `coordinate` and collect the boundaries found.
///
/// Lookups run concurrently. A dataset that has no feature, or whose service
/// fails, is left out of the result; failures are logged and never fail the
/// whole lookup.
pub async fn resolve_boundaries(
    source: &dyn BoundarySource,
    registry: &DatasetRegistry,
    coordinate: Coordinate,
) -> LegislativeBoundaries {
    let lookups = registry.iter().map(|dataset| async move {
        let result = source.fetch_boundary(coordinate, dataset).await;
        (dataset, result)
    });

    let mut boundaries = LegislativeBoundaries::default();

    for (dataset, result) in join_all(lookups).await {
        match result {
            Ok(Some(boundary)) => {
                boundaries.insert(dataset.category, dataset.name.clone(), boundary);
            }
            Ok(None) => {
                debug!("No {} feature at {}", dataset.name, coordinate);
            }
            Err(e) => {
                warn!(
                    "Skipping {}.{} after upstream failure: {}",
                    dataset.category, dataset.name, e
                );
            }
        }
    }

    debug!(
        "Resolved {}/{} datasets at {}",
        boundaries.len(),
        registry.len(),
        coordinate
    );

    boundaries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use crate::registry::DatasetEntry;

    /// Answers by dataset name: "found" datasets return a boundary, "fail"
    /// datasets return an error, everything else has no feature.
    struct NamedSource;

    #[async_trait]
    impl BoundarySource for NamedSource {
        async fn fetch_boundary(
            &self,
            _coordinate: Coordinate,
            dataset: &Dataset,
        ) -> Result<Option<BoundaryResult>, UpstreamError> {
            if dataset.name.starts_with("found") {
                Ok(Some(BoundaryResult {
                    name: dataset.name.to_uppercase(),
                    polygon_coordinates: vec![],
                }))
            } else if dataset.name.starts_with("fail") {
                Err(UpstreamError::InvalidCoordinate("boom".to_string()))
            } else {
                Ok(None)
            }
        }
    }

    fn registry(names: &[(Category, &str)]) -> DatasetRegistry {
        DatasetRegistry::from_entries(
            names
                .iter()
                .map(|(category, name)| DatasetEntry {
                    category: *category,
                    name: name.to_string(),
                    url: format!("http://localhost/{}", name),
                })
                .collect(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_missing_and_failed_datasets_omitted() {
        let registry = registry(&[
            (Category::Federal, "found_a"),
            (Category::State, "empty_b"),
            (Category::State, "fail_c"),
            (Category::Local, "found_d"),
        ]);

        let boundaries =
            resolve_boundaries(&NamedSource, &registry, Coordinate::new(35.0, -97.0)).await;

        assert_eq!(boundaries.get(Category::Federal).len(), 1);
        assert!(boundaries.get(Category::State).is_empty());
        assert_eq!(boundaries.local["found_d"].name, "FOUND_D");
    }

    #[tokio::test]
    async fn test_empty_registry() {
        let registry = registry(&[]);
        let boundaries =
            resolve_boundaries(&NamedSource, &registry, Coordinate::new(0.0, 0.0)).await;
        assert!(boundaries.is_empty());
    }
}
