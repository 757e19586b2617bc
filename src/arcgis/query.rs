//! Point-in-polygon query URLs for ArcGIS feature layers.

use url::Url;

use crate::models::Coordinate;

/// EPSG code for WGS84, used for both the query point and returned geometry
const WGS84: &str = "4326";

/// Build the `/query` URL asking a layer for features containing `coordinate`.
///
/// ArcGIS takes points as `x,y`, so longitude comes first.
pub fn query_url(endpoint: &Url, coordinate: Coordinate) -> Url {
    let mut url = endpoint.clone();

    if let Ok(mut segments) = url.path_segments_mut() {
        segments.pop_if_empty().push("query");
    }

    let geometry = format!("{},{}", coordinate.longitude, coordinate.latitude);

    url.query_pairs_mut()
        .clear()
        .append_pair("geometry", &geometry)
        .append_pair("geometryType", "esriGeometryPoint")
        .append_pair("inSR", WGS84)
        .append_pair("outSR", WGS84)
        .append_pair("outFields", "*")
        .append_pair("returnGeometry", "true")
        .append_pair("f", "json");

    url
}
