//! Districts - legislative boundary lookup for free-text addresses
//!
//! An address is geocoded to a coordinate, which is then sent to a fixed set
//! of federal, state and local boundary datasets. Each dataset contributes the
//! polygon containing the point, if any.

pub mod api;
pub mod arcgis;
pub mod config;
pub mod error;
pub mod geocoder;
pub mod models;
pub mod registry;
pub mod resolver;

pub use models::{BoundaryResult, Category, Coordinate, LegislativeBoundaries, ResponseDocument};
