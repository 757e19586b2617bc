//! Core data models for boundary lookups.

pub mod boundary;
pub mod coordinate;

pub use boundary::{BoundaryResult, Category, LegislativeBoundaries, ResponseDocument};
pub use coordinate::Coordinate;
