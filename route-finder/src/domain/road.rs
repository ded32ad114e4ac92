//! Road records.

use serde::Serialize;

use super::CityId;

/// Length of a single road. Non-negative by construction.
pub type Distance = u32;

/// A directed road between two cities.
///
/// A road from A to B says nothing about travel from B to A.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Road {
    pub from: CityId,
    pub to: CityId,
    pub distance: Distance,
}

impl Road {
    /// Creates a new road.
    pub fn new(from: CityId, to: CityId, distance: Distance) -> Self {
        Self { from, to, distance }
    }
}
