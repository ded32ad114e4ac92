//! Road network error types.

use crate::domain::{CityCode, CityId};

/// Errors from reading or mutating the road network.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NetworkError {
    /// A city code did not resolve to any city
    #[error("unknown city code: {0}")]
    UnknownCity(String),

    /// A city id did not resolve to any city
    #[error("unknown city id: {0}")]
    UnknownCityId(CityId),

    /// A city with this id is already in the network
    #[error("duplicate city id: {0}")]
    DuplicateCityId(CityId),

    /// A city with this code is already in the network
    #[error("duplicate city code: {0}")]
    DuplicateCityCode(CityCode),

    /// A road already exists for this ordered pair
    #[error("road from {from} to {to} already exists")]
    RoadExists { from: CityId, to: CityId },

    /// No road exists for this ordered pair
    #[error("no road from {from} to {to}")]
    RoadNotFound { from: CityId, to: CityId },
}
